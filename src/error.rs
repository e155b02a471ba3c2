use thiserror::Error;

/// Fallos de la API remota. La tienda los reduce a un único mensaje para el
/// jugador, pero se registran con su tipo.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "network",
            ApiError::Status { .. } => "status",
            ApiError::Malformed(_) => "malformed",
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize game record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("local storage unavailable")]
    Unavailable,
    #[error("local storage rejected the write: {0}")]
    Rejected(String),
}

/// Fallos del reproductor. Solo afectan a la muestra que se intentaba oír.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("no audio output: {0}")]
    Output(String),
    #[error("could not download audio: {0}")]
    Fetch(String),
    #[error("could not decode audio: {0}")]
    Decode(String),
}
