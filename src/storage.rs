//! Persistencia del registro de la partida: un único registro bajo una única
//! clave, que se sobrescribe entero en cada guardado.

use crate::error::StorageError;
use crate::model::GameRecord;
use std::cell::RefCell;
use std::rc::Rc;

/// Clave de `localStorage`, la misma que usa el cliente web.
pub const STORAGE_KEY: &str = "languageGame";

pub trait GameRepository {
    /// Último registro guardado. Un contenido corrupto cuenta como ausente.
    fn load(&self) -> Option<GameRecord>;
    fn save(&mut self, record: &GameRecord) -> Result<(), StorageError>;
}

fn decode_record(raw: &str) -> Option<GameRecord> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(err) => {
            log::warn!("registro de partida corrupto, se ignora: {err}");
            None
        }
    }
}

/* Nativo: fichero JSON */

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileRepository;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::*;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone)]
    pub struct FileRepository {
        path: PathBuf,
    }

    impl FileRepository {
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        pub(crate) fn tmp_path(&self) -> PathBuf {
            let mut name = self
                .path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "echolingo_game.json".into());
            name.push(".tmp");
            self.path.with_file_name(name)
        }
    }

    impl GameRepository for FileRepository {
        fn load(&self) -> Option<GameRecord> {
            match fs::read_to_string(&self.path) {
                Ok(raw) => decode_record(&raw),
                Err(err) if err.kind() == ErrorKind::NotFound => None,
                Err(err) => {
                    log::warn!("no se pudo leer {}: {err}", self.path.display());
                    None
                }
            }
        }

        fn save(&mut self, record: &GameRecord) -> Result<(), StorageError> {
            let json = serde_json::to_string_pretty(record)?;
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            // tmp -> rename: nunca queda un fichero a medio escribir
            let tmp = self.tmp_path();
            fs::write(&tmp, json)?;
            if let Err(err) = fs::rename(&tmp, &self.path) {
                let _ = fs::remove_file(&tmp);
                return Err(err.into());
            }
            Ok(())
        }
    }
}

/* Web: localStorage */

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageRepository;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use web_sys::Storage;

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten()
    }

    #[derive(Debug, Clone)]
    pub struct LocalStorageRepository {
        key: String,
    }

    impl Default for LocalStorageRepository {
        fn default() -> Self {
            Self {
                key: STORAGE_KEY.to_string(),
            }
        }
    }

    impl GameRepository for LocalStorageRepository {
        fn load(&self) -> Option<GameRecord> {
            let raw = storage()?.get_item(&self.key).ok().flatten()?;
            decode_record(&raw)
        }

        fn save(&mut self, record: &GameRecord) -> Result<(), StorageError> {
            let store = storage().ok_or(StorageError::Unavailable)?;
            let json = serde_json::to_string(record)?;
            store
                .set_item(&self.key, &json)
                .map_err(|err| StorageError::Rejected(format!("{err:?}")))
        }
    }
}

/* Memoria: handle compartido, útil para inyectar en tests */

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryRepository {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    pub fn with_record(record: &GameRecord) -> Result<Self, StorageError> {
        Ok(Self::with_raw(serde_json::to_string(record)?))
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn record(&self) -> Option<GameRecord> {
        self.load()
    }
}

impl GameRepository for MemoryRepository {
    fn load(&self) -> Option<GameRecord> {
        self.slot.borrow().as_deref().and_then(decode_record)
    }

    fn save(&mut self, record: &GameRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }
}
