use super::{AudioBackend, BackendStatus, pcm_duration};
use crate::error::AudioError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::io::Cursor;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// Clip descargado y con la duración ya calculada.
struct Clip {
    bytes: Vec<u8>,
    duration: Option<Duration>,
}

/// Descarga en un hilo aparte y reproduce con rodio. La salida de audio se
/// abre la primera vez que se pulsa play.
pub struct RodioBackend {
    timeout: Duration,
    output: Option<(OutputStream, OutputStreamHandle)>,
    pending: Option<Receiver<Result<Clip, AudioError>>>,
    sink: Option<Sink>,
    duration: Option<Duration>,
}

impl RodioBackend {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            output: None,
            pending: None,
            sink: None,
            duration: None,
        }
    }

    fn handle(&mut self) -> Result<&OutputStreamHandle, AudioError> {
        if self.output.is_none() {
            let output =
                OutputStream::try_default().map_err(|err| AudioError::Output(err.to_string()))?;
            self.output = Some(output);
        }
        match &self.output {
            Some((_, handle)) => Ok(handle),
            None => Err(AudioError::Output("sin dispositivo de salida".into())),
        }
    }

    fn begin(&mut self, clip: Clip) -> Result<(), AudioError> {
        let sink = Sink::try_new(self.handle()?).map_err(|err| AudioError::Output(err.to_string()))?;
        let source = Decoder::new(Cursor::new(clip.bytes))
            .map_err(|err| AudioError::Decode(err.to_string()))?;
        sink.append(source);
        self.sink = Some(sink);
        self.duration = clip.duration;
        Ok(())
    }
}

fn download(url: &str, timeout: Duration) -> Result<Clip, AudioError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| AudioError::Fetch(err.to_string()))?;
    let bytes = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .map_err(|err| AudioError::Fetch(format!("{url}: {err}")))?
        .to_vec();

    // mp3 no siempre declara la duración: se cuenta decodificando
    let decoder = Decoder::new(Cursor::new(bytes.clone()))
        .map_err(|err| AudioError::Decode(err.to_string()))?;
    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let duration = decoder
        .total_duration()
        .or_else(|| pcm_duration(decoder.count() as u64, channels, sample_rate));

    Ok(Clip { bytes, duration })
}

impl AudioBackend for RodioBackend {
    fn start(&mut self, url: &str) -> Result<(), AudioError> {
        self.stop();
        self.handle()?;

        let (tx, rx) = mpsc::channel();
        let url = url.to_string();
        let timeout = self.timeout;
        thread::spawn(move || {
            let _ = tx.send(download(&url, timeout));
        });
        self.pending = Some(rx);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        // una descarga en vuelo se descarta al soltar el receptor
        self.pending = None;
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.duration = None;
    }

    fn status(&mut self) -> BackendStatus {
        if let Some(rx) = &self.pending {
            match rx.try_recv() {
                Err(TryRecvError::Empty) => return BackendStatus::Loading,
                Err(TryRecvError::Disconnected) => {
                    self.pending = None;
                    return BackendStatus::Failed(AudioError::Fetch("descarga interrumpida".into()));
                }
                Ok(result) => {
                    self.pending = None;
                    if let Err(err) = result.and_then(|clip| self.begin(clip)) {
                        return BackendStatus::Failed(err);
                    }
                }
            }
        }

        match &self.sink {
            Some(sink) if sink.empty() => BackendStatus::Finished,
            Some(sink) => BackendStatus::Ready {
                paused: sink.is_paused(),
                position: sink.get_pos(),
                duration: self.duration,
            },
            None => BackendStatus::Idle,
        }
    }
}
