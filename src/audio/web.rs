use super::{AudioBackend, BackendStatus};
use crate::error::AudioError;
use std::time::Duration;
use web_sys::HtmlAudioElement;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

fn seconds(value: f64) -> Option<Duration> {
    (value.is_finite() && value >= 0.0).then(|| Duration::from_secs_f64(value))
}

/// Un elemento `<audio>` fuera del DOM por muestra en reproducción.
#[derive(Default)]
pub struct HtmlAudioBackend {
    element: Option<HtmlAudioElement>,
}

impl AudioBackend for HtmlAudioBackend {
    fn start(&mut self, url: &str) -> Result<(), AudioError> {
        self.stop();
        let element = HtmlAudioElement::new_with_src(url)
            .map_err(|err| AudioError::Output(format!("{err:?}")))?;
        // si el navegador rechaza la promesa el clip queda en pausa
        let _ = element.play();
        self.element = Some(element);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(element) = &self.element {
            let _ = element.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(element) = &self.element {
            let _ = element.play();
        }
    }

    fn stop(&mut self) {
        if let Some(element) = self.element.take() {
            let _ = element.pause();
        }
    }

    fn status(&mut self) -> BackendStatus {
        let Some(element) = &self.element else {
            return BackendStatus::Idle;
        };
        if let Some(err) = element.error() {
            return BackendStatus::Failed(AudioError::Fetch(format!("media error {}", err.code())));
        }
        if element.ended() {
            return BackendStatus::Finished;
        }
        if element.ready_state() < HAVE_CURRENT_DATA && !element.paused() {
            return BackendStatus::Loading;
        }
        BackendStatus::Ready {
            paused: element.paused(),
            position: seconds(element.current_time()).unwrap_or_default(),
            duration: seconds(element.duration()).filter(|d| !d.is_zero()),
        }
    }
}
