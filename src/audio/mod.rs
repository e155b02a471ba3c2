//! Reproductor de las muestras de audio.
//!
//! Suena una sola muestra a la vez: al pulsar otra se para la anterior. El
//! backend depende de la plataforma (rodio en nativo, `<audio>` en web); el
//! estado que ve la UI (play/pausa y progreso) se calcula aquí.

use crate::error::AudioError;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::RodioBackend;
#[cfg(target_arch = "wasm32")]
pub use web::HtmlAudioBackend;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum BackendStatus {
    #[default]
    Idle,
    Loading,
    Ready {
        paused: bool,
        position: Duration,
        duration: Option<Duration>,
    },
    Finished,
    Failed(AudioError),
}

pub trait AudioBackend {
    /// Para lo que sonara, carga `url` y la reproduce en cuanto esté lista.
    fn start(&mut self, url: &str) -> Result<(), AudioError>;
    fn pause(&mut self);
    fn resume(&mut self);
    fn stop(&mut self);
    fn status(&mut self) -> BackendStatus;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipState {
    Stopped,
    Loading,
    Playing,
    Paused,
}

/// Lo que pinta la tarjeta de una muestra.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipView {
    pub state: ClipState,
    /// 0.0..=1.0
    pub progress: f32,
}

impl ClipView {
    pub const STOPPED: ClipView = ClipView {
        state: ClipState::Stopped,
        progress: 0.0,
    };

    pub fn button_label(&self) -> &'static str {
        match self.state {
            ClipState::Playing => "⏸",
            ClipState::Loading => "⌛",
            ClipState::Stopped | ClipState::Paused => "▶",
        }
    }
}

pub fn progress(position: Duration, duration: Option<Duration>) -> f32 {
    match duration {
        Some(total) if !total.is_zero() => {
            (position.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}

/// Duración de un clip a partir del número de muestras intercaladas.
pub fn pcm_duration(samples: u64, channels: u16, sample_rate: u32) -> Option<Duration> {
    let per_second = u64::from(channels) * u64::from(sample_rate);
    if per_second == 0 {
        return None;
    }
    Some(Duration::from_secs_f64(samples as f64 / per_second as f64))
}

pub struct AudioPlayer {
    backend: Box<dyn AudioBackend>,
    current: Option<u32>,
    status: BackendStatus,
    failed: Option<(u32, String)>,
}

impl AudioPlayer {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            current: None,
            status: BackendStatus::Idle,
            failed: None,
        }
    }

    /// Play/pausa de la muestra `order`.
    pub fn toggle(&mut self, order: u32, url: &str) {
        if self.current != Some(order) {
            self.play(order, url);
            return;
        }
        match self.status {
            BackendStatus::Ready { ref mut paused, .. } => {
                if *paused {
                    self.backend.resume();
                } else {
                    self.backend.pause();
                }
                *paused = !*paused;
            }
            BackendStatus::Loading => {}
            _ => self.play(order, url),
        }
    }

    fn play(&mut self, order: u32, url: &str) {
        self.backend.stop();
        self.failed = None;
        match self.backend.start(url) {
            Ok(()) => {
                log::info!("reproduciendo muestra {order}");
                self.current = Some(order);
                self.status = BackendStatus::Loading;
            }
            Err(err) => self.fail(order, err),
        }
    }

    fn fail(&mut self, order: u32, err: AudioError) {
        log::warn!("audio de la muestra {order}: {err}");
        self.backend.stop();
        self.current = None;
        self.status = BackendStatus::Idle;
        self.failed = Some((order, err.to_string()));
    }

    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.backend.stop();
        }
        self.status = BackendStatus::Idle;
    }

    /// Avanza el estado del backend. `true` mientras algo cargue o suene.
    pub fn tick(&mut self) -> bool {
        let Some(order) = self.current else {
            return false;
        };
        match self.backend.status() {
            BackendStatus::Finished | BackendStatus::Idle => {
                self.backend.stop();
                self.current = None;
                self.status = BackendStatus::Idle;
                false
            }
            BackendStatus::Failed(err) => {
                self.fail(order, err);
                false
            }
            status => {
                let active = matches!(
                    status,
                    BackendStatus::Loading | BackendStatus::Ready { paused: false, .. }
                );
                self.status = status;
                active
            }
        }
    }

    pub fn view(&self, order: u32) -> ClipView {
        if self.current != Some(order) {
            return ClipView::STOPPED;
        }
        match &self.status {
            BackendStatus::Loading => ClipView {
                state: ClipState::Loading,
                progress: 0.0,
            },
            BackendStatus::Ready {
                paused,
                position,
                duration,
            } => ClipView {
                state: if *paused {
                    ClipState::Paused
                } else {
                    ClipState::Playing
                },
                progress: progress(*position, *duration),
            },
            _ => ClipView::STOPPED,
        }
    }

    pub fn error_for(&self, order: u32) -> Option<&str> {
        self.failed
            .as_ref()
            .filter(|(failed, _)| *failed == order)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

/* Backend de pruebas */

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    pub(crate) struct FakeLog {
        pub started: Vec<String>,
        pub pauses: usize,
        pub resumes: usize,
        pub stops: usize,
        pub status: BackendStatus,
        pub refuse: Option<AudioError>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct FakeBackend(pub Rc<RefCell<FakeLog>>);

    impl FakeBackend {
        pub fn set_status(&self, status: BackendStatus) {
            self.0.borrow_mut().status = status;
        }
    }

    impl AudioBackend for FakeBackend {
        fn start(&mut self, url: &str) -> Result<(), AudioError> {
            let mut log = self.0.borrow_mut();
            if let Some(err) = log.refuse.clone() {
                return Err(err);
            }
            log.started.push(url.to_string());
            log.status = BackendStatus::Loading;
            Ok(())
        }

        fn pause(&mut self) {
            self.0.borrow_mut().pauses += 1;
        }

        fn resume(&mut self) {
            self.0.borrow_mut().resumes += 1;
        }

        fn stop(&mut self) {
            let mut log = self.0.borrow_mut();
            log.stops += 1;
            log.status = BackendStatus::Idle;
        }

        fn status(&mut self) -> BackendStatus {
            self.0.borrow().status.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeBackend;
    use super::*;

    fn ready(paused: bool, position: u64, duration: u64) -> BackendStatus {
        BackendStatus::Ready {
            paused,
            position: Duration::from_secs(position),
            duration: Some(Duration::from_secs(duration)),
        }
    }

    fn player() -> (AudioPlayer, FakeBackend) {
        let backend = FakeBackend::default();
        (AudioPlayer::new(Box::new(backend.clone())), backend)
    }

    #[test]
    fn toggle_loads_then_plays_with_progress() {
        let (mut player, backend) = player();

        player.toggle(1, "https://cdn.example/1.mp3");
        assert_eq!(player.view(1).state, ClipState::Loading);
        assert_eq!(backend.0.borrow().started, vec!["https://cdn.example/1.mp3"]);

        backend.set_status(ready(false, 5, 10));
        assert!(player.tick());

        let view = player.view(1);
        assert_eq!(view.state, ClipState::Playing);
        assert!((view.progress - 0.5).abs() < f32::EPSILON);
        assert_eq!(player.view(2), ClipView::STOPPED);
    }

    #[test]
    fn toggle_same_sample_pauses_and_resumes() {
        let (mut player, backend) = player();
        player.toggle(3, "u3");
        backend.set_status(ready(false, 1, 4));
        player.tick();

        player.toggle(3, "u3");
        assert_eq!(player.view(3).state, ClipState::Paused);
        assert_eq!(backend.0.borrow().pauses, 1);

        player.toggle(3, "u3");
        assert_eq!(player.view(3).state, ClipState::Playing);
        assert_eq!(backend.0.borrow().resumes, 1);
        assert_eq!(backend.0.borrow().started.len(), 1);
    }

    #[test]
    fn toggle_while_loading_does_nothing() {
        let (mut player, backend) = player();
        player.toggle(1, "u1");
        player.toggle(1, "u1");

        assert_eq!(backend.0.borrow().started.len(), 1);
        assert_eq!(backend.0.borrow().pauses, 0);
        assert_eq!(player.view(1).state, ClipState::Loading);
    }

    #[test]
    fn another_sample_replaces_the_current_one() {
        let (mut player, backend) = player();
        player.toggle(1, "u1");
        backend.set_status(ready(false, 2, 4));
        player.tick();
        let stops_before = backend.0.borrow().stops;

        player.toggle(2, "u2");

        assert!(backend.0.borrow().stops > stops_before);
        assert_eq!(player.view(1), ClipView::STOPPED);
        assert_eq!(player.view(2).state, ClipState::Loading);
    }

    #[test]
    fn finished_clip_goes_back_to_start() {
        let (mut player, backend) = player();
        player.toggle(4, "u4");
        backend.set_status(BackendStatus::Finished);

        assert!(!player.tick());

        assert_eq!(player.view(4), ClipView::STOPPED);
        assert!(!player.is_active());
        assert_eq!(player.view(4).button_label(), "▶");
    }

    #[test]
    fn refused_start_is_reported_on_that_sample() {
        let (mut player, backend) = player();
        backend.0.borrow_mut().refuse = Some(AudioError::Output("no device".into()));

        player.toggle(2, "u2");

        assert!(player.error_for(2).is_some_and(|msg| msg.contains("no device")));
        assert!(player.error_for(1).is_none());
        assert_eq!(player.view(2), ClipView::STOPPED);
    }

    #[test]
    fn download_failure_clears_on_next_attempt() {
        let (mut player, backend) = player();
        player.toggle(5, "u5");
        backend.set_status(BackendStatus::Failed(AudioError::Fetch("404".into())));

        assert!(!player.tick());
        assert!(player.error_for(5).is_some());

        player.toggle(5, "u5");
        assert!(player.error_for(5).is_none());
        assert_eq!(player.view(5).state, ClipState::Loading);
    }

    #[test]
    fn stop_silences_current_clip() {
        let (mut player, backend) = player();
        player.toggle(1, "u1");
        backend.set_status(ready(false, 1, 2));
        player.tick();

        player.stop();

        assert!(!player.is_active());
        assert!(!player.tick());
        assert_eq!(player.view(1), ClipView::STOPPED);
    }

    #[test]
    fn progress_handles_unknown_and_overflowing_positions() {
        assert_eq!(progress(Duration::from_secs(3), None), 0.0);
        assert_eq!(progress(Duration::from_secs(3), Some(Duration::ZERO)), 0.0);
        assert_eq!(progress(Duration::from_secs(9), Some(Duration::from_secs(4))), 1.0);
    }

    #[test]
    fn pcm_duration_counts_interleaved_samples() {
        assert_eq!(pcm_duration(88_200, 2, 22_050), Some(Duration::from_secs(2)));
        assert_eq!(pcm_duration(1_000, 0, 44_100), None);
    }
}
