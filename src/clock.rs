use crate::model::GameRecord;
use crate::refresh::should_fetch_new_game;
use chrono::{DateTime, FixedOffset, Local};

/// Fuente de la hora local. Se inyecta en la tienda para poder fijarla en tests.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Regla diaria evaluada en la zona del reloj. Con un desfase fijo el
    /// corte usa siempre el desfase actual.
    fn should_fetch_new_game(&self, stored: Option<&GameRecord>, refresh_hour: u32) -> bool {
        should_fetch_new_game(stored, &self.now(), refresh_hour)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    // Con `Local` el corte respeta los cambios de horario del día
    fn should_fetch_new_game(&self, stored: Option<&GameRecord>, refresh_hour: u32) -> bool {
        should_fetch_new_game(stored, &Local::now(), refresh_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::DEFAULT_REFRESH_HOUR;
    use chrono::Utc;

    #[test]
    fn system_clock_fetches_without_record() {
        assert!(SystemClock.should_fetch_new_game(None, DEFAULT_REFRESH_HOUR));
    }

    #[test]
    fn system_clock_keeps_game_fetched_just_now() {
        let record = GameRecord::new(Vec::new(), Utc::now());
        assert!(!SystemClock.should_fetch_new_game(Some(&record), DEFAULT_REFRESH_HOUR));
    }
}
