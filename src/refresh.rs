//! Regla del reto diario: como mucho una partida nueva por día, disponible a
//! partir de la hora de corte (08:00 por defecto) del reloj local.

use crate::model::GameRecord;
use chrono::{DateTime, TimeZone, Utc};

pub const DEFAULT_REFRESH_HOUR: u32 = 8;

/// `true` si hay que pedir una partida nueva: no hay nada guardado, o ya pasó
/// el corte de hoy y la partida guardada se descargó antes de ese corte.
pub fn should_fetch_new_game<Tz: TimeZone>(
    stored: Option<&GameRecord>,
    now: &DateTime<Tz>,
    refresh_hour: u32,
) -> bool {
    let Some(stored) = stored else {
        return true;
    };
    let Some(boundary) = refresh_boundary(now, refresh_hour) else {
        return false;
    };

    let now = now.with_timezone(&Utc);
    now > boundary && boundary > stored.current_game.fetch_date
}

/// Hoy a las `refresh_hour`:00:00.000 en la zona de `now`. Si ese instante cae
/// en un hueco de cambio horario se toma la primera correspondencia válida.
pub fn refresh_boundary<Tz: TimeZone>(now: &DateTime<Tz>, refresh_hour: u32) -> Option<DateTime<Utc>> {
    let naive = now.date_naive().and_hms_opt(refresh_hour, 0, 0)?;
    now.timezone()
        .from_local_datetime(&naive)
        .earliest()
        .map(|boundary| boundary.with_timezone(&Utc))
}
