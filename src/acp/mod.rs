mod bands;
mod close;
mod open;
mod types;
mod util;

pub use bands::{
    elapsed_hours, Band, MAX_CONTROL_KM, MAX_SPEED_BANDS, MIN_SPEED_BANDS, SHORT_CONTROL_KM,
};
pub use types::{AcpError, Rounding, TimeOptions};

use crate::model::BrevetDistance;
use chrono::{DateTime, Duration, TimeZone};

/// Heure d'ouverture d'un contrôle (distance de brevet brute, options par défaut).
///
/// La distance du brevet est validée avant celle du contrôle.
pub fn compute_open_time<Tz: TimeZone>(
    control_dist_km: f64,
    brevet_dist_km: f64,
    brevet_start_time: &DateTime<Tz>,
) -> Result<DateTime<Tz>, AcpError> {
    let brevet = BrevetDistance::from_km(brevet_dist_km)?;
    open_time(
        control_dist_km,
        brevet,
        brevet_start_time,
        TimeOptions::default(),
    )
}

/// Heure de fermeture d'un contrôle (distance de brevet brute, options par défaut).
pub fn compute_close_time<Tz: TimeZone>(
    control_dist_km: f64,
    brevet_dist_km: f64,
    brevet_start_time: &DateTime<Tz>,
) -> Result<DateTime<Tz>, AcpError> {
    let brevet = BrevetDistance::from_km(brevet_dist_km)?;
    close_time(
        control_dist_km,
        brevet,
        brevet_start_time,
        TimeOptions::default(),
    )
}

/// Temps écoulé entre le départ et l'ouverture du contrôle.
pub fn open_offset(
    control_km: f64,
    brevet: BrevetDistance,
    opts: TimeOptions,
) -> Result<Duration, AcpError> {
    let hours = open::open_hours(control_km, brevet)?;
    Ok(util::hours_to_offset(hours, opts.rounding))
}

/// Temps écoulé entre le départ et la fermeture du contrôle.
pub fn close_offset(
    control_km: f64,
    brevet: BrevetDistance,
    opts: TimeOptions,
) -> Result<Duration, AcpError> {
    close::close_offset(control_km, brevet, opts)
}

/// Heure d'ouverture d'un contrôle pour un brevet déjà validé.
pub fn open_time<Tz: TimeZone>(
    control_km: f64,
    brevet: BrevetDistance,
    start: &DateTime<Tz>,
    opts: TimeOptions,
) -> Result<DateTime<Tz>, AcpError> {
    let offset = open_offset(control_km, brevet, opts)?;
    #[cfg(feature = "logging")]
    tracing::trace!(
        control_km,
        brevet_km = brevet.km(),
        minutes = offset.num_minutes(),
        "open offset"
    );
    util::shift(start, offset)
}

/// Heure de fermeture d'un contrôle pour un brevet déjà validé.
pub fn close_time<Tz: TimeZone>(
    control_km: f64,
    brevet: BrevetDistance,
    start: &DateTime<Tz>,
    opts: TimeOptions,
) -> Result<DateTime<Tz>, AcpError> {
    let offset = close_offset(control_km, brevet, opts)?;
    #[cfg(feature = "logging")]
    tracing::trace!(
        control_km,
        brevet_km = brevet.km(),
        minutes = offset.num_minutes(),
        "close offset"
    );
    util::shift(start, offset)
}
