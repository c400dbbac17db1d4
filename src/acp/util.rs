use super::{AcpError, Rounding};
use chrono::{DateTime, Duration, TimeZone};

// absorbe les erreurs d'arrondi flottant (ex. 5.999999 h)
const MINUTE_EPSILON: f64 = 1e-9;

pub(super) fn check_control(control_km: f64) -> Result<(), AcpError> {
    if !control_km.is_finite() || control_km < 0.0 {
        return Err(AcpError::InvalidControlDistance(control_km));
    }
    Ok(())
}

pub(super) fn hours_to_offset(hours: f64, rounding: Rounding) -> Duration {
    let minutes = hours * 60.0;
    let minutes = match rounding {
        Rounding::Nearest => minutes.round(),
        Rounding::Truncate => (minutes + MINUTE_EPSILON).trunc(),
    };
    Duration::minutes(minutes as i64)
}

pub(super) fn shift<Tz: TimeZone>(
    start: &DateTime<Tz>,
    offset: Duration,
) -> Result<DateTime<Tz>, AcpError> {
    start
        .clone()
        .checked_add_signed(offset)
        .ok_or(AcpError::TimeOverflow)
}
