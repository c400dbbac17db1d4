use super::{bands, util, AcpError};
use crate::model::BrevetDistance;

pub(super) fn open_hours(control_km: f64, brevet: BrevetDistance) -> Result<f64, AcpError> {
    util::check_control(control_km)?;
    if control_km > bands::MAX_CONTROL_KM || control_km > brevet.km_f64() {
        return Err(AcpError::InvalidControlDistance(control_km));
    }
    Ok(bands::elapsed_hours(control_km, &bands::MAX_SPEED_BANDS))
}
