use super::{bands, util, AcpError, TimeOptions};
use crate::model::BrevetDistance;
use chrono::Duration;

pub(super) fn close_offset(
    control_km: f64,
    brevet: BrevetDistance,
    opts: TimeOptions,
) -> Result<Duration, AcpError> {
    util::check_control(control_km)?;

    if control_km == 0.0 {
        return Ok(Duration::hours(1));
    }

    let limit = brevet.time_limit();
    if control_km >= brevet.km_f64() {
        return Ok(limit);
    }

    let hours = if control_km <= bands::SHORT_CONTROL_KM {
        short_control_hours(control_km)
    } else {
        short_control_hours(bands::SHORT_CONTROL_KM)
            + bands::elapsed_hours(
                control_km - bands::SHORT_CONTROL_KM,
                &bands::MIN_SPEED_BANDS,
            )
    };

    // un contrôle intermédiaire ne ferme jamais après l'arrivée
    Ok(util::hours_to_offset(hours, opts.rounding).min(limit))
}

fn short_control_hours(control_km: f64) -> f64 {
    control_km / bands::SHORT_CONTROL_SPEED_KMH + bands::SHORT_CONTROL_ALLOWANCE_H
}
