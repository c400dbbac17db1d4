/// Tranche du barème : `width_km` kilomètres parcourus à `speed_kmh`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub width_km: f64,
    pub speed_kmh: f64,
}

impl Band {
    pub const fn new(width_km: f64, speed_kmh: f64) -> Self {
        Self {
            width_km,
            speed_kmh,
        }
    }
}

/// Vitesses maximales (ouverture) : 0-200, 200-400, 400-600, 600-1000, 1000-1300.
pub const MAX_SPEED_BANDS: [Band; 5] = [
    Band::new(200.0, 34.0),
    Band::new(200.0, 32.0),
    Band::new(200.0, 30.0),
    Band::new(400.0, 28.0),
    Band::new(300.0, 26.0),
];

/// Vitesses minimales (fermeture) au-delà de `SHORT_CONTROL_KM` :
/// 60-200, 200-400, 400-600, 600-1000, 1000-1300.
pub const MIN_SPEED_BANDS: [Band; 5] = [
    Band::new(140.0, 15.0),
    Band::new(200.0, 15.0),
    Band::new(200.0, 15.0),
    Band::new(400.0, 11.428),
    Band::new(300.0, 13.333),
];

/// Distance maximale d'un contrôle.
pub const MAX_CONTROL_KM: f64 = 1000.0;

/// Contrôles proches du départ : 20 km/h plus une heure de marge.
pub const SHORT_CONTROL_KM: f64 = 60.0;
pub const SHORT_CONTROL_SPEED_KMH: f64 = 20.0;
pub const SHORT_CONTROL_ALLOWANCE_H: f64 = 1.0;

/// Heures nécessaires pour couvrir `distance_km` en consommant les tranches dans l'ordre.
///
/// La distance au-delà de la dernière tranche est ignorée.
pub fn elapsed_hours(distance_km: f64, bands: &[Band]) -> f64 {
    let mut remaining = distance_km;
    let mut hours = 0.0;

    for band in bands {
        if remaining <= 0.0 {
            break;
        }
        let dist = remaining.min(band.width_km);
        hours += dist / band.speed_kmh;
        remaining -= dist;
    }

    hours
}
