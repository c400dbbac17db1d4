use crate::acp::{close_time, open_time, AcpError, TimeOptions};
use crate::model::{Brevet, Control, ControlWindow};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ROW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M %:z";

/// Tableau des contrôles d'un brevet, trié par distance croissante.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub brevet: Brevet,
    pub windows: Vec<ControlWindow>,
}

impl Schedule {
    /// Fenêtre du contrôle situé exactement à `distance_km`.
    pub fn window_at(&self, distance_km: f64) -> Option<&ControlWindow> {
        self.windows
            .iter()
            .find(|w| w.control.distance_km == distance_km)
    }

    /// Rendu texte compact (une ligne par contrôle).
    pub fn render_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.windows.len() + 1);
        lines.push(format!(
            "brevet {} km, start {}",
            self.brevet.distance.km(),
            self.brevet.start.format(HEADER_TIME_FORMAT)
        ));
        for w in &self.windows {
            lines.push(format!(
                "{:>7.1} km | {:<10} | {} | {}",
                w.control.distance_km,
                w.control.name.as_deref().unwrap_or("-"),
                w.open.format(ROW_TIME_FORMAT),
                w.close.format(ROW_TIME_FORMAT)
            ));
        }
        lines.join("\n")
    }
}

/// Calcule les fenêtres de tous les contrôles ; la première erreur interrompt le calcul.
pub fn build_schedule(
    brevet: &Brevet,
    controls: &[Control],
    opts: TimeOptions,
) -> Result<Schedule, AcpError> {
    let mut windows = controls
        .iter()
        .map(|control| {
            let open = open_time(control.distance_km, brevet.distance, &brevet.start, opts)?;
            let close = close_time(control.distance_km, brevet.distance, &brevet.start, opts)?;
            Ok(ControlWindow {
                control: control.clone(),
                open,
                close,
            })
        })
        .collect::<Result<Vec<_>, AcpError>>()?;

    windows.sort_by(|a, b| a.control.distance_km.total_cmp(&b.control.distance_km));

    #[cfg(feature = "logging")]
    tracing::debug!(
        brevet_km = brevet.distance.km(),
        controls = windows.len(),
        "schedule built"
    );

    Ok(Schedule {
        brevet: brevet.clone(),
        windows,
    })
}
