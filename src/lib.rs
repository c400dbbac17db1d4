#![forbid(unsafe_code)]
//! Brevets — heures d'ouverture et de fermeture des contrôles de brevets ACP.
//!
//! - Barèmes officiels de vitesses maximale (ouverture) et minimale (fermeture).
//! - Temps limites fixes à l'arrivée selon la distance nominale.
//! - Le résultat reste dans le fuseau de l'heure de départ.
//! - Erreurs explicites, jamais d'heure par défaut.

pub mod acp;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod schedule;

pub use acp::{
    close_offset, close_time, compute_close_time, compute_open_time, open_offset, open_time,
    AcpError, Rounding, TimeOptions,
};
pub use model::{Brevet, BrevetDistance, Control, ControlWindow};
pub use schedule::{build_schedule, Schedule};
