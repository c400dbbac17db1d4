use std::str::FromStr;
use thiserror::Error;

/// Règle d'arrondi appliquée au temps écoulé total (en minutes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Minute la plus proche (0.5 arrondi vers le haut).
    #[default]
    Nearest,
    /// Minute entière inférieure.
    Truncate,
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "round" => Ok(Self::Nearest),
            "truncate" | "trunc" | "floor" => Ok(Self::Truncate),
            other => Err(format!("unknown rounding mode: {other}")),
        }
    }
}

/// Options de calcul
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeOptions {
    pub rounding: Rounding,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcpError {
    #[error("invalid control distance: {0} km")]
    InvalidControlDistance(f64),
    #[error("invalid brevet distance: {0} km (expected 200, 300, 400, 600 or 1000)")]
    InvalidBrevetDistance(f64),
    #[error("cannot parse distance: {0}")]
    ParseDistance(String),
    #[error("control time out of range")]
    TimeOverflow,
}
