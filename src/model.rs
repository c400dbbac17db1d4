use crate::acp::AcpError;
use chrono::{DateTime, Duration, FixedOffset};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distances nominales officielles ACP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub enum BrevetDistance {
    Km200,
    Km300,
    Km400,
    Km600,
    Km1000,
}

impl BrevetDistance {
    pub const ALL: [BrevetDistance; 5] = [
        Self::Km200,
        Self::Km300,
        Self::Km400,
        Self::Km600,
        Self::Km1000,
    ];

    pub fn km(self) -> u32 {
        match self {
            Self::Km200 => 200,
            Self::Km300 => 300,
            Self::Km400 => 400,
            Self::Km600 => 600,
            Self::Km1000 => 1000,
        }
    }

    pub fn km_f64(self) -> f64 {
        f64::from(self.km())
    }

    /// Temps limite total du brevet (fermeture du contrôle d'arrivée).
    pub fn time_limit(self) -> Duration {
        match self {
            Self::Km200 => Duration::hours(13) + Duration::minutes(30),
            Self::Km300 => Duration::hours(20),
            Self::Km400 => Duration::hours(27),
            Self::Km600 => Duration::hours(40),
            Self::Km1000 => Duration::hours(70),
        }
    }

    /// Seules les valeurs officielles exactes sont acceptées.
    pub fn from_km(km: f64) -> Result<Self, AcpError> {
        Self::ALL
            .into_iter()
            .find(|d| d.km_f64() == km)
            .ok_or(AcpError::InvalidBrevetDistance(km))
    }
}

impl TryFrom<u32> for BrevetDistance {
    type Error = AcpError;

    fn try_from(km: u32) -> Result<Self, Self::Error> {
        Self::from_km(f64::from(km))
    }
}

impl From<BrevetDistance> for u32 {
    fn from(d: BrevetDistance) -> Self {
        d.km()
    }
}

impl FromStr for BrevetDistance {
    type Err = AcpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_km(parse_km(s)?)
    }
}

impl fmt::Display for BrevetDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.km())
    }
}

/// Parse une distance : `"120"`, `"120.5"`, `"120km"`, `"120 km"`.
pub fn parse_km(raw: &str) -> Result<f64, AcpError> {
    let trimmed = raw.trim();
    let number = trimmed
        .strip_suffix("km")
        .or_else(|| trimmed.strip_suffix("KM"))
        .unwrap_or(trimmed)
        .trim();
    number
        .parse::<f64>()
        .map_err(|_| AcpError::ParseDistance(raw.to_string()))
}

/// Brevet : distance nominale et heure officielle de départ.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Brevet {
    pub distance: BrevetDistance,
    pub start: DateTime<FixedOffset>,
}

impl Brevet {
    pub fn new(distance: BrevetDistance, start: DateTime<FixedOffset>) -> Self {
        Self { distance, start }
    }
}

/// Point de contrôle sur le parcours
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Control {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    pub distance_km: f64,
}

impl Control {
    pub fn new(distance_km: f64) -> Self {
        Self {
            name: None,
            distance_km,
        }
    }

    pub fn named<N: Into<String>>(name: N, distance_km: f64) -> Self {
        Self {
            name: Some(name.into()),
            distance_km,
        }
    }
}

/// Fenêtre de passage calculée pour un contrôle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControlWindow {
    pub control: Control,
    pub open: DateTime<FixedOffset>,
    pub close: DateTime<FixedOffset>,
}

impl ControlWindow {
    /// Durée d'ouverture en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.close - self.open).num_minutes()
    }

    /// Un passage est validé si `open <= at <= close`.
    pub fn accepts(&self, at: DateTime<FixedOffset>) -> bool {
        self.open <= at && at <= self.close
    }
}
