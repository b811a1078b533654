use serde::{Deserialize, Serialize};

/// Qualitative band for a composite score, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Deficiente,
    Regular,
    Bueno,
    #[serde(rename = "Muy Bueno")]
    MuyBueno,
    Excepcional,
}

impl Rating {
    /// Lower bound of each band, best first. Boundaries belong to the higher band.
    const BANDS: [(u16, Rating); 4] = [
        (800, Rating::Excepcional),
        (740, Rating::MuyBueno),
        (670, Rating::Bueno),
        (580, Rating::Regular),
    ];

    pub fn from_score(score: u16) -> Self {
        Self::BANDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, rating)| *rating)
            .unwrap_or(Rating::Deficiente)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rating::Deficiente => "Deficiente",
            Rating::Regular => "Regular",
            Rating::Bueno => "Bueno",
            Rating::MuyBueno => "Muy Bueno",
            Rating::Excepcional => "Excepcional",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Rating::Deficiente => "🔴",
            Rating::Regular => "⚠️",
            Rating::Bueno => "👍",
            Rating::MuyBueno => "✅",
            Rating::Excepcional => "🌟",
        }
    }

    /// Styling token consumed by renderers.
    pub const fn color_token(self) -> &'static str {
        match self {
            Rating::Deficiente => "poor",
            Rating::Regular => "fair",
            Rating::Bueno => "good",
            Rating::MuyBueno => "very-good",
            Rating::Excepcional => "exceptional",
        }
    }

    pub const fn color_hex(self) -> &'static str {
        match self {
            Rating::Deficiente => "#ef4444",
            Rating::Regular => "#f97316",
            Rating::Bueno => "#fbbf24",
            Rating::MuyBueno => "#6ee7b7",
            Rating::Excepcional => "#10b981",
        }
    }
}
