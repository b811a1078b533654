use serde::{Deserialize, Serialize};

/// The five FICO factors, in the order they are scored and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKind {
    PaymentHistory,
    AmountsOwed,
    CreditAge,
    CreditMix,
    Inquiries,
}

impl FactorKind {
    pub const ALL: [FactorKind; 5] = [
        FactorKind::PaymentHistory,
        FactorKind::AmountsOwed,
        FactorKind::CreditAge,
        FactorKind::CreditMix,
        FactorKind::Inquiries,
    ];

    /// Weight in basis points; the five weights add up to exactly 100.
    pub const fn weight_points(self) -> u32 {
        match self {
            FactorKind::PaymentHistory => 35,
            FactorKind::AmountsOwed => 30,
            FactorKind::CreditAge => 15,
            FactorKind::CreditMix => 10,
            FactorKind::Inquiries => 10,
        }
    }

    pub fn weight(self) -> f64 {
        f64::from(self.weight_points()) / 100.0
    }

    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::PaymentHistory => "Historial de Pago",
            FactorKind::AmountsOwed => "Cantidades Adeudadas",
            FactorKind::CreditAge => "Duración del Historial",
            FactorKind::CreditMix => "Tipos de Crédito",
            FactorKind::Inquiries => "Consultas Recientes",
        }
    }

    /// Factor value below which a recommendation is emitted.
    pub const fn advice_threshold(self) -> f64 {
        match self {
            FactorKind::PaymentHistory => 0.85,
            FactorKind::AmountsOwed => 0.75,
            FactorKind::CreditAge => 0.60,
            FactorKind::CreditMix => 0.70,
            FactorKind::Inquiries => 0.70,
        }
    }
}

/// Clamp into `[min, max]`; NaN collapses to `min`.
pub(crate) fn clamp_domain(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

pub fn payment_history(on_time_percent: f64) -> f64 {
    let p = clamp_domain(on_time_percent, 0.0, 100.0) / 100.0;
    if p >= 0.99 {
        1.0
    } else if p >= 0.95 {
        0.90 + (p - 0.95) * 2.0
    } else if p >= 0.90 {
        0.75 + (p - 0.90) * 3.0
    } else if p >= 0.80 {
        0.50 + (p - 0.80) * 2.5
    } else {
        p * 0.625
    }
}

pub fn amounts_owed(utilization_percent: f64) -> f64 {
    let u = clamp_domain(utilization_percent, 0.0, 100.0) / 100.0;
    if u <= 0.01 {
        1.0
    } else if u <= 0.10 {
        0.95
    } else if u <= 0.30 {
        0.80 - ((u - 0.10) / 0.20) * 0.20
    } else if u <= 0.50 {
        0.60 - ((u - 0.30) / 0.20) * 0.25
    } else if u <= 0.75 {
        0.35 - ((u - 0.50) / 0.25) * 0.20
    } else {
        (0.15 - ((u - 0.75) / 0.25) * 0.15).max(0.0)
    }
}

pub fn credit_age(years: f64) -> f64 {
    let y = clamp_domain(years, 0.0, 30.0);
    if y <= 0.0 {
        0.0
    } else if y <= 2.0 {
        (y / 2.0) * 0.35
    } else if y <= 5.0 {
        0.35 + ((y - 2.0) / 3.0) * 0.25
    } else if y <= 10.0 {
        0.60 + ((y - 5.0) / 5.0) * 0.25
    } else if y <= 20.0 {
        0.85 + ((y - 10.0) / 10.0) * 0.10
    } else {
        0.95 + ((y - 20.0) / 10.0) * 0.05
    }
}

const CREDIT_MIX_TABLE: [f64; 6] = [0.0, 0.20, 0.50, 0.75, 0.90, 1.0];

pub fn credit_mix(types: f64) -> f64 {
    let t = clamp_domain(types, 0.0, 5.0);
    // halves round up: 2.5 selects the three-type entry
    let index = (t + 0.5).floor() as usize;
    CREDIT_MIX_TABLE
        .get(index)
        .copied()
        .unwrap_or(CREDIT_MIX_TABLE[CREDIT_MIX_TABLE.len() - 1])
}

#[allow(clippy::float_cmp)]
pub fn inquiries(count: f64) -> f64 {
    let c = clamp_domain(count, 0.0, 10.0);
    if c == 0.0 {
        1.0
    } else if c == 1.0 {
        0.85
    } else if c == 2.0 {
        0.70
    } else if c == 3.0 {
        0.55
    } else if c <= 5.0 {
        0.35 - ((c - 3.0) / 2.0) * 0.15
    } else {
        (0.20 - ((c - 5.0) / 5.0) * 0.20).max(0.0)
    }
}
