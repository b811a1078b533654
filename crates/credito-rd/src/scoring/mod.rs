//! FICO-style score estimation from five self-reported credit factors.
//!
//! Each factor is mapped onto `[0, 1]` by a piecewise curve, the five values are
//! combined with fixed weights, and the weighted sum is stretched over the
//! 300–850 range. Every input is clamped, so scoring never fails.

mod advice;
mod factors;
mod rating;

pub use advice::{recommendations, Priority, Recommendation};
pub use factors::{amounts_owed, credit_age, credit_mix, inquiries, payment_history, FactorKind};
pub use rating::Rating;

use serde::{Deserialize, Serialize};

pub const SCORE_MIN: u16 = 300;
pub const SCORE_MAX: u16 = 850;
pub const SCORE_RANGE: u16 = SCORE_MAX - SCORE_MIN;

/// Raw self-reported measurements. Missing fields fall back to a middling profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorInput {
    #[serde(default = "defaults::on_time_percent")]
    pub on_time_percent: f64,
    #[serde(default = "defaults::utilization_percent")]
    pub utilization_percent: f64,
    #[serde(default = "defaults::credit_age_years")]
    pub credit_age_years: f64,
    #[serde(default = "defaults::credit_types")]
    pub credit_types: f64,
    #[serde(default = "defaults::inquiries_count")]
    pub inquiries_count: f64,
}

mod defaults {
    pub(super) fn on_time_percent() -> f64 {
        80.0
    }
    pub(super) fn utilization_percent() -> f64 {
        50.0
    }
    pub(super) fn credit_age_years() -> f64 {
        3.0
    }
    pub(super) fn credit_types() -> f64 {
        2.0
    }
    pub(super) fn inquiries_count() -> f64 {
        3.0
    }
}

impl Default for FactorInput {
    fn default() -> Self {
        Self {
            on_time_percent: defaults::on_time_percent(),
            utilization_percent: defaults::utilization_percent(),
            credit_age_years: defaults::credit_age_years(),
            credit_types: defaults::credit_types(),
            inquiries_count: defaults::inquiries_count(),
        }
    }
}

/// Normalized value of every factor for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorValues {
    pub payment_history: f64,
    pub amounts_owed: f64,
    pub credit_age: f64,
    pub credit_mix: f64,
    pub inquiries: f64,
}

impl FactorValues {
    pub fn from_input(input: &FactorInput) -> Self {
        Self {
            payment_history: payment_history(input.on_time_percent),
            amounts_owed: amounts_owed(input.utilization_percent),
            credit_age: credit_age(input.credit_age_years),
            credit_mix: credit_mix(input.credit_types),
            inquiries: inquiries(input.inquiries_count),
        }
    }

    pub fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::PaymentHistory => self.payment_history,
            FactorKind::AmountsOwed => self.amounts_owed,
            FactorKind::CreditAge => self.credit_age,
            FactorKind::CreditMix => self.credit_mix,
            FactorKind::Inquiries => self.inquiries,
        }
    }

    pub fn weighted_sum(&self) -> f64 {
        FactorKind::ALL
            .into_iter()
            .fold(0.0, |acc, kind| acc + self.get(kind) * kind.weight())
    }
}

/// Per-factor contribution, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    pub factor: FactorKind,
    pub label: String,
    pub value: f64,
    pub weight: f64,
    pub percent: u8,
}

impl FactorScore {
    fn new(factor: FactorKind, value: f64) -> Self {
        Self {
            factor,
            label: factor.label().to_string(),
            value,
            weight: factor.weight(),
            percent: (value * 100.0).round().clamp(0.0, 100.0) as u8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u16,
    pub rating: Rating,
    pub emoji: String,
    pub color: String,
    pub color_hex: String,
    pub factors: Vec<FactorScore>,
    pub recommendations: Vec<Recommendation>,
}

impl ScoreResult {
    pub fn factor(&self, kind: FactorKind) -> Option<&FactorScore> {
        self.factors.iter().find(|factor| factor.factor == kind)
    }

    pub fn summary(&self) -> String {
        format!("{} ({})", self.score, self.rating.label())
    }
}

/// Map a weighted factor sum in `[0, 1]` onto the 300–850 scale.
pub fn composite_score(weighted_sum: f64) -> u16 {
    let raw = f64::from(SCORE_MIN) + weighted_sum * f64::from(SCORE_RANGE);
    raw.round()
        .clamp(f64::from(SCORE_MIN), f64::from(SCORE_MAX)) as u16
}

pub fn calculate_score(input: &FactorInput) -> ScoreResult {
    let values = FactorValues::from_input(input);
    let score = composite_score(values.weighted_sum());
    let rating = Rating::from_score(score);

    let factors = FactorKind::ALL
        .into_iter()
        .map(|kind| FactorScore::new(kind, values.get(kind)))
        .collect();

    ScoreResult {
        score,
        rating,
        emoji: rating.emoji().to_string(),
        color: rating.color_token().to_string(),
        color_hex: rating.color_hex().to_string(),
        factors,
        recommendations: recommendations(input, &values, score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_golden_score() {
        let result = calculate_score(&FactorInput::default());

        assert_eq!(result.score, 548);
        assert_eq!(result.rating, Rating::Deficiente);
        assert_eq!(result.color, "poor");

        let percents: Vec<u8> = result.factors.iter().map(|factor| factor.percent).collect();
        assert_eq!(percents, vec![50, 35, 43, 50, 55]);
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let input: FactorInput =
            serde_json::from_str(r#"{"onTimePercent": 97}"#).expect("partial input parses");

        assert_eq!(input.on_time_percent, 97.0);
        assert_eq!(input.utilization_percent, 50.0);
        assert_eq!(input.credit_age_years, 3.0);
        assert_eq!(input.credit_types, 2.0);
        assert_eq!(input.inquiries_count, 3.0);
    }

    #[test]
    fn strong_profile_scores_exceptional() {
        let input = FactorInput {
            on_time_percent: 100.0,
            utilization_percent: 5.0,
            credit_age_years: 10.0,
            credit_types: 3.0,
            inquiries_count: 0.0,
        };

        let result = calculate_score(&input);

        assert_eq!(result.score, 816);
        assert_eq!(result.rating, Rating::Excepcional);
        assert_eq!(result.color_hex, "#10b981");
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].priority, Priority::Positive);
    }

    #[test]
    fn worst_profile_floors_at_minimum() {
        let input = FactorInput {
            on_time_percent: -20.0,
            utilization_percent: 400.0,
            credit_age_years: -1.0,
            credit_types: 0.0,
            inquiries_count: 99.0,
        };

        let result = calculate_score(&input);

        assert_eq!(result.score, SCORE_MIN);
        assert!(result.factors.iter().all(|factor| factor.percent == 0));
    }

    #[test]
    fn perfect_profile_tops_out() {
        let input = FactorInput {
            on_time_percent: 100.0,
            utilization_percent: 0.0,
            credit_age_years: 30.0,
            credit_types: 5.0,
            inquiries_count: 0.0,
        };

        let result = calculate_score(&input);

        assert_eq!(result.score, SCORE_MAX);
        assert_eq!(
            result.factor(FactorKind::CreditAge).map(|factor| factor.percent),
            Some(100)
        );
    }

    #[test]
    fn factor_breakdown_follows_fixed_order_and_weights() {
        let result = calculate_score(&FactorInput::default());
        let kinds: Vec<FactorKind> = result.factors.iter().map(|factor| factor.factor).collect();
        assert_eq!(kinds, FactorKind::ALL.to_vec());
        assert_eq!(result.factors[0].weight, 0.35);
        assert_eq!(result.factors[0].label, "Historial de Pago");
    }

    #[test]
    fn composite_score_clamps_out_of_range_sums() {
        assert_eq!(composite_score(-1.0), SCORE_MIN);
        assert_eq!(composite_score(2.0), SCORE_MAX);
        assert_eq!(composite_score(0.5), 575);
    }
}
