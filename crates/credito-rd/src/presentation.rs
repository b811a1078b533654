//! Pure mappings from engine output to drawing parameters.
//!
//! Nothing here draws; renderers consume these values as-is.

use serde::Serialize;

use crate::scoring::{
    Priority, Rating, Recommendation, ScoreResult, SCORE_MAX, SCORE_MIN, SCORE_RANGE,
};

/// Semicircle the score needle sweeps, left (300) to right (850).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeFrame {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Default for GaugeFrame {
    fn default() -> Self {
        Self {
            center_x: 150.0,
            center_y: 135.0,
            radius: 110.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreGauge {
    pub fraction: f64,
    pub angle_degrees: f64,
    pub needle_x: f64,
    pub needle_y: f64,
    pub color_hex: &'static str,
}

pub fn score_fraction(score: u16) -> f64 {
    let clamped = score.clamp(SCORE_MIN, SCORE_MAX);
    f64::from(clamped - SCORE_MIN) / f64::from(SCORE_RANGE)
}

pub fn score_gauge(score: u16, frame: GaugeFrame) -> ScoreGauge {
    let fraction = score_fraction(score);
    let angle_degrees = fraction * 180.0;
    let radians = (angle_degrees - 180.0).to_radians();

    ScoreGauge {
        fraction,
        angle_degrees,
        needle_x: frame.center_x + frame.radius * radians.cos(),
        needle_y: frame.center_y + frame.radius * radians.sin(),
        color_hex: score_color(score),
    }
}

/// Mirrors the rating bands.
pub fn score_color(score: u16) -> &'static str {
    Rating::from_score(score).color_hex()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarTone {
    Strong,
    Fair,
    Weak,
    Critical,
}

impl BarTone {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            80.. => BarTone::Strong,
            60..=79 => BarTone::Fair,
            40..=59 => BarTone::Weak,
            _ => BarTone::Critical,
        }
    }

    pub const fn gradient(self) -> &'static str {
        match self {
            BarTone::Strong => "linear-gradient(90deg,#10b981,#6ee7b7)",
            BarTone::Fair => "linear-gradient(90deg,#fbbf24,#fde68a)",
            BarTone::Weak => "linear-gradient(90deg,#f97316,#fdba74)",
            BarTone::Critical => "linear-gradient(90deg,#ef4444,#fca5a5)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBar {
    pub label: String,
    pub width_percent: u8,
    pub tone: BarTone,
}

pub fn factor_bars(result: &ScoreResult) -> Vec<FactorBar> {
    result
        .factors
        .iter()
        .map(|factor| FactorBar {
            label: factor.label.clone(),
            width_percent: factor.percent.min(100),
            tone: BarTone::from_percent(factor.percent),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DtiGauge {
    pub fraction: f64,
    pub end_angle_radians: f64,
    pub color_hex: &'static str,
}

pub fn dti_gauge(dti_percent: f64) -> DtiGauge {
    let percent = if dti_percent.is_nan() { 0.0 } else { dti_percent };
    let fraction = percent.clamp(0.0, 100.0) / 100.0;
    let color_hex = if percent < 30.0 {
        "#10b981"
    } else if percent < 50.0 {
        "#f59e0b"
    } else {
        "#ef4444"
    };

    DtiGauge {
        fraction,
        end_angle_radians: std::f64::consts::PI * (1.0 + fraction),
        color_hex,
    }
}

/// Ten-cell block bar used by the printable report.
pub fn text_bar(percent: u8) -> String {
    let filled = ((f64::from(percent.min(100)) / 10.0).round()) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub const fn priority_accent(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "#ef4444",
        Priority::Medium => "#f97316",
        Priority::Positive => "#10b981",
        Priority::Low => "#3b82f6",
    }
}

/// A recommendation with the accent colour of its left border.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCard {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub accent_hex: &'static str,
}

pub fn recommendation_cards(result: &ScoreResult) -> Vec<RecommendationCard> {
    result
        .recommendations
        .iter()
        .map(|recommendation| RecommendationCard {
            accent_hex: priority_accent(recommendation.priority),
            recommendation: recommendation.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_score, FactorInput};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn gauge_sweeps_half_circle() {
        let frame = GaugeFrame::default();

        let low = score_gauge(300, frame);
        assert_eq!(low.angle_degrees, 0.0);
        assert!(close(low.needle_x, 40.0));
        assert!(close(low.needle_y, 135.0));

        let mid = score_gauge(575, frame);
        assert!(close(mid.angle_degrees, 90.0));
        assert!(close(mid.needle_x, 150.0));
        assert!(close(mid.needle_y, 25.0));

        let high = score_gauge(850, frame);
        assert_eq!(high.angle_degrees, 180.0);
        assert!(close(high.needle_x, 260.0));
    }

    #[test]
    fn gauge_clamps_out_of_range_scores() {
        assert_eq!(score_fraction(0), 0.0);
        assert_eq!(score_fraction(999), 1.0);
    }

    #[test]
    fn score_color_follows_rating_bands() {
        assert_eq!(score_color(820), "#10b981");
        assert_eq!(score_color(745), "#6ee7b7");
        assert_eq!(score_color(700), "#fbbf24");
        assert_eq!(score_color(600), "#f97316");
        assert_eq!(score_color(450), "#ef4444");
    }

    #[test]
    fn bar_tones_use_coarse_bands() {
        assert_eq!(BarTone::from_percent(100), BarTone::Strong);
        assert_eq!(BarTone::from_percent(80), BarTone::Strong);
        assert_eq!(BarTone::from_percent(79), BarTone::Fair);
        assert_eq!(BarTone::from_percent(60), BarTone::Fair);
        assert_eq!(BarTone::from_percent(40), BarTone::Weak);
        assert_eq!(BarTone::from_percent(39), BarTone::Critical);
    }

    #[test]
    fn factor_bars_track_factor_percentages() {
        let result = calculate_score(&FactorInput::default());
        let bars = factor_bars(&result);

        assert_eq!(bars.len(), 5);
        assert_eq!(bars[0].width_percent, 50);
        assert_eq!(bars[0].tone, BarTone::Weak);
        assert_eq!(bars[1].tone, BarTone::Critical);
    }

    #[test]
    fn dti_gauge_colors_by_load() {
        assert_eq!(dti_gauge(12.0).color_hex, "#10b981");
        assert_eq!(dti_gauge(45.0).color_hex, "#f59e0b");
        let saturated = dti_gauge(140.0);
        assert_eq!(saturated.color_hex, "#ef4444");
        assert_eq!(saturated.fraction, 1.0);
    }

    #[test]
    fn text_bar_has_ten_cells() {
        assert_eq!(text_bar(0), "░░░░░░░░░░");
        assert_eq!(text_bar(55), "██████░░░░");
        assert_eq!(text_bar(100), "██████████");
    }

    #[test]
    fn cards_carry_priority_accents_in_order() {
        let result = calculate_score(&FactorInput {
            on_time_percent: 92.0,
            utilization_percent: 25.0,
            credit_age_years: 6.0,
            credit_types: 4.0,
            inquiries_count: 1.0,
        });

        let cards = recommendation_cards(&result);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].recommendation.priority, Priority::High);
        assert_eq!(cards[0].accent_hex, "#ef4444");
        assert_eq!(cards[1].recommendation.title, "Utilización de crédito");

        let perfect = calculate_score(&FactorInput {
            on_time_percent: 100.0,
            utilization_percent: 0.0,
            credit_age_years: 30.0,
            credit_types: 5.0,
            inquiries_count: 0.0,
        });
        let cards = recommendation_cards(&perfect);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].accent_hex, "#10b981");
        assert_eq!(priority_accent(Priority::Medium), "#f97316");
        assert_eq!(priority_accent(Priority::Low), "#3b82f6");
    }
}
