use serde::{Deserialize, Serialize};

/// Thresholds driving the verdict cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityThresholds {
    pub minimum_age: i32,
    pub maximum_dti: f64,
    pub target_dti: f64,
    pub elite_score: i32,
    pub elite_disposable_income: f64,
    pub minimum_employment_months: i32,
    pub solid_score: i32,
    pub growing_score: i32,
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            maximum_dti: 0.50,
            target_dti: 0.40,
            elite_score: 800,
            elite_disposable_income: 20_000.0,
            minimum_employment_months: 3,
            solid_score: 700,
            growing_score: 600,
        }
    }
}
