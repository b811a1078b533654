use crate::eligibility::{EligibilityEngine, EligibilityInput, EligibilityResult};

pub(super) fn input(
    income: f64,
    expenses: f64,
    age: i32,
    employment_months: i32,
    score: i32,
) -> EligibilityInput {
    EligibilityInput {
        income,
        expenses,
        age,
        employment_months,
        score,
    }
}

/// Healthy adult profile; individual tests override one field at a time.
pub(super) fn stable_profile() -> EligibilityInput {
    input(80_000.0, 20_000.0, 34, 24, 720)
}

pub(super) fn evaluate(input: &EligibilityInput) -> EligibilityResult {
    EligibilityEngine::default().evaluate(input)
}
