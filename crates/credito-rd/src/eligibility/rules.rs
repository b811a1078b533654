use super::config::EligibilityThresholds;
use super::{EligibilityInput, Verdict};

pub(crate) struct EligibilitySignals {
    pub income: f64,
    pub dti: f64,
    pub disposable: f64,
    pub age: i32,
    pub employment_months: i32,
    pub score: i32,
    pub low_employment: bool,
}

impl EligibilitySignals {
    pub(crate) fn from_input(input: &EligibilityInput, thresholds: &EligibilityThresholds) -> Self {
        // income <= 0 counts as fully committed rather than dividing by zero
        let dti = if input.income > 0.0 {
            input.expenses / input.income
        } else {
            1.0
        };

        Self {
            income: input.income,
            dti,
            disposable: input.income - input.expenses,
            age: input.age,
            employment_months: input.employment_months,
            score: input.score,
            low_employment: input.employment_months < thresholds.minimum_employment_months,
        }
    }
}

struct Rule {
    verdict: Verdict,
    applies: fn(&EligibilitySignals, &EligibilityThresholds) -> bool,
}

/// Evaluated top to bottom; the first rule that applies decides the verdict.
const RULES: [Rule; 6] = [
    Rule {
        verdict: Verdict::AgeAlert,
        applies: |signals, thresholds| signals.age < thresholds.minimum_age,
    },
    Rule {
        verdict: Verdict::HighRisk,
        applies: |signals, thresholds| signals.dti > thresholds.maximum_dti,
    },
    Rule {
        verdict: Verdict::Elite,
        applies: |signals, thresholds| {
            signals.score >= thresholds.elite_score
                && signals.disposable > thresholds.elite_disposable_income
                && signals.employment_months >= thresholds.minimum_employment_months
        },
    },
    Rule {
        verdict: Verdict::VerySolid,
        applies: |signals, thresholds| signals.score >= thresholds.solid_score,
    },
    Rule {
        verdict: Verdict::Growing,
        applies: |signals, thresholds| signals.score >= thresholds.growing_score,
    },
    Rule {
        verdict: Verdict::NeedsAttention,
        applies: |_, _| true,
    },
];

pub(crate) fn select_verdict(
    signals: &EligibilitySignals,
    thresholds: &EligibilityThresholds,
) -> Verdict {
    RULES
        .iter()
        .find(|rule| (rule.applies)(signals, thresholds))
        .map(|rule| rule.verdict)
        .unwrap_or(Verdict::NeedsAttention)
}
