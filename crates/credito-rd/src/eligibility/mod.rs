//! Loan eligibility verdicts derived from income, expenses, age, employment and score.

mod config;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use config::EligibilityThresholds;

use crate::format::one_decimal;
use policy::verdict_content;
use rules::{select_verdict, EligibilitySignals};
use serde::{Deserialize, Serialize};

/// Inputs collected by the intake form. The score may come from a bucket card
/// or an exact entry; both arrive as the same integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub income: f64,
    pub expenses: f64,
    pub age: i32,
    #[serde(rename = "employment")]
    pub employment_months: i32,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    AgeAlert,
    HighRisk,
    Elite,
    VerySolid,
    Growing,
    NeedsAttention,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Verdict::AgeAlert => "Alerta de Edad",
            Verdict::HighRisk => "Alto Riesgo",
            Verdict::Elite => "Perfil de Élite",
            Verdict::VerySolid => "Perfil Muy Sólido",
            Verdict::Growing => "Perfil en Crecimiento",
            Verdict::NeedsAttention => "Requiere Atención",
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            Verdict::AgeAlert | Verdict::HighRisk => Severity::Danger,
            Verdict::Growing | Verdict::NeedsAttention => Severity::Warning,
            Verdict::Elite | Verdict::VerySolid => Severity::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Standard,
}

impl Severity {
    /// Badge class token; standard verdicts carry no extra class.
    pub const fn class_token(self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Standard => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Baja,
    Media,
    Alta,
    #[serde(rename = "Muy Alta")]
    MuyAlta,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::Baja => "Baja",
            Confidence::Media => "Media",
            Confidence::Alta => "Alta",
            Confidence::MuyAlta => "Muy Alta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    pub name: String,
    pub description: String,
    pub badge: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub dti: f64,
    pub disposable: f64,
    pub verdict: Verdict,
    pub advice: String,
    pub product: ProductRecommendation,
    pub tips: Vec<String>,
    pub confidence: Confidence,
}

impl EligibilityResult {
    pub fn dti_percent(&self) -> String {
        one_decimal(self.dti * 100.0)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} · {} (DTI {}%, confianza {})",
            self.verdict.label(),
            self.product.name,
            self.dti_percent(),
            self.confidence.label()
        )
    }
}

/// Stateless evaluator applying the threshold cascade to one input.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    thresholds: EligibilityThresholds,
}

impl EligibilityEngine {
    pub fn new(thresholds: EligibilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn evaluate(&self, input: &EligibilityInput) -> EligibilityResult {
        let signals = EligibilitySignals::from_input(input, &self.thresholds);
        let verdict = select_verdict(&signals, &self.thresholds);
        let content = verdict_content(verdict, &signals, &self.thresholds);

        EligibilityResult {
            dti: signals.dti,
            disposable: signals.disposable,
            verdict,
            advice: content.advice,
            product: content.product,
            tips: content.tips,
            confidence: content.confidence,
        }
    }
}
