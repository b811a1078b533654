use serde::{Deserialize, Deserializer, Serialize};

use crate::eligibility::EligibilityResult;
use crate::format::one_decimal;

/// Rendered evaluation exchanged with the remote evaluator and handed to renderers.
/// Both evaluation paths produce exactly this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationView {
    pub verdict_badge: String,
    #[serde(default)]
    pub verdict_badge_class: String,
    pub advice_text: String,
    pub product_name: String,
    #[serde(default)]
    pub product_badge_text: String,
    #[serde(default)]
    pub product_desc: String,
    #[serde(default)]
    pub product_bg: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default = "default_confidence")]
    pub confidence: String,
    #[serde(deserialize_with = "percent_text")]
    pub dti_percent: String,
    pub disposable: f64,
}

fn default_confidence() -> String {
    "Alta".to_string()
}

/// Remote evaluators send the DTI either as `"66.7"` or as a bare number.
fn percent_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => one_decimal(value),
        NumberOrText::Text(text) => text,
    })
}

impl EvaluationView {
    pub fn dti_value(&self) -> Option<f64> {
        self.dti_percent.trim().parse().ok()
    }
}

impl From<&EligibilityResult> for EvaluationView {
    fn from(result: &EligibilityResult) -> Self {
        Self {
            verdict_badge: result.verdict.label().to_string(),
            verdict_badge_class: result.verdict.severity().class_token().to_string(),
            advice_text: result.advice.clone(),
            product_name: result.product.name.clone(),
            product_badge_text: result.product.badge.clone(),
            product_desc: result.product.description.clone(),
            product_bg: result.product.background.clone(),
            tips: result.tips.clone(),
            confidence: result.confidence.label().to_string(),
            dti_percent: result.dti_percent(),
            disposable: result.disposable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::{EligibilityEngine, EligibilityInput};

    #[test]
    fn local_result_uses_wire_field_names() {
        let result = EligibilityEngine::default().evaluate(&EligibilityInput {
            income: 30_000.0,
            expenses: 20_000.0,
            age: 25,
            employment_months: 6,
            score: 650,
        });

        let value = serde_json::to_value(EvaluationView::from(&result)).expect("serializes");

        assert_eq!(value["verdictBadge"], "Alto Riesgo");
        assert_eq!(value["verdictBadgeClass"], "danger");
        assert_eq!(value["productBadgeText"], "ORIENTACIÓN");
        assert_eq!(value["dtiPercent"], "66.7");
        assert_eq!(value["disposable"], 10_000.0);
        assert_eq!(value["confidence"], "Baja");
        assert_eq!(value["tips"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn numeric_dti_from_remote_is_normalized() {
        let view: EvaluationView = serde_json::from_str(
            r#"{
                "verdictBadge": "Perfil Muy Sólido",
                "adviceText": "ok",
                "productName": "Tarjetas de crédito nivel medio-alto",
                "dtiPercent": 25,
                "disposable": 60000
            }"#,
        )
        .expect("sparse remote payload parses");

        assert_eq!(view.dti_percent, "25.0");
        assert_eq!(view.dti_value(), Some(25.0));
        assert_eq!(view.confidence, "Alta");
        assert!(view.tips.is_empty());
    }

    #[test]
    fn local_and_numeric_remote_dti_agree_on_ties() {
        let result = EligibilityEngine::default().evaluate(&EligibilityInput {
            income: 400.0,
            expenses: 225.0,
            age: 30,
            employment_months: 12,
            score: 700,
        });
        let local = EvaluationView::from(&result);

        let mut remote = serde_json::to_value(&local).expect("serializes");
        remote["dtiPercent"] = serde_json::json!(56.25);
        let remote: EvaluationView = serde_json::from_value(remote).expect("parses");

        assert_eq!(local.dti_percent, "56.3");
        assert_eq!(remote, local);
    }
}
