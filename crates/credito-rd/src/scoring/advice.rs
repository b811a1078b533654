use serde::{Deserialize, Serialize};

use super::factors::FactorKind;
use super::{FactorInput, FactorValues};
use crate::format::plain_number;

/// Score at which the congratulatory entry is appended.
const POSITIVE_SCORE_FLOOR: u16 = 740;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    Positive,
}

impl Priority {
    pub const fn for_factor(kind: FactorKind) -> Self {
        match kind {
            FactorKind::PaymentHistory | FactorKind::AmountsOwed => Priority::High,
            FactorKind::CreditAge | FactorKind::Inquiries => Priority::Medium,
            FactorKind::CreditMix => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub icon: String,
    pub title: String,
    pub text: String,
    pub priority: Priority,
}

impl Recommendation {
    fn new(icon: &str, title: &str, text: String, priority: Priority) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            text,
            priority,
        }
    }
}

/// One entry per weak factor in factor order, then the positive entry for high scores.
pub fn recommendations(
    input: &FactorInput,
    values: &FactorValues,
    score: u16,
) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = FactorKind::ALL
        .into_iter()
        .filter(|kind| values.get(*kind) < kind.advice_threshold())
        .map(|kind| factor_advice(kind, input))
        .collect();

    if score >= POSITIVE_SCORE_FLOOR {
        recs.push(Recommendation::new(
            "🎉",
            "¡Excelente manejo financiero!",
            "Tu puntaje te califica para las mejores tasas de interés. Mantén estos hábitos y considera un monitoreo periódico.".to_string(),
            Priority::Positive,
        ));
    }

    recs
}

fn factor_advice(kind: FactorKind, input: &FactorInput) -> Recommendation {
    let priority = Priority::for_factor(kind);
    match kind {
        FactorKind::PaymentHistory => {
            let text = if input.on_time_percent < 95.0 {
                format!(
                    "Tienes un {}% de pagos a tiempo. Activa pagos automáticos para llegar al 100% y mejorar hasta 50 puntos.",
                    plain_number(input.on_time_percent)
                )
            } else {
                "Asegúrate de pagar al menos el mínimo antes de la fecha de vencimiento cada mes."
                    .to_string()
            };
            Recommendation::new("📅", "Historial de pagos", text, priority)
        }
        FactorKind::AmountsOwed => {
            let text = if input.utilization_percent > 30.0 {
                format!(
                    "Tu utilización es {}%. Redúcela por debajo del 30% (idealmente 10%) para un impacto inmediato en tu puntaje.",
                    plain_number(input.utilization_percent)
                )
            } else {
                "Buen manejo del crédito disponible. Mantén tu utilización bajo el 30%.".to_string()
            };
            Recommendation::new("💳", "Utilización de crédito", text, priority)
        }
        FactorKind::CreditAge => Recommendation::new(
            "⏳",
            "Antigüedad del historial",
            format!(
                "Con {} año(s) de historial, el tiempo es tu mejor aliado. No cierres cuentas antiguas, aunque no las uses activamente.",
                plain_number(input.credit_age_years)
            ),
            priority,
        ),
        FactorKind::CreditMix => Recommendation::new(
            "🏦",
            "Diversificación del crédito",
            format!(
                "Tienes {} tipo(s) de crédito. Considera agregar una mezcla sana: tarjeta de crédito, préstamo personal y/o hipoteca.",
                plain_number(input.credit_types)
            ),
            priority,
        ),
        FactorKind::Inquiries => Recommendation::new(
            "🔍",
            "Consultas de crédito",
            format!(
                "Con {} consulta(s) reciente(s), reduce las solicitudes de nuevos créditos. Cada consulta dura 2 años en tu historial.",
                plain_number(input.inquiries_count)
            ),
            priority,
        ),
    }
}
