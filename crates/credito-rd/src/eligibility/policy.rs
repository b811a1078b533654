use super::config::EligibilityThresholds;
use super::rules::EligibilitySignals;
use super::{Confidence, ProductRecommendation, Verdict};
use crate::format::{grouped, one_decimal};

const GUIDANCE_BADGE: &str = "ORIENTACIÓN";

pub(crate) struct VerdictContent {
    pub advice: String,
    pub product: ProductRecommendation,
    pub tips: Vec<String>,
    pub confidence: Confidence,
}

fn product(name: &str, description: &str, background: &str) -> ProductRecommendation {
    ProductRecommendation {
        name: name.to_string(),
        description: description.to_string(),
        badge: GUIDANCE_BADGE.to_string(),
        background: background.to_string(),
    }
}

fn tips(items: &[&str]) -> Vec<String> {
    items.iter().map(|tip| (*tip).to_string()).collect()
}

pub(crate) fn verdict_content(
    verdict: Verdict,
    signals: &EligibilitySignals,
    thresholds: &EligibilityThresholds,
) -> VerdictContent {
    match verdict {
        Verdict::AgeAlert => VerdictContent {
            advice: "Debes ser mayor de 18 años para solicitar productos financieros crediticios convencionales.".to_string(),
            product: product(
                "Cuenta de Ahorro",
                "A menores de edad generalmente solo se les ofrece cuentas de ahorro juveniles. No existen productos de crédito formales para este grupo de edad según la regulación dominicana.",
                "rgba(0,45,98,0.3)",
            ),
            tips: tips(&[
                "Construye el hábito de ahorro desde ya.",
                "Consulta sobre cuentas juveniles en bancos locales.",
            ]),
            confidence: Confidence::Alta,
        },
        Verdict::HighRisk => {
            let reduction = ((signals.dti - thresholds.target_dti) * signals.income).round() as i64;
            VerdictContent {
                advice: format!(
                    "Tu DTI de {}% indica que más de la mitad de tus ingresos ya están comprometidos. Esto reduce mucho tus probabilidades ante cualquier banco.",
                    one_decimal(signals.dti * 100.0)
                ),
                product: product(
                    "Reestructuración o Consolidación de Deuda",
                    "Con este nivel de endeudamiento, la mayoría de entidades financieras con frecuencia rechazan nuevas solicitudes. El primer paso suele ser consolidar o reducir las deudas actuales antes de aplicar a cualquier producto.",
                    "rgba(239,68,68,0.12)",
                ),
                tips: vec![
                    format!(
                        "Reduce gastos en RD${} para llegar a un DTI del {:.0}%.",
                        grouped(reduction),
                        thresholds.target_dti * 100.0
                    ),
                    "Evita solicitar nuevas tarjetas hasta bajar tu nivel de endeudamiento.".to_string(),
                    "Considera hablar con un asesor financiero para un plan de salida de deuda.".to_string(),
                ],
                confidence: Confidence::Baja,
            }
        }
        Verdict::Elite => VerdictContent {
            advice: "¡Eres un candidato soñado para los bancos! Tienes excelentes hábitos de pago, solvencia comprobada y estabilidad laboral.".to_string(),
            product: product(
                "Tarjetas de alto límite (Premium / Signature)",
                "Perfiles como el tuyo suelen ser elegibles para productos de élite con altos límites de crédito, tasas preferenciales y beneficios adicionales (seguros, puntos, acceso a salas VIP). Consulta con tu banco principal.",
                "linear-gradient(135deg,#1e293b,#0f172a)",
            ),
            tips: tips(&[
                "Solicita el límite más alto disponible para mantener tu uso de crédito bajo.",
                "Usa la tarjeta para gastos habituales y paga el total cada mes.",
            ]),
            confidence: Confidence::MuyAlta,
        },
        Verdict::VerySolid => {
            let stability = if signals.low_employment {
                "Aumentar tu estabilidad laboral (>3 meses) mejoraría tu evaluación."
            } else {
                "Mantén tu historial de pagos a tiempo por 6 meses más para escalar a Platinum."
            };
            VerdictContent {
                advice: "Tu historial es saludable y tus finanzas estables. Mantén el buen ritmo y estarás listo para productos más exclusivos pronto.".to_string(),
                product: product(
                    "Tarjetas de crédito nivel medio-alto",
                    "Con este perfil, las entidades financieras generalmente consideran productos con límites moderados-altos y beneficios adicionales. El banco evaluará tu situación actual al momento de aplicar.",
                    "linear-gradient(135deg,#1e3a5f,#2563a8)",
                ),
                tips: tips(&[
                    stability,
                    "Mantén el uso de tu límite por debajo del 30% del total disponible.",
                ]),
                confidence: Confidence::Alta,
            }
        }
        Verdict::Growing => {
            let stability = if signals.low_employment {
                "Permanece en tu empleo actual al menos 3 meses para mejorar tu evaluación."
            } else {
                "Tu estabilidad laboral es un punto a favor, ¡mantenla!"
            };
            VerdictContent {
                advice: "Tu crédito avanza en la dirección correcta. Con disciplina y tiempo, podrás calificar a productos superiores.".to_string(),
                product: product(
                    "Préstamo personal o tarjeta de crédito básica",
                    "Personas en esta etapa suelen poder acceder a préstamos personales de monto pequeño o tarjetas de límite inicial bajo. Las cuotas fijas son especialmente útiles para construir historial de forma sostenida.",
                    "linear-gradient(135deg,#1e3a5f,#2563a8)",
                ),
                tips: tips(&[
                    "Paga siempre antes de la fecha de corte para subir rápido tu score.",
                    "Evita hacer múltiples solicitudes de crédito en el mismo mes (manchan el buró).",
                    stability,
                ]),
                confidence: Confidence::Media,
            }
        }
        Verdict::NeedsAttention => VerdictContent {
            advice: "Entendemos que construir o reconstruir el historial toma tiempo. La clave es demostrar disciplina sistemáticamente.".to_string(),
            product: product(
                "Tarjeta de crédito garantizada (secured)",
                "Para quienes están iniciando o reconstruyendo su historial, una tarjeta garantizada — donde un depósito propio sirve como límite — es la vía más accesible. Muchas entidades la convierten en tarjeta convencional tras 12 meses de buen uso.",
                "linear-gradient(135deg,#002D62,#003f8a)",
            ),
            tips: tips(&[
                "Abre una tarjeta garantizada con el mínimo posible y úsala con disciplina.",
                "Establece un único débito automático (ej. Netflix) en la tarjeta y paga el estado de cuenta completo cada mes.",
                "Espera 6 meses antes de solicitar cualquier otro producto de crédito.",
            ]),
            confidence: Confidence::Media,
        },
    }
}
