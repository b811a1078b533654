use chrono::NaiveDate;
use credito_rd::evaluation::EvaluationView;
use credito_rd::format::{grouped, plain_number};
use credito_rd::presentation::{dti_gauge, text_bar};
use credito_rd::scoring::{FactorInput, Priority, ScoreResult, SCORE_MAX, SCORE_MIN};
use credito_rd::snapshot::SavedSnapshot;
use std::fmt::Write;

const DISCLAIMER: &str = "Este reporte es una estimación educativa basada en la metodología FICO. \
No reemplaza un informe oficial. Consulta la Central de Riesgos de la Superintendencia de Bancos \
de la República Dominicana para tu historial crediticio real.";

fn priority_tag(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "ALTA",
        Priority::Medium => "MEDIA",
        Priority::Low => "BAJA",
        Priority::Positive => "LOGRO",
    }
}

/// Printable score report. `generated` is the date shown in the header.
pub(crate) fn render_score_report(
    inputs: &FactorInput,
    result: &ScoreResult,
    generated: NaiveDate,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "tuCreditoRD - Reporte de Crédito Estimado");
    let _ = writeln!(
        out,
        "Generado el {} · Solo para referencia personal",
        generated.format("%d/%m/%Y")
    );

    let _ = writeln!(
        out,
        "\nPuntaje: {} {} {}",
        result.score,
        result.emoji,
        result.rating.label()
    );
    let _ = writeln!(out, "Rango de puntaje: {SCORE_MIN} - {SCORE_MAX}");

    let _ = writeln!(out, "\nDesglose por factor");
    for factor in &result.factors {
        let _ = writeln!(
            out,
            "- {:<28} {:>3}%  {}  {:>3}%",
            factor.label,
            factor.factor.weight_points(),
            text_bar(factor.percent),
            factor.percent
        );
    }

    let _ = writeln!(out, "\nTus datos ingresados");
    let _ = writeln!(out, "- Pagos a tiempo: {}%", plain_number(inputs.on_time_percent));
    let _ = writeln!(
        out,
        "- Utilización de crédito: {}%",
        plain_number(inputs.utilization_percent)
    );
    let _ = writeln!(
        out,
        "- Antigüedad del historial: {} año(s)",
        plain_number(inputs.credit_age_years)
    );
    let _ = writeln!(
        out,
        "- Tipos de crédito: {} tipo(s)",
        plain_number(inputs.credit_types)
    );
    let _ = writeln!(
        out,
        "- Consultas recientes: {} consulta(s)",
        plain_number(inputs.inquiries_count)
    );

    if result.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecomendaciones: ninguna");
    } else {
        let _ = writeln!(out, "\nRecomendaciones personalizadas");
        for rec in &result.recommendations {
            let _ = writeln!(
                out,
                "- [{}] {} {}: {}",
                priority_tag(rec.priority),
                rec.icon,
                rec.title,
                rec.text
            );
        }
    }

    let _ = writeln!(out, "\n{DISCLAIMER}");
    out
}

pub(crate) fn render_snapshot(saved: &SavedSnapshot) -> String {
    format!(
        "Último cálculo guardado el {}: {}\n",
        saved.saved_label(),
        saved.snapshot.result.summary()
    )
}

pub(crate) fn render_eligibility(view: &EvaluationView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Veredicto: {}", view.verdict_badge);
    let _ = writeln!(out, "Confianza: {}", view.confidence);

    match view.dti_value() {
        Some(dti) => {
            let gauge = dti_gauge(dti);
            let percent = (gauge.fraction * 100.0).round() as u8;
            let _ = writeln!(out, "DTI: {}%  {}", view.dti_percent, text_bar(percent));
        }
        None => {
            let _ = writeln!(out, "DTI: {}%", view.dti_percent);
        }
    }
    let _ = writeln!(
        out,
        "Ingreso disponible: RD${}",
        grouped(view.disposable.round() as i64)
    );

    let _ = writeln!(out, "\n{}", view.advice_text);

    let _ = writeln!(out, "\nProducto sugerido: {}", view.product_name);
    if !view.product_desc.is_empty() {
        let _ = writeln!(out, "{}", view.product_desc);
    }

    if !view.tips.is_empty() {
        let _ = writeln!(out, "\nConsejos");
        for tip in &view.tips {
            let _ = writeln!(out, "- {tip}");
        }
    }

    out
}
