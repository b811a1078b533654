use std::sync::Arc;

use tracing::{debug, warn};

use super::local::LocalEvaluator;
use super::traits::EligibilityEvaluator;
use super::view::EvaluationView;
use crate::eligibility::EligibilityInput;

/// Tries an optional primary evaluator once and falls back to the local engine
/// on any failure. Callers never observe a transport error.
#[derive(Clone)]
pub struct FallbackEvaluator {
    primary: Option<Arc<dyn EligibilityEvaluator>>,
    local: LocalEvaluator,
}

impl FallbackEvaluator {
    pub fn local_only() -> Self {
        Self {
            primary: None,
            local: LocalEvaluator::default(),
        }
    }

    pub fn with_primary(primary: Arc<dyn EligibilityEvaluator>) -> Self {
        Self {
            primary: Some(primary),
            local: LocalEvaluator::default(),
        }
    }

    pub fn primary_name(&self) -> &'static str {
        self.primary
            .as_ref()
            .map(|primary| primary.name())
            .unwrap_or_else(|| self.local.name())
    }

    pub async fn evaluate(&self, input: &EligibilityInput) -> EvaluationView {
        let Some(primary) = &self.primary else {
            return self.local.view(input);
        };

        match primary.evaluate(input).await {
            Ok(view) => {
                debug!(evaluator = primary.name(), "eligibility evaluated");
                view
            }
            Err(err) => {
                warn!(
                    evaluator = primary.name(),
                    error = %err,
                    "evaluator unavailable, using local engine"
                );
                self.local.view(input)
            }
        }
    }
}

impl Default for FallbackEvaluator {
    fn default() -> Self {
        Self::local_only()
    }
}
