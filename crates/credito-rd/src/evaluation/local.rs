use async_trait::async_trait;

use super::error::EvaluationError;
use super::traits::EligibilityEvaluator;
use super::view::EvaluationView;
use crate::eligibility::{EligibilityEngine, EligibilityInput};

/// In-process evaluation with the eligibility engine. Cannot fail.
#[derive(Debug, Clone, Default)]
pub struct LocalEvaluator {
    engine: EligibilityEngine,
}

impl LocalEvaluator {
    pub fn view(&self, input: &EligibilityInput) -> EvaluationView {
        EvaluationView::from(&self.engine.evaluate(input))
    }
}

#[async_trait]
impl EligibilityEvaluator for LocalEvaluator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn evaluate(&self, input: &EligibilityInput) -> Result<EvaluationView, EvaluationError> {
        Ok(self.view(input))
    }
}
