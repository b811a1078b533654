use async_trait::async_trait;

use super::error::EvaluationError;
use super::view::EvaluationView;
use crate::eligibility::EligibilityInput;

/// One way of turning an eligibility input into the rendered evaluation contract.
#[async_trait]
pub trait EligibilityEvaluator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn evaluate(&self, input: &EligibilityInput) -> Result<EvaluationView, EvaluationError>;
}
