use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::error::EvaluationError;
use super::traits::EligibilityEvaluator;
use super::view::EvaluationView;
use crate::eligibility::EligibilityInput;

/// Delegates evaluation to an HTTP endpoint speaking the `EvaluationView` contract.
#[derive(Debug, Clone)]
pub struct RemoteEvaluator {
    endpoint: String,
    client: Client,
}

impl RemoteEvaluator {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, EvaluationError> {
        let client = Client::builder().build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EligibilityEvaluator for RemoteEvaluator {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn evaluate(&self, input: &EligibilityInput) -> Result<EvaluationView, EvaluationError> {
        let res = self.client.post(&self.endpoint).json(input).send().await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(EvaluationError::Api { status, body });
        }

        let body = res.text().await?;
        parse_remote_body(&body)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RemotePayload {
    Single(Box<EvaluationView>),
    Batch(Vec<EvaluationView>),
}

/// Accept either a bare view or an array whose first element is the view.
pub(crate) fn parse_remote_body(body: &str) -> Result<EvaluationView, EvaluationError> {
    match serde_json::from_str::<RemotePayload>(body) {
        Ok(RemotePayload::Single(view)) => Ok(*view),
        Ok(RemotePayload::Batch(views)) => views.into_iter().next().ok_or_else(|| {
            EvaluationError::InvalidResponse("remote evaluation returned an empty array".to_string())
        }),
        Err(err) => Err(EvaluationError::InvalidResponse(err.to_string())),
    }
}
