use credito_rd::config::{EvaluationConfig, SnapshotConfig};
use credito_rd::evaluation::{EvaluationError, FallbackEvaluator, RemoteEvaluator};
use credito_rd::snapshot::{JsonFileSnapshotStore, MemorySnapshotStore, SnapshotStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Collaborators shared by the credit endpoints.
#[derive(Clone)]
pub(crate) struct CreditState {
    pub(crate) evaluator: FallbackEvaluator,
    pub(crate) snapshots: Arc<dyn SnapshotStore>,
}

impl CreditState {
    pub(crate) fn from_config(evaluation: &EvaluationConfig, snapshot: &SnapshotConfig) -> Self {
        Self {
            evaluator: build_evaluator(evaluation.remote_url.as_deref()),
            snapshots: build_snapshot_store(snapshot),
        }
    }

    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        Self {
            evaluator: FallbackEvaluator::local_only(),
            snapshots: Arc::new(MemorySnapshotStore::default()),
        }
    }
}

/// A remote endpoint that cannot even build a client degrades to local-only.
pub(crate) fn build_evaluator(remote_url: Option<&str>) -> FallbackEvaluator {
    let Some(url) = remote_url else {
        return FallbackEvaluator::local_only();
    };

    match RemoteEvaluator::new(url) {
        Ok(remote) => {
            info!(endpoint = %remote.endpoint(), "remote eligibility evaluation enabled");
            FallbackEvaluator::with_primary(Arc::new(remote))
        }
        Err(err) => {
            log_remote_setup_failure(url, &err);
            FallbackEvaluator::local_only()
        }
    }
}

fn log_remote_setup_failure(url: &str, err: &EvaluationError) {
    warn!(endpoint = url, error = %err, "remote evaluator unavailable, evaluating locally");
}

pub(crate) fn build_snapshot_store(config: &SnapshotConfig) -> Arc<dyn SnapshotStore> {
    match &config.path {
        Some(path) => Arc::new(JsonFileSnapshotStore::new(path.clone())),
        None => Arc::new(MemorySnapshotStore::default()),
    }
}

pub(crate) fn parse_score(raw: &str) -> Result<i32, String> {
    let score: i32 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a whole number ({err})"))?;
    if (300..=850).contains(&score) {
        Ok(score)
    } else {
        Err(format!("score {score} must be between 300 and 850"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_score_accepts_exact_range() {
        assert_eq!(parse_score("300"), Ok(300));
        assert_eq!(parse_score(" 850 "), Ok(850));
        assert!(parse_score("299").is_err());
        assert!(parse_score("851").is_err());
        assert!(parse_score("abc").is_err());
    }

    #[test]
    fn missing_remote_url_keeps_evaluation_local() {
        assert_eq!(build_evaluator(None).primary_name(), "local");
        assert_eq!(
            build_evaluator(Some("http://127.0.0.1:9/evaluate")).primary_name(),
            "remote"
        );
    }

    #[test]
    fn snapshot_path_selects_file_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = build_snapshot_store(&SnapshotConfig {
            path: Some(dir.path().join("latest.json")),
        });
        assert!(!store.has_saved().expect("empty store"));

        let memory = build_snapshot_store(&SnapshotConfig { path: None });
        assert!(memory.load().expect("load").is_none());
    }
}
