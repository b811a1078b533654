//! Evaluation strategies sharing one output contract.
//!
//! [`RemoteEvaluator`] and [`LocalEvaluator`] both implement
//! [`EligibilityEvaluator`]; [`FallbackEvaluator`] composes them so a remote
//! failure degrades to the local engine with identical inputs.

mod error;
mod fallback;
mod local;
mod remote;
mod traits;
mod view;

pub use error::EvaluationError;
pub use fallback::FallbackEvaluator;
pub use local::LocalEvaluator;
pub use remote::RemoteEvaluator;
pub use traits::EligibilityEvaluator;
pub use view::EvaluationView;
