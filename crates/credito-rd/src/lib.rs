//! Credit score estimation and loan eligibility.
//!
//! [`scoring`] and [`eligibility`] are pure engines; [`evaluation`] wraps the
//! eligibility engine behind a remote-with-local-fallback capability, and
//! [`presentation`] turns results into drawing parameters.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod evaluation;
pub mod format;
pub mod presentation;
pub mod scoring;
pub mod snapshot;
pub mod telemetry;
