//! Customer-churn scoring service library.
//!
//! The crate hosts the heuristic scoring core (per-feature attributions and an
//! aggregate churn probability), the record factory that wraps scores into
//! persisted-shape prediction records, and the surrounding history, dashboard
//! statistics, and HTTP routing layers consumed by the `churnscope-api` binary.

pub mod config;
pub mod error;
pub mod prediction;
pub mod telemetry;
