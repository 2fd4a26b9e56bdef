//! Decision support for Forest Rights Act claims.
//!
//! The [`decision_support`] module holds the scoring core: a scheme catalog, criteria and
//! context scorers, the recommendation engine and the map layer builder. The remaining modules
//! carry the configuration, telemetry and error plumbing shared with the HTTP service.

pub mod config;
pub mod decision_support;
pub mod error;
pub mod telemetry;
