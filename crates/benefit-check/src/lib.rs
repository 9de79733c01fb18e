//! Eligibility simulators for Spanish social-benefit programs.
//!
//! [`eligibility`] holds the pure rules engine. [`intake`] and [`checkout`] are the thin
//! request and payment layers that feed it.

pub mod checkout;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod intake;
pub mod telemetry;
