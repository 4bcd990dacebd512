//! # Domain Models
//!
//! Pure challenge mode types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, logging, or rule logic. Just ruleset identifiers, the
//! per-character flag layout, the shapes the host game hands over, and the
//! configuration model.

pub mod config;
pub mod game;
pub mod rulesets;
