//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and owns config loading.
//!
//! ## Config loading
//! ```rust,ignore
//! use cmodes_kernel::config::load_config;
//! use cmodes_kernel::domain::config::ChallengeConfig;
//!
//! let cfg: ChallengeConfig = load_config(Some("challenge_modes.toml")).unwrap();
//! ```
pub mod config;

pub use cmodes_domain as domain;
