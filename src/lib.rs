//! Crabmail - Terminal Mail Client Account Setup
//!
//! The account-setup wizard for the crabmail terminal mail client: a
//! ratatui-based onboarding flow that walks a new user from the welcome
//! screen to a connected account, or into self-hosted sync-engine
//! configuration when the environment calls for it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the setup wizard (default)
//! crabmail
//!
//! # Jump straight to a named wizard page
//! crabmail setup --start-page account-choose
//!
//! # Show the effective configuration
//! crabmail config
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;

// Re-export commonly used types
pub use error::CrabmailError;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
