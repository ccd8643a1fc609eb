//! TUI Module
//!
//! Terminal user interface for the setup wizard.

pub mod onboarding;
pub mod onboarding_render;
pub mod runner;
