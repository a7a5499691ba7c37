//! Shared utilities for the homeFix.lk booking services
//!
//! This crate provides common functionality used across the server modules:
//! - Phone number utilities (Sri Lankan local formats)
//! - Field-level validation error collection

pub mod utils;

// Re-export commonly used items at crate root
pub use utils::{phone, validation};
