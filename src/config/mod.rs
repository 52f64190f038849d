// src/config/mod.rs
// ============================================================================
// Module: Security Test Configuration
// Description: Centralized configuration for invoice API security tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: std, url
// ============================================================================

//! ## Overview
//! Test configuration is read from environment variables and mapped into a
//! small typed structure for reuse across test helpers.
//! Security posture: environment inputs are untrusted; parsing fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::DEFAULT_BASE_URL;
pub use env::SecurityTestConfig;
pub use env::SecurityTestEnv;
pub use env::read_env_strict;
