// src/lib.rs
// ============================================================================
// Module: Invoice Security Tests Library
// Description: Shared configuration for invoice API security test suites.
// Purpose: Provide common utilities for the black-box test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the invoice API security
//! regression suites in `tests/`. The suites treat the invoice service as a
//! black box: every check is an HTTP request against a running instance and an
//! assertion on the response.
//! Security posture: the service under test is assumed hostile until proven
//! otherwise; suites assert that malicious inputs are rejected.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
