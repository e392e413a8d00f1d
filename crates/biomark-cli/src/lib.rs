#![deny(unsafe_code)]

//! Shared CLI infrastructure.
//!
//! The binary lives in `main.rs`; this library exposes the logging setup so
//! it can be reused by integration tests and auxiliary tooling.

pub mod logging;
