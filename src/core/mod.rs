//! Core infrastructure
//!
//! Cross-cutting pieces shared by the drivers and the inference harness.

pub mod logging;
