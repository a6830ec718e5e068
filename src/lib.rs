//! Marcador — organizer for Netscape-style browser bookmark exports.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod managers;
pub mod services;
pub mod types;
