//! notify-icon - notification icons from app artwork
//!
//! Turns a logo with a near-white subject into the white, alpha-masked PNG
//! Android expects for a notification small icon.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
