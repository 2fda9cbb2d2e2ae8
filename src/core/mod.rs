//! The core module.
//!
//! Contains the functional parts of the application, free of infrastructure concerns.

pub mod greeting;
