//! Greeting the world.

pub mod greeting_service;
