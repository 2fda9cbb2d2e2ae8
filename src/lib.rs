//! A service that greets the world.
//!
//! ```rust
//! use hello_world::core::greeting::greeting_service::HelloWorldService;
//!
//! assert_eq!("Hello, World!", HelloWorldService::new().get_hello_world());
//! ```

pub mod core;
pub mod infra;
