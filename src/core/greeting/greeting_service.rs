//! A service that greets the world.

use tracing::instrument;

/// The greeting returned by [`HelloWorldService`].
pub const HELLO_WORLD: &str = "Hello, World!";

/// Says hello to the world.
///
/// ```rust
/// # use hello_world::core::greeting::greeting_service::HelloWorldService;
/// let service = HelloWorldService::new();
/// assert_eq!("Hello, World!", service.get_hello_world());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HelloWorldService;

impl HelloWorldService {
    /// Constructs a new [`HelloWorldService`].
    pub fn new() -> Self {
        Self
    }

    /// Returns the greeting.
    #[instrument(ret)]
    pub fn get_hello_world(&self) -> &'static str {
        HELLO_WORLD
    }
}

/// Returns the greeting without constructing a service.
#[instrument(ret)]
pub fn hello_world() -> &'static str {
    HelloWorldService.get_hello_world()
}
