//! Prints a greeting to the world.

use hello_world::{
    core::greeting::greeting_service::HelloWorldService,
    infra::{config, logging},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => return Err(e.into()),
        _ => {}
    }
    let config = config::load_config()?;
    let _guard = logging::init_logging(&config.logging)?;

    let service = HelloWorldService::new();
    tracing::info!("greeting the world");
    println!("{}", service.get_hello_world());

    Ok(())
}
