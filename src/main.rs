use pattern_recipe::runtime::{setup_tracing, Showcase};
use tracing::{error, info};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting pattern demonstrations");

    let showcase = Showcase::run().map_err(|e| {
        error!(error = %e, "Demonstration failed");
        e.to_string()
    })?;

    for outcome in &showcase.tools {
        println!("{}", outcome);
    }
    for (operation, value) in &showcase.profile {
        println!("{}: {}", operation, value);
    }

    info!("Demonstrations completed successfully");
    Ok(())
}
