//! cloud-ui-config - Entry Point
//!
//! Loads the front-end configuration and prints the rendered config.js
//! script to stdout.

use log::info;

use cloud_ui_config::{AppConfig, render};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    info!(
        "Rendering front-end configuration for '{}'",
        config.branding.main_name
    );

    match render::to_config_script(&config) {
        Ok(script) => print!("{script}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
