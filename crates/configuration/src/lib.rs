// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Analysis, Config, Data};

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional; every setting has a sensible default, so a missing
/// file yields the default configuration rather than an error.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.analysis.periods_per_year == 0 {
        return Err(ConfigError::ValidationError(
            "analysis.periods_per_year must be positive".to_string(),
        ));
    }
    Ok(())
}
