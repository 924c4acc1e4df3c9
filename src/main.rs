use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use classpass::settings::Settings;

mod harden;
mod output;

fn main() -> ExitCode {
    init_logging();
    harden::harden();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        tracing::warn!("Failed to load settings: {}", e);
        Settings::default()
    });

    let generator = match settings.generator() {
        Ok(generator) => generator,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let password = generator.generate(settings.pass_length);
    match output::emit(&password, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to write password: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `CLASSPASS_LOG` takes an `EnvFilter` directive, default `warn`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CLASSPASS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
