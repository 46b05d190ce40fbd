//! NTCalc-rs — concurrent number-theory calculator.

use ntcalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("error: {err:#}");
        std::process::exit(errors::resolve_exit_code(&err));
    }
}
