#![warn(rust_2018_idioms, rust_2018_compatibility)]

use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use spinning_cube::app::App;

fn run() -> anyhow::Result<()> {
    let mut app = App::new()?;
    app.run()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // the app is dropped inside `run`, exiting here skips no teardown
    let code = match run() {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    };
    process::exit(code);
}
