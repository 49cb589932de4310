mod app;
mod config;
mod fetch;
mod frame;
mod history;
mod layout;
mod persist;
mod scheduler;
mod state;
mod ui;

use clap::Parser;

use app::ImgWatchApp;
use config::Args;

fn main() {
    // Prefer C numeric locale up-front; GTK may later adjust locale again.
    std::env::set_var("LC_NUMERIC", "C");
    unsafe {
        libc::setlocale(libc::LC_NUMERIC, b"C\0".as_ptr().cast());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("imgwatch=info".parse().unwrap()),
        )
        .init();

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            std::process::exit(2);
        }
    };

    let app = ImgWatchApp::new(config);
    std::process::exit(app.run());
}
