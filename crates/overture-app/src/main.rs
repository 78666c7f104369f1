mod app;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = overture_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Overture crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("Please report this issue at: https://github.com/overture-app/overture/issues");
        eprintln!("------------------------\n");

        default_hook(info);
    }));
}

fn main() {
    // Install panic hook for crash reports
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("overture=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "overture=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Overture v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = match args.config {
        Some(ref path) => overture_config::toml_loader::load_from_path(std::path::Path::new(path)),
        None => overture_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        overture_config::OvertureConfig::default()
    });

    if args.print_config {
        println!("{}", overture_config::config_to_json(&config));
        return;
    }

    // Ensure platform directories exist
    if let Err(e) = overture_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::LauncherApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
