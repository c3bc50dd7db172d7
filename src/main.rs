use about_modal::{
    config::Config,
    error::{AppError, AppResult},
    initialize_logging,
    ui::components::modals::about::{AboutModal, AboutModalProps, CloseOutcome, DISPLAY_NAME},
    App,
};
use std::{cell::Cell, env, process, rc::Rc, time::Instant};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command line arguments first (before logging to avoid noise)
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        process::exit(0);
    }

    let config = Config::load()?;

    let demo_mode = args.iter().any(|a| a == "--demo")
        || env::var("ABOUT_MODAL_DEMO").is_ok()
        || env::var("TERM").unwrap_or_default().is_empty();

    let filter = format!("about_modal={}", config.app.log_level);
    if demo_mode {
        initialize_logging(&filter, None).map_err(|e| AppError::application(e.to_string()))?;
        info!("About Modal demo mode starting");
        run_demo_mode(&config)
    } else {
        let log_file = Config::log_dir().join("about-modal.log");
        initialize_logging(&filter, Some(&log_file))
            .map_err(|e| AppError::application(e.to_string()))?;
        info!("About Modal TUI starting");
        App::new(config)?.run().await
    }
}

/// Mount the dialog without a terminal and walk through the close protocol
fn run_demo_mode(config: &Config) -> AppResult<()> {
    let start_time = Instant::now();

    let allow_close = Rc::new(Cell::new(false));
    let guard_state = allow_close.clone();
    let mut modal = AboutModal::mount(
        AboutModalProps::new(config.about.close_icon_description.as_str())
            .open(true)
            .with_content(config.about.to_content())
            .on_close(move || guard_state.get()),
    );

    info!("{} mounted with {} sections", DISPLAY_NAME, modal.sections().len());
    for (index, section) in modal.sections().iter().enumerate() {
        info!("  {}. {:?}", index + 1, section.kind());
    }

    let root = serde_json::to_string_pretty(&modal.root_node())?;
    info!("Root node:\n{}", root);

    let label = modal.close_icon_description().to_string();
    match modal.click_control(&label) {
        Some(CloseOutcome::Vetoed) => info!("Close vetoed by guard; dialog still visible: {}", modal.is_visible()),
        other => warn!("Unexpected close result: {:?}", other),
    }

    allow_close.set(true);
    match modal.click_control(&label) {
        Some(CloseOutcome::Closed) => info!("Close allowed; dialog visible: {}", modal.is_visible()),
        other => warn!("Unexpected close result: {:?}", other),
    }

    modal.set_open(false);
    modal.set_open(true);
    info!("Reopened without remounting; visible: {}", modal.is_visible());

    info!("Demo finished in {:?}", start_time.elapsed());
    Ok(())
}

fn print_help() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS]", env!("CARGO_PKG_NAME"));
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help message and exit");
    println!("    -V, --version    Print version information and exit");
    println!("        --demo       Run in demo mode (non-interactive)");
    println!();
    println!("KEYS:");
    println!("    a                Open the About dialog");
    println!("    l                Lock/unlock closing (vetoes close attempts)");
    println!("    Esc              Close the dialog, or quit when it is hidden");
    println!("    q                Quit");
    println!();
    println!("ENVIRONMENT:");
    println!("    ABOUT_MODAL_DEMO          Set to run in demo mode");
    println!("    ABOUT_MODAL__SECTION__KEY Override a configuration value");
    println!("    RUST_LOG                  Set logging level (debug, info, warn, error)");
    println!();
    println!("CONFIGURATION:");
    println!("    ~/.config/about-modal/config.toml, overridden by ./about-modal.toml");
}
