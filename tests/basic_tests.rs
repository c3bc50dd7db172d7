//! Basic functionality tests for the ambient components

use std::time::{Duration, Instant};

/// Test basic error handling
#[test]
fn test_error_handling() {
    use about_modal::error::{AppError, AppResult, ErrorSeverity};

    let error = AppError::application("test error");
    assert!(error.is_recoverable());
    assert_eq!(error.severity(), ErrorSeverity::Low);

    let result: AppResult<()> = Err(error);
    assert!(result.is_err());

    println!("✓ Error handling works correctly");
}

/// Test configuration defaults
#[test]
fn test_config_defaults() {
    use about_modal::config::Config;

    let config = Config::default();
    assert_eq!(config.app.name, "About Modal");
    assert_eq!(config.ui.theme, "default");
    assert!(config.about.open_on_start);
    assert_eq!(
        config.about.version_number.as_deref(),
        Some(concat!("Version ", env!("CARGO_PKG_VERSION")))
    );

    println!("✓ Configuration defaults are correct");
}

/// Test theme loading
#[test]
fn test_theme_loading() {
    use about_modal::ui::theme::Theme;

    let start_time = Instant::now();
    let theme = Theme::load("default").expect("Failed to load default theme");
    let load_duration = start_time.elapsed();

    assert_eq!(theme.name, "default");
    assert!(load_duration < Duration::from_millis(10));

    println!("✓ Theme loaded in {:?}", load_duration);
}

/// The default configuration composes a usable dialog
#[test]
fn test_default_config_content() {
    use about_modal::{
        config::Config,
        ui::components::modals::about::{compose, SectionKind},
    };

    let content = Config::default().about.to_content();
    let kinds: Vec<SectionKind> = compose(&content).iter().map(|s| s.kind()).collect();

    assert_eq!(kinds.first(), Some(&SectionKind::Title));
    assert!(kinds.contains(&SectionKind::Body));
    assert!(kinds.contains(&SectionKind::Version));

    println!("✓ Default content composes {} sections", kinds.len());
}

/// Node snapshots serialize for tooling
#[test]
fn test_root_node_serializes() {
    use about_modal::ui::components::modals::about::{AboutModal, AboutModalProps};

    let modal = AboutModal::mount(AboutModalProps::new("Close").open(true).title("Product"));
    let json = serde_json::to_value(modal.root_node()).expect("serializable node");

    assert_eq!(json["role"], "presentation");
    assert_eq!(json["tag"], "div");
    assert!(json["classes"]
        .as_array()
        .map_or(false, |classes| classes.iter().any(|c| c == "is-visible")));

    println!("✓ Root node serializes to JSON");
}
