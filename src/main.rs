//! segbar-preview — lay out a sectioned progress bar from a TOML file and
//! print the resulting frames as JSON.
//!
//! Run with:  `RUST_LOG=debug segbar-preview [path/to/segbar.toml]`

use anyhow::{Context, Result};
use segbar_config::{default_path, load as load_config, ProgressMode, SegbarConfig};
use segbar_progress::ProgressValue;
use segbar_theme::Theme;
use segbar_widget::{BarFrame, Section, SegmentedBar};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("segbar-preview v{} starting", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_path);
    let config = load_config(&path)?;

    let frame = match config.progress.mode {
        ProgressMode::Fractional => preview(SegmentedBar::fractional(), &config, |_| None),
        ProgressMode::Steps => preview(
            SegmentedBar::stepped(config.progress.total_steps),
            &config,
            |i| config.sections[i].max_steps,
        ),
    };

    let json = serde_json::to_string_pretty(&frame).context("serializing layout")?;
    println!("{json}");
    Ok(())
}

/// Load the configured sections into `bar`, apply their initial progress and
/// run one layout pass at the configured size.
fn preview<V: ProgressValue>(
    mut bar: SegmentedBar<V>,
    config: &SegbarConfig,
    limit: impl Fn(usize) -> Option<V>,
) -> BarFrame {
    let theme = Theme::from_config(&config.theme);
    let sections: Vec<Section> = config
        .sections
        .iter()
        .enumerate()
        .map(|(i, cfg)| Section::from_config(i, cfg, &theme))
        .collect();

    bar.reload_data(&sections);
    for (i, cfg) in config.sections.iter().enumerate() {
        bar.set_section_limit(i, limit(i));
        bar.set_fraction(i, cfg.progress);
    }

    let geometry = config.geometry.to_geometry(config.global.bounds());
    let frame = bar.layout(&geometry);

    tracing::info!(
        sections = frame.sections.len(),
        filled = frame.layout.filled_width(),
        track = frame.layout.track_frame.width,
        "layout computed"
    );
    frame
}
