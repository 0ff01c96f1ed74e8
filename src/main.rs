// Launch Countdown Application
// Main entry point

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;

use launch_countdown::models::countdown::{CountdownPanel, PanelId};
use launch_countdown::models::page::{PageElement, PageModel};
use launch_countdown::models::settings::PageConfig;
use launch_countdown::services::countdown::CountdownTicker;
use launch_countdown::services::page::{
    AnimationOptions, PageEnhancements, ScrollAnimator, ScrollEffects,
};
use launch_countdown::services::settings;

/// Stand-in for a real animation library: logs what one would receive.
struct LoggingAnimator;

impl ScrollAnimator for LoggingAnimator {
    fn init(&mut self, options: &AnimationOptions) {
        log::info!(
            "scroll animations ready ({} ms, once={})",
            options.duration_ms,
            options.once
        );
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Launch Countdown page engine");

    let config = load_configuration()?;
    let mut page = build_page(&config);

    let mut enhancements = PageEnhancements::new(
        ScrollEffects::from_config(&config),
        Some(Box::new(LoggingAnimator)),
    );
    enhancements.on_load(&mut page, 0.0);

    let mut ticker = CountdownTicker::with_period_ms(config.tick_period_ms);
    let mut result = ticker.discover(&mut page, Local::now());
    report_panels(&page);

    while !ticker.all_finished() {
        let sleep_for = result
            .next_due_in
            .unwrap_or(Duration::from_millis(config.tick_period_ms));
        thread::sleep(sleep_for);

        result = ticker.tick_at(&mut page, Local::now());
        report_panels(&page);
    }

    log::info!("all countdowns finished");
    Ok(())
}

/// Config comes from the first CLI argument, falling back to the platform
/// config directory, falling back to built-in defaults.
fn load_configuration() -> Result<PageConfig> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(settings::default_config_path);

    match path {
        Some(path) => settings::load_config(&path),
        None => Ok(PageConfig::default()),
    }
}

fn build_page(config: &PageConfig) -> PageModel {
    let mut page = PageModel::new();
    page.header = Some(PageElement::with_classes(&["fixed-top"]));
    page.preloader = Some(PageElement::with_classes(&["preloader"]));
    page.scroll_top = Some(PageElement::with_classes(&["scroll-top"]));
    page.nav_toggle = Some(PageElement::with_classes(&["mobile-nav-toggle", "bi-list"]));

    for (index, entry) in config.countdowns.iter().enumerate() {
        page.countdowns.push(CountdownPanel::new(
            PanelId(index as u64 + 1),
            &entry.label,
            &entry.target,
        ));
    }
    page
}

fn report_panels(page: &PageModel) {
    for panel in &page.countdowns {
        if let Some(values) = panel.slots.values() {
            log::debug!(
                "{}: {}d {:02}h {:02}m {:02}s",
                panel.label,
                values.days,
                values.hours,
                values.minutes,
                values.seconds
            );
        }
    }
}
