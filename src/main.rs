//! Tab item layout demo
//!
//! Measures one tab item per content configuration, lays them out as a tab bar and logs the
//! resulting frames. Run with `RUST_LOG=trace` to see every layout pass.

mod tab_bar;

use tab_bar::TabBar;
use tab_item::{ContentMeasurer, IconImage, IntrinsicSize, ItemMetrics, ItemView, Spacing};
use tab_item_text::Engine;

/// Items covering every content configuration
fn demo_items(metrics: ItemMetrics) -> Vec<ItemView> {
    let base = match ItemView::with_metrics(metrics) {
        Ok(item) => item,
        Err(err) => {
            log::warn!("invalid item metrics ({err}), using defaults");
            ItemView::new()
        }
    };

    let mut labelled = base.clone().with_icon(IconImage::new("search", 24.0, 24.0));
    labelled.set_accessibility_label(Some("Search the library".to_string()));

    vec![
        base.clone().with_title("Home"),
        base.clone()
            .with_title("Recently played")
            .with_icon(IconImage::new("clock", 24.0, 24.0)),
        labelled,
        base.clone()
            .with_title("A title long enough to need a second line in a tab item"),
        base,
    ]
}

fn log_item(index: usize, item: &ItemView, frame: tab_item::Rect) {
    log::info!(
        "  [{}] {:?} frame={:?} content={:?} label={:?}",
        index,
        item.configuration(),
        frame,
        item.content_frame(),
        item.accessibility_label().unwrap_or("<none>")
    );
    log::debug!(
        "      title={:?} icon={:?}",
        item.title_frame_in_bounds(),
        item.icon_frame_in_bounds()
    );
}

fn run(name: &str, metrics: ItemMetrics, measurer: &mut dyn ContentMeasurer) {
    let mut bar = TabBar::new(demo_items(metrics));
    let size = bar.layout(measurer);
    log::info!("✓ {} tab bar: {:.1} x {:.1}", name, size.width, size.height);

    for (index, (item, frame)) in bar.items.iter().zip(&bar.item_frames).enumerate() {
        log_item(index, item, *frame);
    }

    if let Some(indicator) = bar.indicator_rect() {
        log::info!("  indicator={:?}", indicator);
    }

    // A narrow proposal does not constrain the measured size
    if let Some(item) = bar.items.get(3) {
        let narrow = item.size_that_fits(measurer, IntrinsicSize::new(100.0, 48.0));
        log::debug!("  narrow proposal for item 3 -> {:?}", narrow);
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Measuring tab items...");

    let mut measurer = Engine::new_default();

    run("Standard", ItemMetrics::default(), &mut measurer);

    let compact = ItemMetrics::default()
        .with_width_range(72.0, 264.0)
        .with_text_only_insets(Spacing::trbl(6.0, 12.0, 6.0, 12.0));
    run("Compact", compact, &mut measurer);

    // Rejected: minimum above maximum, falls back to the standard geometry
    let broken = ItemMetrics::default().with_width_range(400.0, 120.0);
    run("Fallback", broken, &mut measurer);
}
