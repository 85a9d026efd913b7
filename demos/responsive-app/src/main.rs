//! Renders a page with one view per breakpoint at a series of window widths.
//!
//! Run with: cargo run -p responsive-app -- [--config <path>] [WIDTH...]
//!
//! Set `RUST_LOG=floem_responsive=trace` to see gates mount and unmount.

use std::path::PathBuf;

use floem_responsive::{
    ResponsiveError, config::ResponsiveConfig, headless::HeadlessHarness, prelude::*,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_WIDTHS: [u32; 3] = [1200, 800, 500];

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    widths: Vec<u32>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            match args.next() {
                Some(path) => parsed.config = Some(path.into()),
                None => tracing::warn!("--config needs a path; using the default breakpoints"),
            }
        } else {
            match arg.parse::<u32>() {
                Ok(width) => parsed.widths.push(width),
                Err(err) => tracing::warn!(%arg, %err, "ignoring argument that is not a width"),
            }
        }
    }
    if parsed.widths.is_empty() {
        parsed.widths.extend(DEFAULT_WIDTHS);
    }
    parsed
}

fn app_view() -> impl IntoView {
    stack((
        desktop(|| "Desktop View"),
        tablet(|| "Tablet View"),
        mobile(|| "Mobile View"),
    ))
}

fn main() -> Result<(), ResponsiveError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args(std::env::args().skip(1));
    let config = match &args.config {
        Some(path) => ResponsiveConfig::load(path)?,
        None => ResponsiveConfig::default(),
    };

    let mut harness = HeadlessHarness::new_with_config(&config, app_view);
    let breakpoints = harness.viewport().breakpoints();
    for breakpoint in Breakpoint::ALL {
        let widths = breakpoints.widths(breakpoint);
        println!("{breakpoint}: {}..={}px", widths.start(), widths.end());
    }

    for width in args.widths {
        harness.set_width(width);
        println!("\n{width}px ({})", harness.breakpoint());
        print!("{}", harness.render());
    }

    Ok(())
}
