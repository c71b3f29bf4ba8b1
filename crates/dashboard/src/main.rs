use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard::render;
use dashboard::shared::config;

/// Usage: dashboard [page] [--json]
///
/// Without arguments renders every page; with a page code renders one.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let page = args.iter().find(|a| !a.starts_with("--"));

    let output = match page {
        Some(page) => render::render_page(&config, page, json)?,
        None => render::render_all(&config, json)?,
    };
    println!("{output}");

    Ok(())
}
