use anyhow::Result;
use falconscraper::{
    extract::{extract_column_names, extract_rows, page_title},
    fetch::{self, fetch_page},
    schema::FALCON_LAUNCHES,
    table::OUTPUT_FILE,
};
use reqwest::blocking::Client;
use scraper::Html;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) fetch the pinned page revision ───────────────────────────
    let client = Client::new();
    let page = fetch_page(&client, fetch::LAUNCH_PAGE_URL)?;

    // ─── 3) parse & locate the launch table ──────────────────────────
    let doc = Html::parse_document(&page.body);
    if let Some(title) = page_title(&doc) {
        info!(title = %title, "page parsed");
    }
    let table = FALCON_LAUNCHES.locate(&doc)?;

    // ─── 4) header names, informational only ─────────────────────────
    let columns = extract_column_names(table);
    info!(?columns, "extracted column names");

    // ─── 5) extract launch rows ──────────────────────────────────────
    let launches = extract_rows(table, &FALCON_LAUNCHES);
    info!(rows = launches.len(), "extracted launch records");

    // ─── 6) write CSV & show the first rows ──────────────────────────
    launches.write_csv(OUTPUT_FILE)?;
    info!("data successfully scraped and saved to {}", OUTPUT_FILE);
    println!("{}", launches.preview(5));

    Ok(())
}
