//! Baseball box score exporter.
//!
//! Reads a CSV of box score page URLs, fetches each page, extracts team
//! totals (and optionally per-player rows) from the pitching and batting
//! tables, and writes the result to a spreadsheet.
//!
//! # Pipeline
//!
//! 1. Load the URL list from `SCRAPER_URLS_FILE`
//! 2. Fetch and extract each page in order
//! 3. Flatten the accumulated rows into tables
//! 4. Write the tables to the configured sink (local xlsx or Google Sheets)
//!
//! A failed page is logged and skipped; a failed export ends the run with a
//! non-zero exit code.

mod aggregator;
mod bref;
mod config;
mod error;
mod export;
mod model;
mod urls;

#[cfg(test)]
mod test_utils;

use tokio::time::Duration;

use crate::aggregator::ScrapeOutput;
use crate::config::SinkKind;
use crate::export::{NamedTable, RowSink, SheetsSink, XlsxSink};

#[tokio::main]
async fn main() {
    let app_config = config::load_app_config().expect("Failed to load AppConfig");
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let scraper_config = config::load_scraper_config().expect("Failed to load ScraperConfig");
    let export_config = config::load_export_config().expect("Failed to load ExportConfig");
    let sink_kind = export_config
        .sink_kind()
        .expect("Failed to resolve export sink");

    let url_list = match urls::load_url_list(&scraper_config.urls_file) {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Failed to load URL list: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        count = url_list.len(),
        file = %scraper_config.urls_file,
        "Loaded URL list"
    );

    let client = bref::Client::new();
    let output = aggregator::run(
        &client,
        &url_list,
        scraper_config.include_players,
        Duration::from_millis(scraper_config.fetch_delay_ms),
    )
    .await;
    tracing::info!(
        team_rows = output.team_rows.len(),
        player_rows = output.player_rows.len(),
        "Scrape finished"
    );

    let result = match sink_kind {
        SinkKind::Xlsx => {
            let tables = named_tables(
                &output,
                scraper_config.include_players,
                "Team Stats",
                "Player Stats",
            );
            let sink = XlsxSink::new(&export_config.xlsx_path);
            sink.write(&tables).await
        }
        SinkKind::Sheets => {
            let sheets_config = config::load_sheets_config().expect("Failed to load SheetsConfig");
            let tables = named_tables(
                &output,
                scraper_config.include_players,
                &sheets_config.team_sheet,
                &sheets_config.player_sheet,
            );
            let sink = SheetsSink::new(&sheets_config).expect("Failed to set up Sheets sink");
            sink.write(&tables).await
        }
    };

    match result {
        Ok(_) => tracing::info!("Export complete"),
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Flattens the scrape output into the tables the sink receives.
///
/// The team table is always present; the player table is added only when
/// player extraction ran, so a team-only run never creates an empty sheet.
fn named_tables(
    output: &ScrapeOutput,
    include_players: bool,
    team_name: &str,
    player_name: &str,
) -> Vec<NamedTable> {
    let mut tables = vec![NamedTable::new(team_name, export::team_table(&output.team_rows))];
    if include_players {
        tables.push(NamedTable::new(
            player_name,
            export::player_table(&output.player_rows),
        ));
    }
    tables
}
