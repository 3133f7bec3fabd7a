//! The run loop: fetch, parse, extract, accumulate.
//!
//! URLs are processed strictly one after another; a page is fully fetched
//! and extracted before the next fetch starts. A failed fetch is logged and
//! treated exactly like a page with no matching tables, so one bad URL never
//! aborts the batch.

use scraper::Html;
use tokio::time::{sleep, Duration};

use crate::bref::{
    self, Client, BATTING_KEYS, PITCHING_KEYS, TEAM_BATTING_TABLE, TEAM_PITCHING_TABLE,
};
use crate::model::{apply_win_loss_percentages, PlayerRow, StatType, TeamRow};

/// Everything one run accumulated, in input URL order.
#[derive(Debug, Default)]
pub struct ScrapeOutput {
    pub team_rows: Vec<TeamRow>,
    pub player_rows: Vec<PlayerRow>,
}

/// Scrapes every URL in order and merges the per-URL results.
///
/// `fetch_delay` is a fixed pause inserted after each fetch; zero disables
/// it. With `include_players` set, player rows are gathered from both stat
/// tables in addition to the team totals.
pub async fn run(
    client: &Client,
    urls: &[String],
    include_players: bool,
    fetch_delay: Duration,
) -> ScrapeOutput {
    let mut output = ScrapeOutput::default();

    for url in urls {
        let body = match client.get(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url, "fetch failed, skipping URL: {}", e);
                continue;
            }
        };
        if !fetch_delay.is_zero() {
            sleep(fetch_delay).await;
        }

        let document = Html::parse_document(&body);
        let _span = tracing::info_span!("extract", url = %url).entered();
        let (team_row, mut player_rows) = extract_page(&document, url, include_players);

        if let Some(row) = team_row {
            output.team_rows.push(row);
        }
        output.player_rows.append(&mut player_rows);
        tracing::info!(url, "page processed");
    }

    output
}

/// Extracts one parsed page into at most one team row and any player rows.
///
/// The team row is emitted only when BOTH the pitching and batting totals
/// produced a non-empty record; a page with only one side present
/// contributes nothing to the team table. That all-or-nothing gate is
/// deliberate policy, not an accident of empty-map checks. Player rows are
/// gathered independently of the gate.
fn extract_page(
    document: &Html,
    url: &str,
    include_players: bool,
) -> (Option<TeamRow>, Vec<PlayerRow>) {
    let mut pitching = bref::team_totals(document, TEAM_PITCHING_TABLE, PITCHING_KEYS);
    if !pitching.is_empty() {
        if let Err(e) = apply_win_loss_percentages(&mut pitching) {
            tracing::warn!(url, "win/loss percentages skipped: {}", e);
        }
    }
    let batting = bref::team_totals(document, TEAM_BATTING_TABLE, BATTING_KEYS);

    let team_row = if !pitching.is_empty() && !batting.is_empty() {
        let mut stats = pitching;
        stats.extend(batting);
        Some(TeamRow {
            url: url.to_string(),
            stats,
        })
    } else {
        tracing::warn!(url, "incomplete team totals, dropping team row");
        None
    };

    let mut player_rows = Vec::new();
    if include_players {
        for (table_id, stat_type) in [
            (TEAM_BATTING_TABLE, StatType::Batting),
            (TEAM_PITCHING_TABLE, StatType::Pitching),
        ] {
            for stats in bref::player_rows(document, table_id) {
                player_rows.push(PlayerRow {
                    url: url.to_string(),
                    stat_type,
                    stats,
                });
            }
        }
    }

    (team_row, player_rows)
}
