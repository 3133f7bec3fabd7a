//! HTML generation utilities for testing.
//!
//! Builders for box score pages with stat tables, totals rows, and player
//! rows, shared across extractor, aggregator, and end-to-end tests.

use scraper::Html;

/// Renders one table row from (data-stat, text) pairs, first cell as `th`.
pub fn row(cells: &[(&str, &str)]) -> String {
    let mut out = String::from("<tr>");
    for (i, (stat, text)) in cells.iter().enumerate() {
        let tag = if i == 0 { "th" } else { "td" };
        out.push_str(&format!(
            r#"<{tag} data-stat="{stat}">{text}</{tag}>"#,
            tag = tag,
            stat = stat,
            text = text
        ));
    }
    out.push_str("</tr>");
    out
}

/// Renders a totals row where every cell is a `td`, matching the footer
/// rows of real box score tables.
pub fn totals_row(cells: &[(&str, &str)]) -> String {
    let mut out = String::from("<tr>");
    for (stat, text) in cells {
        out.push_str(&format!(r#"<td data-stat="{}">{}</td>"#, stat, text));
    }
    out.push_str("</tr>");
    out
}

/// Renders a stat table with the given id, body rows, and footer rows.
pub fn stat_table(id: &str, body_rows: &[String], foot_rows: &[String]) -> String {
    format!(
        r#"<table id="{}"><tbody>{}</tbody><tfoot>{}</tfoot></table>"#,
        id,
        body_rows.join(""),
        foot_rows.join("")
    )
}

/// Renders a stat table without a tfoot section.
pub fn stat_table_without_tfoot(id: &str, body_rows: &[String]) -> String {
    format!(
        r#"<table id="{}"><tbody>{}</tbody></table>"#,
        id,
        body_rows.join("")
    )
}

/// Renders a stat table without a tbody section.
pub fn stat_table_without_tbody(id: &str, foot_rows: &[String]) -> String {
    format!(
        r#"<table id="{}"><thead><tr><th>x</th></tr></thead><tfoot>{}</tfoot></table>"#,
        id,
        foot_rows.join("")
    )
}

/// Wraps table markup in a page.
pub fn page(tables: &[String]) -> String {
    format!("<html><body>{}</body></html>", tables.join("\n"))
}

/// Parses page markup built from the given tables.
pub fn page_document(tables: &[String]) -> Html {
    Html::parse_document(&page(tables))
}

/// A pitching table whose totals row carries the canonical W=10 L=5 season.
pub fn pitching_table() -> String {
    stat_table(
        "team_pitching",
        &[row(&[("player", "Cole"), ("SO", "7"), ("earned_run_avg", "2.95")])],
        &[totals_row(&[
            ("SO", "55"),
            ("earned_run_avg", "3.21"),
            ("fip", "3.50"),
            ("W", "10"),
            ("L", "5"),
        ])],
    )
}

/// A batting table with two body rows and a complete totals row.
pub fn batting_table() -> String {
    stat_table(
        "team_batting",
        &[
            row(&[("player", "Judge"), ("H", "2"), ("HR", "1")]),
            row(&[("player", "Soto"), ("H", "1"), ("SB", "1")]),
        ],
        &[totals_row(&[
            ("R", "6"),
            ("H", "9"),
            ("HR", "2"),
            ("SB", "1"),
            ("batting_avg", ".267"),
            ("onbase_perc", ".340"),
            ("slugging_perc", ".450"),
        ])],
    )
}

/// A complete box score page with both team tables.
pub fn full_box_page() -> String {
    page(&[pitching_table(), batting_table()])
}

/// A page that only carries the batting table.
pub fn batting_only_page() -> String {
    page(&[batting_table()])
}
