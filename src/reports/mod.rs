use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyfit::corpus::CharFrequencies;
use keyfit::layouts::Layout;
use keyfit::scorer::LayoutScore;

/// Terminal form of a counted character. Whitespace and controls are
/// escaped so the ranking line and table cells stay readable.
fn display_char(ch: char) -> String {
    match ch {
        ' ' => "␣".to_string(),
        _ if ch.is_whitespace() || ch.is_control() => ch.escape_debug().to_string(),
        _ => ch.to_string(),
    }
}

pub fn print_frequency_report(freqs: &CharFrequencies) {
    let ranked = freqs.ranked();

    let order: String = ranked.iter().map(|&(ch, _)| display_char(ch)).collect();
    println!("\nOrder of frequency: {}", order);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Char").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Share"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (ch, count) in ranked {
        table.add_row(vec![
            Cell::new(display_char(ch)),
            Cell::new(count.to_string()),
            Cell::new(format!("{:.1}%", freqs.share(ch))),
        ]);
    }
    println!("{}", table);
}

pub fn print_score_report(results: &[(Layout, LayoutScore)]) {
    if results.is_empty() {
        return;
    }

    // min_by keeps the first of equal totals, so a tie highlights the
    // earliest catalog entry. Totals are finite, never NaN.
    let best = results
        .iter()
        .min_by(|a, b| a.1.total.partial_cmp(&b.1.total).unwrap())
        .unwrap();
    let (best_layout, best_total) = (best.0, best.1.total);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Delta"),
        Cell::new("Unscored"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for &(layout, score) in results {
        let name_cell = if layout == best_layout {
            Cell::new(layout.to_string())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(layout.to_string()).add_attribute(Attribute::Bold)
        };

        table.add_row(vec![
            name_cell,
            Cell::new(format!("{:.1}", score.total)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", score.total - best_total)),
            Cell::new(score.unscored.to_string()),
        ]);
    }
    println!("\n{}", table);
}
