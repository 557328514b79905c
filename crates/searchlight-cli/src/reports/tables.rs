use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use searchlight_core::score::{PriorityScore, TrendWindow};
use searchlight_core::scorer::percent_change;

pub fn scoreboard(scores: &[PriorityScore]) {
    if scores.is_empty() {
        println!("\n✅ No pages need attention.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Page").add_attribute(Attribute::Bold),
        Cell::new("Priority").fg(Color::Cyan),
        Cell::new("Current"),
        Cell::new("Previous"),
        Cell::new("Delta"),
        Cell::new("Reasons"),
    ]);

    for i in [0, 2, 3, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, s) in scores.iter().enumerate() {
        let priority_color = match s.priority {
            p if p >= 60 => Color::Red,
            p if p >= 30 => Color::Yellow,
            _ => Color::Green,
        };

        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&s.page_path).add_attribute(Attribute::Bold),
            Cell::new(s.priority).fg(priority_color),
            Cell::new(format!("{:.0}", s.metrics.current)),
            Cell::new(format!("{:.0}", s.metrics.previous)),
            Cell::new(format!("{:+.0}", s.metrics.delta)),
            Cell::new(s.reasons.join("\n")),
        ]);
    }

    println!("\n🔦 === UPDATE PRIORITIES ({} pages) === 🔦", scores.len());
    println!("{}", table);
}

pub fn trends(windows: &[TrendWindow], window_days: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new(format!("Last {}d", window_days)),
        Cell::new(format!("Prior {}d", window_days)),
        Cell::new("Change"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for w in windows {
        let pct = percent_change(w.current, w.previous);
        let color = if pct < 0.0 { Color::Red } else { Color::Green };

        table.add_row(vec![
            Cell::new(&w.date),
            Cell::new(format!("{:.0}", w.current)),
            Cell::new(format!("{:.0}", w.previous)),
            Cell::new(format!("{:+.1}%", pct)).fg(color),
        ]);
    }

    println!("{}", table);
}
