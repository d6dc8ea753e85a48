use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use scrivepad::checker::DrawQuality;
use scrivepad::session::QualitySummary;

pub fn print_quality_report(results: &[(String, QualitySummary)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Trace").add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Good").fg(Color::Green),
        Cell::new("Subopt").fg(Color::Yellow),
        Cell::new("Bad").fg(Color::Red),
        Cell::new("Good %").add_attribute(Attribute::Bold),
        Cell::new("Complete"),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, s) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(s.total()),
            Cell::new(s.good).fg(Color::Green),
            Cell::new(s.suboptimal).fg(Color::Yellow),
            Cell::new(s.bad).fg(Color::Red),
            Cell::new(format!("{:.1}", s.good_share() * 100.0)),
            Cell::new(if s.complete { "yes" } else { "no" }),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_stroke_breakdown(name: &str, verdicts: &[Vec<DrawQuality>]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("Strokes of {}", name)).add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Good").fg(Color::Green),
        Cell::new("Subopt").fg(Color::Yellow),
        Cell::new("Bad").fg(Color::Red),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (idx, stroke) in verdicts.iter().enumerate() {
        let good = stroke.iter().filter(|v| **v == DrawQuality::Good).count();
        let subopt = stroke
            .iter()
            .filter(|v| **v == DrawQuality::Suboptimal)
            .count();
        let bad = stroke.iter().filter(|v| **v == DrawQuality::Bad).count();
        table.add_row(vec![
            Cell::new(format!("#{}", idx + 1)),
            Cell::new(stroke.len()),
            Cell::new(good).fg(Color::Green),
            Cell::new(subopt).fg(Color::Yellow),
            Cell::new(bad).fg(Color::Red),
        ]);
    }
    println!("\n{}", table);
}
