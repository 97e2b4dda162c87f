use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{billing::Statement, quantity::energy::KilowattHours, tariff::Tariff};

pub fn build_statement_table(statement: &Statement) -> Table {
    let median_usage = statement
        .lines
        .iter()
        .map(|line| line.usage)
        .sorted()
        .nth(statement.lines.len() / 2)
        .unwrap_or(KilowattHours::ZERO);

    let mut table = new_table();
    table.set_header(vec!["Unit", "Cycle", "Usage", "Amount"]);
    for line in &statement.lines {
        table.add_row(vec![
            Cell::new(&line.unit),
            Cell::new(line.cycle.format("%Y-%m")).add_attribute(Attribute::Dim),
            Cell::new(line.usage).set_alignment(CellAlignment::Right).fg(
                if line.usage >= median_usage { Color::Red } else { Color::Green },
            ),
            Cell::new(line.amount).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(statement.total_usage())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(statement.total())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_tariff_table(tariff: &Tariff) -> Table {
    let mut table = new_table();
    table.set_header(vec!["From", "To", "Unit price"]);
    for band in tariff.bands() {
        table.add_row(vec![
            Cell::new(band.from).set_alignment(CellAlignment::Right),
            band.to
                .map_or_else(|| Cell::new("∞").add_attribute(Attribute::Dim), Cell::new)
                .set_alignment(CellAlignment::Right),
            Cell::new(band.unit_price).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}
