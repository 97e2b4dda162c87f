use bon::Builder;
use chrono::NaiveDate;
use itertools::Itertools;

use crate::{
    quantity::{cost::Cost, energy::KilowattHours},
    readings::MeterReading,
    tariff::Tariff,
};

/// One line of a statement: the charge for a single unit over one cycle.
#[derive(Builder)]
pub struct InvoiceLine {
    pub unit: String,
    pub cycle: NaiveDate,
    pub usage: KilowattHours,
    pub amount: Cost,
}

/// Per-unit charges with the building-level aggregate.
#[must_use]
pub struct Statement {
    pub lines: Vec<InvoiceLine>,
}

impl Statement {
    /// Bill every reading under the tariff. Lines come out sorted by unit.
    pub fn build(readings: &[MeterReading], tariff: &Tariff) -> Self {
        let lines = readings
            .iter()
            .map(|reading| {
                let usage = reading.usage();
                InvoiceLine::builder()
                    .unit(reading.unit.clone())
                    .cycle(reading.cycle)
                    .usage(usage)
                    .amount(tariff.charge(usage).round_to_cents())
                    .build()
            })
            .sorted_by(|lhs, rhs| lhs.unit.cmp(&rhs.unit))
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn total(&self) -> Cost {
        self.lines.iter().map(|line| line.amount).sum()
    }

    #[must_use]
    pub fn total_usage(&self) -> KilowattHours {
        self.lines.iter().map(|line| line.usage).sum()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::tariff::Band;

    fn flat_tariff() -> Tariff {
        let band = Band { from: 0.0.into(), to: None, unit_price: 0.25.into() };
        Tariff::try_new("flat".to_string(), vec![band]).unwrap()
    }

    fn reading(unit: &str, previous_index: f64, current_index: f64) -> MeterReading {
        MeterReading {
            building: "A".to_string(),
            unit: unit.to_string(),
            cycle: chrono::NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            previous_index: previous_index.into(),
            current_index: current_index.into(),
        }
    }

    #[test]
    fn test_statement_totals() {
        let readings = vec![reading("A-102", 100.0, 180.0), reading("A-101", 0.0, 120.0)];
        let statement = Statement::build(&readings, &flat_tariff());
        assert_eq!(statement.lines.len(), 2);
        assert_eq!(statement.lines[0].unit, "A-101");
        assert_abs_diff_eq!(statement.total_usage().0.0, 200.0);
        assert_abs_diff_eq!(statement.total().0.0, 50.0);
    }

    /// A rolled-back meter yields negative usage and must not produce a
    /// negative amount.
    #[test]
    fn test_rollback_is_billed_as_zero() {
        let readings = vec![reading("A-101", 120.0, 100.0)];
        let statement = Statement::build(&readings, &flat_tariff());
        assert_abs_diff_eq!(statement.lines[0].usage.0.0, -20.0);
        assert_eq!(statement.lines[0].amount, Cost::ZERO);
        assert_eq!(statement.total(), Cost::ZERO);
    }
}
