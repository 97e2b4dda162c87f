use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{prelude::*, quantity::energy::KilowattHours};

/// One meter reading row from the administration backend's export.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MeterReading {
    pub building: String,
    pub unit: String,

    /// First day of the billing cycle the reading closes.
    pub cycle: NaiveDate,

    pub previous_index: KilowattHours,
    pub current_index: KilowattHours,
}

impl MeterReading {
    /// Consumption over the cycle. Negative when the meter was rolled back.
    #[must_use]
    pub fn usage(&self) -> KilowattHours {
        self.current_index - self.previous_index
    }
}

#[instrument(skip_all)]
pub fn load_readings(path: &Path) -> Result<Vec<MeterReading>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read the readings export `{}`", path.display()))?;
    let readings: Vec<MeterReading> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse the readings export `{}`", path.display()))?;
    validate(&readings)?;
    debug!(len = readings.len(), "loaded the readings export");
    Ok(readings)
}

/// The derived usage is checked too: two huge indices of opposite sign are
/// each finite while their difference overflows.
fn validate(readings: &[MeterReading]) -> Result {
    for reading in readings {
        ensure!(
            reading.previous_index.is_finite()
                && reading.current_index.is_finite()
                && reading.usage().is_finite(),
            "non-finite meter index for unit `{}` in cycle {}",
            reading.unit,
            reading.cycle,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_parse_readings_export() -> Result {
        // language=JSON
        const EXPORT: &str = r#"
            [
                {
                    "building": "A",
                    "unit": "A-101",
                    "cycle": "2026-08-01",
                    "previous-index": 1204.0,
                    "current-index": 1324.0
                }
            ]
        "#;
        let readings: Vec<MeterReading> = serde_json::from_str(EXPORT)?;
        assert_eq!(readings.len(), 1);
        let reading = &readings[0];
        assert_eq!(reading.unit, "A-101");
        assert_eq!(reading.cycle, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_abs_diff_eq!(reading.usage().0.0, 120.0);
        Ok(())
    }

    #[test]
    fn test_overflowing_usage_is_rejected() {
        let reading = MeterReading {
            building: "A".to_string(),
            unit: "A-101".to_string(),
            cycle: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            previous_index: (-f64::MAX).into(),
            current_index: f64::MAX.into(),
        };
        assert!(reading.previous_index.is_finite() && reading.current_index.is_finite());
        assert!(validate(&[reading]).is_err());
    }
}
