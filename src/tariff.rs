use std::{fs, path::Path};

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

/// One volume band of a tiered tariff.
///
/// Usage between `from` and `to` is charged at `unit_price`. The top band
/// leaves `to` unset and runs open-ended.
#[derive(Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Band {
    pub from: KilowattHours,
    pub to: Option<KilowattHours>,
    pub unit_price: KilowattHourRate,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct TariffFile {
    name: String,

    #[serde(rename = "band")]
    bands: Vec<Band>,
}

/// Validated tiered tariff: bands sorted by `from`, contiguous, with a single
/// open-ended top band.
#[must_use]
pub struct Tariff {
    pub name: String,
    bands: Vec<Band>,
}

impl Tariff {
    /// Sort and validate the bands.
    ///
    /// A malformed schedule is a configuration defect, so it is rejected here,
    /// at load time, rather than surfacing as a wrong total on the first bill
    /// run.
    pub fn try_new(name: String, bands: Vec<Band>) -> Result<Self> {
        ensure!(!bands.is_empty(), "tariff `{name}` has no bands");
        let bands = bands.into_iter().sorted_by_key(|band| band.from).collect_vec();
        for band in &bands {
            ensure!(
                band.from.is_finite() && band.from >= KilowattHours::ZERO,
                "tariff `{name}`: band starts at {:?}",
                band.from,
            );
            ensure!(
                band.unit_price.is_finite() && band.unit_price >= KilowattHourRate::ZERO,
                "tariff `{name}`: band at {:?} has unit price {:?}",
                band.from,
                band.unit_price,
            );
            if let Some(to) = band.to {
                ensure!(
                    to.is_finite() && to > band.from,
                    "tariff `{name}`: band {:?}..{to:?} is empty or unordered",
                    band.from,
                );
            }
        }
        for (band, next) in bands.iter().tuple_windows() {
            let to = band.to.with_context(|| {
                format!("tariff `{name}`: only the last band may be open-ended")
            })?;
            ensure!(
                to == next.from,
                "tariff `{name}`: bands are not contiguous at {to:?} vs {:?}",
                next.from,
            );
        }
        ensure!(
            bands.last().is_some_and(|band| band.to.is_none()),
            "tariff `{name}`: the top band must be open-ended",
        );
        Ok(Self { name, bands })
    }

    #[instrument(skip_all)]
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read tariff file `{}`", path.display()))?;
        let file: TariffFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse tariff file `{}`", path.display()))?;
        let this = Self::try_new(file.name, file.bands)?;
        debug!(name = this.name.as_str(), n_bands = this.bands.len(), "loaded the tariff");
        Ok(this)
    }

    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Charge for the given usage under marginal tiered pricing: each band
    /// prices only the slice of usage that falls inside it.
    ///
    /// Zero and negative usage (meter not advanced, or rolled back) is free.
    #[must_use]
    pub fn charge(&self, usage: KilowattHours) -> Cost {
        assert!(usage.is_finite());
        let mut total = Cost::ZERO;
        for band in &self.bands {
            if usage <= band.from {
                break;
            }
            let slice_end = band.to.map_or(usage, |to| to.min(usage));
            total += (slice_end - band.from) * band.unit_price;
        }
        total
    }
}
