use chrono::NaiveDate;

use crate::error::StockError;
use crate::record::AnimalRecord;

/// Livestock-unit coefficient for an animal of the given age.
///
/// Age bands: young stock under one year 0.4, growing stock from one to
/// under two years 0.6, adults from two years 1.0 (boundary inclusive).
pub fn lu_coefficient(age_years: f64) -> f64 {
    if age_years < 1.0 {
        0.4
    } else if age_years < 2.0 {
        0.6
    } else {
        1.0
    }
}

/// Sum of per-animal livestock-unit coefficients over the collection.
///
/// Animals without a defined age are excluded outright rather than given a
/// default coefficient; assigning them 0.4 or 1.0 silently would bias the
/// stocking rate. With `include_inactive = false` (the default behavior)
/// only animals still present in the herd are counted.
pub fn total_livestock_units(
    records: &[AnimalRecord],
    as_of: NaiveDate,
    include_inactive: bool,
) -> f64 {
    records
        .iter()
        .filter(|r| include_inactive || r.is_active())
        .filter_map(|r| r.age_years(as_of))
        .map(lu_coefficient)
        .sum()
}

/// The herd under assessment: the record collection plus the farm area it
/// grazes. Constructed once per analysis run and discarded with it.
#[derive(Debug, Clone)]
pub struct Herd {
    records: Vec<AnimalRecord>,
    area_ha: f64,
}

impl Herd {
    /// `area_ha` must be strictly positive; a zero or negative area leaves
    /// the stocking rate undefined.
    pub fn new(records: Vec<AnimalRecord>, area_ha: f64) -> Result<Self, StockError> {
        if area_ha <= 0.0 {
            return Err(StockError::InvalidParameter {
                name: "area_ha",
                value: area_ha,
                expected: "> 0",
            });
        }
        Ok(Self { records, area_ha })
    }

    pub fn records(&self) -> &[AnimalRecord] {
        &self.records
    }

    pub fn area_ha(&self) -> f64 {
        self.area_ha
    }

    pub fn total_livestock_units(&self, as_of: NaiveDate, include_inactive: bool) -> f64 {
        total_livestock_units(&self.records, as_of, include_inactive)
    }
}
