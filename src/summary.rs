use std::fmt;

use crate::productivity::ProductivityMetrics;
use crate::schema::indicator;
use crate::structure::HerdStructure;
use crate::sustainability::SustainabilityReport;

/// A single reported indicator value.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue {
    Count(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorValue::Count(n) => write!(f, "{n}"),
            IndicatorValue::Float(v) => write!(f, "{v}"),
            IndicatorValue::Text(s) => f.write_str(s),
        }
    }
}

/// One titled group of indicators, rendered as a console section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub indicators: Vec<(String, IndicatorValue)>,
}

/// The full per-run summary handed to the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub sections: Vec<Section>,
}

impl RunSummary {
    /// Flatten the three analyzer summaries into report order. Rounding
    /// matches the published report: percentages and ages to two decimals,
    /// daily gain to four, stocking rate to three.
    pub fn new(
        structure: &HerdStructure,
        productivity: &ProductivityMetrics,
        sustainability: &SustainabilityReport,
    ) -> Self {
        let sections = vec![
            Section {
                title: "Herd structure",
                indicators: vec![
                    (
                        indicator::TOTAL_ANIMALS.to_string(),
                        IndicatorValue::Count(structure.total_animals as u64),
                    ),
                    (
                        indicator::PCT_FEMALES.to_string(),
                        IndicatorValue::Float(rounded(structure.pct_female, 2)),
                    ),
                    (
                        indicator::PCT_MALES.to_string(),
                        IndicatorValue::Float(rounded(structure.pct_male, 2)),
                    ),
                    (
                        indicator::AVG_AGE_YEARS.to_string(),
                        IndicatorValue::Float(rounded(structure.avg_age_years, 2)),
                    ),
                ],
            },
            Section {
                title: "Productivity",
                indicators: vec![
                    (
                        indicator::AVG_DAILY_GAIN_KG_DAY.to_string(),
                        IndicatorValue::Float(rounded(productivity.avg_daily_gain_kg_day, 4)),
                    ),
                    (
                        indicator::MEAN_AGE_AT_EXIT_YEARS.to_string(),
                        IndicatorValue::Float(rounded(productivity.mean_age_at_exit_years, 2)),
                    ),
                    (
                        indicator::PCT_COMPLETE_WEIGHT_RECORDS.to_string(),
                        IndicatorValue::Float(rounded(productivity.pct_weight_complete, 2)),
                    ),
                ],
            },
            Section {
                title: "Sustainability",
                indicators: vec![
                    (
                        indicator::TOTAL_LU.to_string(),
                        IndicatorValue::Float(rounded(sustainability.total_lu, 2)),
                    ),
                    (
                        indicator::FARM_AREA_HA.to_string(),
                        IndicatorValue::Float(sustainability.area_ha),
                    ),
                    (
                        indicator::MAX_LU_PER_HA.to_string(),
                        IndicatorValue::Float(sustainability.max_lu_per_ha),
                    ),
                    (
                        indicator::STOCKING_RATE_LU_HA.to_string(),
                        IndicatorValue::Float(rounded(sustainability.stocking_rate_lu_ha, 3)),
                    ),
                    (
                        indicator::SUSTAINABILITY_STATUS.to_string(),
                        IndicatorValue::Text(sustainability.status.to_string()),
                    ),
                ],
            },
        ];
        Self { sections }
    }

    /// All indicators in report order, section boundaries flattened away.
    pub fn indicators(&self) -> impl Iterator<Item = &(String, IndicatorValue)> {
        self.sections.iter().flat_map(|s| s.indicators.iter())
    }
}

fn rounded(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}
