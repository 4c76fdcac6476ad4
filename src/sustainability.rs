use std::fmt;

use crate::error::StockError;

/// Stocking-rate limits for the assessment.
///
/// `max_lu_per_ha` is the highest rate considered sustainable for the farm;
/// `risk_band_factor` stretches it into the warning band. Both are run
/// configuration, never baked into the evaluation itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockingThresholds {
    pub max_lu_per_ha: f64,
    pub risk_band_factor: f64,
}

impl Default for StockingThresholds {
    fn default() -> Self {
        Self {
            max_lu_per_ha: 1.4,
            risk_band_factor: 1.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SustainabilityStatus {
    Ok,
    AtRisk,
    Critical,
}

impl SustainabilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SustainabilityStatus::Ok => "OK",
            SustainabilityStatus::AtRisk => "AT RISK",
            SustainabilityStatus::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for SustainabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of the stocking-rate assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct SustainabilityReport {
    pub total_lu: f64,
    pub area_ha: f64,
    pub max_lu_per_ha: f64,
    pub stocking_rate_lu_ha: f64,
    pub status: SustainabilityStatus,
}

/// Grazing-pressure assessment: stocking rate against the configured limits.
///
/// Out-of-domain configuration is rejected before any computation. Band
/// boundaries are inclusive on the lower-risk side: a rate exactly at the
/// maximum is still `OK`, and a rate exactly at the band edge is `AT RISK`.
pub fn evaluate_sustainability(
    total_lu: f64,
    area_ha: f64,
    thresholds: &StockingThresholds,
) -> Result<SustainabilityReport, StockError> {
    if area_ha <= 0.0 {
        return Err(StockError::InvalidParameter {
            name: "area_ha",
            value: area_ha,
            expected: "> 0",
        });
    }
    if thresholds.max_lu_per_ha <= 0.0 {
        return Err(StockError::InvalidParameter {
            name: "max_lu_per_ha",
            value: thresholds.max_lu_per_ha,
            expected: "> 0",
        });
    }
    if thresholds.risk_band_factor < 1.0 {
        return Err(StockError::InvalidParameter {
            name: "risk_band_factor",
            value: thresholds.risk_band_factor,
            expected: ">= 1",
        });
    }

    let stocking_rate = total_lu / area_ha;
    let status = if stocking_rate <= thresholds.max_lu_per_ha {
        SustainabilityStatus::Ok
    } else if stocking_rate <= thresholds.risk_band_factor * thresholds.max_lu_per_ha {
        SustainabilityStatus::AtRisk
    } else {
        SustainabilityStatus::Critical
    };

    Ok(SustainabilityReport {
        total_lu,
        area_ha,
        max_lu_per_ha: thresholds.max_lu_per_ha,
        stocking_rate_lu_ha: stocking_rate,
        status,
    })
}
