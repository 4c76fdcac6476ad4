use crate::record::AnimalRecord;

/// Growth and performance indicators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductivityMetrics {
    pub avg_daily_gain_kg_day: f64,
    pub mean_age_at_exit_years: f64,
    pub pct_weight_complete: f64,
}

/// Productivity summary over the record collection.
///
/// The three sub-indicators filter independently: a record without weight
/// data still contributes to the exit-age mean, and an active animal with
/// full weight data still contributes to the gain average. Only
/// weight-complete records (both weights, non-negative gain, positive
/// measurement period) enter the gain average; when none qualify the average
/// is the neutral zero while the completeness percentage reports the true 0%.
pub fn productivity_metrics(records: &[AnimalRecord]) -> ProductivityMetrics {
    if records.is_empty() {
        return ProductivityMetrics::default();
    }

    let gains: Vec<f64> = records.iter().filter_map(|r| r.daily_gain_kg()).collect();
    let avg_daily_gain_kg_day = if gains.is_empty() {
        0.0
    } else {
        gains.iter().sum::<f64>() / gains.len() as f64
    };

    let exit_ages: Vec<f64> = records.iter().filter_map(|r| r.age_at_exit_years()).collect();
    let mean_age_at_exit_years = if exit_ages.is_empty() {
        0.0
    } else {
        exit_ages.iter().sum::<f64>() / exit_ages.len() as f64
    };

    let complete = records.iter().filter(|r| r.is_weight_complete()).count();

    ProductivityMetrics {
        avg_daily_gain_kg_day,
        mean_age_at_exit_years,
        pct_weight_complete: complete as f64 / records.len() as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Sex, DAYS_PER_YEAR};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn animal(id: &str) -> AnimalRecord {
        AnimalRecord {
            id: id.to_string(),
            sex: Sex::Female,
            birth_date: None,
            exit_date: None,
            exit_reason: None,
            entry_weight_kg: None,
            exit_weight_kg: None,
            last_weight_date: None,
        }
    }

    #[test]
    fn basic_metrics() {
        let mut grower = animal("PT000000001");
        grower.birth_date = Some(date(2020, 1, 1));
        grower.entry_weight_kg = Some(35.0);
        grower.exit_weight_kg = Some(350.0);
        grower.last_weight_date = Some(date(2022, 12, 31));

        let mut exited = animal("PT000000002");
        exited.birth_date = Some(date(2021, 1, 1));
        exited.exit_date = Some(date(2023, 1, 1));
        exited.entry_weight_kg = Some(40.0);
        exited.exit_weight_kg = Some(420.0);

        let mut incomplete = animal("PT000000003");
        incomplete.birth_date = Some(date(2022, 1, 1));
        incomplete.entry_weight_kg = Some(38.0);

        let result = productivity_metrics(&[grower, exited, incomplete]);

        // grower: 315 kg over 1095 days; exited: 380 kg over 730 days.
        let expected_gain = (315.0 / 1095.0 + 380.0 / 730.0) / 2.0;
        assert!((result.avg_daily_gain_kg_day - expected_gain).abs() < 1e-9);

        assert!((result.mean_age_at_exit_years - 730.0 / DAYS_PER_YEAR).abs() < 1e-9);
        assert!((result.pct_weight_complete - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let result = productivity_metrics(&[]);
        assert_eq!(result, ProductivityMetrics::default());
    }

    #[test]
    fn no_weight_complete_records_gives_neutral_gain_and_true_zero_pct() {
        let mut r = animal("PT000000001");
        r.birth_date = Some(date(2020, 1, 1));
        r.exit_date = Some(date(2021, 1, 1));

        let result = productivity_metrics(&[r]);
        assert_eq!(result.avg_daily_gain_kg_day, 0.0);
        assert_eq!(result.pct_weight_complete, 0.0);
        // The exit age is still computed; the weight filter must not leak
        // into the exit-age indicator.
        assert!(result.mean_age_at_exit_years > 0.0);
    }

    #[test]
    fn negative_gain_records_are_excluded_everywhere_weights_matter() {
        let mut shrinker = animal("PT000000001");
        shrinker.birth_date = Some(date(2020, 1, 1));
        shrinker.last_weight_date = Some(date(2021, 1, 1));
        shrinker.entry_weight_kg = Some(40.0);
        shrinker.exit_weight_kg = Some(30.0);

        let result = productivity_metrics(&[shrinker]);
        assert_eq!(result.avg_daily_gain_kg_day, 0.0);
        assert_eq!(result.pct_weight_complete, 0.0);
    }

    #[test]
    fn weight_data_and_exit_age_filter_independently() {
        // Complete weights but still active: contributes gain, not exit age.
        let mut active = animal("PT000000001");
        active.birth_date = Some(date(2022, 1, 1));
        active.last_weight_date = Some(date(2023, 1, 1));
        active.entry_weight_kg = Some(30.0);
        active.exit_weight_kg = Some(200.0);

        // Exited without weights: contributes exit age, not gain.
        let mut exited = animal("PT000000002");
        exited.birth_date = Some(date(2020, 1, 1));
        exited.exit_date = Some(date(2022, 1, 1));

        let result = productivity_metrics(&[active, exited]);

        assert!((result.avg_daily_gain_kg_day - 170.0 / 365.0).abs() < 1e-9);
        assert!((result.mean_age_at_exit_years - 731.0 / DAYS_PER_YEAR).abs() < 1e-9);
        assert_eq!(result.pct_weight_complete, 50.0);
    }
}
