use chrono::NaiveDate;

use crate::record::{AnimalRecord, Sex};

/// Population-level demographic indicators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HerdStructure {
    pub total_animals: usize,
    pub pct_female: f64,
    pub pct_male: f64,
    pub avg_age_years: f64,
}

/// Herd demographic summary: head count, sex split, and mean age.
///
/// Percentages are taken over the full collection, so unknown-sex animals
/// dilute both ratios. Animals without a defined age are left out of the
/// age average entirely rather than counted as zero. An empty collection
/// yields the neutral all-zero summary.
pub fn herd_structure(records: &[AnimalRecord], as_of: NaiveDate) -> HerdStructure {
    if records.is_empty() {
        return HerdStructure::default();
    }

    let total = records.len();
    let females = records.iter().filter(|r| r.sex == Sex::Female).count();
    let males = records.iter().filter(|r| r.sex == Sex::Male).count();

    let ages: Vec<f64> = records.iter().filter_map(|r| r.age_years(as_of)).collect();
    let avg_age_years = if ages.is_empty() {
        0.0
    } else {
        ages.iter().sum::<f64>() / ages.len() as f64
    };

    HerdStructure {
        total_animals: total,
        pct_female: females as f64 / total as f64 * 100.0,
        pct_male: males as f64 / total as f64 * 100.0,
        avg_age_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DAYS_PER_YEAR;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn animal(id: &str, sex: Sex, birth: Option<NaiveDate>, exit: Option<NaiveDate>) -> AnimalRecord {
        AnimalRecord {
            id: id.to_string(),
            sex,
            birth_date: birth,
            exit_date: exit,
            exit_reason: None,
            entry_weight_kg: None,
            exit_weight_kg: None,
            last_weight_date: None,
        }
    }

    #[test]
    fn basic_structure() {
        let records = vec![
            animal("PT000000001", Sex::Female, Some(date(2020, 1, 1)), None),
            animal(
                "PT000000002",
                Sex::Male,
                Some(date(2021, 1, 1)),
                Some(date(2023, 1, 1)),
            ),
            animal("PT000000003", Sex::Female, Some(date(2022, 1, 1)), None),
        ];
        let result = herd_structure(&records, date(2024, 1, 1));

        assert_eq!(result.total_animals, 3);
        assert!((result.pct_female - 200.0 / 3.0).abs() < 1e-9);
        assert!((result.pct_male - 100.0 / 3.0).abs() < 1e-9);

        // 1461, 730, and 730 days respectively.
        let expected = (1461.0 + 730.0 + 730.0) / 3.0 / DAYS_PER_YEAR;
        assert!((result.avg_age_years - expected).abs() < 1e-9);
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let result = herd_structure(&[], date(2024, 1, 1));
        assert_eq!(result, HerdStructure::default());
    }

    #[test]
    fn unknown_sex_counts_toward_denominator_only() {
        let records = vec![
            animal("PT000000001", Sex::Female, None, None),
            animal("PT000000002", Sex::Female, None, None),
            animal("PT000000003", Sex::Unknown, None, None),
            animal("PT000000004", Sex::Male, None, None),
        ];
        let result = herd_structure(&records, date(2024, 1, 1));

        assert_eq!(result.pct_female, 50.0);
        assert_eq!(result.pct_male, 25.0);
        assert!(result.pct_female + result.pct_male < 100.0);
    }

    #[test]
    fn percentages_sum_to_100_when_all_sexes_known() {
        let records = vec![
            animal("PT000000001", Sex::Female, None, None),
            animal("PT000000002", Sex::Male, None, None),
        ];
        let result = herd_structure(&records, date(2024, 1, 1));
        assert!((result.pct_female + result.pct_male - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_birth_dates_are_excluded_from_the_age_average() {
        let records = vec![
            animal("PT000000001", Sex::Female, Some(date(2022, 1, 1)), None),
            animal("PT000000002", Sex::Male, None, None),
        ];
        let result = herd_structure(&records, date(2024, 1, 1));

        assert_eq!(result.total_animals, 2);
        // Only the first animal has a defined age; the second must not pull
        // the average toward zero.
        assert!((result.avg_age_years - 730.0 / DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn no_defined_ages_gives_neutral_zero() {
        let records = vec![animal("PT000000001", Sex::Female, None, None)];
        let result = herd_structure(&records, date(2024, 1, 1));
        assert_eq!(result.avg_age_years, 0.0);
    }
}
