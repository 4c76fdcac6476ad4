use chrono::NaiveDate;

/// Days per year used for every age conversion (herd-book convention).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Animal sex as recorded in the source table.
///
/// Values outside the recognized set are `Unknown`: such animals still count
/// toward herd totals but never toward a sex-ratio numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
    Unknown,
}

impl Sex {
    /// Lenient parse: `F`/`female` and `M`/`male`, case-insensitive.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "f" | "female" => Sex::Female,
            "m" | "male" => Sex::Male,
            _ => Sex::Unknown,
        }
    }
}

/// One validated row of the animal table.
///
/// Every field except the id may be missing. Missing data never fails a
/// computation; the per-indicator predicates below decide record by record
/// what each aggregate may use, and the analyzers share these predicates
/// rather than re-checking fields ad hoc.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalRecord {
    pub id: String,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub exit_date: Option<NaiveDate>,
    pub exit_reason: Option<String>,
    pub entry_weight_kg: Option<f64>,
    pub exit_weight_kg: Option<f64>,
    pub last_weight_date: Option<NaiveDate>,
}

impl AnimalRecord {
    /// An animal is active while it has no recorded exit date.
    pub fn is_active(&self) -> bool {
        self.exit_date.is_none()
    }

    /// Reference date for age computations: the exit date once the animal
    /// has left the herd, otherwise the supplied evaluation date.
    pub fn reference_date(&self, as_of: NaiveDate) -> NaiveDate {
        self.exit_date.unwrap_or(as_of)
    }

    /// Age in years at the reference date.
    ///
    /// Undefined when the birth date is missing or lies after the reference
    /// date; a birth in the future is a data error and is excluded, not
    /// clamped to zero.
    pub fn age_years(&self, as_of: NaiveDate) -> Option<f64> {
        let birth = self.birth_date?;
        let days = (self.reference_date(as_of) - birth).num_days();
        if days < 0 {
            return None;
        }
        Some(days as f64 / DAYS_PER_YEAR)
    }

    /// End of the weight-measurement period: the last weighing date when
    /// recorded, otherwise the exit date.
    pub fn measurement_end_date(&self) -> Option<NaiveDate> {
        self.last_weight_date.or(self.exit_date)
    }

    /// Days between birth and the end of the weight-measurement period.
    pub fn measurement_days(&self) -> Option<i64> {
        let birth = self.birth_date?;
        let end = self.measurement_end_date()?;
        Some((end - birth).num_days())
    }

    /// The single validity gate for weight metrics: both weights recorded,
    /// a non-negative gain, and a positive measurement period.
    pub fn is_weight_complete(&self) -> bool {
        let (Some(entry), Some(exit)) = (self.entry_weight_kg, self.exit_weight_kg) else {
            return false;
        };
        if exit < entry {
            return false;
        }
        matches!(self.measurement_days(), Some(days) if days > 0)
    }

    /// Average daily gain in kg/day over the measurement period.
    pub fn daily_gain_kg(&self) -> Option<f64> {
        if !self.is_weight_complete() {
            return None;
        }
        let gain = self.exit_weight_kg? - self.entry_weight_kg?;
        let days = self.measurement_days()? as f64;
        Some(gain / days)
    }

    /// Age in years at exit. Undefined for active animals and for records
    /// without a birth date or without a positive birth-to-exit span.
    pub fn age_at_exit_years(&self) -> Option<f64> {
        let birth = self.birth_date?;
        let exit = self.exit_date?;
        let days = (exit - birth).num_days();
        if days <= 0 {
            return None;
        }
        Some(days as f64 / DAYS_PER_YEAR)
    }
}
