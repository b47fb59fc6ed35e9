use chrono::NaiveDate;

/// Clock port supplying the reference date ("today") for report thresholds
pub trait Clock {
    fn today(&self) -> NaiveDate;
}
