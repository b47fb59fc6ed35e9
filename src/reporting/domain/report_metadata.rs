use chrono::NaiveDate;

/// ReportMetadata value object describing one report run
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    run_id: String,
    reference_date: NaiveDate,
}

impl ReportMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        run_id: String,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
            reference_date,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// The "today" every threshold of the run was computed from
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "device-reports".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:12345".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "device-reports");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(metadata.run_id(), "urn:uuid:12345");
        assert_eq!(metadata.reference_date().to_string(), "2024-01-01");
    }
}
