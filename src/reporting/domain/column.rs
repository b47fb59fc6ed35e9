/// Display column of a device report table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Venture,
    Position,
    LastSeen,
    Remarks,
    Barcode,
    Cost,
    Price,
    Support,
    Purchase,
    Deprecation,
    DeprecationDate,
}

impl Column {
    /// Stable identifier used by renderers and in JSON output
    pub fn key(&self) -> &'static str {
        match self {
            Column::Venture => "venture",
            Column::Position => "position",
            Column::LastSeen => "lastseen",
            Column::Remarks => "remarks",
            Column::Barcode => "barcode",
            Column::Cost => "cost",
            Column::Price => "price",
            Column::Support => "support",
            Column::Purchase => "purchase",
            Column::Deprecation => "deprecation",
            Column::DeprecationDate => "deprecation_date",
        }
    }

    /// Table header text
    pub fn header(&self) -> &'static str {
        match self {
            Column::Venture => "Venture",
            Column::Position => "Position",
            Column::LastSeen => "Last seen",
            Column::Remarks => "Remarks",
            Column::Barcode => "Barcode",
            Column::Cost => "Cost",
            Column::Price => "Price",
            Column::Support => "Support",
            Column::Purchase => "Purchase",
            Column::Deprecation => "Deprecation",
            Column::DeprecationDate => "Deprecation date",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_keys() {
        assert_eq!(Column::LastSeen.key(), "lastseen");
        assert_eq!(Column::DeprecationDate.key(), "deprecation_date");
        assert_eq!(Column::Venture.to_string(), "venture");
    }

    #[test]
    fn test_column_headers() {
        assert_eq!(Column::LastSeen.header(), "Last seen");
        assert_eq!(Column::Support.header(), "Support");
    }
}
