use crate::reporting::domain::Device;
use std::cmp::Ordering;

/// Columns a report listing may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Venture,
    Position,
    Barcode,
    Remarks,
    Price,
    Cost,
    LastSeen,
    Purchase,
    Support,
    DeprecationDate,
}

impl SortColumn {
    /// Every sortable column, in the order shown in help texts
    pub const ALL: [SortColumn; 11] = [
        SortColumn::Name,
        SortColumn::Venture,
        SortColumn::Position,
        SortColumn::Barcode,
        SortColumn::Remarks,
        SortColumn::Price,
        SortColumn::Cost,
        SortColumn::LastSeen,
        SortColumn::Purchase,
        SortColumn::Support,
        SortColumn::DeprecationDate,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Venture => "venture",
            SortColumn::Position => "position",
            SortColumn::Barcode => "barcode",
            SortColumn::Remarks => "remarks",
            SortColumn::Price => "price",
            SortColumn::Cost => "cost",
            SortColumn::LastSeen => "lastseen",
            SortColumn::Purchase => "purchase",
            SortColumn::Support => "support",
            SortColumn::DeprecationDate => "deprecation_date",
        }
    }

    fn compare(&self, a: &Device, b: &Device) -> Ordering {
        match self {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Venture => a.venture.cmp(&b.venture),
            SortColumn::Position => a.position.cmp(&b.position),
            SortColumn::Barcode => a.barcode.cmp(&b.barcode),
            SortColumn::Remarks => a.remarks.cmp(&b.remarks),
            SortColumn::Price => compare_amounts(a.price, b.price),
            SortColumn::Cost => compare_amounts(a.cost, b.cost),
            SortColumn::LastSeen => a.last_seen().cmp(&b.last_seen()),
            SortColumn::Purchase => a.purchase_date.cmp(&b.purchase_date),
            SortColumn::Support => a.support_expiration_date.cmp(&b.support_expiration_date),
            SortColumn::DeprecationDate => a.deprecation_date.cmp(&b.deprecation_date),
        }
    }
}

/// Missing amounts order before any present amount, like other optional values
fn compare_amounts(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        SortColumn::ALL
            .iter()
            .copied()
            .find(|column| column.key() == wanted)
            .ok_or_else(|| {
                let allowed: Vec<&str> = SortColumn::ALL.iter().map(|c| c.key()).collect();
                format!(
                    "Invalid sort column: {}. Allowed columns: {}",
                    s,
                    allowed.join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Validated sort request: `"column"` for ascending, `"-column"` for descending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

impl std::str::FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (direction, column) = match trimmed.strip_prefix('-') {
            Some(rest) => (SortDirection::Descending, rest),
            None => (SortDirection::Ascending, trimmed),
        };
        Ok(Self {
            column: column.parse()?,
            direction,
        })
    }
}

impl std::fmt::Display for SortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.column.key()),
            SortDirection::Descending => write!(f, "-{}", self.column.key()),
        }
    }
}

/// DeviceSorter - orders a selection by a validated sort spec
pub struct DeviceSorter;

impl DeviceSorter {
    /// Stable sort; equal keys keep their incoming order
    pub fn sort(devices: &mut [&Device], spec: SortSpec) {
        devices.sort_by(|a, b| {
            let ordering = spec.column.compare(a, b);
            match spec.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}
