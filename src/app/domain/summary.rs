use super::order::Variant;

/// Combined quantity of one (specialty, dough) pair across the party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub item_name: String,
    pub variant: Variant,
    pub total_quantity: u64,
}

impl SummaryEntry {
    pub fn new(item_name: impl Into<String>, variant: Variant, total_quantity: u64) -> Self {
        Self {
            item_name: item_name.into(),
            variant,
            total_quantity,
        }
    }
}

/// The aggregated order for a finished party.
///
/// Entries are sorted by item name, then by dough name, using plain
/// byte-wise string comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub entries: Vec<SummaryEntry>,
    pub grand_total: u64,
    pub people: usize,
}
