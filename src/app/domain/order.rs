use std::fmt;
use std::str::FromStr;

use crate::app::infrastructure::error::AppError;

/// Dough a pupusa is made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Corn,
    Rice,
}

impl Variant {
    /// Lowercase name used for display and for summary ordering
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corn => "corn",
            Self::Rice => "rice",
        }
    }

    pub fn all() -> &'static [Variant] {
        &[Self::Corn, Self::Rice]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "corn" | "maiz" | "maíz" => Ok(Self::Corn),
            "rice" | "arroz" => Ok(Self::Rice),
            other => Err(AppError::InvalidOrder(format!("unknown dough '{}'", other))),
        }
    }
}

/// One entry of a person's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub quantity: u32,
    pub item_name: String,
    pub variant: Variant,
}

impl LineItem {
    pub fn new(quantity: u32, item_name: impl Into<String>, variant: Variant) -> Self {
        Self {
            quantity,
            item_name: item_name.into(),
            variant,
        }
    }

    /// Describe what is missing from this item, if anything.
    pub fn problem(&self) -> Option<&'static str> {
        if self.quantity == 0 {
            Some("quantity must be at least 1")
        } else if self.item_name.trim().is_empty() {
            Some("no specialty selected")
        } else {
            None
        }
    }
}

/// Everything one person of the party ordered. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonOrder {
    items: Vec<LineItem>,
}

impl PersonOrder {
    /// Callers must have checked the items already; see
    /// `OrderSession::submit_current_person`.
    pub(crate) fn new(items: Vec<LineItem>) -> Self {
        debug_assert!(!items.is_empty());
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// Position of the person currently ordering, for the order screen header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonContext {
    pub index: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("corn".parse::<Variant>().unwrap(), Variant::Corn);
        assert_eq!(" Rice ".parse::<Variant>().unwrap(), Variant::Rice);
        assert_eq!("maíz".parse::<Variant>().unwrap(), Variant::Corn);
        assert_eq!("arroz".parse::<Variant>().unwrap(), Variant::Rice);

        let err = "wheat".parse::<Variant>().unwrap_err();
        assert!(matches!(err, AppError::InvalidOrder(_)));
        assert_eq!(err.to_string(), "Invalid order: unknown dough 'wheat'");
    }

    #[test]
    fn test_variant_display_matches_as_str() {
        for v in Variant::all() {
            assert_eq!(v.to_string(), v.as_str());
        }
    }

    #[test]
    fn test_line_item_problem() {
        assert_eq!(LineItem::new(2, "Revuelta", Variant::Corn).problem(), None);
        assert!(LineItem::new(0, "Revuelta", Variant::Corn).problem().is_some());
        assert!(LineItem::new(1, "   ", Variant::Rice).problem().is_some());
    }

    #[test]
    fn test_person_order_total() {
        let order = PersonOrder::new(vec![
            LineItem::new(2, "Revuelta", Variant::Corn),
            LineItem::new(3, "Ayote", Variant::Rice),
        ]);
        assert_eq!(order.total_quantity(), 5);
        assert_eq!(order.items().len(), 2);
    }
}
