use super::catalog::Catalog;
use crate::app::domain::{LineItem, Variant};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::quantity::{parse_quantity, step_quantity};

/// One editable row on the order screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    pub quantity: u32,
    pub item: Option<String>,
    pub variant: Option<Variant>,
}

impl DraftRow {
    fn new(catalog: &Catalog) -> Self {
        Self {
            quantity: 1,
            item: catalog.first().map(str::to_string),
            variant: Some(Variant::default()),
        }
    }
}

/// The rows of the person currently ordering. Always has at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    rows: Vec<DraftRow>,
}

impl PersonDraft {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            rows: vec![DraftRow::new(catalog)],
        }
    }

    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    pub fn add_row(&mut self, catalog: &Catalog) -> usize {
        self.rows.push(DraftRow::new(catalog));
        self.rows.len() - 1
    }

    /// Remove a row. The last remaining row cannot be removed; returns
    /// false in that case.
    pub fn remove_row(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        if self.rows.len() <= 1 {
            return Ok(false);
        }
        self.rows.remove(index);
        Ok(true)
    }

    pub fn step_quantity(&mut self, index: usize, delta: i64) -> Result<u32> {
        let row = self.row_mut(index)?;
        row.quantity = step_quantity(row.quantity, delta);
        Ok(row.quantity)
    }

    pub fn set_quantity(&mut self, index: usize, text: &str) -> Result<u32> {
        let quantity = parse_quantity(text).ok_or_else(|| {
            AppError::InvalidOrder(format!("'{}' is not a positive quantity", text.trim()))
        })?;
        let row = self.row_mut(index)?;
        row.quantity = quantity;
        Ok(quantity)
    }

    pub fn select_item(&mut self, index: usize, name: &str, catalog: &Catalog) -> Result<()> {
        if !catalog.contains(name) {
            return Err(AppError::InvalidOrder(format!(
                "'{}' is not on the menu",
                name
            )));
        }
        self.row_mut(index)?.item = Some(name.to_string());
        Ok(())
    }

    pub fn select_variant(&mut self, index: usize, variant: Variant) -> Result<()> {
        self.row_mut(index)?.variant = Some(variant);
        Ok(())
    }

    /// Turn the rows into line items.
    ///
    /// Every row needs a dough and a specialty that is still on the menu;
    /// a specialty removed from the catalog after it was picked is rejected.
    pub fn build(&self, catalog: &Catalog) -> Result<Vec<LineItem>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| -> Result<LineItem> {
                let row_no = i + 1;
                let item = row.item.as_deref().ok_or_else(|| {
                    AppError::InvalidOrder(format!("row {}: no specialty selected", row_no))
                })?;
                if !catalog.contains(item) {
                    return Err(AppError::InvalidOrder(format!(
                        "row {}: '{}' is no longer on the menu",
                        row_no, item
                    )));
                }
                let variant = row.variant.ok_or_else(|| {
                    AppError::InvalidOrder(format!("row {}: no dough selected", row_no))
                })?;
                Ok(LineItem::new(row.quantity, item, variant))
            })
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(AppError::InvalidOrder(format!("there is no row {}", index + 1)))
        }
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut DraftRow> {
        self.check_index(index)?;
        Ok(&mut self.rows[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::with_items(["Revuelta", "Ayote", "Pollo"])
    }

    #[test]
    fn test_new_draft_has_one_default_row() {
        let draft = PersonDraft::new(&catalog());
        assert_eq!(
            draft.rows(),
            &[DraftRow {
                quantity: 1,
                item: Some("Revuelta".to_string()),
                variant: Some(Variant::Corn),
            }]
        );
    }

    #[test]
    fn test_remove_keeps_last_row() {
        let catalog = catalog();
        let mut draft = PersonDraft::new(&catalog);
        assert!(!draft.remove_row(0).unwrap());
        assert_eq!(draft.rows().len(), 1);

        assert_eq!(draft.add_row(&catalog), 1);
        draft.select_item(1, "Pollo", &catalog).unwrap();
        assert!(draft.remove_row(0).unwrap());
        assert_eq!(draft.rows()[0].item.as_deref(), Some("Pollo"));

        assert!(draft.remove_row(5).is_err());
    }

    #[test]
    fn test_quantity_stepper() {
        let mut draft = PersonDraft::new(&catalog());
        assert_eq!(draft.step_quantity(0, -1).unwrap(), 1);
        assert_eq!(draft.step_quantity(0, 1).unwrap(), 2);
        assert_eq!(draft.step_quantity(0, 1).unwrap(), 3);
        assert_eq!(draft.step_quantity(0, -1).unwrap(), 2);
    }

    #[test]
    fn test_set_quantity() {
        let mut draft = PersonDraft::new(&catalog());
        assert_eq!(draft.set_quantity(0, " 6 ").unwrap(), 6);

        assert!(matches!(
            draft.set_quantity(0, "0"),
            Err(AppError::InvalidOrder(_))
        ));
        assert!(draft.set_quantity(0, "lots").is_err());
        assert_eq!(draft.rows()[0].quantity, 6);
    }

    #[test]
    fn test_select_item_must_be_on_menu() {
        let catalog = catalog();
        let mut draft = PersonDraft::new(&catalog);
        assert!(draft.select_item(0, "Camarón", &catalog).is_err());
        draft.select_item(0, "Ayote", &catalog).unwrap();
        assert_eq!(draft.rows()[0].item.as_deref(), Some("Ayote"));
    }

    #[test]
    fn test_build() {
        let catalog = catalog();
        let mut draft = PersonDraft::new(&catalog);
        draft.set_quantity(0, "3").unwrap();
        draft.add_row(&catalog);
        draft.select_item(1, "Pollo", &catalog).unwrap();
        draft.select_variant(1, Variant::Rice).unwrap();

        assert_eq!(
            draft.build(&catalog).unwrap(),
            vec![
                LineItem::new(3, "Revuelta", Variant::Corn),
                LineItem::new(1, "Pollo", Variant::Rice),
            ]
        );
    }

    #[test]
    fn test_build_with_empty_catalog() {
        let catalog = Catalog::empty();
        let draft = PersonDraft::new(&catalog);
        assert_eq!(draft.rows()[0].item, None);

        let err = draft.build(&catalog).unwrap_err();
        assert!(err.to_string().contains("no specialty selected"));
    }

    #[test]
    fn test_build_rejects_removed_specialty() {
        let mut catalog = catalog();
        let mut draft = PersonDraft::new(&catalog);
        draft.select_item(0, "Ayote", &catalog).unwrap();

        catalog.remove("Ayote");
        let err = draft.build(&catalog).unwrap_err();
        assert!(err.to_string().contains("no longer on the menu"));
    }

    #[test]
    fn test_build_requires_dough() {
        let catalog = catalog();
        let mut draft = PersonDraft::new(&catalog);
        draft.rows[0].variant = None;
        assert!(draft.build(&catalog).is_err());
    }
}
