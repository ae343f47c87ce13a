use std::collections::HashMap;

use crate::app::domain::{PersonOrder, Summary, SummaryEntry, Variant};

/// Fold every person's line items into one summary.
///
/// Quantities are summed per (item name, dough). The result is sorted by
/// item name and then dough name with ordinal string comparison, so
/// "Queso con Loroco" comes before "Revuelta" and "corn" before "rice".
pub fn summarize(orders: &[PersonOrder]) -> Summary {
    let mut totals: HashMap<(&str, Variant), u64> = HashMap::new();
    let mut grand_total = 0u64;

    for item in orders.iter().flat_map(|o| o.items()) {
        let qty = u64::from(item.quantity);
        *totals.entry((item.item_name.as_str(), item.variant)).or_insert(0) += qty;
        grand_total += qty;
    }

    let mut entries: Vec<SummaryEntry> = totals
        .into_iter()
        .map(|((name, variant), qty)| SummaryEntry::new(name, variant, qty))
        .collect();
    entries.sort_by(|a, b| {
        a.item_name
            .cmp(&b.item_name)
            .then_with(|| a.variant.as_str().cmp(b.variant.as_str()))
    });

    Summary {
        entries,
        grand_total,
        people: orders.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::LineItem;

    fn person(items: &[(u32, &str, Variant)]) -> PersonOrder {
        PersonOrder::new(
            items
                .iter()
                .map(|(q, n, v)| LineItem::new(*q, *n, *v))
                .collect(),
        )
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert!(summary.entries.is_empty());
        assert_eq!(summary.grand_total, 0);
        assert_eq!(summary.people, 0);
    }

    #[test]
    fn test_summarize_merges_across_people() {
        let orders = vec![
            person(&[(3, "Queso con Loroco", Variant::Corn)]),
            person(&[
                (2, "Queso con Loroco", Variant::Corn),
                (1, "Revuelta", Variant::Rice),
            ]),
        ];
        let summary = summarize(&orders);

        assert_eq!(
            summary.entries,
            vec![
                SummaryEntry::new("Queso con Loroco", Variant::Corn, 5),
                SummaryEntry::new("Revuelta", Variant::Rice, 1),
            ]
        );
        assert_eq!(summary.grand_total, 6);
        assert_eq!(summary.people, 2);
    }

    #[test]
    fn test_summarize_keeps_doughs_apart() {
        let orders = vec![person(&[
            (1, "Ayote", Variant::Rice),
            (4, "Ayote", Variant::Corn),
        ])];
        let summary = summarize(&orders);

        assert_eq!(
            summary.entries,
            vec![
                SummaryEntry::new("Ayote", Variant::Corn, 4),
                SummaryEntry::new("Ayote", Variant::Rice, 1),
            ]
        );
    }

    #[test]
    fn test_summarize_ordinal_sort() {
        // Uppercase sorts before lowercase, and accented letters after ASCII
        let orders = vec![person(&[
            (1, "pollo", Variant::Corn),
            (1, "Jamón", Variant::Corn),
            (1, "Camarón", Variant::Corn),
            (1, "Chicharrón", Variant::Corn),
            (1, "Birria", Variant::Corn),
        ])];
        let names: Vec<String> = summarize(&orders)
            .entries
            .into_iter()
            .map(|e| e.item_name)
            .collect();

        assert_eq!(
            names,
            vec!["Birria", "Camarón", "Chicharrón", "Jamón", "pollo"]
        );
    }

    #[test]
    fn test_grand_total_matches_sum() {
        let orders = vec![
            person(&[(7, "Ajo", Variant::Corn), (2, "Pollo", Variant::Rice)]),
            person(&[(1, "Ajo", Variant::Corn)]),
            person(&[(10, "Birria", Variant::Rice)]),
        ];
        let expected: u64 = orders.iter().map(|o| o.total_quantity()).sum();
        let summary = summarize(&orders);

        assert_eq!(summary.grand_total, expected);
        let entry_sum: u64 = summary.entries.iter().map(|e| e.total_quantity).sum();
        assert_eq!(entry_sum, expected);
    }
}
