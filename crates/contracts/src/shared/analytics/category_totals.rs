use super::sell_through::sell_through;
use crate::domain::a001_inventory::InventoryRecord;
use serde::{Deserialize, Serialize};

/// Per-category sums over a set of inventory records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub category: String,
    /// Sum of units sold
    pub sold: f64,
    /// Sum of opening stock + stock received
    pub total_stock: f64,
    /// Sum of stock on hand × cost per unit
    pub value: f64,
}

impl CategoryTotals {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            sold: 0.0,
            total_stock: 0.0,
            value: 0.0,
        }
    }

    fn add(&mut self, record: &InventoryRecord) {
        self.sold += record.units_sold;
        self.total_stock += record.available_stock();
        self.value += record.stock_value();
    }

    /// Sell-through rate of this bucket, in percent
    pub fn sell_through(&self) -> f64 {
        sell_through(self.sold, self.total_stock)
    }
}

/// Category buckets in the order the categories first appear in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    buckets: Vec<CategoryTotals>,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn get(&self, category: &str) -> Option<&CategoryTotals> {
        self.buckets.iter().find(|b| b.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotals> {
        self.buckets.iter()
    }

    /// Category names, first-seen order
    pub fn categories(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.category.clone()).collect()
    }

    /// Sums of all buckets under an empty category name
    pub fn grand_total(&self) -> CategoryTotals {
        self.buckets
            .iter()
            .fold(CategoryTotals::new(""), |mut acc, bucket| {
                acc.sold += bucket.sold;
                acc.total_stock += bucket.total_stock;
                acc.value += bucket.value;
                acc
            })
    }
}

impl<'a> IntoIterator for &'a CategoryBreakdown {
    type Item = &'a CategoryTotals;
    type IntoIter = std::slice::Iter<'a, CategoryTotals>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Groups records by category and reduces each group into `CategoryTotals`.
///
/// No validation: negative or inconsistent values are summed as given.
pub fn aggregate_by_category(records: &[InventoryRecord]) -> CategoryBreakdown {
    let mut buckets: Vec<CategoryTotals> = Vec::new();
    for record in records {
        match buckets.iter_mut().find(|b| b.category == record.category) {
            Some(bucket) => bucket.add(record),
            None => {
                let mut bucket = CategoryTotals::new(record.category.clone());
                bucket.add(record);
                buckets.push(bucket);
            }
        }
    }
    CategoryBreakdown { buckets }
}

/// Cost value of all stock on hand
pub fn total_inventory_value(records: &[InventoryRecord]) -> f64 {
    records.iter().map(InventoryRecord::stock_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory::aggregate::fixtures::record;

    #[test]
    fn test_single_category_scenario() {
        let records = vec![
            record("A", 10.0, 50.0, 50.0, 80.0, 2.0),
            record("A", 5.0, 20.0, 0.0, 10.0, 3.0),
        ];

        let breakdown = aggregate_by_category(&records);
        assert_eq!(breakdown.len(), 1);

        let a = breakdown.get("A").unwrap();
        assert_eq!(a.sold, 15.0);
        assert_eq!(a.total_stock, 120.0);
        assert_eq!(a.value, 190.0);
        assert_eq!(a.sell_through(), 12.5);
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![
            record("Tools", 1.0, 1.0, 0.0, 1.0, 1.0),
            record("Garden", 1.0, 1.0, 0.0, 1.0, 1.0),
            record("Tools", 1.0, 1.0, 0.0, 1.0, 1.0),
            record("Apparel", 1.0, 1.0, 0.0, 1.0, 1.0),
        ];

        let breakdown = aggregate_by_category(&records);
        assert_eq!(breakdown.categories(), vec!["Tools", "Garden", "Apparel"]);
        assert_eq!(breakdown.get("Tools").unwrap().sold, 2.0);
    }

    #[test]
    fn test_partition_preserves_totals() {
        let records = vec![
            record("A", 3.0, 10.0, 5.0, 12.0, 1.5),
            record("B", 7.0, 40.0, 0.0, 33.0, 2.0),
            record("A", 1.0, 8.0, 2.0, 9.0, 4.0),
            record("C", 0.0, 0.0, 0.0, 0.0, 9.0),
            record("B", 2.5, 5.0, 5.0, 7.5, 1.0),
        ];

        let breakdown = aggregate_by_category(&records);
        let total = breakdown.grand_total();

        let sold: f64 = records.iter().map(|r| r.units_sold).sum();
        let stock: f64 = records.iter().map(|r| r.available_stock()).sum();
        assert_eq!(total.sold, sold);
        assert_eq!(total.total_stock, stock);
        assert_eq!(total.value, total_inventory_value(&records));
    }

    #[test]
    fn test_empty_input() {
        let breakdown = aggregate_by_category(&[]);
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.grand_total().sold, 0.0);
        assert_eq!(total_inventory_value(&[]), 0.0);
    }
}
