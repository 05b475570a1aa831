use crate::domain::a001_inventory::InventoryRecord;

/// Fraction of opening stock under which a product counts as low on stock
pub const DEFAULT_LOW_STOCK_THRESHOLD: f64 = 0.2;

/// Flags records whose stock on hand fell below `opening_stock * threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowStockDetector {
    threshold: f64,
}

impl Default for LowStockDetector {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

impl LowStockDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Stock level under which `record` is flagged
    pub fn cutoff(&self, record: &InventoryRecord) -> f64 {
        record.opening_stock * self.threshold
    }

    pub fn is_low(&self, record: &InventoryRecord) -> bool {
        record.stock_on_hand < self.cutoff(record)
    }

    pub fn count(&self, records: &[InventoryRecord]) -> usize {
        records.iter().filter(|r| self.is_low(r)).count()
    }

    pub fn filter<'a>(&self, records: &'a [InventoryRecord]) -> Vec<&'a InventoryRecord> {
        records.iter().filter(|r| self.is_low(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory::aggregate::fixtures::record;

    #[test]
    fn test_default_threshold_scenario() {
        let detector = LowStockDetector::default();
        let low = record("A", 25.0, 30.0, 0.0, 5.0, 1.0);
        let fine = record("A", 20.0, 30.0, 0.0, 10.0, 1.0);

        assert_eq!(detector.cutoff(&low), 6.0);
        assert!(detector.is_low(&low));
        assert!(!detector.is_low(&fine));
    }

    #[test]
    fn test_cutoff_is_strict() {
        let detector = LowStockDetector::default();
        let at_cutoff = record("A", 0.0, 30.0, 0.0, 6.0, 1.0);
        assert!(!detector.is_low(&at_cutoff));
    }

    #[test]
    fn test_count_and_filter() {
        let records = vec![
            record("A", 0.0, 100.0, 0.0, 5.0, 1.0),
            record("B", 0.0, 100.0, 0.0, 50.0, 1.0),
            record("C", 0.0, 10.0, 0.0, 1.0, 1.0),
        ];

        let detector = LowStockDetector::default();
        assert_eq!(detector.count(&records), 2);
        let flagged: Vec<&str> = detector
            .filter(&records)
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(flagged, vec!["A", "C"]);
    }

    #[test]
    fn test_custom_threshold() {
        let detector = LowStockDetector::new(0.5);
        let rec = record("A", 0.0, 30.0, 0.0, 10.0, 1.0);
        assert!(detector.is_low(&rec));
        assert!(!LowStockDetector::default().is_low(&rec));
    }
}
