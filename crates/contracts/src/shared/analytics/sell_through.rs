use crate::domain::a001_inventory::InventoryRecord;

/// Sell-through rate in percent: `sold / total_stock * 100`, or 0 when there
/// is no positive stock to sell from.
pub fn sell_through(sold: f64, total_stock: f64) -> f64 {
    if total_stock > 0.0 {
        let rate = sold / total_stock * 100.0;
        if rate.is_finite() {
            rate
        } else {
            0.0
        }
    } else {
        0.0
    }
}

/// Overall KPI: numerator and denominator are summed across all records first,
/// it is not the mean of per-category rates.
pub fn overall_sell_through(records: &[InventoryRecord]) -> f64 {
    let (sold, total_stock) = records.iter().fold((0.0, 0.0), |(sold, stock), r| {
        (sold + r.units_sold, stock + r.available_stock())
    });
    sell_through(sold, total_stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory::aggregate::fixtures::record;
    use crate::shared::analytics::aggregate_by_category;

    #[test]
    fn test_zero_stock_is_zero() {
        assert_eq!(sell_through(10.0, 0.0), 0.0);
        assert_eq!(sell_through(-10.0, 0.0), 0.0);
        assert_eq!(sell_through(0.0, 0.0), 0.0);
        assert_eq!(sell_through(5.0, -3.0), 0.0);
    }

    #[test]
    fn test_never_nan_or_infinite() {
        for sold in [-1e308, -5.0, 0.0, 5.0, 1e308, f64::MAX] {
            for stock in [0.0, 1e-300, 1.0, 1e308] {
                let rate = sell_through(sold, stock);
                assert!(rate.is_finite(), "sold={sold} stock={stock} gave {rate}");
            }
        }
    }

    #[test]
    fn test_overall_is_weighted_not_averaged() {
        // A: 10 / 100 = 10%, B: 90 / 100 = 90% -> mean 50%,
        // C: 0 / 800 = 0% -> weighted overall 100 / 1000 = 10%
        let records = vec![
            record("A", 10.0, 100.0, 0.0, 90.0, 1.0),
            record("B", 90.0, 50.0, 50.0, 10.0, 1.0),
            record("C", 0.0, 800.0, 0.0, 800.0, 1.0),
        ];

        assert_eq!(overall_sell_through(&records), 10.0);

        let breakdown = aggregate_by_category(&records);
        let mean: f64 =
            breakdown.iter().map(|b| b.sell_through()).sum::<f64>() / breakdown.len() as f64;
        assert!((mean - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_overall_on_empty_input() {
        assert_eq!(overall_sell_through(&[]), 0.0);
    }
}
