use serde::{Deserialize, Serialize};

/// One product in one period, as served by `/inventory`.
///
/// `stock_on_hand` and `revenue` are taken as delivered by the API; nothing in
/// this crate recomputes them from the other columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Row id of the snapshot table (absent in uploaded data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Product_ID")]
    pub product_id: String,
    #[serde(rename = "Product_Name")]
    pub product_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    /// Period label, e.g. "Jan-2024"
    #[serde(rename = "Period")]
    pub period: String,
    #[serde(rename = "Current_Price")]
    pub current_price: f64,
    #[serde(rename = "Opening_Price")]
    pub opening_price: f64,
    #[serde(rename = "Cost_Per_Unit")]
    pub cost_per_unit: f64,
    #[serde(rename = "Units_Sold")]
    pub units_sold: f64,
    #[serde(rename = "Opening_Stock")]
    pub opening_stock: f64,
    #[serde(rename = "Stock_Received")]
    pub stock_received: f64,
    #[serde(rename = "Stock_On_Hand")]
    pub stock_on_hand: f64,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
}

impl InventoryRecord {
    /// Stock available for sale in the period (opening + received)
    pub fn available_stock(&self) -> f64 {
        self.opening_stock + self.stock_received
    }

    /// Cost value of the stock still on hand
    pub fn stock_value(&self) -> f64 {
        self.stock_on_hand * self.cost_per_unit
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::InventoryRecord;

    /// Minimal record for metric tests; identity fields are derived from the category.
    pub fn record(
        category: &str,
        units_sold: f64,
        opening_stock: f64,
        stock_received: f64,
        stock_on_hand: f64,
        cost_per_unit: f64,
    ) -> InventoryRecord {
        InventoryRecord {
            id: None,
            product_id: format!("P-{}", category),
            product_name: format!("{} product", category),
            category: category.to_string(),
            period: "Jan-2024".to_string(),
            current_price: cost_per_unit * 2.0,
            opening_price: cost_per_unit * 2.0,
            cost_per_unit,
            units_sold,
            opening_stock,
            stock_received,
            stock_on_hand,
            revenue: units_sold * cost_per_unit * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_wire_names() {
        let value = json!({
            "id": 7,
            "Product_ID": "P001",
            "Product_Name": "Widget",
            "Category": "Tools",
            "Period": "Mar-2024",
            "Current_Price": 12.5,
            "Opening_Price": 11.0,
            "Cost_Per_Unit": 6.0,
            "Units_Sold": 40,
            "Opening_Stock": 100,
            "Stock_Received": 20,
            "Stock_On_Hand": 80,
            "Revenue": 500.0
        });

        let record: InventoryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.product_name, "Widget");
        assert_eq!(record.category, "Tools");
        assert_eq!(record.units_sold, 40.0);
        assert_eq!(record.available_stock(), 120.0);
        assert_eq!(record.stock_value(), 480.0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let value = json!({
            "Product_ID": "P001",
            "Product_Name": "Widget",
            "Category": "Tools"
        });
        assert!(serde_json::from_value::<InventoryRecord>(value).is_err());
    }
}
