use std::collections::HashMap;

/// `(name, value)` pairs by descending value, ties by name, at most `limit`.
pub fn ranked_top_products(values: &HashMap<String, f64>, limit: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = values
        .iter()
        .map(|(name, value)| (name.clone(), *value))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking() {
        let values = HashMap::from([
            ("Bolt".to_string(), 12.0),
            ("Anchor".to_string(), 40.0),
            ("Clamp".to_string(), 12.0),
            ("Drill".to_string(), 3.0),
        ]);

        let top = ranked_top_products(&values, 3);
        let names: Vec<&str> = top.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Anchor", "Bolt", "Clamp"]);

        assert_eq!(ranked_top_products(&values, 10).len(), 4);
        assert!(ranked_top_products(&HashMap::new(), 5).is_empty());
    }
}
