use serde::Serialize;

/// Fill and border colour of one category, as CSS colour strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryColor {
    pub fill: &'static str,
    pub border: &'static str,
}

impl CategoryColor {
    pub const fn new(fill: &'static str, border: &'static str) -> Self {
        Self { fill, border }
    }
}

pub const VIBRANT_PALETTE: [CategoryColor; 10] = [
    CategoryColor::new("rgba(239, 68, 68, 0.8)", "rgba(220, 38, 38, 1)"),
    CategoryColor::new("rgba(59, 130, 246, 0.8)", "rgba(37, 99, 235, 1)"),
    CategoryColor::new("rgba(245, 158, 11, 0.8)", "rgba(217, 119, 6, 1)"),
    CategoryColor::new("rgba(16, 185, 129, 0.8)", "rgba(5, 150, 105, 1)"),
    CategoryColor::new("rgba(139, 92, 246, 0.8)", "rgba(124, 58, 237, 1)"),
    CategoryColor::new("rgba(236, 72, 153, 0.8)", "rgba(219, 39, 119, 1)"),
    CategoryColor::new("rgba(14, 165, 233, 0.8)", "rgba(2, 132, 199, 1)"),
    CategoryColor::new("rgba(251, 146, 60, 0.8)", "rgba(234, 88, 12, 1)"),
    CategoryColor::new("rgba(168, 85, 247, 0.8)", "rgba(147, 51, 234, 1)"),
    CategoryColor::new("rgba(34, 197, 94, 0.8)", "rgba(22, 163, 74, 1)"),
];

/// Colour of a category missing from the assignment
pub const FALLBACK_COLOR: CategoryColor =
    CategoryColor::new("rgba(200, 200, 200, 0.7)", "rgba(200, 200, 200, 1)");

/// Category → colour, in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryColors {
    entries: Vec<(String, CategoryColor)>,
}

impl CategoryColors {
    pub fn get(&self, category: &str) -> Option<CategoryColor> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, color)| *color)
    }

    pub fn color_for(&self, category: &str) -> CategoryColor {
        self.get(category).unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CategoryColor)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }
}

/// Assigns `palette[i % palette.len()]` to the i-th distinct category.
///
/// An empty palette assigns `FALLBACK_COLOR` to everything.
pub fn assign_colors<I, S>(categories: I, palette: &[CategoryColor]) -> CategoryColors
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<(String, CategoryColor)> = Vec::new();
    for category in categories {
        let category = category.as_ref();
        if entries.iter().any(|(name, _)| name == category) {
            continue;
        }
        let color = if palette.is_empty() {
            FALLBACK_COLOR
        } else {
            palette[entries.len() % palette.len()]
        };
        entries.push((category.to_string(), color));
    }
    CategoryColors { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let categories = ["Tools", "Garden", "Apparel"];
        let a = assign_colors(categories, &VIBRANT_PALETTE);
        let b = assign_colors(categories, &VIBRANT_PALETTE);
        assert_eq!(a, b);
        assert_eq!(a.color_for("Tools"), VIBRANT_PALETTE[0]);
        assert_eq!(a.color_for("Apparel"), VIBRANT_PALETTE[2]);
    }

    #[test]
    fn test_palette_wraps() {
        let categories: Vec<String> = (0..12).map(|i| format!("cat-{i}")).collect();
        let colors = assign_colors(&categories, &VIBRANT_PALETTE);

        assert_eq!(colors.len(), 12);
        assert_eq!(colors.color_for("cat-0"), colors.color_for("cat-10"));
        assert_eq!(colors.color_for("cat-1"), colors.color_for("cat-11"));
        assert_ne!(colors.color_for("cat-0"), colors.color_for("cat-1"));
    }

    #[test]
    fn test_duplicates_keep_first_index() {
        let colors = assign_colors(["A", "B", "A", "C"], &VIBRANT_PALETTE);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors.color_for("C"), VIBRANT_PALETTE[2]);
    }

    #[test]
    fn test_fallback() {
        let colors = assign_colors(["A"], &VIBRANT_PALETTE);
        assert_eq!(colors.color_for("unknown"), FALLBACK_COLOR);
        assert!(colors.get("unknown").is_none());

        let colors = assign_colors(["A"], &[]);
        assert_eq!(colors.color_for("A"), FALLBACK_COLOR);
    }
}
