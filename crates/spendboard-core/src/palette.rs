//! Fixed chart colors

/// Bars and trend lines
pub const SERIES_COLOR: &str = "#3b82f6";

/// Categories this build does not know about
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Color for a category name as it appears in summary rows
pub fn category_color(category: &str) -> &'static str {
    match category {
        "food" => "#22c55e",
        "transport" => "#3b82f6",
        "bills" => "#f59e0b",
        "shopping" => "#8b5cf6",
        "other" => "#6b7280",
        _ => FALLBACK_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendboard_types::Category;

    #[test]
    fn test_every_category_has_a_color() {
        assert_eq!(category_color(Category::Food.as_str()), "#22c55e");
        assert_eq!(category_color(Category::Shopping.as_str()), "#8b5cf6");
        assert_eq!(category_color("travel"), FALLBACK_COLOR);
        assert_eq!(category_color("Food"), FALLBACK_COLOR);
    }
}
