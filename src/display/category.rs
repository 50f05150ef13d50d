//! Category display formatting

use crate::models::Category;

/// Format the loaded categories, one per line
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Categories:\n");

    for category in categories {
        output.push_str(&format!("  {:30} {}\n", category.to_string(), category.id));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    #[test]
    fn test_empty() {
        assert_eq!(format_category_list(&[]), "No categories found.\n");
    }

    #[test]
    fn test_icon_and_name() {
        let mut food = Category::new(CategoryId::new(), "Food");
        food.icon = Some("🍔".into());
        let rent = Category::new(CategoryId::new(), "Rent");

        let output = format_category_list(&[food.clone(), rent.clone()]);

        assert!(output.contains("🍔 Food"));
        assert!(output.contains(&food.id.to_string()));
        assert!(output.contains("Rent"));
        assert_eq!(output.lines().count(), 3);
    }
}
