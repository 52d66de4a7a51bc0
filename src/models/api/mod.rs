mod recipe;
mod shopping_list;

pub use recipe::{Recipe, RecipeSummary};
pub use shopping_list::ShoppingListLine;

/// Render a quantity without a trailing `.0` (`2`, `2.5`)
pub fn format_quantity(quantity: f64) -> String {
    format!("{}", quantity)
}

/// Render one ingredient as `2 lbs chicken`, or just the item when no
/// quantity was given
pub fn format_ingredient(quantity: f64, unit: &str, item: &str) -> String {
    if quantity == 0.0 {
        return item.to_string();
    }

    if unit.is_empty() {
        format!("{} {}", format_quantity(quantity), item)
    } else {
        format!("{} {} {}", format_quantity(quantity), unit, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(2.0, "2")]
    #[case(2.5, "2.5")]
    #[case(0.25, "0.25")]
    #[case(12.0, "12")]
    fn test_format_quantity(#[case] quantity: f64, #[case] expected: &str) {
        assert_eq!(format_quantity(quantity), expected);
    }

    #[rstest]
    #[case(2.0, "lbs", "chicken", "2 lbs chicken")]
    #[case(3.0, "", "eggs", "3 eggs")]
    #[case(0.0, "", "salt to taste", "salt to taste")]
    #[case(0.0, "cup", "flour", "flour")]
    fn test_format_ingredient(
        #[case] quantity: f64,
        #[case] unit: &str,
        #[case] item: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(format_ingredient(quantity, unit, item), expected);
    }
}
