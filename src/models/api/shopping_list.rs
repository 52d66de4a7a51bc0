use std::fmt;

use super::format_ingredient;
use crate::ingredients::ShoppingList;

/// One displayed line of a shopping list
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListLine {
    pub key: String,
    pub text: String,
}

impl ShoppingListLine {
    /// Lines of an aggregated list, sorted by key for stable display
    pub fn from_shopping_list(shopping_list: &ShoppingList) -> Vec<Self> {
        let mut lines: Vec<Self> = shopping_list
            .iter()
            .map(|(key, entry)| Self {
                key: key.clone(),
                text: format_ingredient(entry.quantity, &entry.unit, &entry.item),
            })
            .collect();
        lines.sort_by(|a, b| a.key.cmp(&b.key));
        lines
    }
}

impl fmt::Display for ShoppingListLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::aggregate;
    use crate::models::IngredientRecord;

    #[test]
    fn test_lines_sorted_by_key() {
        let ingredients = vec![
            IngredientRecord::new(2.0, "", "onions"),
            IngredientRecord::new(1.0, "cup", "Flour"),
            IngredientRecord::new(1.0, "", "flour"),
            IngredientRecord::unquantified("Basil"),
        ];

        let lines = ShoppingListLine::from_shopping_list(&aggregate([(ingredients.as_slice(), 1)]));

        let rendered: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["- basil", "- 1 flour", "- 1 cup flour", "- 2 onions"]
        );
    }
}
