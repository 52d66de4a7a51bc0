use super::IngredientRecord;

/// Combined quantity for one normalized ingredient key
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListEntry {
    pub quantity: f64,
    pub unit: String,
    pub item: String,
}

impl From<&IngredientRecord> for ShoppingListEntry {
    fn from(record: &IngredientRecord) -> Self {
        Self {
            quantity: record.quantity,
            unit: record.unit.to_lowercase(),
            item: record.item.to_lowercase(),
        }
    }
}

/// Normalized identity used to merge ingredients: `"flour"` or `"flour (cup)"`
pub fn shopping_list_key(record: &IngredientRecord) -> String {
    let item = record.item.to_lowercase();
    if record.unit.is_empty() {
        item
    } else {
        format!("{} ({})", item, record.unit.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(IngredientRecord::new(1.0, "cup", "flour"), "flour (cup)")]
    #[case(IngredientRecord::new(1.0, "", "flour"), "flour")]
    #[case(IngredientRecord::new(2.0, "LBS", "Chicken Thighs"), "chicken thighs (lbs)")]
    #[case(IngredientRecord::unquantified("Salt to taste"), "salt to taste")]
    fn test_shopping_list_key(#[case] record: IngredientRecord, #[case] expected: &str) {
        assert_eq!(shopping_list_key(&record), expected);
    }

    #[test]
    fn test_entry_from_record_lowercases() {
        let entry = ShoppingListEntry::from(&IngredientRecord::new(2.0, "Cup", "Flour"));

        assert_eq!(entry.quantity, 2.0);
        assert_eq!(entry.unit, "cup");
        assert_eq!(entry.item, "flour");
    }
}
