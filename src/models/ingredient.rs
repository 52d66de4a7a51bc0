use serde::{Deserialize, Serialize};

/// One parsed ingredient line
///
/// A `quantity` of `0` means no quantity could be read from the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub quantity: f64,
    pub unit: String,
    pub item: String,
}

impl IngredientRecord {
    pub fn new(quantity: f64, unit: &str, item: &str) -> Self {
        Self {
            quantity,
            unit: unit.to_string(),
            item: item.to_string(),
        }
    }

    /// Record for a line that carried no readable quantity
    pub fn unquantified(item: &str) -> Self {
        Self::new(0.0, "", item)
    }
}

/// Encode a list of ingredients for the `ingredients` column
pub fn encode_ingredients(ingredients: &[IngredientRecord]) -> serde_json::Result<String> {
    serde_json::to_string(ingredients)
}

/// Decode the `ingredients` column back into records
pub fn decode_ingredients(column: &str) -> serde_json::Result<Vec<IngredientRecord>> {
    serde_json::from_str(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_column_shape() {
        let ingredients = vec![IngredientRecord::new(2.0, "lbs", "chicken")];

        let column = encode_ingredients(&ingredients).expect("Failed to encode");

        assert_eq!(column, r#"[{"quantity":2.0,"unit":"lbs","item":"chicken"}]"#);
    }

    #[test]
    fn test_decode_ingredients_from_stored_column() {
        let column = r#"[{"quantity": 0, "unit": "", "item": "salt to taste"},
                         {"quantity": 2.5, "unit": "cup", "item": "flour"}]"#;

        let ingredients = decode_ingredients(column).expect("Failed to decode");

        assert_eq!(
            ingredients,
            vec![
                IngredientRecord::unquantified("salt to taste"),
                IngredientRecord::new(2.5, "cup", "flour"),
            ]
        );
    }

    #[test]
    fn test_decode_ingredients_rejects_missing_fields() {
        let result = decode_ingredients(r#"[{"item": "flour"}]"#);

        assert!(result.is_err());
    }
}
