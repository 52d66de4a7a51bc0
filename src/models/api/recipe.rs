use std::fmt;

use super::format_ingredient;
use crate::error::Result;
use crate::models::{IngredientRecord, RecipeRecord, decode_ingredients};

/// Complete recipe with its ingredients decoded
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<IngredientRecord>,
    pub instructions: Option<String>,
    pub servings: i64,
    pub author_id: i64,
    pub created_at: String,
}

/// Short listing entry for a recipe
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    pub servings: i64,
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = crate::error::RecipeBotError;

    fn try_from(record: RecipeRecord) -> Result<Self> {
        Ok(Self {
            ingredients: decode_ingredients(&record.ingredients)?,
            id: record.id,
            name: record.name,
            instructions: record.instructions,
            servings: record.servings,
            author_id: record.author_id,
            created_at: record.created_at,
        })
    }
}

impl Recipe {
    /// Ingredient lines as they are shown to users, one per line
    pub fn ingredient_lines(&self) -> String {
        self.ingredients
            .iter()
            .map(|ingredient| {
                format!(
                    "- {}",
                    format_ingredient(ingredient.quantity, &ingredient.unit, &ingredient.item)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Servings: {}", self.servings)?;
        writeln!(f, "\nIngredients:")?;
        for line in self.ingredient_lines().lines() {
            writeln!(f, "  {}", line)?;
        }

        if let Some(instructions) = &self.instructions {
            write!(f, "\nInstructions:\n{}\n", instructions)?;
        }

        Ok(())
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} (serves {})", self.id, self.name, self.servings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookies() -> Recipe {
        Recipe {
            id: 1,
            name: "Chocolate Chip Cookies".to_string(),
            ingredients: vec![
                IngredientRecord::new(2.0, "cups", "flour"),
                IngredientRecord::new(2.0, "", "eggs"),
                IngredientRecord::unquantified("pinch of salt"),
            ],
            instructions: Some("Mix and bake at 350°F for 12 minutes".to_string()),
            servings: 24,
            author_id: 9,
            created_at: "2024-01-15 10:30:00".to_string(),
        }
    }

    #[test]
    fn test_recipe_to_string_with_all_fields() {
        let output = cookies().to_string();

        assert!(output.contains("Recipe: Chocolate Chip Cookies"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("Servings: 24"));
        assert!(output.contains("- 2 cups flour"));
        assert!(output.contains("- 2 eggs"));
        assert!(output.contains("- pinch of salt"));
        assert!(output.contains("Mix and bake at 350°F for 12 minutes"));
    }

    #[test]
    fn test_recipe_to_string_without_instructions() {
        let recipe = Recipe {
            instructions: None,
            ..cookies()
        };

        assert!(!recipe.to_string().contains("Instructions:"));
    }

    #[test]
    fn test_recipe_from_record_decodes_ingredients() {
        let record = RecipeRecord {
            id: 3,
            name: "Rice".to_string(),
            ingredients: r#"[{"quantity":1.0,"unit":"cup","item":"rice"}]"#.to_string(),
            instructions: None,
            servings: 2,
            author_id: 5,
            created_at: "2024-01-15 10:30:00".to_string(),
        };

        let recipe = Recipe::try_from(record).expect("Failed to convert record");

        assert_eq!(recipe.ingredients, vec![IngredientRecord::new(1.0, "cup", "rice")]);
        assert_eq!(recipe.ingredient_lines(), "- 1 cup rice");
    }

    #[test]
    fn test_recipe_from_record_with_corrupt_ingredients() {
        let record = RecipeRecord {
            id: 3,
            name: "Broken".to_string(),
            ingredients: "not json".to_string(),
            instructions: None,
            servings: 1,
            author_id: 5,
            created_at: String::new(),
        };

        assert!(matches!(
            Recipe::try_from(record),
            Err(crate::error::RecipeBotError::Serialization(_))
        ));
    }
}
