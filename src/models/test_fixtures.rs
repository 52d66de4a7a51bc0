use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use super::IngredientRecord;

/// Test fixture that creates an in-memory SQLite database with migrations applied
#[fixture]
pub async fn test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Ingredients for a small pancake recipe
#[fixture]
pub fn pancake_ingredients() -> Vec<IngredientRecord> {
    vec![
        IngredientRecord::new(2.0, "cup", "Flour"),
        IngredientRecord::new(2.0, "", "eggs"),
        IngredientRecord::new(1.5, "cup", "milk"),
        IngredientRecord::unquantified("salt to taste"),
    ]
}

/// Ingredients for a waffle recipe sharing some keys with the pancakes
#[fixture]
pub fn waffle_ingredients() -> Vec<IngredientRecord> {
    vec![
        IngredientRecord::new(2.5, "cup", "flour"),
        IngredientRecord::new(3.0, "", "Eggs"),
        IngredientRecord::new(0.5, "cup", "butter"),
        IngredientRecord::new(1.0, "", "flour"),
    ]
}
