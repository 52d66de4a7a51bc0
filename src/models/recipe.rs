use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RecipeRecord {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: Option<String>,
    pub servings: i64,
    pub author_id: i64,
    pub created_at: String,
}
