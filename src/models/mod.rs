mod ingredient;
mod recipe;
mod shopping_list;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use ingredient::{IngredientRecord, decode_ingredients, encode_ingredients};
pub use recipe::RecipeRecord;
pub use shopping_list::{ShoppingListEntry, shopping_list_key};
