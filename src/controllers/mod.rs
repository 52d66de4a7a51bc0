mod recipe_controller;
mod shopping_list_controller;

pub use recipe_controller::{
    NewRecipe, create_recipe, delete_recipe, get_recipe, get_recipes, list_recipes,
    search_recipes,
};
pub use shopping_list_controller::{MAX_SHOPPING_LIST_RECIPES, generate_shopping_list};
