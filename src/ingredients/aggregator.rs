use indexmap::IndexMap;

use crate::models::{IngredientRecord, ShoppingListEntry, shopping_list_key};

/// Combined entries keyed by normalized ingredient key, in first-seen order
pub type ShoppingList = IndexMap<String, ShoppingListEntry>;

/// Merge the ingredients of several recipes into one shopping list
///
/// Each recipe comes with its serving count, which is accepted but not used:
/// quantities are summed as written. Records only merge when both the
/// lowercased item and the lowercased unit match.
pub fn aggregate<'a, I>(recipes: I) -> ShoppingList
where
    I: IntoIterator<Item = (&'a [IngredientRecord], i64)>,
{
    let mut shopping_list = ShoppingList::new();

    for (ingredients, _servings) in recipes {
        for record in ingredients {
            shopping_list
                .entry(shopping_list_key(record))
                .and_modify(|entry| entry.quantity += record.quantity)
                .or_insert_with(|| ShoppingListEntry::from(record));
        }
    }

    shopping_list
}
