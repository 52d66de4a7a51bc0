mod aggregator;
mod parser;

pub use aggregator::{ShoppingList, aggregate};
pub use parser::{parse, parse_line};
