use std::sync::LazyLock;

use regex::Regex;

use crate::models::IngredientRecord;

/// Optional number, optional unit word, then whitespace and the item.
///
/// The unit is greedy, so `2 large eggs` reads `large` as the unit. When the
/// line has only a number and one word the unit is given up so the mandatory
/// whitespace can still match, which is why `1 egg` keeps `egg` as the item.
static INGREDIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)?\s*([A-Za-z]+)?\s+(.+)$").expect("ingredient pattern is valid")
});

/// Parse a block of ingredient text, one ingredient per line
///
/// Blank lines are skipped; every other line yields exactly one record.
pub fn parse(text: &str) -> Vec<IngredientRecord> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

/// Parse a single, already trimmed, non-blank line
///
/// Lines without a leading number, or with a number too large to represent,
/// are kept whole with a quantity of `0`.
pub fn parse_line(line: &str) -> IngredientRecord {
    let Some(captures) = INGREDIENT_LINE.captures(line) else {
        return IngredientRecord::unquantified(line);
    };

    // Overflowing numbers parse to infinity, which the JSON column cannot hold
    let quantity = captures
        .get(1)
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .filter(|quantity| quantity.is_finite());

    match quantity {
        Some(quantity) => IngredientRecord {
            quantity,
            unit: captures
                .get(2)
                .map(|unit| unit.as_str().to_string())
                .unwrap_or_default(),
            item: captures[3].trim().to_string(),
        },
        None => IngredientRecord::unquantified(line),
    }
}
