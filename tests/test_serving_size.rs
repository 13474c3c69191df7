//! Yield phrasings from the booklet, straight through the public API.

use cookbook_extract::{parse_recipes, ServingSize};

fn serving_of(span: &str) -> ServingSize {
    let recipes = parse_recipes(span);
    assert_eq!(recipes.len(), 1, "span should parse to one recipe");
    recipes[0].serving_size
}

#[test]
fn test_plain_makes() {
    assert_eq!(
        serving_of("CELERY CRESCENTS\n\nRoll dough thin and shape. Makes 16.\n"),
        ServingSize(16, 16)
    );
}

#[test]
fn test_wrapped_makes() {
    assert_eq!(
        serving_of("BUTTONS AND BOWKNOTS\n\nShape dough and fry. _Makes 10._\n"),
        ServingSize(10, 10)
    );
}

#[test]
fn test_makes_range() {
    assert_eq!(
        serving_of("HUSH PUPPIES\n\nFry until golden. _Makes 15 to 20._\n"),
        ServingSize(15, 20)
    );
}

#[test]
fn test_dozen_range_with_glyph() {
    assert_eq!(
        serving_of("PUDDING COOKIES\n\nDrop by spoonfuls. _Makes 2½ to 3 doz. cookies._\n"),
        ServingSize(30, 36)
    );
}

#[test]
fn test_dozen_single() {
    assert_eq!(
        serving_of("DROP BISCUITS\n\nDrop onto sheet. _Makes 2 doz._\n"),
        ServingSize(24, 24)
    );
}

#[test]
fn test_servings_phrase() {
    assert_eq!(
        serving_of("CHICKEN SHORTCAKE\n\nSpoon over hot biscuits. 4 to 6 servings.\n"),
        ServingSize(4, 6)
    );
}

#[test]
fn test_unresolved_yield_defaults_to_zero() {
    assert_eq!(
        serving_of("CHEESE SAUCE\n\nStir in 2 cups grated sharp cheese.\n"),
        ServingSize(0, 0)
    );
}
