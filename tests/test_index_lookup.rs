use cookbook_extract::{parse_cookbook, ExtractError};

const CORPUS: &str = "CHEESE SAUCE

Stir in 2 cups grated sharp cheese.

WAFFLES WITH PINEAPPLE

_Perfect match for smoked ham._

Make Waffle batter (p. 2). Bake. Serve with pineapple.
";

#[test]
fn test_lookup_is_quote_tolerant() {
    let index = parse_cookbook(CORPUS);
    let raw = index.lookup("CHEESE SAUCE").unwrap();
    let quoted = index.lookup("\"CHEESE SAUCE\"").unwrap();
    let curly = index.lookup("“CHEESE SAUCE”").unwrap();
    assert_eq!(raw, quoted);
    assert_eq!(raw, curly);
    assert_eq!(raw.instructions, "Stir in 2 cups grated sharp cheese.");
}

#[test]
fn test_all_variants_reach_the_same_record() {
    let index = parse_cookbook(CORPUS);
    let notes = &index.lookup("WAFFLES WITH PINEAPPLE").unwrap().notes;
    assert_eq!(notes, "Perfect match for smoked ham.");
    assert_eq!(
        index.lookup("\"WAFFLES WITH PINEAPPLE\"").unwrap().notes,
        *notes
    );
}

#[test]
fn test_unknown_title_is_a_lookup_miss() {
    let index = parse_cookbook(CORPUS);
    match index.lookup("WATERMELON SALAD") {
        Err(ExtractError::RecipeNotFound(title)) => assert_eq!(title, "WATERMELON SALAD"),
        other => panic!("expected a lookup miss, got {other:?}"),
    }
}

#[test]
fn test_index_preserves_corpus_order() {
    let index = parse_cookbook(CORPUS);
    let titles: Vec<_> = index.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["CHEESE SAUCE", "WAFFLES WITH PINEAPPLE"]);
    assert_eq!(index.len(), 2);

    // Tearing the index back down hands the same ordered list back.
    let recipes = index.into_recipes();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "CHEESE SAUCE");
}
