//! Spans lifted from the scanned booklet, exercised end to end.

use std::sync::Arc;

use cookbook_extract::{parse_recipes, CookbookParser, MemorySink, ServingSize, TraceEvent};

const JAM_TWISTS: &str = "    [Illustration: JAM TWISTS]

(_Pictured on inside of back cover._)

  1 egg
  ½ cup cream or ⅓ cup milk
  2 cups Bisquick
  2 tbsp. sugar
  ⅓ cup _thick_ jam or preserves

Heat oven to 450° (hot). Grease brown paper and lay on baking sheet.
Blend egg and cream together. Stir in Bisquick and sugar until well
blended. Roll into a 15x9″ rectangle. Spread with jam. Cut in 1″
strips. Twist each strip and place on greased paper. Bake _10 to 12
min._ Dust tops with confectioners' sugar. Remove immediately.
_Makes 15._
";

const DEVILED_HAM_TURNOVERS: &str = "                        DEVILED HAM TURNOVERS

Heat oven to 450° (hot). Make Biscuit dough (p. 3). Roll into 15″
square. Cut into twenty-five 3″ squares. Spoon a little Ham Filling
onto center of each square. Press edges together with a fork dipped
in cold water. Bake _8 to 10 min._

_Ham Filling:_ Blend two 2¼-oz. cans deviled ham and 2 tbsp. cream.
";

#[test]
fn test_jam_twists_ingredients_lose_only_the_emphasis_marker() {
    let recipes = parse_recipes(JAM_TWISTS);
    assert_eq!(recipes.len(), 1);
    assert_eq!(
        recipes[0].ingredients,
        vec![
            "1 egg",
            "½ cup cream or ⅓ cup milk",
            "2 cups Bisquick",
            "2 tbsp. sugar",
            "⅓ cup thick jam or preserves",
        ]
    );
}

#[test]
fn test_jam_twists_instructions_drop_the_yield_but_keep_the_timing() {
    let recipes = parse_recipes(JAM_TWISTS);
    let instructions = &recipes[0].instructions;
    assert!(instructions.contains("Bake 10 to 12 min. Dust tops"));
    assert!(instructions.ends_with("Remove immediately."));
    assert!(!instructions.contains("Makes 15"));
}

#[test]
fn test_jam_twists_serving_size_and_notes() {
    let recipes = parse_recipes(JAM_TWISTS);
    assert_eq!(recipes[0].serving_size, ServingSize(15, 15));
    // The parenthesized caption is not emphasis-wrapped, so it is not a note.
    assert_eq!(recipes[0].notes, "");
}

#[test]
fn test_sub_component_block_lands_after_the_main_stream() {
    let recipes = parse_recipes(DEVILED_HAM_TURNOVERS);
    assert_eq!(
        recipes[0].instructions,
        "Heat oven to 450° (hot). Make Biscuit dough (p. 3). Roll into 15″ \
         square. Cut into twenty-five 3″ squares. Spoon a little Ham Filling \
         onto center of each square. Press edges together with a fork dipped \
         in cold water. Bake 8 to 10 min. \
         Ham Filling: Blend two 2¼-oz. cans deviled ham and 2 tbsp. cream."
    );
    // The filling paragraph never reads as an ingredient block.
    assert_eq!(recipes[0].ingredients_text(), "");
}

#[test]
fn test_trace_sink_observes_ingredient_cleaning() {
    let sink = Arc::new(MemorySink::new());
    CookbookParser::new()
        .with_trace(sink.clone())
        .parse_recipes(JAM_TWISTS);
    assert!(sink.events().contains(&TraceEvent::IngredientCleaned {
        raw: "⅓ cup _thick_ jam or preserves".into(),
        cleaned: "⅓ cup thick jam or preserves".into(),
    }));
}

#[test]
fn test_untraced_run_produces_identical_records() {
    let sink = Arc::new(MemorySink::new());
    let traced = CookbookParser::new()
        .with_trace(sink)
        .parse_recipes(JAM_TWISTS);
    assert_eq!(traced, parse_recipes(JAM_TWISTS));
}
