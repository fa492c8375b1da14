use std::collections::HashSet;

use culinary_catalog::query::{apply, SearchCriteria, TimeFilter};
use culinary_catalog::{search_recipes, Difficulty, RecipeQuery, RecipeStore};

#[test]
fn test_noop_criteria_return_the_full_catalog_in_default_order() {
    let store = RecipeStore::builtin();
    let result = apply(store.recipes(), &SearchCriteria::default());

    let input_ids: HashSet<&str> = store.recipes().map(|r| r.id.as_str()).collect();
    let output_ids: HashSet<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(input_ids, output_ids);

    // Default sort is popularity, descending by review count.
    for pair in result.windows(2) {
        assert!(pair[0].reviews >= pair[1].reviews);
    }
    assert_eq!(result[0].id, "mh-1", "Vada Pav has the most reviews");
}

#[test]
fn test_text_query_matches_title_description_tags_and_chef() {
    let hits = search_recipes("dosa");
    let ids: HashSet<&str> = hits.iter().map(|r| r.id.as_str()).collect();
    // Exactly the two Masala Dosa records; Idli Sambar and the batter-based
    // Uttapam do not mention dosa in any searched field.
    assert_eq!(ids, HashSet::from(["south-1", "tn-2"]));

    // Chef names are searched too.
    let by_chef = search_recipes("nair");
    let chef_ids: HashSet<&str> = by_chef.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(chef_ids, HashSet::from(["south-2", "kl-1"]));

    // Tag substrings count: "street" only appears as a Vada Pav tag.
    let by_tag = search_recipes("street");
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, "mh-1");
}

#[test]
fn test_text_query_is_case_insensitive() {
    let lower = search_recipes("biryani");
    let upper = search_recipes("BIRYANI");
    let lower_ids: Vec<&str> = lower.iter().map(|r| r.id.as_str()).collect();
    let upper_ids: Vec<&str> = upper.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(lower_ids, upper_ids);
    assert!(!lower.is_empty());
}

#[test]
fn test_empty_query_passes_everything() {
    let store = RecipeStore::builtin();
    assert_eq!(search_recipes("").len(), store.len());
}

#[test]
fn test_unmatched_query_returns_empty_not_error() {
    assert!(search_recipes("zzzz-no-such-dish").is_empty());
}

#[test]
fn test_difficulty_filter_is_exact() {
    let store = RecipeStore::builtin();
    let hard = RecipeQuery::new().difficulty(Difficulty::Hard).run(store);
    assert!(!hard.is_empty());
    assert!(hard.iter().all(|r| r.difficulty == Difficulty::Hard));

    let easy = RecipeQuery::new().difficulty(Difficulty::Easy).run(store);
    let easy_ids: HashSet<&str> = easy.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(easy_ids, HashSet::from(["south-2", "south-3", "tn-3"]));
}

#[test]
fn test_diet_filter_matches_tag_substrings() {
    let store = RecipeStore::builtin();
    let veg = RecipeQuery::new().diet("vegetarian").run(store);
    // Substring semantics: "vegetarian" also matches the "Non-Vegetarian"
    // tag, so both camps come back. This mirrors the source behavior.
    assert!(veg.iter().any(|r| r.tags.contains(&"Vegetarian".to_string())));
    assert!(veg
        .iter()
        .any(|r| r.tags.contains(&"Non-Vegetarian".to_string())));

    let coastal = RecipeQuery::new().diet("coastal").run(store);
    assert_eq!(coastal.len(), 1);
    assert_eq!(coastal[0].id, "kl-1");
}

#[test]
fn test_time_buckets_on_leading_minutes() {
    let store = RecipeStore::builtin();

    let quick = RecipeQuery::new().time(TimeFilter::Quick).run(store);
    let quick_ids: HashSet<&str> = quick.iter().map(|r| r.id.as_str()).collect();
    assert!(quick_ids.contains("south-1")); // 25 mins
    assert!(quick_ids.contains("south-2")); // 30 mins, boundary inclusive
    assert!(!quick_ids.contains("tn-1")); // 45 mins

    let medium = RecipeQuery::new().time(TimeFilter::Medium).run(store);
    let medium_ids: HashSet<&str> = medium.iter().map(|r| r.id.as_str()).collect();
    assert!(medium_ids.contains("tn-1")); // 45 mins
    assert!(medium_ids.contains("kl-1")); // 35 mins
    assert!(!medium_ids.contains("south-2"));
}

#[test]
fn test_time_bucket_quirk_hours_parse_as_minutes() {
    // "2 hours" yields a leading integer of 2, so the biryani lands in the
    // Quick bucket. Preserved source behavior; this test pins it.
    let store = RecipeStore::builtin();
    let quick = RecipeQuery::new().time(TimeFilter::Quick).run(store);
    let quick_ids: HashSet<&str> = quick.iter().map(|r| r.id.as_str()).collect();
    assert!(quick_ids.contains("featured-2")); // "2 hours"
    assert!(quick_ids.contains("tn-2")); // "12 hours"
    assert!(quick_ids.contains("ap-1")); // "2.5 hours" -> 2

    let long = RecipeQuery::new().time(TimeFilter::Long).run(store);
    assert!(
        long.is_empty(),
        "no record's leading integer exceeds 60 despite multi-hour recipes"
    );
}

#[test]
fn test_filters_compose() {
    let store = RecipeStore::builtin();
    let hits = RecipeQuery::new()
        .text("traditional")
        .difficulty(Difficulty::Medium)
        .time(TimeFilter::Quick)
        .run(store);
    for recipe in &hits {
        assert_eq!(recipe.difficulty, Difficulty::Medium);
    }
    let ids: HashSet<&str> = hits.iter().map(|r| r.id.as_str()).collect();
    assert!(ids.contains("south-1"));
}

#[test]
fn test_pipeline_does_not_mutate_the_store() {
    let store = RecipeStore::builtin();
    let before: Vec<&str> = store.recipes().map(|r| r.id.as_str()).collect();
    let _ = RecipeQuery::new().text("dosa").run(store);
    let after: Vec<&str> = store.recipes().map(|r| r.id.as_str()).collect();
    assert_eq!(before, after);
}
