//! End-to-end browsing over the catalog
//!
//! Exercises filter engine and view state machine together the way a front
//! end drives them: type a query, pick a category, open an entry, go back.

use libkaomoji::{filter_entries, Category, CategoryFilter, Dataset, Kaomoji, View, ViewState};

fn love_and_angry() -> Dataset {
    Dataset::new(vec![
        Category::new("Love", vec![Kaomoji::new("(^_^)", &["happy", "love"])]),
        Category::new("Angry", vec![Kaomoji::new("(>_<)", &["mad"])]),
    ])
}

#[test]
fn test_love_and_angry_scenario() {
    let dataset = love_and_angry();

    let lo = filter_entries(&dataset, &CategoryFilter::All, "lo");
    assert_eq!(lo, vec![&Kaomoji::new("(^_^)", &[])]);

    let angry = filter_entries(&dataset, &"Angry".into(), "");
    assert_eq!(angry, vec![&Kaomoji::new("(>_<)", &[])]);

    let mut state = ViewState::new();
    let before = state.clone();
    state.select_entry(Kaomoji::new("(^_^)", &["happy", "love"]));
    state.back();
    assert_eq!(state, before);
    assert_eq!(state.view, View::Listing);
}

#[test]
fn test_every_result_matches_and_every_match_is_returned() {
    let dataset = Dataset::builtin();

    for query in ["cat", "SAD", "wave", "ω", "table flip", "(", "zzz"] {
        let result = filter_entries(&dataset, &CategoryFilter::All, query);
        let needle = query.to_lowercase();
        let matches = |k: &Kaomoji| {
            k.symbol.to_lowercase().contains(&needle)
                || k.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        };

        assert!(result.iter().all(|k| matches(k)), "unsound result for {:?}", query);

        let expected: Vec<&Kaomoji> = dataset.entries().filter(|k| matches(k)).collect();
        assert_eq!(result, expected, "incomplete result for {:?}", query);
    }
}

#[test]
fn test_every_category_lists_its_entries_in_order() {
    let dataset = Dataset::builtin();
    for category in &dataset.categories {
        let result = filter_entries(&dataset, &category.name.as_str().into(), "");
        let expected: Vec<&Kaomoji> = category.entries.iter().collect();
        assert_eq!(result, expected);
    }
}

#[test]
fn test_change_category_from_any_detail_returns_to_listing() {
    let dataset = Dataset::builtin();
    for entry in dataset.entries() {
        for name in dataset.category_names() {
            let mut state = ViewState::new();
            state.set_search_query("a");
            state.select_entry(entry.clone());
            state.change_category(name);

            assert!(state.is_listing());
            assert_eq!(state.selected_category.name(), name);
            assert_eq!(state.search_query, "a");
        }
    }
}

#[test]
fn test_related_entries_include_open_entry() {
    let dataset = Dataset::builtin();
    let cat = dataset.find_by_symbol("(=^･ω･^=)").unwrap().clone();

    let mut state = ViewState::new();
    state.select_entry(cat.clone());

    let related = state.related(&dataset).unwrap();
    assert_eq!(related.category_name, Some("Animals"));
    assert!(related.entries.contains(&cat));
    assert_eq!(related.entries, dataset.find_category("Animals").unwrap().entries.as_slice());
}

#[test]
fn test_related_hop_keeps_filters() {
    let dataset = Dataset::builtin();
    let mut state = ViewState::with_category("Animals".into());
    state.set_search_query("bear");

    let first = state.visible_entries(&dataset)[0].clone();
    state.select_entry(first);

    let next = state.related(&dataset).unwrap().entries[0].clone();
    state.select_entry(next.clone());

    assert_eq!(state.open_entry(), Some(&next));
    assert_eq!(state.search_query, "bear");
    assert_eq!(state.selected_category, CategoryFilter::Named("Animals".to_string()));

    state.back();
    assert_eq!(state.visible_entries(&dataset).len(), 1);
}
