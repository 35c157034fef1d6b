use super::*;

fn visible_options() -> FacetToggleOptions {
    FacetToggleOptions {
        initially_hidden: false,
        ..FacetToggleOptions::default()
    }
}

#[test]
fn default_options_match_search_results_markup() {
    let options = FacetToggleOptions::default();
    assert_eq!(options.collapsed_text, "Show filter options");
    assert_eq!(options.expanded_text, "Hide filter options");
    assert!(options.initially_hidden);
}

#[test]
fn fresh_model_is_visible_with_expanded_label() {
    let options = visible_options();
    let model = ToggleModel::new(&options);
    assert!(model.visible);
    assert!(!model.collapsed);
    assert_eq!(model.label, "Hide filter options");
}

#[test]
fn initially_hidden_applies_one_activation_at_construction() {
    let model = ToggleModel::new(&FacetToggleOptions::default());
    assert!(!model.visible);
    assert!(model.collapsed);
    assert_eq!(model.label, "Show filter options");
}

#[test]
fn two_activations_restore_the_original_state() {
    let options = visible_options();
    let original = ToggleModel::new(&options);
    let mut model = original.clone();
    model.activate(&options);
    assert_ne!(model, original);
    model.activate(&options);
    assert_eq!(model, original);
}

#[test]
fn activation_swaps_on_label_text_not_internal_state() {
    let options = visible_options();
    let mut model = ToggleModel::new(&options);
    // A label that matches neither configured text falls to the collapsed
    // text, mirroring the textual swap in the search results markup.
    model.label = "Something else".to_owned();
    model.activate(&options);
    assert_eq!(model.label, "Show filter options");
    model.activate(&options);
    assert_eq!(model.label, "Hide filter options");
}
