//! Keyboard walks over the real country list, with Anguilla disabled the
//! way the first demo showcase does it.

use pretty_assertions::assert_eq;
use shared_ui::{KeyOutcome, SelectKey, SelectOptionData, SelectState, SelectValue};

use crate::common::*;

async fn options() -> Vec<SelectOptionData> {
    let countries = fetch_countries(&test_app()).await;
    country_options(&countries, &["Anguilla"])
}

fn label_at(options: &[SelectOptionData], index: Option<usize>) -> Option<&str> {
    index.map(|i| options[i].label.as_str())
}

#[tokio::test]
async fn arrow_down_skips_the_disabled_country() {
    let options = options().await;
    let mut state = SelectState::new(None);

    state.handle_key(SelectKey::ArrowDown, &options, None, false);
    assert_eq!(label_at(&options, state.highlighted()), Some("Andorra"));

    state.handle_key(SelectKey::ArrowDown, &options, None, false);
    assert_eq!(label_at(&options, state.highlighted()), Some("Argentina"));

    state.handle_key(SelectKey::ArrowUp, &options, None, false);
    assert_eq!(label_at(&options, state.highlighted()), Some("Andorra"));
}

#[tokio::test]
async fn arrow_up_from_the_top_wraps_to_the_last_country() {
    let options = options().await;
    let mut state = SelectState::new(None);

    state.handle_key(SelectKey::ArrowDown, &options, None, false);
    state.handle_key(SelectKey::ArrowUp, &options, None, false);
    assert_eq!(label_at(&options, state.highlighted()), Some("South Africa"));
}

#[tokio::test]
async fn opening_highlights_the_default_country() {
    let options = options().await;
    let mut state = SelectState::new(Some(SelectValue::from("New Zealand")));

    state.handle_key(SelectKey::ArrowDown, &options, None, false);
    assert_eq!(label_at(&options, state.highlighted()), Some("New Zealand"));
}

#[tokio::test]
async fn enter_commits_and_closes() {
    let options = options().await;
    let mut state = SelectState::new(None);

    state.handle_key(SelectKey::End, &options, None, false);
    assert!(!state.is_open());

    state.handle_key(SelectKey::ArrowDown, &options, None, false);
    state.handle_key(SelectKey::End, &options, None, false);
    let outcome = state.handle_key(SelectKey::Enter, &options, None, false);

    assert_eq!(
        outcome,
        KeyOutcome::Committed(SelectValue::from("South Africa"))
    );
    assert!(!state.is_open());
    assert_eq!(state.highlighted(), None);
    assert_eq!(state.internal_value(), Some(&SelectValue::from("South Africa")));
}

#[tokio::test]
async fn controlled_commit_leaves_the_external_value_in_charge() {
    let options = options().await;
    let external = SelectValue::from("France");
    let mut state = SelectState::new(None);

    state.handle_key(SelectKey::ArrowDown, &options, Some(&external), false);
    assert_eq!(label_at(&options, state.highlighted()), Some("France"));

    state.handle_key(SelectKey::ArrowDown, &options, Some(&external), false);
    let outcome = state.handle_key(SelectKey::Enter, &options, Some(&external), false);

    assert!(matches!(outcome, KeyOutcome::Committed(_)));
    assert_eq!(state.effective_value(Some(&external)), Some(&external));
}

#[tokio::test]
async fn disabled_select_ignores_every_key() {
    let options = options().await;
    let mut state = SelectState::new(Some(SelectValue::from("New Zealand")));

    for key in [SelectKey::Enter, SelectKey::Space, SelectKey::ArrowDown, SelectKey::End] {
        assert_eq!(
            state.handle_key(key, &options, None, true),
            KeyOutcome::Ignored
        );
    }
    assert!(!state.is_open());
}

#[tokio::test]
async fn disabled_country_cannot_be_committed() {
    let options = options().await;
    let anguilla = options
        .iter()
        .find(|option| option.label == "Anguilla")
        .expect("Anguilla in dataset");
    let mut state = SelectState::new(None);

    state.toggle(false);
    assert_eq!(state.commit(anguilla), None);
    assert!(state.is_open());
    assert_eq!(state.internal_value(), None);
}
