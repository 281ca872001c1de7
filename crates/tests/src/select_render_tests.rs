//! Server-side renders of `Select` fed with the embedded country dataset.

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::{Select, SelectOptionData, SelectValue};

use crate::common::country_options;

fn dataset_options() -> Vec<SelectOptionData> {
    let countries = server::dataset::countries().expect("country dataset");
    country_options(countries, &["Anguilla"])
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn default_country_is_shown_on_first_render() {
    let html = render(|| {
        rsx! {
            Select {
                label: "Country:",
                default_value: SelectValue::from("New Zealand"),
                placeholder: "Please select one country",
                options: dataset_options(),
            }
        }
    });

    assert!(html.contains(r#"value="New Zealand""#));
    assert!(html.contains(r#"data-placeholder="false""#));
}

#[test]
fn controlled_value_beats_the_default() {
    let html = render(|| {
        rsx! {
            Select {
                value: SelectValue::from("France"),
                default_value: SelectValue::from("New Zealand"),
                placeholder: "Please select one country",
                options: dataset_options(),
            }
        }
    });

    assert!(html.contains(r#"value="France""#));
    assert!(!html.contains(r#"value="New Zealand""#));
}

#[test]
fn disabled_country_still_resolves_its_label() {
    let html = render(|| {
        rsx! {
            Select {
                value: SelectValue::from("Anguilla"),
                placeholder: "Please select one country",
                options: dataset_options(),
            }
        }
    });

    assert!(html.contains(r#"value="Anguilla""#));
}

#[test]
fn loading_select_renders_closed_without_rows() {
    let html = render(|| {
        rsx! {
            Select {
                loading: true,
                placeholder: "Please select one country",
                options: dataset_options(),
            }
        }
    });

    assert!(html.contains(r#"data-state="closed""#));
    assert_eq!(html.matches("select-option").count(), 0);
    assert!(!html.contains("Loading..."));
}

#[test]
fn error_select_keeps_its_default() {
    let html = render(|| {
        rsx! {
            Select {
                error_message: "Something went wrong",
                helper_text: "Select with error",
                default_value: SelectValue::from("New Zealand"),
                options: dataset_options(),
            }
        }
    });

    assert!(html.contains(r#"value="New Zealand""#));
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("Select with error"));
}
