use dioxus::prelude::*;
use shared_types::{AppError, CountryMap};
use shared_ui::{label_options, Select, SelectValue};

const LABEL: &str = "Country:";
const PLACEHOLDER: &str = "Please select one country";
const DEFAULT_COUNTRY: &str = "New Zealand";
/// Shown but not pickable in the first showcase.
const UNAVAILABLE_COUNTRY: &str = "Anguilla";

/// Line printed under the controlled showcases.
pub fn tip(country: Option<&SelectValue>) -> String {
    match country {
        Some(country) => format!("I am going to {country}!"),
        None => "Where will you go?".to_string(),
    }
}

/// Country names in dataset order.
pub fn country_names(countries: &CountryMap) -> Vec<String> {
    shared_types::country_list(countries)
        .into_iter()
        .map(|country| country.name)
        .collect()
}

/// Demo page: fetches the countries and renders every showcase.
#[component]
pub fn Demo() -> Element {
    let countries = use_resource(|| async move { server::api::list_countries().await });

    let (names, loading, error) = match &*countries.read() {
        None => (Vec::new(), true, String::new()),
        Some(Ok(countries)) => (country_names(countries), false, String::new()),
        Some(Err(e)) => {
            let message = AppError::friendly_message(&e.to_string());
            tracing::warn!(error = %message, "failed to load countries");
            (Vec::new(), false, message)
        }
    };

    rsx! {
        DemoShowcases { names, loading, error }
    }
}

/// The six select showcases over an already-resolved country list.
#[component]
pub fn DemoShowcases(names: Vec<String>, loading: bool, error: String) -> Element {
    let mut country = use_signal(|| None::<SelectValue>);
    let mut country_with_default = use_signal(|| None::<SelectValue>);

    let options = label_options(&names, &[]);
    let first_options = label_options(&names, &[UNAVAILABLE_COUNTRY]);
    let default_country = SelectValue::from(DEFAULT_COUNTRY);
    let country_tip = tip(country.read().as_ref());
    let country_with_default_tip = tip(country_with_default.read().as_ref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./demo.css") }

        div { class: "demo",
            div { class: "select-demo",
                h1 { "Controlled select" }
                Select {
                    label: LABEL,
                    value: country(),
                    helper_text: "Controlled select",
                    placeholder: PLACEHOLDER,
                    loading,
                    error_message: error,
                    on_change: move |value: SelectValue| country.set(Some(value)),
                    options: first_options,
                }
                p { class: "select-demo-tip", "{country_tip}" }
            }

            div { class: "select-demo",
                h1 { "Controlled select with default value" }
                Select {
                    label: LABEL,
                    value: country_with_default(),
                    default_value: default_country.clone(),
                    helper_text: "Controlled select with default value",
                    placeholder: PLACEHOLDER,
                    on_change: move |value: SelectValue| country_with_default.set(Some(value)),
                    options: options.clone(),
                }
                p { class: "select-demo-tip", "{country_with_default_tip}" }
            }

            div { class: "select-demo",
                h1 { "Uncontrolled select" }
                Select {
                    label: LABEL,
                    helper_text: "Uncontrolled select",
                    placeholder: PLACEHOLDER,
                    options: options.clone(),
                }
            }

            div { class: "select-demo",
                h1 { "Uncontrolled select with default value" }
                Select {
                    label: LABEL,
                    default_value: default_country.clone(),
                    helper_text: "Uncontrolled select with default value",
                    placeholder: PLACEHOLDER,
                    options: options.clone(),
                }
            }

            div { class: "select-demo",
                h1 { "Disabled select" }
                Select {
                    disabled: true,
                    label: LABEL,
                    default_value: default_country.clone(),
                    helper_text: "Select is disabled",
                    placeholder: PLACEHOLDER,
                    options: options.clone(),
                }
            }

            div { class: "select-demo",
                h1 { "Select with error" }
                Select {
                    error_message: "Something went wrong",
                    label: LABEL,
                    default_value: default_country,
                    helper_text: "Select with error",
                    placeholder: PLACEHOLDER,
                    options,
                }
            }
        }
    }
}
