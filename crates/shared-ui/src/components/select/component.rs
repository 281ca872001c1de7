use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdChevronDown, LdChevronUp};
use dioxus_free_icons::Icon;

use super::channel::SelectionChannel;
use super::display::{display_text, helper_line, panel_content, HelperLine, PanelContent};
use super::state::{KeyOutcome, SelectKey, SelectState};
use super::value::{SelectOptionData, SelectValue};

static NEXT_SELECT_ID: AtomicUsize = AtomicUsize::new(0);

fn select_key(key: &Key) -> Option<SelectKey> {
    match key {
        Key::Enter => Some(SelectKey::Enter),
        Key::Escape => Some(SelectKey::Escape),
        Key::ArrowDown => Some(SelectKey::ArrowDown),
        Key::ArrowUp => Some(SelectKey::ArrowUp),
        Key::Home => Some(SelectKey::Home),
        Key::End => Some(SelectKey::End),
        Key::Character(c) if c == " " => Some(SelectKey::Space),
        _ => None,
    }
}

/// A dropdown select with controlled and uncontrolled modes.
///
/// Pass `value` to control it: the trigger then always shows the caller's
/// value and picks only reach the caller through `on_change`. Without
/// `value` the select keeps its own selection, seeded from `default_value`
/// and reset whenever `default_value` changes.
///
/// The panel closes on a pick, on a second trigger click, on Escape, and on
/// any click outside the control.
#[component]
pub fn Select(
    /// Controlled value. Wins over the internal selection when set.
    #[props(default)]
    value: Option<SelectValue>,
    /// Initial internal selection; changing it resets the selection.
    #[props(default)]
    default_value: Option<SelectValue>,
    /// Blocks opening and picking.
    #[props(default = false)]
    disabled: bool,
    /// Text shown when no option matches the current value.
    #[props(default)]
    placeholder: String,
    /// Optional label displayed above the trigger.
    #[props(default)]
    label: String,
    /// Helper line under the trigger.
    #[props(default)]
    helper_text: String,
    /// Error line; replaces the helper text and switches to error styling.
    #[props(default)]
    error_message: String,
    /// Show a loading row instead of the options.
    #[props(default = false)]
    loading: bool,
    /// Called once per committed pick.
    #[props(default)]
    on_change: Option<EventHandler<SelectValue>>,
    /// Options in display order.
    #[props(default)]
    options: Vec<SelectOptionData>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut state = use_signal(|| SelectState::new(default_value.clone()));
    let mut trigger: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let input_id = use_hook(|| {
        format!(
            "select-input-{}",
            NEXT_SELECT_ID.fetch_add(1, Ordering::Relaxed)
        )
    });

    use_effect(use_reactive!(|(default_value,)| {
        if state.peek().internal_value() != default_value.as_ref() {
            state.write().reset(default_value);
        }
    }));

    // A select disabled while open stays closed once re-enabled.
    use_effect(use_reactive!(|(disabled,)| {
        if disabled && state.peek().is_open() {
            state.write().dismiss();
        }
    }));

    let effective = state.read().effective_value(value.as_ref()).cloned();
    let display = display_text(&options, effective.as_ref(), &placeholder);
    let open = state.read().is_open() && !disabled;
    let highlighted = state.read().highlighted();

    // Runs after every commit, whichever input produced it.
    let notify = move |committed: SelectValue| {
        tracing::debug!(value = %committed, "select option committed");
        if let Some(element) = trigger() {
            spawn(async move {
                if let Err(e) = element.set_focus(true).await {
                    tracing::debug!(error = ?e, "could not refocus select trigger");
                }
            });
        }
        if let Some(handler) = on_change {
            handler.call(committed);
        }
    };

    let pick_options = options.clone();
    let on_select = use_callback(move |picked: SelectValue| {
        if disabled {
            return;
        }
        let Some(option) = pick_options.iter().find(|option| option.value == picked) else {
            return;
        };
        let committed = state.write().commit(option);
        if let Some(committed) = committed {
            notify(committed);
        }
    });
    let channel = SelectionChannel::new(effective, on_select);

    let key_options = if loading { Vec::new() } else { options.clone() };
    let key_value = value.clone();
    let onkeydown = move |evt: KeyboardEvent| {
        let Some(key) = select_key(&evt.key()) else {
            return;
        };
        let outcome = state
            .write()
            .handle_key(key, &key_options, key_value.as_ref(), disabled);
        match outcome {
            KeyOutcome::Ignored => {}
            KeyOutcome::Handled => evt.prevent_default(),
            KeyOutcome::Committed(committed) => {
                evt.prevent_default();
                notify(committed);
            }
        }
    };

    let panel = match panel_content(loading, options.len()) {
        PanelContent::Loading => rsx! {
            p { class: "select-panel-status", "Loading..." }
        },
        PanelContent::Empty => rsx! {
            p { class: "select-panel-status", "Empty" }
        },
        PanelContent::Options => {
            let rows = options.iter().enumerate().map(|(index, option)| {
                let key = format!("{index}:{}", option.value);
                rsx! {
                    SelectOption {
                        key: "{key}",
                        option: option.clone(),
                        channel: channel.clone(),
                        highlighted: highlighted == Some(index),
                    }
                }
            });
            rsx! { {rows} }
        }
    };

    let helper = match helper_line(&helper_text, &error_message) {
        HelperLine::Hidden => rsx! {},
        HelperLine::Helper(text) => rsx! {
            span { class: "select-helper", "{text}" }
        },
        HelperLine::Error(text) => rsx! {
            span { class: "select-helper", "data-error": "true", "{text}" }
        },
    };

    let base = vec![
        Attribute::new("class", "select", None, false),
        Attribute::new("data-state", if open { "open" } else { "closed" }, None, false),
        Attribute::new("data-disabled", if disabled { "true" } else { "false" }, None, false),
        Attribute::new(
            "data-error",
            if error_message.is_empty() { "false" } else { "true" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        // Outside-click catcher, present only while the panel is open. It sits
        // below the open root, so clicks anywhere inside the root miss it.
        if open {
            div {
                class: "select-backdrop",
                "data-for": "{input_id}",
                onclick: move |_| {
                    if state.write().dismiss() {
                        tracing::debug!("select dismissed by outside click");
                    }
                },
            }
        }
        div {
            ..merged,
            if !label.is_empty() {
                label { class: "select-label", r#for: "{input_id}", "{label}" }
            }
            div { class: "select-wrap",
                div {
                    class: "select-trigger",
                    aria_expanded: if open { "true" } else { "false" },
                    onclick: move |_| {
                        state.write().toggle(disabled);
                    },
                    input {
                        id: "{input_id}",
                        class: "select-input",
                        "data-placeholder": if display.is_placeholder { "true" } else { "false" },
                        r#type: "text",
                        name: "select-input",
                        readonly: true,
                        disabled: disabled,
                        value: display.text.clone(),
                        onmounted: move |evt: MountedEvent| trigger.set(Some(evt.data())),
                        onkeydown: onkeydown,
                    }
                    span { class: "select-chevron",
                        if open {
                            Icon::<LdChevronUp> { icon: LdChevronUp, width: 20, height: 20 }
                        } else {
                            Icon::<LdChevronDown> { icon: LdChevronDown, width: 20, height: 20 }
                        }
                    }
                }
                if open {
                    ul { class: "select-panel", role: "listbox", {panel} }
                }
            }
            {helper}
        }
    }
}

/// One row of a [`Select`] panel.
///
/// Selected state comes from the channel; clicking an enabled row commits
/// its value through the channel, clicking a disabled row does nothing.
#[component]
pub fn SelectOption(
    option: SelectOptionData,
    channel: SelectionChannel,
    #[props(default = false)] highlighted: bool,
) -> Element {
    let selected = channel.is_selected(&option.value);
    let disabled = option.disabled;
    let value = option.value.clone();
    let label = option.label.clone();

    rsx! {
        li {
            class: "select-option",
            role: "option",
            "data-selected": if selected { "true" } else { "false" },
            "data-disabled": if disabled { "true" } else { "false" },
            "data-highlighted": if highlighted { "true" } else { "false" },
            "data-value": "{value}",
            onclick: move |evt| {
                evt.stop_propagation();
                if disabled {
                    return;
                }
                channel.select(value.clone());
            },
            span { class: "select-option-label", "{label}" }
            if selected {
                span { class: "select-option-check",
                    Icon::<LdCheck> { icon: LdCheck, width: 20, height: 20 }
                }
            }
        }
    }
}
