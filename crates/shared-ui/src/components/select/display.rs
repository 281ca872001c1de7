//! Derived presentation for a `Select`: the trigger text, the panel body,
//! and the helper line. Nothing here holds state.

use super::value::{SelectOptionData, SelectValue};

/// Label of the first option whose value equals `value`.
///
/// Duplicate values are not validated; the earliest option wins.
pub fn resolve_label<'a>(
    options: &'a [SelectOptionData],
    value: Option<&SelectValue>,
) -> Option<&'a str> {
    let value = value?;
    options
        .iter()
        .find(|option| option.value == *value)
        .map(|option| option.label.as_str())
}

/// Text shown in the trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayText {
    pub text: String,
    /// True when no option label resolved. Styling only.
    pub is_placeholder: bool,
}

/// Resolve the trigger text: matching label, else placeholder, else empty.
pub fn display_text(
    options: &[SelectOptionData],
    value: Option<&SelectValue>,
    placeholder: &str,
) -> DisplayText {
    match resolve_label(options, value) {
        Some(label) => DisplayText {
            text: label.to_string(),
            is_placeholder: false,
        },
        None => DisplayText {
            text: placeholder.to_string(),
            is_placeholder: true,
        },
    }
}

/// What the open panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent {
    Loading,
    Empty,
    Options,
}

/// Loading beats everything, then an empty list, then the options.
pub fn panel_content(loading: bool, option_count: usize) -> PanelContent {
    if loading {
        PanelContent::Loading
    } else if option_count == 0 {
        PanelContent::Empty
    } else {
        PanelContent::Options
    }
}

/// The line rendered under the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperLine<'a> {
    Hidden,
    Helper(&'a str),
    Error(&'a str),
}

/// An error message takes priority over helper text.
pub fn helper_line<'a>(helper_text: &'a str, error_message: &'a str) -> HelperLine<'a> {
    if !error_message.is_empty() {
        HelperLine::Error(error_message)
    } else if !helper_text.is_empty() {
        HelperLine::Helper(helper_text)
    } else {
        HelperLine::Hidden
    }
}
