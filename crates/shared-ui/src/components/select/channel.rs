use dioxus::prelude::*;

use super::value::SelectValue;

/// Capability a `Select` hands to each option it renders: the effective
/// value, and the one callback that commits a pick.
///
/// Only `Select` can build one, and `SelectOption` takes it as a required
/// prop, so an option cannot be rendered outside a select.
#[derive(Clone, PartialEq)]
pub struct SelectionChannel {
    value: Option<SelectValue>,
    on_select: Callback<SelectValue>,
}

impl SelectionChannel {
    pub(super) fn new(value: Option<SelectValue>, on_select: Callback<SelectValue>) -> Self {
        Self { value, on_select }
    }

    pub fn value(&self) -> Option<&SelectValue> {
        self.value.as_ref()
    }

    pub fn is_selected(&self, value: &SelectValue) -> bool {
        self.value.as_ref() == Some(value)
    }

    pub fn select(&self, value: SelectValue) {
        self.on_select.call(value);
    }
}
