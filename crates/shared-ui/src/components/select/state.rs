//! Value and visibility state machine behind the `Select` component.
//!
//! The machine is framework-free: the component feeds it trigger clicks,
//! option picks, outside clicks and key presses, and renders whatever it
//! reports. Every transition is synchronous.

use super::value::{SelectOptionData, SelectValue};

/// Whether the options panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Keys the trigger reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKey {
    Enter,
    Space,
    Escape,
    ArrowDown,
    ArrowUp,
    Home,
    End,
}

/// Result of feeding a key to [`SelectState::handle_key`].
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// The key means nothing in the current state; let it through.
    Ignored,
    /// The key changed visibility or the highlight.
    Handled,
    /// The highlighted option was committed.
    Committed(SelectValue),
}

/// Component-owned part of a select: the internal value, panel visibility,
/// and the keyboard highlight.
///
/// The caller-owned value is passed in where it matters and is never stored,
/// so a controlled select always displays exactly what its owner supplies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectState {
    internal: Option<SelectValue>,
    visibility: Visibility,
    highlighted: Option<usize>,
}

impl SelectState {
    pub fn new(default_value: Option<SelectValue>) -> Self {
        Self {
            internal: default_value,
            ..Self::default()
        }
    }

    pub fn internal_value(&self) -> Option<&SelectValue> {
        self.internal.as_ref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Index into the option list of the keyboard highlight, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The value to display: the caller's value when present, else ours.
    pub fn effective_value<'a>(
        &'a self,
        external: Option<&'a SelectValue>,
    ) -> Option<&'a SelectValue> {
        external.or(self.internal.as_ref())
    }

    /// Trigger activation. Returns `false` when the select is disabled and
    /// nothing changed.
    pub fn toggle(&mut self, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        match self.visibility {
            Visibility::Closed => self.visibility = Visibility::Open,
            Visibility::Open => self.close(),
        }
        true
    }

    /// Close without touching the value (outside click, Escape).
    pub fn dismiss(&mut self) -> bool {
        if self.visibility == Visibility::Closed {
            return false;
        }
        self.close();
        true
    }

    /// Commit a pick. Disabled options are refused and leave the state as is.
    ///
    /// Returns the committed value; the caller notifies its observer with it.
    pub fn commit(&mut self, option: &SelectOptionData) -> Option<SelectValue> {
        if option.disabled {
            return None;
        }
        self.internal = Some(option.value.clone());
        self.close();
        Some(option.value.clone())
    }

    /// Replace the internal value with a new default.
    pub fn reset(&mut self, default_value: Option<SelectValue>) {
        self.internal = default_value;
    }

    /// Keyboard handling on the focused trigger.
    ///
    /// `options` must be what the panel is currently showing (empty while
    /// loading) so the highlight indexes the rendered rows.
    pub fn handle_key(
        &mut self,
        key: SelectKey,
        options: &[SelectOptionData],
        external: Option<&SelectValue>,
        disabled: bool,
    ) -> KeyOutcome {
        if disabled {
            return KeyOutcome::Ignored;
        }

        match (self.visibility, key) {
            (Visibility::Closed, SelectKey::Enter | SelectKey::Space) => {
                self.visibility = Visibility::Open;
                KeyOutcome::Handled
            }
            (Visibility::Closed, SelectKey::ArrowDown | SelectKey::ArrowUp) => {
                self.visibility = Visibility::Open;
                self.highlighted = self.initial_highlight(options, external);
                KeyOutcome::Handled
            }
            (Visibility::Closed, _) => KeyOutcome::Ignored,
            (Visibility::Open, SelectKey::Escape) => {
                self.close();
                KeyOutcome::Handled
            }
            (Visibility::Open, SelectKey::Enter | SelectKey::Space) => {
                match self.highlighted.and_then(|index| options.get(index)) {
                    Some(option) => match self.commit(option) {
                        Some(value) => KeyOutcome::Committed(value),
                        None => KeyOutcome::Handled,
                    },
                    None => {
                        self.close();
                        KeyOutcome::Handled
                    }
                }
            }
            (Visibility::Open, SelectKey::ArrowDown | SelectKey::ArrowUp) => {
                self.highlighted = match self.highlighted {
                    Some(from) => step(options, from, key == SelectKey::ArrowDown),
                    None => self.initial_highlight(options, external),
                };
                KeyOutcome::Handled
            }
            (Visibility::Open, SelectKey::Home) => {
                self.highlighted = options.iter().position(|option| !option.disabled);
                KeyOutcome::Handled
            }
            (Visibility::Open, SelectKey::End) => {
                self.highlighted = options.iter().rposition(|option| !option.disabled);
                KeyOutcome::Handled
            }
        }
    }

    fn close(&mut self) {
        self.visibility = Visibility::Closed;
        self.highlighted = None;
    }

    /// The selected row when it is enabled, else the first enabled row.
    fn initial_highlight(
        &self,
        options: &[SelectOptionData],
        external: Option<&SelectValue>,
    ) -> Option<usize> {
        let selected = self.effective_value(external).and_then(|value| {
            options
                .iter()
                .position(|option| option.value == *value && !option.disabled)
        });
        selected.or_else(|| options.iter().position(|option| !option.disabled))
    }
}

/// Next enabled row after `from` in the given direction, wrapping around.
fn step(options: &[SelectOptionData], from: usize, forward: bool) -> Option<usize> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    (1..=len)
        .map(|offset| {
            if forward {
                (from + offset) % len
            } else {
                (from % len + len - offset) % len
            }
        })
        .find(|&index| !options[index].disabled)
}
