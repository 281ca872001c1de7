mod channel;
mod component;
mod display;
mod state;
mod value;

pub use channel::SelectionChannel;
pub use component::*;
pub use display::{display_text, helper_line, panel_content, resolve_label, DisplayText, HelperLine, PanelContent};
pub use state::{KeyOutcome, SelectKey, SelectState, Visibility};
pub use value::{label_options, SelectOptionData, SelectValue};
