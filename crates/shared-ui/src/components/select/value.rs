use std::fmt;

/// Identifier of one selectable item.
///
/// Text and numbers never compare equal to each other, so `1` and `"1"`
/// are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for SelectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectValue::Number(n) => write!(f, "{n}"),
            SelectValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for SelectValue {
    fn from(s: &str) -> Self {
        SelectValue::Text(s.to_string())
    }
}

impl From<String> for SelectValue {
    fn from(s: String) -> Self {
        SelectValue::Text(s)
    }
}

impl From<i64> for SelectValue {
    fn from(n: i64) -> Self {
        SelectValue::Number(n)
    }
}

impl From<i32> for SelectValue {
    fn from(n: i32) -> Self {
        SelectValue::Number(n.into())
    }
}

impl From<u32> for SelectValue {
    fn from(n: u32) -> Self {
        SelectValue::Number(n.into())
    }
}

/// One entry of a `Select`'s option list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOptionData {
    pub value: SelectValue,
    pub label: String,
    pub disabled: bool,
}

impl SelectOptionData {
    pub fn new(value: impl Into<SelectValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// One option per label, valued by the label itself. Labels listed in
/// `unavailable` are disabled.
pub fn label_options<I>(labels: I, unavailable: &[&str]) -> Vec<SelectOptionData>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| {
            let label = label.as_ref();
            SelectOptionData::new(label, label).disabled(unavailable.contains(&label))
        })
        .collect()
}
