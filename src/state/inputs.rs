// Text input values tracked across frames
use std::collections::HashMap;

/// Identifies one text input. Construct with [`InputId::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InputId(String);

impl InputId {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Uses `tag` unless it is blank, in which case `title` identifies the input.
    pub fn from_tag_or_title(tag: Option<&str>, title: &str) -> Self {
        match tag {
            Some(tag) if !tag.trim().is_empty() => Self::new(tag),
            _ => Self::new(title),
        }
    }
}

#[derive(Default, Debug)]
pub struct TextInputs {
    values: HashMap<InputId, String>,
}

impl TextInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editable buffer for `id`, created empty on first use.
    pub fn value_mut(&mut self, id: &InputId) -> &mut String {
        self.values.entry(id.clone()).or_default()
    }

    /// Current text for `id`, or `None` if the input has never been shown.
    pub fn text(&self, id: &InputId) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// The value for `id` if it is non-empty. Empty input is never submitted.
    pub fn submit(&self, id: &InputId) -> Option<String> {
        self.text(id)
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
    }

    pub fn clear(&mut self, id: &InputId) {
        if let Some(value) = self.values.get_mut(id) {
            value.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
