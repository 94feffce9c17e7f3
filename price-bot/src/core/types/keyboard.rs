//! Transport-agnostic reply keyboard (persistent buttons under the input field).

/// Rows of button labels. Pressing a button sends its label as a plain text message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
    /// Ask the client to shrink the keyboard to fit the buttons.
    pub resize: bool,
    /// Hint shown in the input field while the keyboard is active.
    pub placeholder: Option<String>,
}

impl ReplyKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row of buttons.
    pub fn row<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn resized(mut self) -> Self {
        self.resize = true;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Total number of buttons across all rows.
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
