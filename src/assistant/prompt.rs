use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

/// Line-editor prompt showing a configurable label.
pub struct AssistantPrompt {
    label: String,
}

impl AssistantPrompt {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Prompt for AssistantPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(&self.label)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "(search) ".into()
    }
}
