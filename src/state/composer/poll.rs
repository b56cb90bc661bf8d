//! Poll attached to the draft.

use serde::{Deserialize, Serialize};

/// Poll as sent to the poll service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PollConfig {
    /// Duration in days
    pub length: u32,
    pub options: Vec<String>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            length: 7,
            options: vec![String::new(), String::new()],
        }
    }
}

impl PollConfig {
    /// No options, or at least one blank option.
    pub fn is_incomplete(&self) -> bool {
        self.options.is_empty() || self.options.iter().any(|o| o.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollStore {
    pub show_poll_editor: bool,
    pub poll_config: PollConfig,
}

impl PollStore {
    pub fn reset_poll_config(&mut self) {
        self.poll_config = PollConfig::default();
    }

    /// Whether the poll blocks submission.
    pub fn blocks_submit(&self) -> bool {
        self.show_poll_editor && self.poll_config.is_incomplete()
    }
}
