//! Audio metadata of the draft and its validation schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioPublication {
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub cover_mime_type: String,
}

impl Default for AudioPublication {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            cover: String::new(),
            cover_mime_type: "image/jpeg".to_string(),
        }
    }
}

/// One failed rule of the audio schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub path: &'static str,
    pub message: &'static str,
}

impl AudioPublication {
    /// Check the required fields in declaration order and return every
    /// issue found.
    pub fn validate(&self) -> Result<(), Vec<SchemaIssue>> {
        let rules: [(&'static str, &str, &'static str); 3] = [
            ("title", &self.title, "Invalid audio title"),
            ("artist", &self.artist, "Invalid artist name"),
            ("cover", &self.cover, "Invalid cover image"),
        ];

        let issues: Vec<SchemaIssue> = rules
            .iter()
            .filter(|(_, value, _)| value.trim().is_empty())
            .map(|(path, _, message)| SchemaIssue { path, message })
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fails_on_title_first() {
        let issues = AudioPublication::default().validate().unwrap_err();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].message, "Invalid audio title");
    }

    #[test]
    fn test_blank_values_are_rejected() {
        let audio = AudioPublication {
            title: "Song".into(),
            artist: "   ".into(),
            cover: "ipfs://cover".into(),
            ..Default::default()
        };
        let issues = audio.validate().unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "artist");
    }

    #[test]
    fn test_complete_audio_passes() {
        let audio = AudioPublication {
            title: "Song".into(),
            artist: "Band".into(),
            cover: "ipfs://cover".into(),
            ..Default::default()
        };
        assert!(audio.validate().is_ok());
    }
}
