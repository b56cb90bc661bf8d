//! Live-stream settings of the draft.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveVideoConfig {
    pub id: String,
    pub playback_id: String,
    pub stream_key: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveStore {
    pub show_live_video_editor: bool,
    pub live_video_config: LiveVideoConfig,
}

impl LiveStore {
    pub fn reset_live_video_config(&mut self) {
        self.live_video_config = LiveVideoConfig::default();
    }

    /// The editor is open and a stream has been created.
    pub fn is_live(&self) -> bool {
        self.show_live_video_editor && !self.live_video_config.id.is_empty()
    }

    /// HLS playback URL of the configured stream.
    pub fn playback_url(&self) -> String {
        format!(
            "https://livepeercdn.studio/hls/{}/index.m3u8",
            self.live_video_config.playback_id
        )
    }
}
