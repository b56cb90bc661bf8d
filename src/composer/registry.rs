//! Composer toolbar actions and the lazily built panels behind them.
//!
//! Each action has a factory. The factory runs the first time the action is
//! visible; until then the action only has a placeholder.

use std::collections::HashMap;

use crate::models::CollectModuleType;
use crate::state::ComposerSession;

/// Toolbar actions of the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComposerAction {
    Attachment,
    EmojiPicker,
    Gif,
    CollectSettings,
    ReferenceSettings,
    PollSettings,
    LivestreamSettings,
    DraftSettings,
}

impl ComposerAction {
    /// Toolbar order.
    pub const ALL: [ComposerAction; 8] = [
        ComposerAction::Attachment,
        ComposerAction::EmojiPicker,
        ComposerAction::Gif,
        ComposerAction::CollectSettings,
        ComposerAction::ReferenceSettings,
        ComposerAction::PollSettings,
        ComposerAction::LivestreamSettings,
        ComposerAction::DraftSettings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComposerAction::Attachment => "Attachment",
            ComposerAction::EmojiPicker => "Emoji",
            ComposerAction::Gif => "GIF",
            ComposerAction::CollectSettings => "Collect",
            ComposerAction::ReferenceSettings => "Who can comment",
            ComposerAction::PollSettings => "Poll",
            ComposerAction::LivestreamSettings => "Go live",
            ComposerAction::DraftSettings => "Drafts",
        }
    }

    pub fn is_visible(&self, ctx: &ActionContext) -> bool {
        match self {
            ComposerAction::CollectSettings | ComposerAction::ReferenceSettings => {
                !ctx.comment_target_on_momoka
            }
            ComposerAction::LivestreamSettings => !ctx.is_comment,
            ComposerAction::DraftSettings => ctx.is_pro,
            _ => true,
        }
    }
}

/// Inputs of the visibility rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionContext {
    pub is_comment: bool,
    /// The comment target was relayed through Momoka
    pub comment_target_on_momoka: bool,
    pub is_pro: bool,
}

/// Whether a panel has been built yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Placeholder,
    Ready,
}

/// A toolbar panel.
pub trait ActionPanel: Send {
    fn action(&self) -> ComposerAction;

    /// Apply the panel's toggle to the draft.
    fn activate(&mut self, session: &mut ComposerSession);
}

pub type PanelFactory = Box<dyn Fn() -> Box<dyn ActionPanel> + Send + Sync>;

/// Panel toggling the draft setting behind its action.
pub struct TogglePanel {
    action: ComposerAction,
}

impl TogglePanel {
    pub fn new(action: ComposerAction) -> Self {
        Self { action }
    }
}

impl ActionPanel for TogglePanel {
    fn action(&self) -> ComposerAction {
        self.action
    }

    fn activate(&mut self, session: &mut ComposerSession) {
        match self.action {
            ComposerAction::EmojiPicker => {
                session.show_emoji_picker = !session.show_emoji_picker;
            }
            ComposerAction::PollSettings => {
                let poll = &mut session.poll;
                poll.show_poll_editor = !poll.show_poll_editor;
                poll.reset_poll_config();
            }
            ComposerAction::LivestreamSettings => {
                let live = &mut session.live;
                live.show_live_video_editor = !live.show_live_video_editor;
                live.reset_live_video_config();
            }
            ComposerAction::CollectSettings => {
                let next = match session.collect.collect_module.kind {
                    Some(_) => None,
                    None => Some(CollectModuleType::SimpleCollectOpenActionModule),
                };
                session.collect.set_type(next);
            }
            ComposerAction::ReferenceSettings => {
                session.reference.only_followers = !session.reference.only_followers;
            }
            // Need external input (files, a GIF url, a draft list)
            ComposerAction::Attachment | ComposerAction::Gif | ComposerAction::DraftSettings => {}
        }
    }
}

/// Factories and the panels they built so far.
pub struct ActionRegistry {
    factories: HashMap<ComposerAction, PanelFactory>,
    panels: HashMap<ComposerAction, Box<dyn ActionPanel>>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    /// Registry with a [`TogglePanel`] factory for every action.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for action in ComposerAction::ALL {
            registry.register(action, move || Box::new(TogglePanel::new(action)));
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
            panels: HashMap::new(),
        }
    }

    /// Register (or replace) the factory of an action. A panel already
    /// built for the action is dropped.
    pub fn register<F>(&mut self, action: ComposerAction, factory: F)
    where
        F: Fn() -> Box<dyn ActionPanel> + Send + Sync + 'static,
    {
        self.factories.insert(action, Box::new(factory));
        self.panels.remove(&action);
    }

    pub fn state(&self, action: ComposerAction) -> PanelState {
        if self.panels.contains_key(&action) {
            PanelState::Ready
        } else {
            PanelState::Placeholder
        }
    }

    /// Visible actions in toolbar order. Builds the panels shown for the
    /// first time.
    pub fn visible(&mut self, ctx: &ActionContext) -> Vec<ComposerAction> {
        let visible: Vec<ComposerAction> = ComposerAction::ALL
            .into_iter()
            .filter(|a| a.is_visible(ctx) && self.factories.contains_key(a))
            .collect();

        for action in &visible {
            self.materialize(*action);
        }
        visible
    }

    /// The panel of a visible action, built on demand.
    pub fn panel_mut(
        &mut self,
        action: ComposerAction,
        ctx: &ActionContext,
    ) -> Option<&mut Box<dyn ActionPanel>> {
        if !action.is_visible(ctx) {
            return None;
        }
        self.materialize(action);
        self.panels.get_mut(&action)
    }

    fn materialize(&mut self, action: ComposerAction) {
        if self.panels.contains_key(&action) {
            return;
        }
        if let Some(factory) = self.factories.get(&action) {
            tracing::debug!(action = action.label(), "Building composer panel");
            self.panels.insert(action, factory());
        }
    }
}
