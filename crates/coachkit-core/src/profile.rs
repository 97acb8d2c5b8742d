//! User profiles and messaging preferences.
//!
//! Profiles are held in memory by the [`Coach`](crate::Coach) and feed
//! message personalization. There is no profile storage surface; a default
//! profile is created on first sight of a user id.

use serde::{Deserialize, Serialize};

use crate::scoring::Category;

/// How coaching messages should be phrased for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    #[default]
    Friendly,
    Direct,
    Encouraging,
}

impl CommunicationStyle {
    /// Parse from a raw string. Unknown values fall back to `Friendly`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "direct" => CommunicationStyle::Direct,
            "encouraging" => CommunicationStyle::Encouraging,
            _ => CommunicationStyle::Friendly,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &str {
        match self {
            CommunicationStyle::Friendly => "friendly",
            CommunicationStyle::Direct => "direct",
            CommunicationStyle::Encouraging => "encouraging",
        }
    }
}

/// Messaging preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Favor templates under 60 characters.
    #[serde(default)]
    pub prefers_short_messages: bool,
    /// Favor templates with an imperative verb (do/try/set/take).
    #[serde(default = "default_true")]
    pub prefers_action_oriented: bool,
    /// Categories the user reacted well to, learned from feedback.
    #[serde(default)]
    pub liked_categories: Vec<Category>,
}

fn default_true() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            prefers_short_messages: false,
            prefers_action_oriented: true,
            liked_categories: Vec::new(),
        }
    }
}

/// Per-user coaching profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    /// Display name, empty when unknown. Used as a message prefix.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub communication_style: CommunicationStyle,
    #[serde(default)]
    pub preferences: Preferences,
}

impl UserProfile {
    /// Create a default profile for a user id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: String::new(),
            communication_style: CommunicationStyle::default(),
            preferences: Preferences::default(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the communication style.
    pub fn with_style(mut self, style: CommunicationStyle) -> Self {
        self.communication_style = style;
        self
    }
}
