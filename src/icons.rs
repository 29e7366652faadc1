//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

impl IconTheme {
    /// Parse a theme name as it appears in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "emoji" => Some(Self::Emoji),
            "unicode" => Some(Self::Unicode),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }
}

/// Lead selection icons
#[derive(Debug, Clone)]
pub struct SelectionIcons {
    pub checked: &'static str,
    pub unchecked: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub product_title: &'static str,
    pub leads_title: &'static str,
    pub sequence_title: &'static str,
    pub settings_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Connection and activity icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub busy: &'static str,
    pub mail: &'static str,
    pub connected: &'static str,
    pub disconnected: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub selection: SelectionIcons,
    pub ui: UiIcons,
    pub status: StatusIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            selection: SelectionIcons {
                checked: "✅",
                unchecked: "🔳",
            },
            ui: UiIcons {
                product_title: "🔍",
                leads_title: "👥",
                sequence_title: "📨",
                settings_title: "⚙️",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            status: StatusIcons {
                busy: "🔄",
                mail: "📧",
                connected: "🟢",
                disconnected: "⚪",
            },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            selection: SelectionIcons {
                checked: "☑",
                unchecked: "☐",
            },
            ui: UiIcons {
                product_title: "▶",
                leads_title: "◆",
                sequence_title: "➤",
                settings_title: "⚙",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            status: StatusIcons {
                busy: "⟳",
                mail: "✉",
                connected: "●",
                disconnected: "○",
            },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            selection: SelectionIcons {
                checked: "[x]",
                unchecked: "[ ]",
            },
            ui: UiIcons {
                product_title: ">",
                leads_title: "#",
                sequence_title: ">",
                settings_title: "=",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            status: StatusIcons {
                busy: "...",
                mail: "@",
                connected: "*",
                disconnected: "o",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn checked(&self) -> &'static str {
        self.icons().selection.checked
    }

    #[must_use]
    pub fn unchecked(&self) -> &'static str {
        self.icons().selection.unchecked
    }

    #[must_use]
    pub fn product_title(&self) -> &'static str {
        self.icons().ui.product_title
    }

    #[must_use]
    pub fn leads_title(&self) -> &'static str {
        self.icons().ui.leads_title
    }

    #[must_use]
    pub fn sequence_title(&self) -> &'static str {
        self.icons().ui.sequence_title
    }

    #[must_use]
    pub fn settings_title(&self) -> &'static str {
        self.icons().ui.settings_title
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn busy(&self) -> &'static str {
        self.icons().status.busy
    }

    #[must_use]
    pub fn mail(&self) -> &'static str {
        self.icons().status.mail
    }

    #[must_use]
    pub fn connected(&self) -> &'static str {
        self.icons().status.connected
    }

    #[must_use]
    pub fn disconnected(&self) -> &'static str {
        self.icons().status.disconnected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(IconTheme::from_name("emoji"), Some(IconTheme::Emoji));
        assert_eq!(IconTheme::from_name("unicode"), Some(IconTheme::Unicode));
        assert_eq!(IconTheme::from_name("ascii"), Some(IconTheme::Ascii));
        assert_eq!(IconTheme::from_name("nerdfont"), None);
    }

    #[test]
    fn test_emoji_icons() {
        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.checked(), "✅");
        assert_eq!(service.unchecked(), "🔳");
    }

    #[test]
    fn test_unicode_icons() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.checked(), "☑");
        assert_eq!(service.unchecked(), "☐");
    }

    #[test]
    fn test_ascii_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.checked(), "[x]");
        assert_eq!(service.unchecked(), "[ ]");
    }
}
