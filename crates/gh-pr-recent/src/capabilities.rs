//! View capability system
//!
//! Views declare what kind of input they take, so the keyboard middleware can
//! route keys without knowing about concrete views.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View supports vim-style navigation keybindings (j, k, gg, G)
        const VIM_NAVIGATION_BINDINGS = 1 << 0;

        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 1;

        /// View takes character input; letters are typed, not looked up in the keymap
        const TEXT_INPUT = 1 << 2;
    }
}

impl PanelCapabilities {
    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::VIM_NAVIGATION_BINDINGS)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_independent_of_navigation() {
        let caps = PanelCapabilities::TEXT_INPUT;
        assert!(caps.accepts_text_input());
        assert!(!caps.supports_item_navigation());
        assert!(!caps.supports_vim_navigation());
    }

    #[test]
    fn test_default_is_empty() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_vim_navigation());
    }
}
