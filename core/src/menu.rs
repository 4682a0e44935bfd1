//! Mobile navigation menu
//!
//! The menu can only change while the intro is complete; before that every
//! request is a no-op.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuDismiss {
    Escape,
    OutsideClick,
    /// A nav item was chosen
    Navigate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Returns whether anything changed.
    pub fn toggle(&mut self, unlocked: bool) -> bool {
        if !unlocked {
            tracing::trace!("Menu toggle ignored during intro");
            return false;
        }
        self.open = !self.open;
        true
    }

    /// Close an open menu. Returns whether anything changed.
    pub fn dismiss(&mut self, reason: MenuDismiss, unlocked: bool) -> bool {
        if !unlocked || !self.open {
            return false;
        }
        tracing::trace!(?reason, "Menu dismissed");
        self.open = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_menu_ignores_everything() {
        let mut menu = MobileMenu::default();
        assert!(!menu.toggle(false));
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_when_unlocked() {
        let mut menu = MobileMenu::default();
        assert!(menu.toggle(true));
        assert!(menu.is_open());
        assert!(menu.toggle(true));
        assert!(!menu.is_open());
    }

    #[test]
    fn dismiss_closes_open_menu() {
        for reason in [MenuDismiss::Escape, MenuDismiss::OutsideClick, MenuDismiss::Navigate] {
            let mut menu = MobileMenu::default();
            menu.toggle(true);
            assert!(menu.dismiss(reason, true));
            assert!(!menu.is_open());
            assert!(!menu.dismiss(reason, true));
        }
    }

    #[test]
    fn dismiss_while_locked_keeps_state() {
        let mut menu = MobileMenu::default();
        menu.toggle(true);
        assert!(!menu.dismiss(MenuDismiss::Escape, false));
        assert!(menu.is_open());
    }
}
