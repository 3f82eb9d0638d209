//! Screen identifiers and the navigation back-stack.

/// Enum to represent the different screens in our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    About,
}

/// The navigation back-stack, provided as a Dioxus context at the shell.
///
/// `Home` is the root entry and is always present. Navigating forward
/// pushes onto the stack; going back pops, and popping at the root is a
/// no-op rather than an exit.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::default()],
        }
    }

    /// The screen currently on top of the stack.
    pub fn current(&self) -> Screen {
        // The stack is never empty: `new` seeds it and `back` keeps the root.
        self.stack.last().copied().unwrap_or_default()
    }

    /// Navigate forward to `screen`.
    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Return to the previous screen, if there is one.
    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(Navigator::new().current(), Screen::Home);
    }

    #[test]
    fn push_changes_current() {
        let mut nav = Navigator::new();
        nav.push(Screen::About);
        assert_eq!(nav.current(), Screen::About);
    }

    #[test]
    fn back_returns_to_previous() {
        let mut nav = Navigator::new();
        nav.push(Screen::About);
        nav.back();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn back_at_root_is_a_noop() {
        let mut nav = Navigator::new();
        nav.back();
        nav.back();
        assert_eq!(nav.current(), Screen::Home);
    }
}
