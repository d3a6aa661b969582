use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// User intents the wheel screen understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleFocus,
    Spin,

    // Options list
    NavigateUp,
    NavigateDown,
    RemoveOption,

    // Input
    AddOption,
}

/// Where a binding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    /// Active regardless of focus.
    Global,
    /// Active while the text input has focus.
    Input,
    /// Active while the options list has focus.
    Options,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub scope: KeyScope,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(
        key: KeyEvent,
        action: Action,
        scope: KeyScope,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            key,
            action,
            scope,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Compares code and modifiers, ignoring kind and state.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Default key table.
#[must_use]
pub fn default_keybindings() -> Vec<Keybind> {
    use Action as A;
    use KeyScope as S;

    vec![
        Keybind::new(key(KeyCode::Enter), A::AddOption, S::Input, "Add"),
        Keybind::new(key(KeyCode::Tab), A::ToggleFocus, S::Global, "Focus"),
        Keybind::new(key(KeyCode::F(5)), A::Spin, S::Global, "Spin"),
        Keybind::new(ctrl('s'), A::Spin, S::Global, "Spin").hidden(),
        Keybind::new(key(KeyCode::Char(' ')), A::Spin, S::Options, "Spin").hidden(),
        Keybind::new(key(KeyCode::Char('s')), A::Spin, S::Options, "Spin").hidden(),
        Keybind::new(key(KeyCode::Up), A::NavigateUp, S::Options, "Up").hidden(),
        Keybind::new(key(KeyCode::Char('k')), A::NavigateUp, S::Options, "Up").hidden(),
        Keybind::new(key(KeyCode::Down), A::NavigateDown, S::Options, "Down").hidden(),
        Keybind::new(key(KeyCode::Char('j')), A::NavigateDown, S::Options, "Down").hidden(),
        Keybind::new(key(KeyCode::Delete), A::RemoveOption, S::Options, "Remove"),
        Keybind::new(key(KeyCode::Backspace), A::RemoveOption, S::Options, "Remove").hidden(),
        Keybind::new(key(KeyCode::Char('d')), A::RemoveOption, S::Options, "Remove").hidden(),
        Keybind::new(key(KeyCode::Char('x')), A::RemoveOption, S::Options, "Remove").hidden(),
        Keybind::new(key(KeyCode::Char('q')), A::Quit, S::Options, "Quit").hidden(),
        Keybind::new(key(KeyCode::Esc), A::Quit, S::Global, "Quit"),
        Keybind::new(ctrl('c'), A::Quit, S::Global, "Quit").hidden(),
    ]
}

/// Resolves `key` to an action for the given focus scope.
///
/// Scoped bindings win over global ones.
#[must_use]
pub fn resolve(bindings: &[Keybind], scope: KeyScope, key: &KeyEvent) -> Option<Action> {
    bindings
        .iter()
        .find(|b| b.scope == scope && b.matches(key))
        .or_else(|| {
            bindings
                .iter()
                .find(|b| b.scope == KeyScope::Global && b.matches(key))
        })
        .map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(key(KeyCode::Enter), KeyScope::Input, Some(Action::AddOption) ; "enter_adds")]
    #[test_case(key(KeyCode::Char('s')), KeyScope::Input, None ; "letters_are_text_in_input")]
    #[test_case(key(KeyCode::Char('s')), KeyScope::Options, Some(Action::Spin) ; "s_spins_in_list")]
    #[test_case(key(KeyCode::F(5)), KeyScope::Input, Some(Action::Spin) ; "f5_spins_anywhere")]
    #[test_case(ctrl('s'), KeyScope::Input, Some(Action::Spin) ; "ctrl_s_spins_anywhere")]
    #[test_case(key(KeyCode::Char('q')), KeyScope::Input, None ; "q_is_text_in_input")]
    #[test_case(key(KeyCode::Char('q')), KeyScope::Options, Some(Action::Quit) ; "q_quits_in_list")]
    #[test_case(key(KeyCode::Esc), KeyScope::Input, Some(Action::Quit) ; "esc_quits")]
    #[test_case(key(KeyCode::Backspace), KeyScope::Input, None ; "backspace_edits_input")]
    #[test_case(key(KeyCode::Backspace), KeyScope::Options, Some(Action::RemoveOption) ; "backspace_removes_in_list")]
    fn test_resolve(event: KeyEvent, scope: KeyScope, expected: Option<Action>) {
        assert_eq!(resolve(&default_keybindings(), scope, &event), expected);
    }
}
