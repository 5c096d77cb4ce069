//! Key handling for the form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pass::CharacterClass;

/// The form element keyboard input goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Length,
    Class(CharacterClass),
    GenerateButton,
    ResetButton,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Length,
        Focus::Class(CharacterClass::Lowercase),
        Focus::Class(CharacterClass::Uppercase),
        Focus::Class(CharacterClass::Digits),
        Focus::Class(CharacterClass::Symbols),
        Focus::GenerateButton,
        Focus::ResetButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    ClearField,
    FocusNext,
    FocusPrev,
    Toggle(CharacterClass),
    Generate,
    Reset,
    Copy,
    Quit,
}

/// Map a key press to a form action given the current focus.
pub fn action_for(key: KeyEvent, focus: Focus) -> Option<Action> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let on_field = focus == Focus::Length;

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('r') if ctrl => Some(Action::Reset),
        KeyCode::Char('y') if ctrl => Some(Action::Copy),
        KeyCode::Char('u') if ctrl && on_field => Some(Action::ClearField),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter => Some(match focus {
            Focus::Class(class) => Action::Toggle(class),
            Focus::ResetButton => Action::Reset,
            Focus::Length | Focus::GenerateButton => Action::Generate,
        }),
        KeyCode::Backspace if on_field => Some(Action::Backspace),
        KeyCode::Char(c) if on_field && !ctrl => Some(Action::Insert(c)),
        KeyCode::Char(' ') => match focus {
            Focus::Class(class) => Some(Action::Toggle(class)),
            Focus::GenerateButton => Some(Action::Generate),
            Focus::ResetButton => Some(Action::Reset),
            Focus::Length => None,
        },
        KeyCode::Char('c') if !ctrl => Some(Action::Copy),
        _ => None,
    }
}
