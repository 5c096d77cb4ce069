//! Form layout.

use crate::pass::{self, CharacterClass, charset};
use crate::rand::{EntropySource, IndexSource};
use crate::session::Session;
use crate::terminal::{BOLD, DIM, Frame, GREEN, RED, RESET, REVERSE};

use super::input::Focus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Presentation state that is not part of the session.
#[derive(Debug, Default)]
pub struct View {
    pub focus: Focus,
    pub notice: Option<Notice>,
    pub show_entropy: bool,
    pub source: EntropySource,
}

const PLACEHOLDER: &str = "Ex. 8";
const HELP: &str = "[Tab/↑↓] Move  [Space] Toggle  [Enter] Generate  [^R] Reset  [^Y] Copy  [Esc] Quit";

fn marker(focused: bool) -> &'static str {
    if focused { "> " } else { "  " }
}

fn button(label: &str, focused: bool, enabled: bool) -> String {
    let style = match (focused, enabled) {
        (_, false) => DIM,
        (true, true) => REVERSE,
        (false, true) => "",
    };
    format!("{style}[ {label} ]{RESET}")
}

pub fn render<R: IndexSource>(session: &Session<R>, view: &View) -> Frame {
    let mut frame = Frame::new();

    frame.top("Password Generator");

    let on_field = view.focus == Focus::Length;
    let text = session.length_text();
    let field = match (text.is_empty(), on_field) {
        (true, true) => format!("{REVERSE} {RESET}{DIM}{PLACEHOLDER}{RESET}"),
        (true, false) => format!("{DIM}{PLACEHOLDER}{RESET}"),
        (false, true) => format!("{text}{REVERSE} {RESET}"),
        (false, false) => text.to_string(),
    };
    frame.line(&format!("{}Password Length: {field}", marker(on_field)));
    if let Some(err) = session.length_error() {
        frame.line(&format!("    {RED}{err}{RESET}"));
    }

    frame.rule();
    for class in CharacterClass::ALL {
        let focused = view.focus == Focus::Class(class);
        let check = if session.selection().is_enabled(class) {
            format!("{GREEN}[x]{RESET}")
        } else {
            "[ ]".to_string()
        };
        frame.line(&format!("{}{check} {}", marker(focused), class.label()));
    }

    frame.rule();
    frame.line(&format!(
        "  {}   {}",
        button(
            "Generate Password",
            view.focus == Focus::GenerateButton,
            session.can_generate()
        ),
        button("Reset", view.focus == Focus::ResetButton, true),
    ));
    frame.bottom();

    match &view.notice {
        Some(n) if n.is_error => frame.text(&format!("  {RED}{}{RESET}", n.text)),
        Some(n) => frame.text(&format!("  {}", n.text)),
        None => frame.text(""),
    }

    if session.is_generated() {
        let password = session.password();
        frame.top("Result");
        frame.line_center(&format!("{DIM}[Ctrl+Y] to copy{RESET}"));
        frame.line_center(&format!("{BOLD}{password}{RESET}"));
        if view.show_entropy {
            let bits = pass::entropy_bits(password.len(), charset::size(session.selection()));
            frame.line_center(&format!(
                "{bits:.1} bits ({}) • Source: {}",
                pass::Strength::from_bits(bits),
                view.source.name()
            ));
        }
        frame.bottom();
    }

    frame.text(&format!("{DIM}{HELP}{RESET}"));
    frame
}
