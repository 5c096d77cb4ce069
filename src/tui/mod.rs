//! Interactive terminal form.

mod form;
mod input;

pub use form::{Notice, View, render};
pub use input::{Action, Focus, action_for};

use crossterm::event::{self, Event};

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::rand::{IndexSource, Rand};
use crate::session::Session;
use crate::settings::Settings;
use crate::terminal::ScreenGuard;

/// Longest text the length field accepts.
const FIELD_WIDTH: usize = 12;

/// Run the form until the user quits.
pub fn run(settings: &Settings) -> Result<()> {
    let rng = Rand::with_source(settings.entropy_source);
    let mut view = View {
        show_entropy: settings.show_entropy,
        source: rng.source(),
        ..View::default()
    };
    let mut session = Session::with_rng(rng);
    let mut clipboard: Option<Clipboard> = None;

    let mut screen = ScreenGuard::new()?;
    log::debug!("form opened");

    loop {
        render(&session, &view).draw()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(action) = action_for(key, view.focus) else {
            continue;
        };
        if action == Action::Quit {
            break;
        }

        if apply(action, &mut session, &mut view, settings) == Followup::Copy {
            copy(&session, &mut view, &mut clipboard);
        }
    }

    screen.restore();
    log::debug!("form closed");
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Followup {
    None,
    Copy,
}

/// Apply one action to the session and view.
fn apply<R: IndexSource>(
    action: Action,
    session: &mut Session<R>,
    view: &mut View,
    settings: &Settings,
) -> Followup {
    view.notice = None;

    match action {
        Action::Insert(c) => {
            if session.length_text().chars().count() < FIELD_WIDTH {
                let mut text = session.length_text().to_owned();
                text.push(c);
                session.update_length_text(text);
            }
        }
        Action::Backspace => {
            let mut text = session.length_text().to_owned();
            text.pop();
            session.update_length_text(text);
        }
        Action::ClearField => session.update_length_text(""),
        Action::FocusNext | Action::FocusPrev => {
            if view.focus == Focus::Length {
                session.touch();
            }
            view.focus = if action == Action::FocusNext {
                view.focus.next()
            } else {
                view.focus.prev()
            };
        }
        Action::Toggle(class) => {
            if let Err(e) = session.toggle_class(class) {
                view.notice = Some(Notice::error(e.to_string()));
            }
        }
        Action::Generate => {
            // Gate: the button is disabled while the length is invalid
            if !session.can_generate() {
                session.touch();
                return Followup::None;
            }
            match session.generate() {
                Ok(_) if settings.copy_on_generate => return Followup::Copy,
                Ok(_) => {}
                Err(e) => view.notice = Some(Notice::error(e.to_string())),
            }
        }
        Action::Reset => {
            session.reset();
            view.focus = Focus::Length;
        }
        Action::Copy => return Followup::Copy,
        Action::Quit => {}
    }

    Followup::None
}

fn copy<R: IndexSource>(session: &Session<R>, view: &mut View, clipboard: &mut Option<Clipboard>) {
    if !session.is_generated() {
        view.notice = Some(Notice::info("Nothing to copy yet"));
        return;
    }

    if clipboard.is_none() {
        match Clipboard::open() {
            Ok(c) => *clipboard = Some(c),
            Err(e) => {
                log::debug!("{e}");
                view.notice = Some(Notice::error(e.to_string()));
                return;
            }
        }
    }

    if let Some(cb) = clipboard.as_mut() {
        view.notice = Some(match cb.copy(session.password()) {
            Ok(()) => Notice::info("Copied to clipboard"),
            Err(e) => {
                log::debug!("{e}");
                Notice::error(e.to_string())
            }
        });
    }
}
