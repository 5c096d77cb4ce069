//! Generate/reset session state machine.
//!
//! A [`Session`] owns the form state: the character class selection, the
//! text of the length field, and the password currently shown, if any.
//! Validation and generation are the pure functions in [`crate::pass`]; the
//! session only sequences them and stores their results.
//!
//! ```text
//! Idle --generate ok--> Generated --generate ok--> Generated
//!   ^                       |
//!   +-------- reset --------+
//! ```
//!
//! A generate that fails validation leaves the status where it was.

use crate::pass::{
    self, CharacterClass, CharacterClassSelection, GeneratedPassword, GenerationError,
    ValidationError,
};
use crate::rand::{IndexSource, Rand};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Generated(GeneratedPassword),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: Status,
    pub selection: CharacterClassSelection,
    pub length_text: String,
}

impl SessionState {
    /// The password on display, or an empty string when idle.
    pub fn password(&self) -> &str {
        match &self.status {
            Status::Idle => "",
            Status::Generated(password) => password.as_str(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.status, Status::Generated(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("At least one character class must stay enabled!")]
    LastEnabledClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Length(#[from] ValidationError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub struct Session<R = Rand> {
    state: SessionState,
    error: Option<ValidationError>,
    touched: bool,
    rng: R,
}

impl Session<Rand> {
    pub fn new() -> Self {
        Self::with_rng(Rand::new())
    }
}

impl Default for Session<Rand> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: IndexSource> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: SessionState::default(),
            error: None,
            touched: false,
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selection(&self) -> &CharacterClassSelection {
        &self.state.selection
    }

    pub fn length_text(&self) -> &str {
        &self.state.length_text
    }

    pub fn password(&self) -> &str {
        self.state.password()
    }

    pub fn is_generated(&self) -> bool {
        self.state.is_generated()
    }

    /// Enable or disable one class. Takes effect on the next generate.
    /// Disabling the only enabled class is refused and changes nothing.
    pub fn update_class_selection(
        &mut self,
        class: CharacterClass,
        enabled: bool,
    ) -> Result<(), SelectionError> {
        let selection = &mut self.state.selection;
        if !enabled && selection.is_enabled(class) && selection.enabled_count() == 1 {
            log::debug!("refusing to disable {class:?}: last enabled class");
            return Err(SelectionError::LastEnabledClass);
        }
        selection.set(class, enabled);
        Ok(())
    }

    pub fn toggle_class(&mut self, class: CharacterClass) -> Result<(), SelectionError> {
        let enabled = self.state.selection.is_enabled(class);
        self.update_class_selection(class, !enabled)
    }

    /// Store the length field text and re-check it, keeping the inline error
    /// and the generate gate current.
    pub fn update_length_text(&mut self, text: impl Into<String>) {
        self.state.length_text = text.into();
        self.touched = true;
        self.error = pass::validate(&self.state.length_text).err();
    }

    /// Mark the length field as visited so its error, if any, is shown.
    pub fn touch(&mut self) {
        self.touched = true;
        self.error = pass::validate(&self.state.length_text).err();
    }

    /// Whether the current length text passes validation.
    pub fn can_generate(&self) -> bool {
        pass::validate(&self.state.length_text).is_ok()
    }

    /// Error to show beside the length field. Nothing until the field has
    /// been edited or a generate attempted.
    pub fn length_error(&self) -> Option<ValidationError> {
        if self.touched { self.error } else { None }
    }

    /// Validate `length_text` and, if it passes, replace the shown password
    /// with a fresh one built from the current selection.
    pub fn request_generate(
        &mut self,
        length_text: &str,
    ) -> Result<&str, SessionError> {
        self.update_length_text(length_text);
        self.generate()
    }

    /// Generate using the length text already in the field.
    pub fn generate(&mut self) -> Result<&str, SessionError> {
        self.touched = true;
        let length = match pass::validate(&self.state.length_text) {
            Ok(length) => length,
            Err(e) => {
                log::debug!("generate rejected: {e}");
                self.error = Some(e);
                return Err(e.into());
            }
        };
        self.error = None;

        let password = pass::generate(&self.state.selection, length, &mut self.rng)?;
        log::debug!(
            "generated {} chars from {} class(es)",
            length,
            self.state.selection.enabled_count()
        );
        self.state.status = Status::Generated(password);
        Ok(self.state.password())
    }

    /// Back to the initial form: no password, lowercase only, empty length.
    pub fn reset(&mut self) -> &SessionState {
        self.state = SessionState::default();
        self.error = None;
        self.touched = false;
        log::debug!("session reset");
        &self.state
    }
}
