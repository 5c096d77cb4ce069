//! CLI context - bundles settings and flags for one generate.

use zeroize::Zeroizing;

use crate::clipboard::Clipboard;
use crate::error::{Error, Result};
use crate::rand::{EntropySource, Rand, urand};
use crate::session::Session;
use crate::settings::Settings;

use super::{CliFlags, prompts, quiet};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags, settings: Settings) -> Self {
        Self { settings, flags }
    }

    /// Generate one password and print or copy it.
    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.flags.quiet);
        self.apply_flags();
        if self.flags.save {
            self.save_settings()?;
        }

        let password = self.generate()?;
        self.output(&password)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if self.flags.urandom {
            if urand::is_available() {
                self.settings.entropy_source = EntropySource::Urandom;
            } else {
                prompts::urandom_unavailable();
            }
        }
        if self.flags.clipboard {
            self.settings.copy_on_generate = true;
        }
    }

    fn save_settings(&self) -> Result<()> {
        let path = Settings::path().ok_or(Error::NoHome)?;
        self.settings
            .save_to_file()
            .map_err(|source| Error::Settings {
                path: path.clone(),
                source,
            })?;
        prompts::settings_saved(&path.display().to_string());
        Ok(())
    }

    /// Run the flags through the same session the form uses.
    pub fn generate(&self) -> Result<Zeroizing<String>> {
        let mut session = Session::with_rng(Rand::with_source(self.settings.entropy_source));
        for (class, enabled) in self.flags.class_updates() {
            session.update_class_selection(class, enabled)?;
        }
        let length_text = self.flags.length.as_deref().unwrap_or("");
        Ok(Zeroizing::new(session.request_generate(length_text)?.to_owned()))
    }

    fn output(&self, password: &str) -> Result<()> {
        if self.settings.copy_on_generate {
            match Clipboard::open().and_then(|mut cb| cb.copy(password)) {
                Ok(()) => {
                    prompts::clipboard_copied();
                    return Ok(());
                }
                Err(e) => {
                    log::warn!("{e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(e);
                    }
                }
            }
        }

        println!("{password}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ValidationError;
    use crate::pass::charset::DIGITS;
    use crate::session::{SelectionError, SessionError};

    fn context(length: &str) -> Context {
        let flags = CliFlags {
            length: Some(length.to_string()),
            ..CliFlags::default()
        };
        Context::new(flags, Settings::default())
    }

    #[test]
    fn defaults_to_lowercase() {
        let password = context("8").generate().unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn digits_only() {
        let mut ctx = context("10");
        ctx.flags.digits = true;
        ctx.flags.no_lower = true;
        let password = ctx.generate().unwrap();
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| DIGITS.contains(c)));
    }

    #[test]
    fn invalid_length_is_rejected() {
        for (text, expected) in [
            ("2", ValidationError::TooShort),
            ("20", ValidationError::TooLong),
            ("8abc", ValidationError::NotANumber { empty: false }),
        ] {
            match context(text).generate() {
                Err(Error::Session(SessionError::Length(e))) => assert_eq!(e, expected),
                other => panic!("expected {expected:?} for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_length_is_required() {
        let ctx = Context::new(CliFlags::default(), Settings::default());
        let err = ctx.generate().unwrap_err();
        assert_eq!(err.to_string(), "Length is required!");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn no_lower_alone_is_refused() {
        let mut ctx = context("8");
        ctx.flags.no_lower = true;
        assert!(matches!(
            ctx.generate(),
            Err(Error::Session(SessionError::Selection(
                SelectionError::LastEnabledClass
            )))
        ));
    }

    #[test]
    fn board_flag_turns_on_copy() {
        let mut ctx = context("8");
        ctx.flags.clipboard = true;
        ctx.apply_flags();
        assert!(ctx.settings.copy_on_generate);
    }
}
