//! User preferences for the generator front ends.
//!
//! Only preferences are persisted. Generated passwords and the form's
//! selection never touch disk.

mod file;

use std::io;
use std::path::PathBuf;

use crate::rand::EntropySource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub entropy_source: EntropySource,
    /// Copy each new password to the clipboard as soon as it is generated.
    pub copy_on_generate: bool,
    pub show_entropy: bool,
}

impl Settings {
    /// Without a home directory nothing is read or written.
    pub fn load_from_file() -> io::Result<Self> {
        let mut settings = Settings::default();
        match file::default_path() {
            Some(path) => file::load(&mut settings, &path)?,
            None => log::debug!("HOME not set, using default settings"),
        }
        Ok(settings)
    }

    pub fn save_to_file(&self) -> io::Result<()> {
        let path = file::default_path()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "HOME is not set"))?;
        file::save(self, &path)
    }

    pub fn path() -> Option<PathBuf> {
        file::default_path()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entropy_source: EntropySource::Hardware,
            copy_on_generate: false,
            show_entropy: true,
        }
    }
}
