//! Settings file persistence.
//!
//! One comma-separated line: `entropy_source,copy_on_generate,show_entropy`.

use std::env;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 3;

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(format_line(settings).as_bytes())?;
    Ok(())
}

/// Load into `settings`. A missing, empty, or malformed file is rewritten
/// with the values already in `settings`.
pub fn load(settings: &mut Settings, path: &Path) -> io::Result<()> {
    if !path.exists() {
        log::debug!("no settings file at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    match parse_line(line.trim()) {
        Some(loaded) => *settings = loaded,
        None => {
            log::warn!("malformed settings file {}, rewriting defaults", path.display());
            save(settings, path)?;
        }
    }

    Ok(())
}

/// `$HOME/.config/passform/settings`, or `None` when `HOME` is unset or empty.
pub fn default_path() -> Option<PathBuf> {
    path_under(env::var_os("HOME"))
}

fn path_under(home: Option<OsString>) -> Option<PathBuf> {
    let home = home.filter(|h| !h.is_empty())?;
    Some(PathBuf::from(home).join(".config/passform/settings"))
}

fn format_line(settings: &Settings) -> String {
    format!(
        "{},{},{}\n",
        settings.entropy_source, settings.copy_on_generate, settings.show_entropy
    )
}

fn parse_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return None;
    }

    Some(Settings {
        entropy_source: parts[0].parse().ok()?,
        copy_on_generate: parts[1].parse().ok()?,
        show_entropy: parts[2].parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::EntropySource;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("passform-test-{}-{name}", std::process::id()))
            .join("settings")
    }

    #[test]
    fn line_round_trip() {
        let settings = Settings {
            entropy_source: EntropySource::Urandom,
            copy_on_generate: true,
            show_entropy: false,
        };
        let line = format_line(&settings);
        assert_eq!(line, "urandom,true,false\n");
        assert_eq!(parse_line(line.trim()), Some(settings));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("hw,true"), None);
        assert_eq!(parse_line("hw,yes,true"), None);
        assert_eq!(parse_line("rdrand,true,true"), None);
    }

    #[test]
    fn no_home_means_no_settings_path() {
        assert_eq!(path_under(None), None);
        assert_eq!(path_under(Some(OsString::new())), None);
        assert_eq!(
            path_under(Some("/home/user".into())),
            Some(PathBuf::from("/home/user/.config/passform/settings"))
        );
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = temp_path("missing");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let mut settings = Settings::default();
        load(&mut settings, &path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hw,false,true\n");

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn saved_settings_load_back() {
        let path = temp_path("saved");
        let saved = Settings {
            entropy_source: EntropySource::Urandom,
            copy_on_generate: true,
            show_entropy: true,
        };
        save(&saved, &path).unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, saved);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn malformed_file_is_rewritten() {
        let path = temp_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "74,19,false,false,!@#\n").unwrap();

        let mut settings = Settings::default();
        load(&mut settings, &path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hw,false,true\n");

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
