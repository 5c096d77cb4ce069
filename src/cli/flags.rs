use clap::Parser;

use crate::pass::CharacterClass;

/// Generate a password from a length (4-16) and character classes.
/// Run without arguments for the interactive form.
#[derive(Debug, Default, Parser)]
#[command(name = "passform", version, about)]
pub struct CliFlags {
    /// Password length, 4 to 16
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Leave out lowercase letters (on by default)
    #[arg(long)]
    pub no_lower: bool,

    /// Include uppercase letters
    #[arg(short, long)]
    pub upper: bool,

    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols !@#$%^&*()_+
    #[arg(short, long)]
    pub symbols: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Draw entropy from /dev/urandom instead of the CPU cycle counter
    #[arg(long)]
    pub urandom: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Save --urandom and --board as defaults for later runs
    #[arg(long)]
    pub save: bool,
}

impl CliFlags {
    /// Class toggles in the order they are applied: enables first, so that
    /// `--no-lower` only fails when nothing else is enabled.
    pub fn class_updates(&self) -> Vec<(CharacterClass, bool)> {
        let mut updates = Vec::new();
        if self.upper {
            updates.push((CharacterClass::Uppercase, true));
        }
        if self.digits {
            updates.push((CharacterClass::Digits, true));
        }
        if self.symbols {
            updates.push((CharacterClass::Symbols, true));
        }
        if self.no_lower {
            updates.push((CharacterClass::Lowercase, false));
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("passform").chain(args.iter().copied()))
            .expect("valid flags")
    }

    #[test]
    fn parses_short_flags() {
        let flags = parse(&["-l", "12", "-u", "-d", "-s", "-b", "-q"]);
        assert_eq!(flags.length.as_deref(), Some("12"));
        assert!(flags.upper && flags.digits && flags.symbols);
        assert!(flags.clipboard && flags.quiet);
        assert!(!flags.no_lower && !flags.urandom && !flags.save);
    }

    #[test]
    fn length_text_is_passed_through_unparsed() {
        assert_eq!(parse(&["-l", "8abc"]).length.as_deref(), Some("8abc"));
        assert_eq!(parse(&["--length", "-3"]).length.as_deref(), Some("-3"));
    }

    #[test]
    fn enables_come_before_no_lower() {
        let flags = parse(&["--no-lower", "-d"]);
        assert_eq!(
            flags.class_updates(),
            vec![
                (CharacterClass::Digits, true),
                (CharacterClass::Lowercase, false)
            ]
        );
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(CliFlags::try_parse_from(["passform", "--hex"]).is_err());
    }
}
