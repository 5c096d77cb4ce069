//! One-shot command line mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;

use clap::Parser;

use crate::error::Result;
use crate::settings::Settings;

/// Parse `args` and generate once. Help, version, and flag errors are
/// reported by clap, which exits on its own.
pub fn run(args: Vec<String>, settings: Settings) -> Result<()> {
    let flags = CliFlags::parse_from(args);
    Context::new(flags, settings).run()
}
