//! Command handlers, one submodule per command group.

mod color;
mod config;
mod palette;
mod transfer;

use std::path::Path;

use tint_common::Result;

use crate::cli::Command;
use crate::session::Session;

/// Run one parsed command against the session.
pub fn run(command: Command, session: &Session, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::Generate(args) => color::generate(&args, session),
        Command::Convert { hex } => color::convert(&hex),
        Command::Contrast { first, second } => color::contrast(&first, &second),
        Command::Name { hex } => color::name(&hex),
        Command::Palette(cmd) => palette::run(cmd, session),
        Command::Export { out } => transfer::export(session, out.as_deref()),
        Command::Import { file, replace } => transfer::import(session, &file, replace),
        Command::Config(cmd) => config::run(cmd, session, config_path),
    }
}
