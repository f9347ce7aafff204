//! `tint palette` subcommands.

use tint_common::{PaletteId, Result};
use tracing::info;

use crate::cli::PaletteCommand;
use crate::output::palette_line;
use crate::session::Session;

pub fn run(command: PaletteCommand, session: &Session) -> Result<()> {
    let mut store = session.open_store()?;
    match command {
        PaletteCommand::New { hex, alpha } => {
            let id = match (hex.as_deref(), alpha) {
                (Some(hex), true) => store.create_alpha_palette(hex)?,
                (hex, _) => store.create_palette(hex)?,
            };
            session.save(&store)?;
            if let Some(palette) = store.palette(&id) {
                info!(palette = %id, "saved to {}", session.data_path().display());
                println!("{}", palette_line(palette, true));
            }
        }
        PaletteCommand::List => {
            let state = store.state();
            if state.palettes.is_empty() {
                println!("no palettes in {}", session.data_path().display());
            }
            for palette in &state.palettes {
                let selected = state.selected_palette_id.as_ref() == Some(&palette.id);
                println!("{}", palette_line(palette, selected));
            }
        }
        PaletteCommand::Delete { id } => {
            let id = PaletteId::from(id);
            store.delete_palette(&id)?;
            session.save(&store)?;
            println!("deleted {id}");
        }
    }
    Ok(())
}
