//! Figma export and import against the palette data file.

use std::path::Path;

use tint_common::{Result, StoreError};
use tracing::{info, warn};

use crate::session::Session;

pub fn export(session: &Session, out: Option<&Path>) -> Result<()> {
    let store = session.open_store()?;
    let json = store.export_figma()?;
    match out {
        Some(path) => {
            std::fs::write(path, &json)?;
            info!(
                palettes = store.palette_count(),
                "exported Figma collection to {}",
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn import(session: &Session, file: &Path, replace: bool) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .map_err(|e| StoreError::Import(format!("failed to read {}: {e}", file.display())))?;
    let imported = tint_store::import_from_figma_json(&json)?;
    let count = imported.palettes.len();
    if imported.warnings > 0 {
        warn!(
            warnings = imported.warnings,
            "some colors could not be read and were replaced with mid-gray"
        );
    }

    let mut store = session.open_store()?;
    if replace {
        store.replace_all_palettes(imported.palettes);
    } else {
        store.import_palettes(imported.palettes);
    }
    store.set_collection_name(&imported.collection_name);
    session.save(&store)?;

    println!(
        "imported {count} palette(s) from {} into \"{}\"",
        file.display(),
        imported.collection_name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_config::TintConfig;

    #[test]
    fn export_then_import_appends() {
        let dir = tempfile::tempdir().unwrap();
        let session =
            Session::new(TintConfig::default(), Some(dir.path().join("palettes.json"))).unwrap();
        let mut store = session.open_store().unwrap();
        store.create_palette(Some("#6366f1")).unwrap();
        store.set_collection_name("Brand");

        let file = dir.path().join("figma.json");
        export(&session, Some(&file)).unwrap();
        assert!(file.exists());

        // Seeded palette plus the one created above, exported then appended.
        import(&session, &file, false).unwrap();
        let store = session.open_store().unwrap();
        assert_eq!(store.palette_count(), 4);
        assert_eq!(store.state().collection_name, "Brand");
    }

    #[test]
    fn import_replace_swaps_palettes() {
        let dir = tempfile::tempdir().unwrap();
        let session =
            Session::new(TintConfig::default(), Some(dir.path().join("palettes.json"))).unwrap();
        let mut store = session.open_store().unwrap();
        store.create_palette(Some("#6366f1")).unwrap();
        store.create_palette(Some("#0ea5e9")).unwrap();

        let file = dir.path().join("figma.json");
        std::fs::write(
            &file,
            r#"{"name":"Other","modes":[{"name":"Light","modeId":"light"}],
               "variables":[{"name":"red/100","type":"color","values":{"light":{"r":1,"g":0,"b":0,"a":1}}}]}"#,
        )
        .unwrap();

        import(&session, &file, true).unwrap();
        let store = session.open_store().unwrap();
        assert_eq!(store.palette_count(), 1);
        assert_eq!(store.selected_palette().unwrap().name, "red");
        assert_eq!(store.state().collection_name, "Other");
    }

    #[test]
    fn import_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let session =
            Session::new(TintConfig::default(), Some(dir.path().join("palettes.json"))).unwrap();
        assert!(import(&session, &dir.path().join("absent.json"), false).is_err());
    }
}
