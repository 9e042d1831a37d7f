// seedrand_sim/src/simulation/config/catalog.rs

//! Discovery of scenario files for batch runs.

use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use super::ConfigError;

/// Walks `dir` and returns every `.toml` file beneath it, sorted by path so
/// batch runs happen in a stable order.
pub fn discover_scenarios(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::NotFound(dir.to_path_buf()));
    }

    info!("Discovering scenarios in: {}", dir.display());

    let mut scenarios: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|e| {
            !e.file_type().is_dir() && e.path().extension().map_or(false, |ext| ext == "toml")
        })
        .map(|e| e.into_path())
        .collect();

    scenarios.sort();
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_nested_toml_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.toml"), "").unwrap();
        fs::write(dir.path().join("a.toml"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested").join("c.toml"), "").unwrap();

        let found = discover_scenarios(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.toml"),
                PathBuf::from("b.toml"),
                PathBuf::from("nested").join("c.toml"),
            ]
        );
    }

    #[test]
    fn missing_directory_is_not_found() {
        let result = discover_scenarios(Path::new("no/such/scenario/dir"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
