use crate::{error::*, types::Config};
use std::fs;
use std::path::Path;

/// Default config file looked up next to the data files.
pub const CONFIG_FILE: &str = "larder.json";

/// Load the run configuration.
///
/// Every field has a serde default, so a partial document only overrides what
/// it names. No file at all means the stock site profile and the stock data
/// file paths.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    if !path.exists() {
        return Ok(Config::default());
    }
    let file = fs::File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(Some(&dir.path().join("nope.json"))).unwrap();
        assert_eq!(cfg.paths.vocabulary, Path::new("ingredients.txt"));
        assert_eq!(cfg.paths.active_ledger, Path::new("recipe_data_2.csv"));
        assert_eq!(cfg.profile.title.0, "h1.split-screen-content-header__hed");
    }

    #[test]
    fn partial_document_only_overrides_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("larder.json");
        let mut f = fs::File::create(&path).unwrap();
        write!(f, r#"{{"paths": {{"vocabulary": "v.txt", "active_ledger": "out.csv", "legacy_ledgers": []}}}}"#).unwrap();

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.paths.vocabulary, Path::new("v.txt"));
        assert!(cfg.paths.legacy_ledgers.is_empty());
        // untouched sections keep their defaults
        assert_eq!(cfg.fetch.timeout_ms, 10_000);
        assert!(cfg.profile.ingredients.0.contains("recipe__ingredient-list"));
    }

    #[test]
    fn title_sources_puts_active_ledger_first() {
        let cfg = Config::default();
        let sources: Vec<_> = cfg.paths.title_sources().collect();
        assert_eq!(sources[0], &cfg.paths.active_ledger);
        assert_eq!(sources.len(), 2);
    }
}
