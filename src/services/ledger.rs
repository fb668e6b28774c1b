use crate::error::*;
use crate::types::Paths;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// The recipe ledger: previously collected titles plus the append-only output
/// file for this run.
///
/// Row shape matches the files the original collection runs produced:
/// `Title,,tok1,tok2,` — an empty rating hole after the title, one trailing
/// comma per token. Old and new files parse identically (title is the field
/// before the first comma).
pub struct Ledger {
    titles: Vec<String>,
    out: File,
}

impl Ledger {
    /// Load titles from the active ledger and every legacy ledger, then open
    /// the active file for appending. Missing files read as empty.
    pub fn open(paths: &Paths) -> Result<Self> {
        let mut titles = Vec::new();
        for path in paths.title_sources() {
            read_titles(path, &mut titles)?;
        }
        let out = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&paths.active_ledger)?;
        Ok(Self { titles, out })
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Append one row and record the title for same-run de-duplication.
    pub fn append(&mut self, title: &str, tokens: &[String]) -> Result<()> {
        let mut row = format!("{title},,");
        for token in tokens {
            row.push_str(token);
            row.push(',');
        }
        writeln!(self.out, "{row}")?;
        self.titles.push(title.to_string());
        Ok(())
    }
}

fn read_titles(path: &Path, out: &mut Vec<String>) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let file = fs::File::open(path)?;
    for line in BufReader::new(file).lines() {
        let line = line?;
        if let Some(title) = line.split(',').next() {
            if !title.is_empty() {
                out.push(title.to_string());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths_in(dir: &Path) -> Paths {
        Paths {
            vocabulary: dir.join("ingredients.txt"),
            active_ledger: dir.join("recipe_data_2.csv"),
            legacy_ledgers: vec![dir.join("recipe_data.csv")],
        }
    }

    #[test]
    fn titles_come_from_active_and_legacy_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("recipe_data.csv"), "Old Soup,,salt,\n").unwrap();
        fs::write(dir.path().join("recipe_data_2.csv"), "New Salad,4,spinach,\n").unwrap();

        let ledger = Ledger::open(&paths_in(dir.path())).unwrap();
        assert!(ledger.contains("Old Soup"));
        assert!(ledger.contains("New Salad"));
        assert!(!ledger.contains("Unknown"));
    }

    #[test]
    fn missing_ledger_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::open(&paths_in(dir.path())).unwrap();
        assert!(ledger.titles().is_empty());
    }

    #[test]
    fn append_writes_exact_row_bytes_and_records_title() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let mut ledger = Ledger::open(&paths).unwrap();

        ledger
            .append("Sheet-Pan Salmon", &["salmon".to_string(), "spinach".to_string()])
            .unwrap();
        ledger.append("Bare Title", &[]).unwrap();

        assert!(ledger.contains("Sheet-Pan Salmon"));
        let written = fs::read_to_string(&paths.active_ledger).unwrap();
        assert_eq!(written, "Sheet-Pan Salmon,,salmon,spinach,\nBare Title,,\n");
    }

    #[test]
    fn append_only_never_clobbers_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.active_ledger, "Earlier Run,,salt,\n").unwrap();

        let mut ledger = Ledger::open(&paths).unwrap();
        ledger.append("This Run", &["spinach".to_string()]).unwrap();

        let written = fs::read_to_string(&paths.active_ledger).unwrap();
        assert_eq!(written, "Earlier Run,,salt,\nThis Run,,spinach,\n");
    }

    #[test]
    fn legacy_paths_are_never_written() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let legacy: PathBuf = paths.legacy_ledgers[0].clone();

        let mut ledger = Ledger::open(&paths).unwrap();
        ledger.append("Row", &[]).unwrap();
        assert!(!legacy.exists());
    }
}
