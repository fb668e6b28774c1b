use crate::error::*;
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// The set of canonical ingredient tokens. Membership is the sole signal of
/// "known ingredient"; the set only ever grows during a run.
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    tokens: BTreeSet<String>,
}

impl Vocabulary {
    /// Read one token per line. A missing file starts an empty vocabulary;
    /// blank lines are dropped.
    pub fn load(path: &Path) -> Result<Self> {
        let mut tokens = BTreeSet::new();
        if path.exists() {
            let file = fs::File::open(path)?;
            for line in BufReader::new(file).lines() {
                let line = line?;
                let token = line.trim();
                if !token.is_empty() {
                    tokens.insert(token.to_string());
                }
            }
        }
        Ok(Self { tokens })
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Add a token. Returns true when it was new.
    pub fn insert(&mut self, token: &str) -> bool {
        self.tokens.insert(token.to_string())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Rewrite the whole file, one token per line, sorted. This is the only
    /// persistence point; a run interrupted before it loses what it learned.
    pub fn flush(&self, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(fs::File::create(path)?);
        for token in &self.tokens {
            writeln!(out, "{token}")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl FromIterator<String> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let vocab = Vocabulary::load(&dir.path().join("ingredients.txt")).unwrap();
        assert!(vocab.is_empty());
    }

    #[test]
    fn load_trims_and_drops_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingredients.txt");
        let mut f = fs::File::create(&path).unwrap();
        write!(f, "spinach\n\n  salt  \n").unwrap();

        let vocab = Vocabulary::load(&path).unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("spinach"));
        assert!(vocab.contains("salt"));
    }

    #[test]
    fn flush_rewrites_sorted_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ingredients.txt");
        fs::write(&path, "stale-token\n").unwrap();

        let mut vocab = Vocabulary::default();
        vocab.insert("tamari");
        vocab.insert("salt");
        assert!(!vocab.insert("salt")); // grow-only, no dupes
        vocab.flush(&path).unwrap();

        // full overwrite: the stale token is gone
        assert_eq!(fs::read_to_string(&path).unwrap(), "salt\ntamari\n");

        let reloaded = Vocabulary::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("tamari"));
    }
}
