//! Flat-file persistence for draw history

use super::models::Draw;
use crate::cli::types::ContestNumber;
use crate::error::{LotoError, Result};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What `load_all` does with a line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Skip the line. It is dropped for good on the next `save`.
    #[default]
    Skip,
    /// Fail the load with [`LotoError::MalformedLine`].
    Error,
}

/// The local draw store: a plain text file with one draw per line,
/// `contest_number,n1,...,n15`, kept sorted by contest number.
///
/// A missing file reads as an empty store. `save` rewrites the whole file;
/// callers that interleave loads and saves are expected to serialize them
/// (the synchronizer holds a mutex around its load-merge-save cycle).
#[derive(Debug)]
pub struct DrawStore {
    path: PathBuf,
    policy: MalformedLinePolicy,
}

impl DrawStore {
    /// Open a store at `path` with the default skip-malformed-lines policy.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: MalformedLinePolicy::Skip,
        }
    }

    /// Open a store at `path` with an explicit malformed-line policy.
    pub fn with_policy(path: impl Into<PathBuf>, policy: MalformedLinePolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> MalformedLinePolicy {
        self.policy
    }

    fn read_contents(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Count of lines in the store file; 0 if the file does not exist or
    /// cannot be read.
    pub fn total(&self) -> usize {
        match self.read_contents() {
            Ok(Some(contents)) => contents.lines().filter(|l| !l.trim().is_empty()).count(),
            _ => 0,
        }
    }

    /// Greatest contest number present in the store, or `None` if the store
    /// is empty or missing. Malformed lines never contribute, regardless of
    /// policy.
    pub fn latest(&self) -> Option<ContestNumber> {
        let contents = self.read_contents().ok()??;
        contents
            .lines()
            .filter_map(|line| Draw::from_line(line).ok())
            .map(|draw| draw.contest())
            .max()
    }

    /// Parse every line into a draw, keyed by contest number.
    ///
    /// Lines that fail to parse are skipped or reported per the store's
    /// [`MalformedLinePolicy`]. A missing file yields an empty map.
    pub fn load_all(&self) -> Result<BTreeMap<ContestNumber, Draw>> {
        let Some(contents) = self.read_contents()? else {
            return Ok(BTreeMap::new());
        };

        let mut draws = BTreeMap::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Draw::from_line(line) {
                Ok(draw) => {
                    draws.insert(draw.contest(), draw);
                }
                Err(_) if self.policy == MalformedLinePolicy::Skip => {}
                Err(_) => {
                    return Err(LotoError::MalformedLine {
                        line_number: idx + 1,
                        line: line.to_string(),
                    });
                }
            }
        }
        Ok(draws)
    }

    /// All stored draws sorted ascending by contest number.
    pub fn all_draws(&self) -> Result<Vec<Draw>> {
        Ok(self.load_all()?.into_values().collect())
    }

    /// Draw for a single contest, if stored.
    pub fn get(&self, contest: ContestNumber) -> Result<Option<Draw>> {
        Ok(self.load_all()?.remove(&contest))
    }

    /// Replace the file contents with `draws`, one line per draw, sorted
    /// ascending by contest number.
    pub fn save<'a>(&self, draws: impl IntoIterator<Item = &'a Draw>) -> Result<()> {
        let mut sorted: Vec<&Draw> = draws.into_iter().collect();
        sorted.sort_by_key(|draw| draw.contest());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut contents = String::new();
        for draw in sorted {
            contents.push_str(&draw.to_line());
            contents.push('\n');
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
