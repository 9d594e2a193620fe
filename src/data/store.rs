//! Single-slot persistent store for one imported quiz.
//!
//! The terminal analog of the original browser storage slot: at most one
//! imported quiz is retained, and importing another silently replaces it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::data::LoadError;
use crate::models::QuizDocument;

const STORE_FILE_NAME: &str = "imported_quiz.json";

/// The stored record: the imported file's name plus its parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedQuiz {
    pub name: String,
    pub data: QuizDocument,
}

/// File-backed store holding at most one [`ImportedQuiz`].
#[derive(Debug, Clone)]
pub struct ImportStore {
    path: PathBuf,
}

impl ImportStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store in the platform data directory, falling back to the working
    /// directory when no home directory can be determined.
    pub fn at_default_location() -> Self {
        let path = ProjectDirs::from("", "", "learn-easy")
            .map(|dirs| dirs.data_dir().join(STORE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record, if any.
    ///
    /// A missing file means no import has been made. A file that exists but
    /// does not parse is reported as malformed rather than silently dropped.
    pub fn get(&self) -> Result<Option<ImportedQuiz>, LoadError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(_) => {
                return Err(LoadError::NotFound {
                    source: self.path.display().to_string(),
                });
            }
        };

        let record: ImportedQuiz =
            serde_json::from_str(&contents).map_err(|err| LoadError::Malformed {
                source: self.path.display().to_string(),
                reason: err.to_string(),
            })?;

        Ok(Some(record))
    }

    /// Write a record, replacing any prior one.
    pub fn set(&self, record: &ImportedQuiz) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)
    }

    /// Remove the stored record. Removing an empty slot is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }

    /// Import a quiz file from disk into the store.
    ///
    /// The file must parse as a quiz document and pass validation before
    /// anything is written; a failed import leaves any prior record intact.
    pub fn import_file(&self, file: &Path) -> Result<ImportedQuiz, LoadError> {
        let source = file.display().to_string();

        let contents = fs::read_to_string(file).map_err(|_| LoadError::NotFound {
            source: source.clone(),
        })?;

        let data: QuizDocument =
            serde_json::from_str(&contents).map_err(|err| LoadError::Malformed {
                source: source.clone(),
                reason: err.to_string(),
            })?;

        data.validate().map_err(|err| LoadError::Malformed {
            source: source.clone(),
            reason: err.to_string(),
        })?;

        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or(source);

        let record = ImportedQuiz { name, data };
        self.set(&record).map_err(|err| LoadError::Malformed {
            source: self.path.display().to_string(),
            reason: err.to_string(),
        })?;

        Ok(record)
    }
}
