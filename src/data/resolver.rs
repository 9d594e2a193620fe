//! Quiz source resolution.
//!
//! Turns a source descriptor into a validated [`QuizDocument`], or a typed
//! failure. One attempt per resolve; the caller decides whether to surface
//! the error and let the user try again.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::ImportStore;
use crate::models::QuizDocument;

/// Path of the bundled quiz, relative to the working directory.
pub const DEFAULT_QUIZ_PATH: &str = "quizzes/sample.json";

/// Where a quiz document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSource {
    /// The bundled quiz at [`DEFAULT_QUIZ_PATH`].
    Bundled,
    /// A caller-specified quiz file.
    Path(PathBuf),
    /// The quiz held in the import store.
    Imported { name: String },
}

impl QuizSource {
    /// Label shown in the source list on the home page.
    pub fn label(&self) -> String {
        match self {
            QuizSource::Bundled => "sample.json".to_string(),
            QuizSource::Path(path) => path.display().to_string(),
            QuizSource::Imported { name } => format!("Imported: {name}"),
        }
    }
}

/// Why a resolve failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The resource is absent or unreadable.
    NotFound { source: String },
    /// The resource exists but is not a valid quiz document.
    Malformed { source: String, reason: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NotFound { source } => write!(f, "quiz not found: {source}"),
            LoadError::Malformed { source, reason } => {
                write!(f, "malformed quiz {source}: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Resolve a source descriptor to a validated document.
pub fn resolve(source: &QuizSource, store: &ImportStore) -> Result<QuizDocument, LoadError> {
    match source {
        QuizSource::Bundled => load_from_path(Path::new(DEFAULT_QUIZ_PATH)),
        QuizSource::Path(path) => load_from_path(path),
        QuizSource::Imported { name } => load_from_store(name, store),
    }
}

fn load_from_path(path: &Path) -> Result<QuizDocument, LoadError> {
    let source = path.display().to_string();

    let contents = fs::read_to_string(path).map_err(|_| LoadError::NotFound {
        source: source.clone(),
    })?;

    let document: QuizDocument =
        serde_json::from_str(&contents).map_err(|err| LoadError::Malformed {
            source: source.clone(),
            reason: err.to_string(),
        })?;

    document.validate().map_err(|err| LoadError::Malformed {
        source,
        reason: err.to_string(),
    })?;

    Ok(document)
}

fn load_from_store(name: &str, store: &ImportStore) -> Result<QuizDocument, LoadError> {
    let record = store.get()?.ok_or_else(|| LoadError::NotFound {
        source: format!("imported quiz '{name}'"),
    })?;

    if record.name != name {
        return Err(LoadError::NotFound {
            source: format!("imported quiz '{name}'"),
        });
    }

    record.data.validate().map_err(|err| LoadError::Malformed {
        source: format!("imported quiz '{name}'"),
        reason: err.to_string(),
    })?;

    Ok(record.data)
}
