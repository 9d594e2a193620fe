mod resolver;
mod store;

pub use resolver::{resolve, LoadError, QuizSource, DEFAULT_QUIZ_PATH};
pub use store::{ImportStore, ImportedQuiz};
