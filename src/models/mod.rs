mod page;
mod question;

pub use page::Page;
pub use question::{DocumentError, QuizDocument, QuizQuestion};
