//! Domain entity definitions.

mod category;
mod vocabulary;

pub use category::Category;
pub use vocabulary::Vocabulary;
