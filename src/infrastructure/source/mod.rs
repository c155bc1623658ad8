//! Vocabulary source adapters.

mod builtin;

pub use builtin::BuiltinWordbook;
