/// Page window arithmetic shared by list queries.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
/// Shared time helpers.
pub mod time;
