pub mod handlers;
pub mod merge;
