pub mod query;
pub mod translation;
