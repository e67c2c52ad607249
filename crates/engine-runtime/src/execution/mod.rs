pub mod executor;
pub mod summary;
