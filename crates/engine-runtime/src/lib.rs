pub mod error;
pub mod execution;
