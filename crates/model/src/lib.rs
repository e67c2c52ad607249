pub mod core;
pub mod errors;
pub mod execution;
pub mod records;
