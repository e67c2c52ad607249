pub mod adapter;
pub mod connector;
pub mod error;
pub mod repository;
