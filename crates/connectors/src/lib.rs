pub mod file;
pub mod sql;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
