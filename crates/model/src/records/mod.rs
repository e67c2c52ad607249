pub mod columns;
pub mod row;
pub mod table;
