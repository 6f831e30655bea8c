pub mod index;
pub mod records;
