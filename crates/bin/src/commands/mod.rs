pub mod compare;
pub mod field;
pub mod key;
