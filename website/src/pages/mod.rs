pub mod catalog;
pub mod tool;
