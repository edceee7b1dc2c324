pub mod catalog;
pub mod selection;
