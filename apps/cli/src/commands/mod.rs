pub mod select;
pub mod details;
pub mod list;
