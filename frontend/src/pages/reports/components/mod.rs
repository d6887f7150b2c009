pub mod filters;
pub mod tables;
