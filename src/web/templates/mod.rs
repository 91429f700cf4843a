pub mod base;
pub mod components;
