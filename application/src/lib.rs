pub mod api;
pub mod item;
pub mod json;
