pub mod demo;
pub mod list;
pub mod render;
