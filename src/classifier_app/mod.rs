pub mod core;
pub mod image_file;
pub mod main;
pub mod render;
pub mod run_effect;
