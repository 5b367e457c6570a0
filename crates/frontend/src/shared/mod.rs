pub mod config;
pub mod export;
pub mod icons;
pub mod image_viewer;
