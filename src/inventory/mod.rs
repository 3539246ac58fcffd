//! Clip inventory: locating the clip directory and correlating sibling files

pub mod resolver;
pub mod scanner;

pub use resolver::resolve_clip_directory;
pub use scanner::InventoryScanner;
