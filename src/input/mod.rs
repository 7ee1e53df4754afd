//! Input processing module
//! Turns CV documents and pasted text into plain text for analysis

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod paste;

pub use manager::InputManager;
pub use paste::read_pasted_text;
