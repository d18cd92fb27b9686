//! Input processing module
//! Handles file type detection and text extraction for resume files

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::InputManager;
