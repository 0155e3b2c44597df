pub mod entry;
pub mod menu;
pub mod navigation;
pub mod prompt;
pub mod test_mode;
