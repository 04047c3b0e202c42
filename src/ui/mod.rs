pub mod browser;
pub mod navigation_manager;
