use egui::Color32;

pub const APP_NAME: &str = "Image Folder Navigator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_SLUG: &str = "image_folder_navigator";

pub const WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [400.0, 300.0];

/// Overrides the folder browsed at startup.
pub const DATA_DIR_ENV: &str = "IMAGE_NAVIGATOR_DATA_DIR";

// Image panel
pub const IMAGE_DISPLAY_HEIGHT: f32 = 150.0;
pub const IMAGE_BORDER_WIDTH: f32 = 2.0;
pub const IMAGE_BORDER_COLOR: Color32 = Color32::WHITE;
pub const SECTION_SPACING: f32 = 10.0;
pub const NAVIGATOR_PANEL_HEIGHT: f32 = 250.0;

pub const BUTTON_FILL: Color32 = Color32::from_rgb(255, 192, 203);
pub const BUTTON_HOVER_FILL: Color32 = Color32::from_rgb(255, 0, 0);
pub const BUTTON_TEXT: Color32 = Color32::BLACK;

// Host panels
pub const PANEL_FILL: Color32 = Color32::from_rgba_premultiplied(82, 82, 82, 204);
pub const PANEL_TEXT: Color32 = Color32::from_rgb(153, 255, 0);
