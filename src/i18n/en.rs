pub const MENU_FILE: &str = "File";
pub const MENU_OPEN_FOLDER: &str = "Open folder…";
pub const MENU_OPEN_IMAGE: &str = "Open image…";
pub const MENU_QUIT: &str = "Quit";

pub const BTN_PREV: &str = "<-";
pub const BTN_NEXT: &str = "->";

pub const TITLE_NAVIGATOR: &str = "(Image Folder Navigator)";
pub const TITLE_PANEL_1: &str = "Panel 1";
pub const TITLE_PANEL_2: &str = "Panel 2";
pub const TITLE_PANEL_3: &str = "Panel 3";

pub const TEXT_CURRENT_MEDIA: &str = "Current media: ";
pub const TEXT_NO_IMAGES: &str = "No images in this folder";
pub const TEXT_LOADINGIMG: &str = "Loading image...";
pub const ERROR_LOADINGIMG: &str = "Could not load image: ";
