use std::path::Path;

use egui::load::SizedTexture;
use egui::{Stroke, StrokeKind, Vec2};

use crate::config::config::*;
use crate::core::image_loader::RasterImageLoader;
use crate::core::texture_slot::{ActiveTexture, EguiTextures, TextureBackend, TextureError, TextureSlot};
use crate::i18n::en::*;
use crate::ui::navigation_manager::NavigationManager;

#[derive(Debug)]
pub enum BrowserState {
    /// Nothing to show: the folder is missing or holds no images.
    Empty,
    /// An image is selected but not uploaded yet; the next frame loads it.
    Pending,
    Loaded,
    /// The selected image failed to load. Not retried until the selection changes.
    Failed(TextureError),
}

/// Responses of the previous/next buttons drawn this frame.
pub struct NavigationResponse {
    pub prev: egui::Response,
    pub next: egui::Response,
}

/// Panel that steps through the images of one folder, keeping only the
/// selected one on the GPU.
pub struct ImageFolderBrowser<B: TextureBackend = EguiTextures> {
    title: String,
    navigation: NavigationManager,
    slot: TextureSlot<B>,
    state: BrowserState,
}

impl ImageFolderBrowser<EguiTextures> {
    pub fn for_context(ctx: &egui::Context, title: impl Into<String>) -> Self {
        let slot = TextureSlot::new(Box::new(RasterImageLoader), EguiTextures::new(ctx.clone()));
        Self::new(slot, title)
    }
}

impl<B: TextureBackend> ImageFolderBrowser<B> {
    pub fn new(slot: TextureSlot<B>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            navigation: NavigationManager::new(),
            slot,
            state: BrowserState::Empty,
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn navigation(&self) -> &NavigationManager {
        &self.navigation
    }

    pub fn texture(&self) -> Option<&ActiveTexture<B::Handle>> {
        self.slot.texture()
    }

    /// Per-frame bookkeeping: rescan on directory change, then load the
    /// selected image if it is pending.
    pub fn prepare(&mut self, directory: &Path) {
        self.sync_directory(directory);
        if matches!(self.state, BrowserState::Pending) {
            self.load_current();
        }
    }

    /// Switches to `directory` and selects `file` in it.
    pub fn focus(&mut self, directory: &Path, file: &Path) {
        self.sync_directory(directory);
        if self.navigation.select(file) {
            self.invalidate();
        }
    }

    pub fn on_prev(&mut self) -> bool {
        let moved = self.navigation.previous();
        if moved {
            self.invalidate();
        }
        moved
    }

    pub fn on_next(&mut self) -> bool {
        let moved = self.navigation.next();
        if moved {
            self.invalidate();
        }
        moved
    }

    /// Draws the panel into a bordered region. `None` takes the available
    /// space along that axis.
    pub fn show_panel(
        &mut self,
        ui: &mut egui::Ui,
        directory: &Path,
        width: Option<f32>,
        height: Option<f32>,
    ) -> NavigationResponse {
        let available = ui.available_size();
        let size = Vec2::new(width.unwrap_or(available.x), height.unwrap_or(available.y));

        ui.allocate_ui(size, |ui| {
            egui::Frame::group(ui.style())
                .show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    ui.shrink_clip_rect(ui.max_rect());
                    self.on_render(ui, directory)
                })
                .inner
        })
        .inner
    }

    pub fn on_render(&mut self, ui: &mut egui::Ui, directory: &Path) -> NavigationResponse {
        self.prepare(directory);

        match &self.state {
            BrowserState::Loaded => {
                if let Some(texture) = self.slot.texture() {
                    Self::draw_texture(ui, texture);
                }
            }
            BrowserState::Failed(err) => {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, format!("{ERROR_LOADINGIMG}{err}"));
            }
            BrowserState::Pending => {
                ui.label(TEXT_LOADINGIMG);
            }
            BrowserState::Empty => {}
        }

        ui.add_space(SECTION_SPACING);
        let navigation = self.show_navigation_controls(ui);
        if navigation.prev.clicked() {
            self.on_prev();
        }
        if navigation.next.clicked() {
            self.on_next();
        }

        ui.add_space(SECTION_SPACING);
        self.show_caption(ui);
        navigation
    }

    fn sync_directory(&mut self, directory: &Path) {
        if self.navigation.sync_directory(directory) {
            self.slot.release();
            self.state = if self.navigation.is_empty() {
                BrowserState::Empty
            } else {
                BrowserState::Pending
            };
        }
    }

    fn invalidate(&mut self) {
        self.slot.release();
        self.state = BrowserState::Pending;
    }

    fn load_current(&mut self) {
        let Some(path) = self.navigation.current_path() else {
            self.state = BrowserState::Empty;
            return;
        };

        self.state = match self.slot.load(path) {
            Ok(_) => BrowserState::Loaded,
            Err(err) => {
                match &err {
                    TextureError::SlotOccupied(_) => log::error!("{err}"),
                    TextureError::Load(_) => log::warn!("{err}"),
                }
                BrowserState::Failed(err)
            }
        };
    }

    fn draw_texture(ui: &mut egui::Ui, texture: &ActiveTexture<B::Handle>) {
        let size = display_size(texture.width(), texture.height());
        let response = ui.add(
            egui::Image::new(SizedTexture::new(B::texture_id(&texture.handle), size))
                .fit_to_exact_size(size),
        );
        ui.painter().rect_stroke(
            response.rect,
            0.0,
            Stroke::new(IMAGE_BORDER_WIDTH, IMAGE_BORDER_COLOR),
            StrokeKind::Middle,
        );
    }

    fn show_navigation_controls(&self, ui: &mut egui::Ui) -> NavigationResponse {
        let enabled = !self.navigation.is_empty();

        ui.scope(|ui| {
            let widgets = &mut ui.visuals_mut().widgets;
            widgets.inactive.weak_bg_fill = BUTTON_FILL;
            widgets.hovered.weak_bg_fill = BUTTON_HOVER_FILL;
            widgets.active.weak_bg_fill = BUTTON_HOVER_FILL;
            ui.visuals_mut().override_text_color = Some(BUTTON_TEXT);

            ui.horizontal(|ui| {
                let prev = ui.add_enabled(enabled, egui::Button::new(BTN_PREV));
                let next = ui.add_enabled(enabled, egui::Button::new(BTN_NEXT));
                NavigationResponse { prev, next }
            })
            .inner
        })
        .inner
    }

    fn show_caption(&self, ui: &mut egui::Ui) {
        ui.label(self.title.as_str());

        match self.navigation.current_path() {
            Some(path) => {
                ui.label(format!(
                    "{TEXT_CURRENT_MEDIA}{} ({} / {})",
                    path.display(),
                    self.navigation.current_index() + 1,
                    self.navigation.total_images()
                ));
            }
            None => {
                ui.label(TEXT_NO_IMAGES);
            }
        }
    }
}

/// Fixed display height, width following the image's aspect ratio.
pub fn display_size(width: usize, height: usize) -> Vec2 {
    if height == 0 {
        return Vec2::new(0.0, IMAGE_DISPLAY_HEIGHT);
    }
    Vec2::new(IMAGE_DISPLAY_HEIGHT * (width as f32 / height as f32), IMAGE_DISPLAY_HEIGHT)
}
