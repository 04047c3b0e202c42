use std::path::PathBuf;

use rfd::FileDialog;

use crate::config::config::*;
use crate::config::data_dir::resolve_data_dir;
use crate::core::file_manager::FileManager;
use crate::i18n::en::*;
use crate::ui::browser::ImageFolderBrowser;

pub fn run() {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);
    let result = eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| {
            let app = NavigatorApp::new(&cc.egui_ctx, resolve_data_dir());
            Ok(Box::new(app))
        }),
    );

    if let Err(e) = result {
        log::error!("Failed to start {}: {}", APP_NAME, e);
        std::process::exit(1);
    }
}

pub struct NavigatorApp {
    browser: ImageFolderBrowser,
    directory: PathBuf,
}

impl NavigatorApp {
    pub fn new(ctx: &egui::Context, directory: PathBuf) -> Self {
        Self {
            browser: ImageFolderBrowser::for_context(ctx, TITLE_NAVIGATOR),
            directory,
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let (prev, next) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space),
            )
        });
        if prev {
            self.browser.on_prev();
        }
        if next {
            self.browser.on_next();
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(MENU_FILE, |ui| {
                    if ui.button(MENU_OPEN_FOLDER).clicked() {
                        ui.close_menu();
                        self.pick_folder();
                    }
                    if ui.button(MENU_OPEN_IMAGE).clicked() {
                        ui.close_menu();
                        self.pick_image();
                    }
                    ui.separator();
                    if ui.button(MENU_QUIT).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn pick_folder(&mut self) {
        if let Some(dir) = FileDialog::new().set_directory(&self.directory).pick_folder() {
            log::info!("Browsing {}", dir.display());
            self.directory = dir;
        }
    }

    fn pick_image(&mut self) {
        let (filter_name, extensions) = FileManager::supported_file_filter();
        let Some(path) = FileDialog::new()
            .set_directory(&self.directory)
            .add_filter(filter_name, &extensions)
            .pick_file()
        else {
            return;
        };

        if let Some(parent) = path.parent() {
            log::info!("Browsing {} from {}", parent.display(), path.display());
            self.directory = parent.to_path_buf();
            self.browser.focus(&self.directory, &path);
        }
    }

    fn show_panels(&mut self, ctx: &egui::Context) {
        let Self { browser, directory } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.visuals_mut().override_text_color = Some(PANEL_TEXT);
            ui.columns(3, |columns| {
                panel(&mut columns[0], TITLE_PANEL_1, |ui| {
                    browser.show_panel(ui, directory.as_path(), None, Some(NAVIGATOR_PANEL_HEIGHT));
                });
                panel(&mut columns[1], TITLE_PANEL_2, |_| {});
                panel(&mut columns[2], TITLE_PANEL_3, |_| {});
            });
        });
    }
}

fn panel(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style()).fill(PANEL_FILL).show(ui, |ui| {
        ui.set_min_size(ui.available_size());
        ui.label(title);
        add_contents(ui);
    });
}

impl eframe::App for NavigatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);
        self.show_menu_bar(ctx);
        self.show_panels(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn key_press(key: egui::Key) -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        }
    }

    fn frame(app: &mut NavigatorApp, ctx: &egui::Context, input: egui::RawInput) {
        let _ = ctx.run(input, |ctx| {
            app.handle_keyboard_input(ctx);
            app.show_panels(ctx);
        });
    }

    #[test]
    fn arrow_keys_step_through_the_folder() {
        let dir = tempdir().unwrap();
        for name in ["a.png", "b.png", "c.png"] {
            RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]))
                .save(dir.path().join(name))
                .unwrap();
        }
        let ctx = egui::Context::default();
        let mut app = NavigatorApp::new(&ctx, dir.path().to_path_buf());

        frame(&mut app, &ctx, egui::RawInput::default());
        frame(&mut app, &ctx, key_press(egui::Key::ArrowRight));
        frame(&mut app, &ctx, key_press(egui::Key::Space));
        assert_eq!(app.browser.navigation().current_index(), 2);

        frame(&mut app, &ctx, key_press(egui::Key::ArrowLeft));
        assert_eq!(app.browser.navigation().current_index(), 1);
        assert_eq!(
            app.browser.texture().unwrap().path,
            dir.path().join("b.png")
        );
    }
}
