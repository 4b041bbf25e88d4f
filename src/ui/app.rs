// Kelpie - GPL-3.0-or-later

use crate::build_info::{self, BuildIdentity};
use crate::config::GlobalConfig;
use crate::ui::windows::AboutWindow;

pub struct KelpieApp {
    /// Global configuration
    global_config: GlobalConfig,

    /// Status message shown in the bottom panel
    status_message: String,

    /// About window, alive while shown. The logo choice and metadata text are
    /// fixed when it opens; closing drops the instance.
    about_window: Option<AboutWindow>,

    /// Display density override from the command line
    scale_override: Option<f32>,
}

impl KelpieApp {
    pub fn new(cc: &eframe::CreationContext<'_>, scale_override: Option<f32>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut global_config = GlobalConfig::load();

        let identity = BuildIdentity::from_build_env();
        if global_config.last_seen_revision != identity.revision_hash {
            log::info!("First start of revision {}", identity.revision_hash);
            global_config.last_seen_revision = identity.revision_hash.clone();
            if let Err(e) = global_config.save() {
                log::warn!("Failed to save config: {e:#}");
            }
        }

        KelpieApp {
            global_config,
            status_message: format!(
                "{} {} - no title loaded.",
                build_info::PRODUCT_NAME,
                build_info::VERSION
            ),
            about_window: None,
            scale_override,
        }
    }

    /// Density hint for the About window: command line wins over config, which
    /// wins over what the host environment reports.
    fn display_scale_hint(&self, ctx: &egui::Context) -> f32 {
        self.scale_override
            .or(self.global_config.scale_override)
            .unwrap_or_else(|| ctx.pixels_per_point())
    }

    fn open_about_window(&mut self, ctx: &egui::Context) {
        if self.about_window.is_none() {
            let scale_hint = self.display_scale_hint(ctx);
            log::debug!("Opening About window with density hint {scale_hint}");
            self.about_window = Some(AboutWindow::new(
                scale_hint,
                BuildIdentity::from_build_env(),
            ));
        }
    }

    /// Render top menu bar
    fn render_menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.menu_button("File", |ui| {
            if ui.button("Quit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About").clicked() {
                self.open_about_window(ctx);
                ui.close();
            }
        });
    }
}

impl eframe::App for KelpieApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                self.render_menu_bar(ui, ctx);
            });
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.label(egui::RichText::new(build_info::PRODUCT_NAME).size(28.0).weak());
                ui.label(
                    egui::RichText::new("Build information is under Help ▸ About.").weak(),
                );
            });
        });

        if let Some(about) = &mut self.about_window {
            let mut open = true;
            about.render(ctx, &mut open);
            if !open {
                self.about_window = None;
            }
        }
    }
}
