// Kelpie - GPL-3.0-or-later

use crate::build_info::BuildIdentity;
use crate::platform;
use crate::ui::logo::{self, LogoAsset};

const DOWNLOAD_URL: &str = "https://kelpie-emu.org/download/";
const LICENSE_URL: &str = "https://github.com/kelpie-emu/kelpie/blob/master/LICENSE";
const AUTHORS_URL: &str = "https://github.com/kelpie-emu/kelpie/graphs/contributors";
const SUPPORT_URL: &str = "https://forums.kelpie-emu.org/";

const DISCLAIMER: &str = "\nKelpie is a free and open-source home-console emulator.\n\n\
This software should not be used to play games you do not legally own.\n";

/// The About window. Everything it shows is fixed at construction: the logo is
/// picked once from the density hint and the metadata text is composed once;
/// later frames only redraw the same content.
pub struct AboutWindow {
    identity: BuildIdentity,
    logo: LogoAsset,
    metadata_text: String,
    focus_requested: bool,
}

impl AboutWindow {
    pub fn new(scale_hint: f32, identity: BuildIdentity) -> Self {
        let metadata_text = identity.metadata_block();
        Self {
            identity,
            logo: logo::select_logo(scale_hint),
            metadata_text,
            focus_requested: false,
        }
    }

    /// Render the About window. `open` is cleared when the user closes it.
    pub fn render(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(format!("About {}", self.identity.product_name))
            .collapsible(false)
            .resizable(false)
            .default_width(540.0)
            .open(open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(20.0);
                    ui.vertical(|ui| {
                        ui.add_space(40.0);
                        // The 2x image is drawn at half its pixel size so both
                        // variants occupy the same logical area
                        ui.add(
                            egui::Image::from_bytes(self.logo.uri, self.logo.bytes)
                                .fit_to_original_size(1.0 / self.logo.scale),
                        );
                    });
                    ui.add_space(20.0);
                    ui.vertical(|ui| {
                        self.render_info_column(ui);
                    });
                    ui.add_space(20.0);
                });

                ui.add_space(15.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.identity.copyright_notice)
                            .size(9.0)
                            .weak(),
                    );
                });
                ui.add_space(5.0);
            });
    }

    fn render_info_column(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new(&self.identity.product_name).size(36.0));
        ui.add_space(5.0);

        platform::banish_text_background(ui);

        // Revision line and metadata block are selectable but read-only, drawn
        // without a frame so they sit flat on the window background
        let strong = ui.visuals().strong_text_color();
        let mut revision = self.identity.revision_description.as_str();
        ui.add(
            egui::TextEdit::singleline(&mut revision)
                .frame(false)
                .text_color(strong)
                .desired_width(320.0),
        );
        ui.add_space(10.0);

        let mut metadata = self.metadata_text.as_str();
        let metadata_response = ui.add(
            egui::TextEdit::multiline(&mut metadata)
                .frame(false)
                .font(egui::TextStyle::Small)
                .desired_rows(3)
                .desired_width(320.0),
        );

        // Focus moves here once, after the first full layout
        if !self.focus_requested {
            metadata_response.request_focus();
            self.focus_requested = true;
        }

        ui.horizontal(|ui| {
            ui.label("Check for updates: ");
            ui.hyperlink_to("kelpie-emu.org/download", DOWNLOAD_URL);
        });

        ui.label(DISCLAIMER);

        ui.horizontal(|ui| {
            ui.hyperlink_to("License", LICENSE_URL);
            ui.label("  |  ");
            ui.hyperlink_to("Authors", AUTHORS_URL);
            ui.label("  |  ");
            ui.hyperlink_to("Support", SUPPORT_URL);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_info::{COPYRIGHT_NOTICE, PRODUCT_NAME};

    fn identity() -> BuildIdentity {
        BuildIdentity {
            product_name: PRODUCT_NAME.to_string(),
            branch_name: "master".to_string(),
            revision_hash: "abc123".to_string(),
            revision_description: "v0.4.1-12-gabc123".to_string(),
            build_date: "Jan 1 2015".to_string(),
            build_time: "00:00:00".to_string(),
            copyright_notice: COPYRIGHT_NOTICE.to_string(),
        }
    }

    #[test]
    fn test_metadata_composed_at_construction() {
        let window = AboutWindow::new(1.0, identity());
        assert_eq!(
            window.metadata_text,
            "Branch: master\nRevision: abc123\nCompiled: Jan 1 2015 @ 00:00:00"
        );
    }

    #[test]
    fn test_logo_captured_once_from_hint() {
        let window = AboutWindow::new(2.0, identity());
        assert_eq!(window.logo, logo::select_logo(2.0));
        assert_eq!(window.logo.scale, 2.0);

        let window = AboutWindow::new(1.5, identity());
        assert_eq!(window.logo, logo::select_logo(1.5));
        assert_eq!(window.logo.scale, 1.0);
    }

    #[test]
    fn test_construction_identical_for_identical_inputs() {
        let a = AboutWindow::new(2.0, identity());
        let b = AboutWindow::new(2.0, identity());
        assert_eq!(a.identity, b.identity);
        assert_eq!(a.logo, b.logo);
        assert_eq!(a.metadata_text, b.metadata_text);
    }

    #[test]
    fn test_construction_accepts_empty_identity() {
        let empty = BuildIdentity {
            product_name: String::new(),
            branch_name: String::new(),
            revision_hash: String::new(),
            revision_description: String::new(),
            build_date: String::new(),
            build_time: String::new(),
            copyright_notice: String::new(),
        };
        let window = AboutWindow::new(1.0, empty);
        assert_eq!(
            window.metadata_text,
            "Branch: \nRevision: \nCompiled:  @ "
        );
    }
}
