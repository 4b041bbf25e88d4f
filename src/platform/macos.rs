// Kelpie - GPL-3.0-or-later

/// On macOS the default text-field fill stands out against window chrome.
/// Clear it so read-only fields blend with the dialog background.
pub fn banish_text_background(ui: &mut egui::Ui) {
    ui.visuals_mut().extreme_bg_color = egui::Color32::TRANSPARENT;
}
