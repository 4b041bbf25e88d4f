/// Kelpie - A home-console emulator frontend
///
/// Copyright (C) 2021-2026 Kelpie Team
///
/// This program is free software: you can redistribute it and/or modify
/// it under the terms of the GNU General Public License as published by
/// the Free Software Foundation, either version 3 of the License, or
/// (at your option) any later version.
///
/// This program is distributed in the hope that it will be useful,
/// but WITHOUT ANY WARRANTY; without even the implied warranty of
/// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
/// GNU General Public License for more details.
///
/// You should have received a copy of the GNU General Public License
/// along with this program.  If not, see <https://www.gnu.org/licenses/>.
mod build_info;
mod config;
mod platform;
mod ui;

use clap::Parser;
use egui::IconData;
use ui::app::KelpieApp;

#[derive(Parser, Debug)]
#[command(name = "kelpie")]
#[command(author = "Kelpie Team")]
#[command(version = build_info::VERSION)]
#[command(about = "Desktop frontend for the Kelpie home-console emulator", long_about = None)]
struct Args {
    /// Override the display density the About window uses for logo selection
    /// (e.g. 2.0 to force the high-density asset)
    #[arg(long = "scale", value_name = "FACTOR")]
    scale: Option<f32>,
}

fn main() -> eframe::Result<()> {
    // Initialize logger with millisecond precision timestamps
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!(
        "Kelpie starting up (version {}, revision {})",
        build_info::VERSION,
        env!("GIT_HASH")
    );

    let args = Args::parse();

    if let Some(scale) = args.scale {
        log::info!("Display density override from command line: {scale}");
    }

    // Load app icon
    let icon_data = eframe::icon_data::from_png_bytes(include_bytes!("../logo.png"))
        .unwrap_or_else(|e| {
            log::warn!("Failed to load app icon: {e}");
            IconData::default()
        });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(icon_data),
        ..Default::default()
    };

    eframe::run_native(
        "Kelpie",
        native_options,
        Box::new(move |cc| Ok(Box::new(KelpieApp::new(cc, args.scale)))),
    )
}
