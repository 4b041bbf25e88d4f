// Kelpie - GPL-3.0-or-later

//! The product logo ships in two densities. Which one a panel shows is a pure
//! function of the display density reported when the panel is built.

/// Standard-density logo, embedded in the binary
static LOGO_PNG: &[u8] = include_bytes!("../../assets/logo.png");

/// High-density variant for 2x ("Retina") displays
static LOGO_2X_PNG: &[u8] = include_bytes!("../../assets/logo@2x.png");

/// Densities at and above this cutoff get the high-density asset
const HIGH_DENSITY_CUTOFF: f32 = 2.0;

/// One of the two embedded logo images plus the display scale it should be
/// drawn at, so the high-density image occupies the same logical size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoAsset {
    pub bytes: &'static [u8],
    pub scale: f32,
    /// Stable URI keying egui's image loader cache
    pub uri: &'static str,
}

/// Pick the logo for the given display density hint. Evaluated once per panel;
/// the caller keeps the result instead of re-asking on every frame.
pub fn select_logo(scale_hint: f32) -> LogoAsset {
    if scale_hint >= HIGH_DENSITY_CUTOFF {
        LogoAsset {
            bytes: LOGO_2X_PNG,
            scale: 2.0,
            uri: "bytes://kelpie-logo@2x.png",
        }
    } else {
        LogoAsset {
            bytes: LOGO_PNG,
            scale: 1.0,
            uri: "bytes://kelpie-logo.png",
        }
    }
}
