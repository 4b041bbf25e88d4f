// Kelpie - GPL-3.0-or-later

//! Compile-time selected platform quirks. Each target gets the same API; all
//! but the targets that need a tweak are no-ops.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::banish_text_background;

#[cfg(not(target_os = "macos"))]
mod generic;
#[cfg(not(target_os = "macos"))]
pub use generic::banish_text_background;
