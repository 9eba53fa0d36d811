//! Colors - Online Learning Brand Colors

use gpui::{rgb, rgba, Rgba};

/// Brand palette - all colors are accessed via associated functions
pub struct BrandColors;

impl BrandColors {
    // Brand
    /// Gradient start - pink
    pub fn brand_pink() -> Rgba { rgb(0xec4899) }
    /// Gradient middle - cyan
    pub fn brand_cyan() -> Rgba { rgb(0x06b6d4) }
    /// Gradient end - yellow
    pub fn brand_yellow() -> Rgba { rgb(0xfacc15) }
    /// Primary accent (active tab, links)
    pub fn primary() -> Rgba { rgb(0xd946ef) }

    // Backgrounds
    pub fn background() -> Rgba { rgb(0xfdf2f8) }
    pub fn header_bg() -> Rgba { rgba(0xffffffcc) }
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    pub fn backdrop() -> Rgba { rgba(0x00000088) }
    pub fn hover_bg() -> Rgba { rgb(0xf3f4f6) }

    // Text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    pub fn text_on_brand() -> Rgba { rgb(0xffffff) }

    // Status
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Star rating
    pub fn star() -> Rgba { rgb(0xf59e0b) }

    // Borders
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Buttons
    pub fn button_primary_bg() -> Rgba { rgb(0xd946ef) }
    pub fn button_primary_hover() -> Rgba { rgb(0xc026d3) }
    pub fn button_outline_text() -> Rgba { rgb(0x374151) }

    /// Level badge background
    pub fn badge_bg() -> Rgba { rgb(0xcffafe) }
    pub fn badge_text() -> Rgba { rgb(0x0e7490) }
}
