//! Palette and visuals for the light and dark renditions of the page.

use egui::{Color32, Visuals};
use shared::domain::{EffectiveTheme, ServiceCategory};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub page_fill: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
    pub heading: Color32,
    pub body: Color32,
    pub muted: Color32,
    /// Brand color; also tints the wellness category and calls to action.
    pub primary: Color32,
    /// Therapy category tint.
    pub secondary: Color32,
    /// Mindfulness category tint.
    pub accent: Color32,
    pub badge_fill: Color32,
    pub success_fill: Color32,
    pub error_fill: Color32,
}

pub fn palette(theme: EffectiveTheme) -> Palette {
    match theme {
        EffectiveTheme::Dark => Palette {
            page_fill: Color32::from_rgb(17, 24, 32),
            card_fill: Color32::from_rgb(26, 34, 44),
            card_stroke: Color32::from_rgb(45, 55, 68),
            heading: Color32::from_rgb(236, 240, 244),
            body: Color32::from_rgb(196, 204, 214),
            muted: Color32::from_rgb(142, 152, 164),
            primary: Color32::from_rgb(94, 179, 155),
            secondary: Color32::from_rgb(154, 134, 222),
            accent: Color32::from_rgb(224, 176, 110),
            badge_fill: Color32::from_rgb(30, 48, 44),
            success_fill: Color32::from_rgb(38, 92, 70),
            error_fill: Color32::from_rgb(150, 60, 60),
        },
        EffectiveTheme::Light => Palette {
            page_fill: Color32::from_rgb(250, 250, 248),
            card_fill: Color32::WHITE,
            card_stroke: Color32::from_rgb(229, 231, 235),
            heading: Color32::from_rgb(17, 24, 39),
            body: Color32::from_rgb(75, 85, 99),
            muted: Color32::from_rgb(128, 138, 150),
            primary: Color32::from_rgb(43, 127, 105),
            secondary: Color32::from_rgb(109, 86, 191),
            accent: Color32::from_rgb(176, 122, 48),
            badge_fill: Color32::from_rgb(223, 240, 234),
            success_fill: Color32::from_rgb(47, 133, 90),
            error_fill: Color32::from_rgb(185, 64, 64),
        },
    }
}

pub fn visuals_for_theme(theme: EffectiveTheme) -> Visuals {
    let palette = palette(theme);
    let mut visuals = match theme {
        EffectiveTheme::Dark => Visuals::dark(),
        EffectiveTheme::Light => Visuals::light(),
    };
    visuals.panel_fill = palette.page_fill;
    visuals.window_fill = palette.card_fill;
    visuals.selection.bg_fill = palette.primary.gamma_multiply(0.55);
    visuals.hyperlink_color = palette.primary;
    visuals
}

pub fn category_color(palette: &Palette, category: ServiceCategory) -> Color32 {
    match category {
        ServiceCategory::Therapy => palette.secondary,
        ServiceCategory::Mindfulness => palette.accent,
        ServiceCategory::Wellness => palette.primary,
    }
}

/// Placeholder glyphs standing in for the original icon set.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "brain" => "🧠",
        "users" => "👥",
        "heart" => "💚",
        "sprout" => "🌱",
        "flame" => "🔥",
        "mountain" => "⛰",
        _ => "✦",
    }
}

/// Up to two initials for the avatar circles; honorifics are skipped.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !word.ends_with('.'))
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_skip_honorifics() {
        assert_eq!(initials("Dr. Emma Richardson"), "ER");
        assert_eq!(initials("Michael Chen"), "MC");
        assert_eq!(initials("Sarah"), "S");
    }
}
