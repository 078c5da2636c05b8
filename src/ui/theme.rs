use serde::{Deserialize, Serialize};

/// Light or dark presentation. Purely visual; the catalog and reader state
/// never see it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Concrete colors for one theme, as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub window: u32,
    pub text: u32,
    pub muted_text: u32,
    pub page: u32,
    pub page_text: u32,
    pub button: u32,
    pub button_text: u32,
    pub border: u32,
    pub selection: u32,
    pub notice: u32,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label for the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                window: 0xf0f0f0,
                text: 0x000000,
                muted_text: 0x4b5563,
                page: 0xffffff,
                page_text: 0x000000,
                button: 0xf0f0f0,
                button_text: 0x000000,
                border: 0xa0a0a0,
                selection: 0xcce4f7,
                notice: 0xb91c1c,
            },
            // gray20 window, gray30 controls, black page
            Theme::Dark => Palette {
                window: 0x333333,
                text: 0xffffff,
                muted_text: 0xbdbdbd,
                page: 0x000000,
                page_text: 0xffffff,
                button: 0x4d4d4d,
                button_text: 0xffffff,
                border: 0x6b6b6b,
                selection: 0x1f4e79,
                notice: 0xfca5a5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_themes() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn dark_palette_uses_light_text_on_dark_surfaces() {
        let palette = Theme::Dark.palette();
        assert_eq!(palette.window, 0x333333);
        assert_eq!(palette.page, 0x000000);
        assert_eq!(palette.page_text, 0xffffff);
        assert_ne!(palette, Theme::Light.palette());
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    }
}
