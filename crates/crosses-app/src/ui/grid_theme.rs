use eframe::egui::{Color32, Visuals};

/// Color palette for grid rendering.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_active: Color32,
    pub cell_inactive: Color32,
    pub cross_overlay: Color32,

    pub border: Color32,
    pub outline_hovered: Color32,
    pub outline_hint: Color32,

    pub banner_bg: Color32,
    pub banner_text: Color32,
}

impl GridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            cell_active: visuals.selection.bg_fill,
            cell_inactive: visuals.extreme_bg_color,
            cross_overlay: visuals.widgets.hovered.bg_fill.gamma_multiply(0.5),

            border: visuals.widgets.noninteractive.bg_stroke.color,
            outline_hovered: visuals.widgets.hovered.fg_stroke.color,
            outline_hint: visuals.warn_fg_color,

            banner_bg: Color32::from_rgba_unmultiplied(0, 32, 35, 230),
            banner_text: visuals.warn_fg_color,
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub light: GridPalette,
    pub dark: GridPalette,
}

impl GridTheme {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            light: GridPalette::from_visuals(&Visuals::light()),
            dark: GridPalette::from_visuals(&Visuals::dark()),
        }
        .with_current(visuals)
    }

    // The palette matching the active theme follows any customized visuals.
    fn with_current(mut self, visuals: &Visuals) -> Self {
        let current = GridPalette::from_visuals(visuals);
        if visuals.dark_mode {
            self.dark = current;
        } else {
            self.light = current;
        }
        self
    }

    pub fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
