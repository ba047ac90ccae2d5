use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use egui::{Color32, Vec2, Visuals};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "symbol-picker.toml";

fn alpha_to_u8(alpha: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// The four form-factor classes the picker ships presets for.
///
/// There is no TV compile target, so [`FormFactor::LargeTouch`] is never
/// auto-detected; hosts running on a big-screen device opt in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFactor {
    CompactTouch,
    LargeTouch,
    Desktop,
    Fallback,
}

impl FormFactor {
    pub fn detect() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::CompactTouch
        } else if cfg!(target_arch = "wasm32") {
            Self::Fallback
        } else {
            Self::Desktop
        }
    }
}

/// Where the search field sits inside the picker window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlacement {
    /// Its own row under the title.
    HeaderRow,
    /// Right of the title, on the same row.
    TitleInline,
}

/// One layout preset, selected once per form factor and consumed by a single
/// rendering path. Pixel values are styling, not contract; the relative cell
/// sizing order LargeTouch > CompactTouch > Desktop is what matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLayout {
    pub grid_cell: f32,
    pub glyph_size: f32,
    pub corner_radius: f32,
    pub search_placement: SearchPlacement,
    /// Desktop-style flow: picking stages the value, a Done control closes.
    pub shows_explicit_confirm: bool,
    /// Whether the explicit Cancel control clears the binding to `""`.
    pub cancel_clears_selection: bool,
    pub window_size: Vec2,
}

impl PickerLayout {
    pub fn preset(form_factor: FormFactor) -> Self {
        match form_factor {
            FormFactor::CompactTouch => Self::compact_touch(),
            FormFactor::LargeTouch => Self::large_touch(),
            FormFactor::Desktop => Self::desktop(),
            FormFactor::Fallback => Self::fallback(),
        }
    }

    pub fn detect() -> Self {
        Self::preset(FormFactor::detect())
    }

    pub fn compact_touch() -> Self {
        Self {
            grid_cell: 64.0,
            glyph_size: 24.0,
            corner_radius: 8.0,
            search_placement: SearchPlacement::HeaderRow,
            shows_explicit_confirm: false,
            cancel_clears_selection: false,
            window_size: Vec2::new(360.0, 520.0),
        }
    }

    pub fn large_touch() -> Self {
        Self {
            grid_cell: 128.0,
            glyph_size: 48.0,
            corner_radius: 12.0,
            search_placement: SearchPlacement::HeaderRow,
            shows_explicit_confirm: false,
            cancel_clears_selection: false,
            window_size: Vec2::new(960.0, 640.0),
        }
    }

    pub fn desktop() -> Self {
        Self {
            grid_cell: 30.0,
            glyph_size: 14.0,
            corner_radius: 4.0,
            search_placement: SearchPlacement::TitleInline,
            shows_explicit_confirm: true,
            cancel_clears_selection: true,
            window_size: Vec2::new(520.0, 300.0),
        }
    }

    pub fn fallback() -> Self {
        Self {
            grid_cell: 48.0,
            glyph_size: 24.0,
            corner_radius: 8.0,
            search_placement: SearchPlacement::HeaderRow,
            shows_explicit_confirm: false,
            cancel_clears_selection: false,
            window_size: Vec2::new(480.0, 420.0),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FillStyle {
    pub color: [u8; 3],
    pub alpha: f32,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: [128, 128, 128],
            alpha: 1.0,
        }
    }
}

impl FillStyle {
    pub fn color32(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            self.color[0],
            self.color[1],
            self.color[2],
            alpha_to_u8(self.alpha),
        )
    }
}

/// Cell and glyph colors. Unset entries follow the active egui theme, so the
/// picker looks native in both light and dark mode without configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PickerStyle {
    pub selected_fill: Option<FillStyle>,
    pub cell_fill: Option<FillStyle>,
    pub selected_glyph: Option<FillStyle>,
    pub glyph: Option<FillStyle>,
}

impl PickerStyle {
    pub fn selected_fill(&self, visuals: &Visuals) -> Color32 {
        self.selected_fill
            .as_ref()
            .map_or(visuals.selection.bg_fill, FillStyle::color32)
    }

    pub fn cell_fill(&self, visuals: &Visuals) -> Color32 {
        self.cell_fill
            .as_ref()
            .map_or(visuals.faint_bg_color, FillStyle::color32)
    }

    pub fn selected_glyph(&self, visuals: &Visuals) -> Color32 {
        self.selected_glyph
            .as_ref()
            .map_or(visuals.selection.stroke.color, FillStyle::color32)
    }

    pub fn glyph(&self, visuals: &Visuals) -> Color32 {
        self.glyph
            .as_ref()
            .map_or_else(|| visuals.text_color(), FillStyle::color32)
    }
}

/// Optional per-host tweaks to a layout preset, loadable from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    pub grid_cell: Option<f32>,
    pub glyph_size: Option<f32>,
    pub corner_radius: Option<f32>,
}

impl LayoutOverrides {
    pub fn apply_to(&self, layout: &mut PickerLayout) {
        // Clamp to reasonable operating bounds to avoid pathological configs.
        if let Some(cell) = self.grid_cell {
            layout.grid_cell = cell.clamp(16.0, 256.0);
        }
        if let Some(size) = self.glyph_size {
            layout.glyph_size = size.clamp(8.0, 128.0);
        }
        if let Some(radius) = self.corner_radius {
            layout.corner_radius = radius.clamp(0.0, 32.0);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub layout: LayoutOverrides,
    pub style: PickerStyle,
}

impl PickerConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match toml::from_str::<Self>(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {}: {err}", path.display());
                    }
                }
            }
        }
        Self::default()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "SymbolPicker", "SymbolPicker") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(
                base_dirs
                    .config_dir()
                    .join("symbol-picker")
                    .join(CONFIG_FILE_NAME),
            );
        }

        paths
    }
}
