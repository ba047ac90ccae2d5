//! The picker widget: an open/closed state machine plus per-frame rendering.

use egui::{Align2, Context, Key, TextEdit, Vec2};

use crate::binding::SelectionBinding;
use crate::catalog::Catalog;
use crate::config::{PickerLayout, PickerStyle, SearchPlacement};
use crate::glyph::{GlyphRenderer, TextGlyphs};
use crate::strings::PickerStrings;

mod grid;
#[cfg(test)]
mod tests;

/// Outcome of a [`SymbolPicker::show`] frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    None,
    /// Selection finalized and the picker closed; the binding holds the value.
    Picked(String),
    /// Explicit Cancel: the picker closed and, on presets that clear, the
    /// binding was reset to the empty string.
    Cancelled,
    /// Closed without touching the binding.
    Dismissed,
}

enum CatalogRef {
    Static(&'static Catalog),
    Owned(Catalog),
}

enum PickerState {
    Closed,
    Open { search: String, just_opened: bool },
}

/// Searchable glyph grid over a symbol catalog.
///
/// The widget is retained by the host and rendered each frame through
/// [`SymbolPicker::show`]; it draws nothing while closed. The selection
/// itself lives behind the [`SelectionBinding`] the host passes in, never
/// inside the widget.
pub struct SymbolPicker {
    layout: PickerLayout,
    style: PickerStyle,
    strings: PickerStrings,
    glyphs: Box<dyn GlyphRenderer>,
    catalog: CatalogRef,
    state: PickerState,
}

impl Default for SymbolPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolPicker {
    /// A closed picker over the full bundled catalog, with the layout preset
    /// for the detected form factor and the text-based fallback glyphs.
    pub fn new() -> Self {
        Self {
            layout: PickerLayout::detect(),
            style: PickerStyle::default(),
            strings: PickerStrings::default(),
            glyphs: Box::new(TextGlyphs),
            catalog: CatalogRef::Static(Catalog::full()),
            state: PickerState::Closed,
        }
    }

    pub fn with_layout(mut self, layout: PickerLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_strings(mut self, strings: PickerStrings) -> Self {
        self.strings = strings;
        self
    }

    pub fn with_glyph_renderer(mut self, glyphs: impl GlyphRenderer + 'static) -> Self {
        self.glyphs = Box::new(glyphs);
        self
    }

    /// Picks over one of the shared bundled catalogs.
    pub fn with_catalog(mut self, catalog: &'static Catalog) -> Self {
        self.catalog = CatalogRef::Static(catalog);
        self
    }

    /// Picks over a host-loaded catalog, e.g. from [`Catalog::from_path_or_empty`].
    pub fn with_owned_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = CatalogRef::Owned(catalog);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        match &self.catalog {
            CatalogRef::Static(catalog) => catalog,
            CatalogRef::Owned(catalog) => catalog,
        }
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open { .. })
    }

    /// Starts a new open session with an empty search; re-opening an already
    /// open picker also resets the search.
    pub fn open(&mut self) {
        self.state = PickerState::Open {
            search: String::new(),
            just_opened: true,
        };
    }

    pub fn search(&self) -> &str {
        match &self.state {
            PickerState::Open { search, .. } => search,
            PickerState::Closed => "",
        }
    }

    /// Replaces the live search text. No effect while closed.
    pub fn set_search(&mut self, text: impl Into<String>) {
        if let PickerState::Open { search, .. } = &mut self.state {
            *search = text.into();
        }
    }

    /// The grid contents for the current search, recomputed on demand:
    /// [`Catalog::filter`] applied to the live search text.
    pub fn visible_symbols(&self) -> Vec<&str> {
        self.catalog().filter(self.search())
    }

    fn pick(&mut self, symbol: &str, binding: &mut dyn SelectionBinding) -> PickerEvent {
        binding.set(symbol.to_owned());
        if self.layout.shows_explicit_confirm {
            // Staged: the binding already carries the value, but the session
            // stays open until Done or Cancel settles it.
            PickerEvent::None
        } else {
            self.state = PickerState::Closed;
            PickerEvent::Picked(symbol.to_owned())
        }
    }

    fn confirm(&mut self, binding: &mut dyn SelectionBinding) -> PickerEvent {
        self.state = PickerState::Closed;
        PickerEvent::Picked(binding.get())
    }

    fn cancel(&mut self, binding: &mut dyn SelectionBinding) -> PickerEvent {
        if self.layout.cancel_clears_selection {
            binding.set(String::new());
        }
        self.state = PickerState::Closed;
        PickerEvent::Cancelled
    }

    fn dismiss(&mut self) -> PickerEvent {
        self.state = PickerState::Closed;
        PickerEvent::Dismissed
    }

    /// Esc and the window close affordance map to Cancel on the desktop
    /// preset and to a binding-preserving dismissal everywhere else.
    fn close_request(&mut self, binding: &mut dyn SelectionBinding) -> PickerEvent {
        if self.layout.shows_explicit_confirm {
            self.cancel(binding)
        } else {
            self.dismiss()
        }
    }

    /// Renders the picker for this frame and applies any user action to the
    /// binding. Draws nothing and returns [`PickerEvent::None`] while closed.
    pub fn show(&mut self, ctx: &Context, binding: &mut dyn SelectionBinding) -> PickerEvent {
        if !self.is_open() {
            return PickerEvent::None;
        }

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            return self.close_request(binding);
        }

        let current = binding.get();
        let mut clicked: Option<String> = None;
        let mut pressed_close = false;
        let mut pressed_cancel = false;
        let mut pressed_done = false;

        egui::Window::new("symbol-picker")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .fixed_size(self.layout.window_size)
            .show(ctx, |ui| {
                self.ui_header(ui, &mut pressed_close);
                ui.separator();

                let footer = if self.layout.shows_explicit_confirm {
                    ui.spacing().interact_size.y + 16.0
                } else {
                    0.0
                };
                let grid_height = (ui.available_height() - footer).max(0.0);

                let visible = self.visible_symbols();
                clicked = grid::show_grid(
                    ui,
                    &self.layout,
                    &self.style,
                    self.glyphs.as_ref(),
                    &visible,
                    &current,
                    grid_height,
                );

                if self.layout.shows_explicit_confirm {
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button(&self.strings.cancel).clicked() {
                            pressed_cancel = true;
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(&self.strings.done).clicked() {
                                pressed_done = true;
                            }
                        });
                    });
                }
            });

        if pressed_close {
            return self.dismiss();
        }
        if pressed_cancel {
            return self.cancel(binding);
        }
        if pressed_done {
            return self.confirm(binding);
        }
        if let Some(symbol) = clicked {
            return self.pick(&symbol, binding);
        }
        PickerEvent::None
    }

    fn ui_header(&mut self, ui: &mut egui::Ui, pressed_close: &mut bool) {
        match self.layout.search_placement {
            SearchPlacement::HeaderRow => {
                ui.horizontal(|ui| {
                    ui.heading(&self.strings.title);
                    if !self.layout.shows_explicit_confirm {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("✖").on_hover_text(&self.strings.cancel).clicked() {
                                *pressed_close = true;
                            }
                        });
                    }
                });
                self.ui_search(ui);
            }
            SearchPlacement::TitleInline => {
                ui.horizontal(|ui| {
                    ui.heading(&self.strings.title);
                    self.ui_search(ui);
                });
            }
        }
    }

    fn ui_search(&mut self, ui: &mut egui::Ui) {
        let PickerState::Open {
            search,
            just_opened,
        } = &mut self.state
        else {
            return;
        };
        let response = ui.add(
            TextEdit::singleline(search)
                .hint_text(&self.strings.search_placeholder)
                .desired_width(f32::INFINITY),
        );
        if *just_opened {
            response.request_focus();
            *just_opened = false;
        }
    }
}
