use egui::{CornerRadius, Response, ScrollArea, Sense, StrokeKind, Ui, Vec2};

use crate::config::{PickerLayout, PickerStyle};
use crate::glyph::GlyphRenderer;
use crate::util::rounded_u8;

/// Lays out the visible symbols as rows of square cells inside a vertical
/// scroll area, windowed so only on-screen rows are built. Returns the
/// symbol whose cell was clicked this frame, if any.
pub(crate) fn show_grid(
    ui: &mut Ui,
    layout: &PickerLayout,
    style: &PickerStyle,
    glyphs: &dyn GlyphRenderer,
    symbols: &[&str],
    current: &str,
    max_height: f32,
) -> Option<String> {
    let mut picked = None;
    let columns = columns_for(
        ui.available_width(),
        layout.grid_cell,
        ui.spacing().item_spacing.x,
    );
    let rows = symbols.len().div_ceil(columns);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height(max_height)
        .show_rows(ui, layout.grid_cell, rows, |ui, row_range| {
            for row in row_range {
                ui.horizontal(|ui| {
                    for symbol in symbols.iter().skip(row * columns).take(columns) {
                        let selected = *symbol == current;
                        let response = glyph_cell(ui, layout, style, glyphs, symbol, selected);
                        if response.clicked() {
                            picked = Some((*symbol).to_owned());
                        }
                    }
                });
            }
        });

    picked
}

fn columns_for(available: f32, cell: f32, spacing: f32) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (((available + spacing) / (cell + spacing)).floor().max(1.0)) as usize
    }
}

fn glyph_cell(
    ui: &mut Ui,
    layout: &PickerLayout,
    style: &PickerStyle,
    glyphs: &dyn GlyphRenderer,
    symbol: &str,
    selected: bool,
) -> Response {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::splat(layout.grid_cell), Sense::click());

    if ui.is_rect_visible(rect) {
        let widget_visuals = ui.style().interact_selectable(&response, selected);
        let visuals = ui.visuals();
        let fill = if selected {
            style.selected_fill(visuals)
        } else if response.hovered() {
            widget_visuals.weak_bg_fill
        } else {
            style.cell_fill(visuals)
        };
        let glyph_color = if selected {
            style.selected_glyph(visuals)
        } else {
            style.glyph(visuals)
        };

        ui.painter().rect(
            rect,
            CornerRadius::same(rounded_u8(layout.corner_radius)),
            fill,
            widget_visuals.bg_stroke,
            StrokeKind::Middle,
        );
        glyphs.paint(
            ui.painter(),
            rect.center(),
            symbol,
            layout.glyph_size,
            glyph_color,
        );
    }

    response.on_hover_text(symbol)
}
