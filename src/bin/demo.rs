//! Demo host: an eframe application embedding the symbol picker.

use egui_symbol_picker::{
    GlyphRenderer, PickerConfig, PickerEvent, PickerLayout, SymbolPicker, TextGlyphs,
};

struct DemoApp {
    symbol: String,
    picker: SymbolPicker,
    last_event: Option<String>,
}

impl DemoApp {
    fn new(config: &PickerConfig) -> Self {
        let mut layout = PickerLayout::detect();
        config.layout.apply_to(&mut layout);
        Self {
            symbol: String::from("star.fill"),
            picker: SymbolPicker::new()
                .with_layout(layout)
                .with_style(config.style.clone()),
            last_event: None,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Symbol picker demo");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::splat(48.0), egui::Sense::hover());
                TextGlyphs.paint(
                    ui.painter(),
                    rect.center(),
                    &self.symbol,
                    32.0,
                    ui.visuals().text_color(),
                );
                ui.vertical(|ui| {
                    let label = if self.symbol.is_empty() {
                        "(no symbol)"
                    } else {
                        self.symbol.as_str()
                    };
                    ui.monospace(label);
                    if ui.button("Choose symbol…").clicked() {
                        self.picker.open();
                    }
                });
            });
            if let Some(event) = &self.last_event {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(event)
                        .small()
                        .color(egui::Color32::from_gray(180)),
                );
            }
        });

        match self.picker.show(ctx, &mut self.symbol) {
            PickerEvent::None => {}
            PickerEvent::Picked(symbol) => self.last_event = Some(format!("Picked {symbol}")),
            PickerEvent::Cancelled => self.last_event = Some("Cancelled".to_owned()),
            PickerEvent::Dismissed => self.last_event = Some("Dismissed".to_owned()),
        }
    }
}

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Symbol Picker Demo",
        native_options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new(&PickerConfig::load())))),
    )
}
