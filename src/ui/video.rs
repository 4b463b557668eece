// src/ui/video.rs
use eframe::egui;

use crate::state::AppState;

pub fn show_video_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            // Right-to-left so the button keeps its size and the input
            // takes whatever is left.
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if state.is_processing() {
                    "Processing"
                } else {
                    "Process Video"
                };
                let clicked = ui
                    .add_enabled(state.can_submit_video(), egui::Button::new(label))
                    .clicked();
                if state.is_processing() {
                    ui.spinner();
                }

                ui.add_sized(
                    [ui.available_width(), 20.0],
                    egui::TextEdit::singleline(&mut state.video_url)
                        .hint_text("Enter YouTube video URL"),
                );

                if clicked {
                    state.submit_video();
                }
            });
        });
    });

    if let Some(processed) = &state.processed {
        ui.add_space(16.0);
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.heading(
                egui::RichText::new("Video Processed Successfully!")
                    .color(egui::Color32::from_rgb(16, 185, 129)),
            );
            ui.add_space(4.0);
            ui.label(format!("Video Title: {}", processed.title));
        });
    }
}
