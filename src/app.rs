// src/app.rs
use std::time::Duration;

use eframe::egui;

use crate::state::AppState;
use crate::ui;

pub struct VidqaApp {
    state: AppState,
}

impl VidqaApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.heading("YouTube-QnA AI Assistant");
            ui.label(
                "Extract insights from any YouTube video. Enter a URL, ask questions, \
                 and get AI-powered answers based on the video content.",
            );
        });
        ui.add_space(8.0);
    }

    fn show_error_banner(ui: &mut egui::Ui, error: &str) {
        egui::Frame::none()
            .fill(egui::Color32::from_rgb(69, 10, 10))
            .inner_margin(egui::Margin::same(8.0))
            .rounding(egui::Rounding::same(4.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            });
    }
}

impl eframe::App for VidqaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_requests();
        if self.state.has_pending_request() {
            // egui only repaints on input; keep polling the worker
            // channels while a request is outstanding.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                // Banner is replaced, not stacked, by the next outcome
                let error_msg = self.state.error_message.clone(); // Clone first
                if let Some(error) = error_msg {
                    Self::show_error_banner(ui, &error);
                    ui.add_space(16.0);
                }

                ui::video::show_video_view(ui, &mut self.state);

                if self.state.processed.is_some() {
                    ui.add_space(16.0);
                    ui::question::show_question_view(ui, &mut self.state);
                }
            });
        });
    }
}
