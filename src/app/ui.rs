use super::ExamUploader;
use crate::export::RESULT_COLUMNS;
use crate::upload::SHEET_EXTENSIONS;
use crate::utils::file_size::format_size;
use eframe::egui::{self, Align, RichText};
use rfd::FileDialog;

impl ExamUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Exam Sheet Uploader");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Upload scanned answer sheets for grading")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_file_picker(ui);
                    ui.add_space(20.0);
                    self.render_actions(ui);
                    ui.add_space(20.0);
                    self.render_results(ui);
                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_file_picker(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if ui.button("🗋 Select Exam Sheets").clicked() {
                    if let Some(paths) = FileDialog::new()
                        .add_filter("Exam sheets", &SHEET_EXTENSIONS)
                        .pick_files()
                    {
                        for path in paths {
                            self.state.add_pending(path);
                        }
                    }
                }
                if ui.button("📁 Add Folder").clicked() {
                    if let Some(folder) = FileDialog::new().pick_folder() {
                        self.add_sheets_from_folder(&folder);
                    }
                }
                if !self.state.pending_files.is_empty() {
                    ui.label(format!("{} selected", self.state.pending_files.len()));
                }
            });

            if !self.state.pending_files.is_empty() {
                ui.add_space(8.0);

                let mut remove_id = None;
                for file in &self.state.pending_files {
                    ui.horizontal(|ui| {
                        if ui.small_button("✖").clicked() {
                            remove_id = Some(file.id);
                        }
                        ui.label(&file.name);
                        ui.label(
                            RichText::new(format_size(file.size))
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });
                }
                if let Some(id) = remove_id {
                    self.state.remove_pending(id);
                }
            }
        });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let can_upload = !self.state.pending_files.is_empty() && !self.state.is_uploading;

            ui.add_enabled_ui(can_upload, |ui| {
                let label = if self.state.is_uploading {
                    "⏳ Processing..."
                } else {
                    "📤 Upload and Process"
                };
                let button = egui::Button::new(label).min_size(egui::vec2(220.0, 40.0));
                if ui.add(button).clicked() {
                    self.start_upload();
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let actions_width = 320.0;
                let indent = (ui.available_width() - actions_width).max(0.0) / 2.0;
                ui.add_space(indent);

                ui.add_enabled_ui(!self.state.results.is_empty(), |ui| {
                    if ui.button("📥 Export Results to Excel").clicked() {
                        self.export_results();
                    }
                });
                if ui.button("🗑 Clear All").clicked() {
                    self.reset();
                }
            });

            if let Some(path) = self.state.last_export.clone() {
                ui.add_space(5.0);
                if ui.link("📂 Open exported spreadsheet").clicked() {
                    if let Err(e) = open::that(&path) {
                        eprintln!("Failed to open {}: {}", path.display(), e);
                    }
                }
            }
        });
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        if self.state.results.is_empty() {
            return;
        }

        ui.group(|ui| {
            egui::Grid::new("results_table")
                .striped(true)
                .min_col_width(80.0)
                .show(ui, |ui| {
                    for header in RESULT_COLUMNS {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    // Rows render in response order; position is the identity,
                    // so duplicate filenames never collide.
                    for row in &self.state.results {
                        ui.label(&row.filename);
                        ui.label(row.total_questions.to_string());
                        ui.label(row.correct_answers.to_string());
                        ui.label(row.incorrect_answers.to_string());
                        ui.label(row.unanswered_questions.to_string());
                        ui.label(format!("{:.2}", row.percentage));
                        ui.end_row();
                    }
                });
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Grading endpoint: {}", self.config.endpoint))
                    .small()
                    .color(ui.visuals().text_color().gamma_multiply(0.5)),
            );
        });

        if let Some(notification) = &self.state.notification {
            ui.add_space(5.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(notification.color(), &notification.text);
            });
        }
    }
}
