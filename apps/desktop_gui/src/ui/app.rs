use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::RollNo;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::ViewState,
};

const FIELD_WIDTH: f32 = 240.0;

pub struct StudentsApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view: ViewState,
}

impl StudentsApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        // The worker fetches the list on startup without being asked.
        let mut view = ViewState::default();
        view.command_queued();
        Self { cmd_tx, ui_rx, view }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.view.apply(event);
        }
    }

    fn send(&mut self, cmd: BackendCommand) {
        if dispatch_backend_command(&self.cmd_tx, cmd, &mut self.view.status) {
            self.view.command_queued();
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Add / Update Student");
        let form = &mut self.view.form;
        for (value, hint) in [
            (&mut form.name, "Name"),
            (&mut form.roll_no, "Roll No"),
            (&mut form.marks, "Marks"),
            (&mut form.grade, "Grade"),
        ] {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(FIELD_WIDTH),
            );
        }

        ui.horizontal(|ui| {
            if ui.button("Add Student").clicked() {
                let draft = self.view.form.clone();
                self.send(BackendCommand::Create { draft });
            }
            if ui.button("Update Student").clicked() {
                let draft = self.view.form.clone();
                self.send(BackendCommand::Update { draft });
            }
        });
    }

    fn show_search(&mut self, ui: &mut egui::Ui) {
        ui.heading("Search Student");
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.view.search_query)
                    .hint_text("Roll No to Search")
                    .desired_width(FIELD_WIDTH),
            );
            if ui.button("Search").clicked() {
                let roll_no = self.view.search_query.clone();
                self.send(BackendCommand::Search { roll_no });
            }
        });

        if let Some(found) = &self.view.search_result {
            egui::Grid::new("search_result").num_columns(2).show(ui, |ui| {
                for (label, value) in [
                    ("Name:", found.name.clone()),
                    ("Roll No:", found.roll_no.to_string()),
                    ("Marks:", found.marks.to_string()),
                    ("Grade:", found.grade.clone()),
                ] {
                    ui.label(egui::RichText::new(label).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });
        }
    }

    fn show_students(&mut self, ui: &mut egui::Ui) {
        ui.heading("All Students");
        let mut delete: Option<RollNo> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for student in &self.view.students {
                    ui.horizontal(|ui| {
                        ui.label(student.summary_line());
                        if ui.button("Delete").clicked() {
                            delete = Some(student.roll_no);
                        }
                    });
                }
            });

        if let Some(roll_no) = delete {
            self.send(BackendCommand::Delete { roll_no });
        }
    }
}

impl eframe::App for StudentsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("Student Record Management").size(24.0));
            });
            if let Some(message) = &self.view.error_message {
                ui.colored_label(egui::Color32::RED, message);
            }
            if !self.view.status.is_empty() {
                ui.weak(&self.view.status);
            }
            ui.separator();
            self.show_form(ui);
            ui.separator();
            self.show_search(ui);
            ui.separator();
            self.show_students(ui);
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
