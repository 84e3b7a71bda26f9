//! Students directory view: search, filters and the roster table.

use eframe::egui;

use homeroom::directory::{class_names, departments};
use homeroom::model::Gender;

use crate::ui;
use super::{DashboardApp, View};

impl DashboardApp {
    pub fn draw_directory(&mut self, ui: &mut egui::Ui) {
        let filtered: Vec<usize> = self
            .students
            .iter()
            .enumerate()
            .filter(|(_, s)| self.filter.matches(s))
            .map(|(i, _)| i)
            .collect();

        ui.horizontal(|ui| {
            ui.heading("Students Directory");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Total: {}", filtered.len()));
            });
        });
        ui.add_space(8.0);

        self.draw_filter_bar(ui);
        ui.add_space(8.0);

        let mut open_profile: Option<String> = None;
        let mut toggled: Option<usize> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("students")
                .striped(true)
                .num_columns(5)
                .spacing(egui::vec2(24.0, 10.0))
                .show(ui, |ui| {
                    ui.strong("Student");
                    ui.strong("ID");
                    ui.strong("Class");
                    ui.strong("Department");
                    ui.strong("Status");
                    ui.end_row();

                    for &i in &filtered {
                        let student = &self.students[i];

                        ui.horizontal(|ui| {
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(32.0, 32.0),
                                egui::Sense::hover(),
                            );
                            ui::initials_avatar(
                                ui.painter(),
                                rect.center(),
                                16.0,
                                &student.name,
                                egui::Color32::from_rgb(59, 130, 246),
                                egui::Color32::WHITE,
                            );
                            ui.vertical(|ui| {
                                let name = ui
                                    .add(
                                        egui::Label::new(
                                            egui::RichText::new(&student.name).strong(),
                                        )
                                        .sense(egui::Sense::click()),
                                    )
                                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                                if name.clicked() {
                                    open_profile = Some(student.id.clone());
                                }
                                ui.label(
                                    egui::RichText::new(&student.email)
                                        .small()
                                        .color(ui.visuals().weak_text_color()),
                                );
                            });
                        });

                        ui.label(&student.id);
                        ui.label(student.class_name.as_deref().unwrap_or("—"));
                        ui.label(&student.department);

                        ui.horizontal(|ui| {
                            let (text, color) = if student.is_present {
                                ("Present", egui::Color32::from_rgb(34, 197, 94))
                            } else {
                                ("Absent", egui::Color32::from_rgb(239, 68, 68))
                            };
                            ui::badge(ui, text, color);
                            let mut present = student.is_present;
                            if ui.checkbox(&mut present, "").changed() {
                                toggled = Some(i);
                            }
                        });
                        ui.end_row();
                    }
                });
        });

        if let Some(i) = toggled {
            self.students[i].is_present = !self.students[i].is_present;
        }
        if let Some(id) = open_profile {
            self.open_view(View::Profile(id));
        }
    }

    fn draw_filter_bar(&mut self, ui: &mut egui::Ui) {
        let department_options = departments(&self.students);
        let class_options = class_names(&self.students);

        ui.horizontal(|ui| {
            ui.add_sized(
                [240.0, 24.0],
                egui::TextEdit::singleline(&mut self.filter.search)
                    .hint_text("Search by name, email or ID..."),
            );

            egui::ComboBox::from_id_salt("department_filter")
                .selected_text(
                    self.filter
                        .department
                        .clone()
                        .unwrap_or_else(|| "All Departments".into()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.department, None, "All Departments");
                    for d in &department_options {
                        ui.selectable_value(&mut self.filter.department, Some(d.clone()), d);
                    }
                });

            egui::ComboBox::from_id_salt("gender_filter")
                .selected_text(
                    self.filter
                        .gender
                        .map_or("All Genders", |g| g.label()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.gender, None, "All Genders");
                    ui.selectable_value(&mut self.filter.gender, Some(Gender::Male), "Male");
                    ui.selectable_value(&mut self.filter.gender, Some(Gender::Female), "Female");
                });

            egui::ComboBox::from_id_salt("class_filter")
                .selected_text(
                    self.filter
                        .class_name
                        .clone()
                        .unwrap_or_else(|| "All Classes".into()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.class_name, None, "All Classes");
                    for c in &class_options {
                        ui.selectable_value(&mut self.filter.class_name, Some(c.clone()), c);
                    }
                });
        });
    }
}
