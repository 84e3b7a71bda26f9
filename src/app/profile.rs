//! Per-student profile view.

use eframe::egui;

use crate::ui;
use super::{DashboardApp, View};

impl DashboardApp {
    pub fn draw_profile(&mut self, ui: &mut egui::Ui, id: &str) {
        if ui.button("\u{25C0} Back to Students List").clicked() {
            self.open_view(View::Directory);
            return;
        }
        ui.add_space(8.0);

        let Some(student) = self.students.iter().find(|s| s.id == id).cloned() else {
            ui.colored_label(egui::Color32::RED, "Student not found");
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            // Identity card
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(72.0, 72.0), egui::Sense::hover());
                    ui::initials_avatar(
                        ui.painter(),
                        rect.center(),
                        36.0,
                        &student.name,
                        egui::Color32::from_rgb(59, 130, 246),
                        egui::Color32::WHITE,
                    );
                    ui.add_space(8.0);
                    ui.vertical(|ui| {
                        ui.heading(&student.name);
                        ui.label(
                            egui::RichText::new(&student.email)
                                .color(ui.visuals().weak_text_color()),
                        );
                        ui.horizontal(|ui| {
                            if student.is_active {
                                ui::badge(ui, "Active", egui::Color32::from_rgb(34, 197, 94));
                            } else {
                                ui::badge(ui, "Inactive", egui::Color32::from_rgb(107, 114, 128));
                            }
                            if let Some(role) = student.role {
                                ui::badge(
                                    ui,
                                    role.label(),
                                    egui::Color32::from_rgb(139, 92, 246),
                                );
                            }
                        });
                    });
                });
            });
            ui.add_space(8.0);

            ui.group(|ui| {
                ui.strong("Personal Information");
                ui.add_space(4.0);
                egui::Grid::new("personal_info")
                    .num_columns(2)
                    .spacing(egui::vec2(32.0, 6.0))
                    .show(ui, |ui| {
                        ui.label("Gender");
                        ui.label(student.gender.label());
                        ui.end_row();
                        if let Some(dob) = student.dob {
                            ui.label("Date of Birth");
                            ui.label(dob.format("%B %-d, %Y").to_string());
                            ui.end_row();
                        }
                        if let Some(blood) = &student.blood_group {
                            ui.label("Blood Group");
                            ui.label(blood);
                            ui.end_row();
                        }
                        ui.label("Class");
                        ui.label(student.class_name.as_deref().unwrap_or("—"));
                        ui.end_row();
                        ui.label("Department");
                        ui.label(&student.department);
                        ui.end_row();
                        ui.label("Institution");
                        ui.label(&student.institution);
                        ui.end_row();
                    });
            });
            ui.add_space(8.0);

            if !student.hobbies.is_empty() {
                ui.group(|ui| {
                    ui.strong("Hobbies");
                    ui.add_space(4.0);
                    ui.horizontal_wrapped(|ui| {
                        for hobby in &student.hobbies {
                            ui::badge(ui, hobby, egui::Color32::from_rgb(59, 130, 246));
                        }
                    });
                });
                ui.add_space(8.0);
            }

            if !student.achievements.is_empty() {
                ui.group(|ui| {
                    ui::section_title(
                        ui,
                        "\u{2605}",
                        egui::Color32::from_rgb(245, 158, 11),
                        "Achievements",
                    );
                    for a in &student.achievements {
                        ui.horizontal(|ui| {
                            ui.label("\u{2022}");
                            ui.label(&a.name);
                            ui.label(
                                egui::RichText::new(&a.certificate_file)
                                    .small()
                                    .color(ui.visuals().weak_text_color()),
                            );
                        });
                    }
                });
                ui.add_space(8.0);
            }

            if !student.events.is_empty() {
                ui.group(|ui| {
                    ui.strong("Events");
                    ui.add_space(4.0);
                    for event in &student.events {
                        ui.horizontal(|ui| {
                            ui.label("\u{2022}");
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&event.name).strong());
                                if let Some(desc) = &event.description {
                                    ui.label(desc);
                                }
                                ui.label(
                                    egui::RichText::new(
                                        event.timeline.format("%B %-d, %Y").to_string(),
                                    )
                                    .small()
                                    .color(ui.visuals().weak_text_color()),
                                );
                            });
                        });
                    }
                });
                ui.add_space(8.0);
            }

            if !student.facility_slots.is_empty() {
                ui.group(|ui| {
                    ui.strong("Facility Slots");
                    ui.add_space(4.0);
                    egui::Grid::new("facility_slots")
                        .striped(true)
                        .num_columns(3)
                        .spacing(egui::vec2(32.0, 6.0))
                        .show(ui, |ui| {
                            ui.strong("Facility");
                            ui.strong("Day");
                            ui.strong("Time");
                            ui.end_row();
                            for slot in &student.facility_slots {
                                ui.label(&slot.facility);
                                ui.label(&slot.day);
                                ui.label(&slot.time);
                                ui.end_row();
                            }
                        });
                });
                ui.add_space(8.0);
            }

            ui.group(|ui| {
                ui.strong("Parent Information");
                ui.add_space(4.0);
                egui::Grid::new("parent_info")
                    .num_columns(2)
                    .spacing(egui::vec2(32.0, 6.0))
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.label(&student.parent_name);
                        ui.end_row();
                        ui.label("Mobile");
                        ui.label(&student.parent_mobile);
                        ui.end_row();
                        ui.label("Email");
                        ui.label(&student.parent_email);
                        ui.end_row();
                    });
            });
        });
    }
}
