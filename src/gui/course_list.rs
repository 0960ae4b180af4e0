//! Course List Widget
//! Scrollable list of editable course rows. Edits are reported back as actions
//! rather than written into the courses directly.

use crate::gui::input::parse_units;
use crate::roster::{Course, CourseEdit, CourseId, CourseRoster, Grade};
use egui::{Color32, ComboBox, RichText, ScrollArea, TextEdit};

const ROW_SPACING: f32 = 10.0;
const GRADE_WIDTH: f32 = 90.0;
const UNITS_WIDTH: f32 = 48.0;
const REMOVE_COLOR: Color32 = Color32::from_rgb(239, 68, 68);

/// Editable table of courses.
pub struct CourseList {
    units_hint: String,
}

impl CourseList {
    pub fn new(units_hint: impl Into<String>) -> Self {
        Self {
            units_hint: units_hint.into(),
        }
    }

    /// Draw every course row and collect the user's edits
    pub fn show(&mut self, ui: &mut egui::Ui, roster: &CourseRoster) -> Vec<CourseListAction> {
        let mut actions = Vec::new();

        if roster.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("No courses added yet.").size(16.0).color(Color32::GRAY));
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Click the \"Add Course\" button to start.")
                        .size(12.0)
                        .color(Color32::GRAY),
                );
            });
            return actions;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for course in roster.courses() {
                    ui.push_id(course.id(), |ui| {
                        self.draw_row(ui, course, &mut actions);
                    });
                    ui.add_space(ROW_SPACING);
                }
            });

        actions
    }

    fn draw_row(&self, ui: &mut egui::Ui, course: &Course, actions: &mut Vec<CourseListAction>) {
        let id = course.id();

        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let fixed = GRADE_WIDTH + UNITS_WIDTH + 120.0;
                    let name_width = (ui.available_width() - fixed).max(120.0);

                    let mut name = course.name.clone();
                    let response = ui.add(
                        TextEdit::singleline(&mut name)
                            .hint_text("Course Code (e.g. MTH101)")
                            .desired_width(name_width),
                    );
                    if response.changed() {
                        actions.push(CourseListAction::Edit(id, CourseEdit::Rename(name)));
                    }

                    ComboBox::from_id_salt(("grade", id))
                        .width(GRADE_WIDTH)
                        .selected_text(course.grade.label())
                        .show_ui(ui, |ui| {
                            for grade in Grade::ALL {
                                if ui
                                    .selectable_label(course.grade == grade, grade.label())
                                    .clicked()
                                    && course.grade != grade
                                {
                                    actions.push(CourseListAction::Edit(
                                        id,
                                        CourseEdit::Regrade(grade),
                                    ));
                                }
                            }
                        });

                    let mut units_text = course.units.to_string();
                    let response = ui
                        .add(
                            TextEdit::singleline(&mut units_text).desired_width(UNITS_WIDTH),
                        )
                        .on_hover_text(self.units_hint.as_str());
                    if response.changed() {
                        actions.push(CourseListAction::Edit(
                            id,
                            CourseEdit::Reweight(parse_units(&units_text)),
                        ));
                    }
                    ui.label(RichText::new("units").size(11.0).color(Color32::GRAY));

                    let remove = egui::Button::new(RichText::new("🗑").color(REMOVE_COLOR))
                        .frame(false);
                    if ui.add(remove).on_hover_text("Remove Course").clicked() {
                        actions.push(CourseListAction::Remove(id));
                    }
                });
            });
    }
}

/// Actions triggered from a course row
#[derive(Debug, Clone, PartialEq)]
pub enum CourseListAction {
    Remove(CourseId),
    Edit(CourseId, CourseEdit),
}
