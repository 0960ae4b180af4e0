//! Summary Panel Widget
//! Top panel with the title, the current GPA card and the add-course control.

use crate::stats::GpaSummary;
use egui::{Color32, RichText};

const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);

/// Top panel showing the derived GPA and totals.
pub struct SummaryPanel {
    title: String,
}

impl SummaryPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Draw the panel
    pub fn show(&mut self, ui: &mut egui::Ui, summary: &GpaSummary) -> SummaryAction {
        let mut action = SummaryAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(RichText::new(&self.title).size(26.0).strong().color(ACCENT));
            ui.add_space(12.0);

            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                .rounding(10.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_min_width(260.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("CURRENT GPA")
                                .size(12.0)
                                .strong()
                                .color(Color32::GRAY),
                        );
                        ui.label(RichText::new(&summary.gpa).size(44.0).strong().color(ACCENT));
                        ui.label(
                            RichText::new(Self::totals_line(summary))
                                .size(12.0)
                                .color(Color32::GRAY),
                        );
                    });
                });

            ui.add_space(12.0);

            let button = egui::Button::new(RichText::new("+ Add Course").size(16.0).strong())
                .min_size(egui::vec2(260.0, 36.0));
            if ui.add(button).clicked() {
                action = SummaryAction::AddCourse;
            }
            ui.add_space(8.0);
        });

        action
    }

    /// e.g. `2 courses · 5 units`
    pub fn totals_line(summary: &GpaSummary) -> String {
        let courses = if summary.course_count == 1 {
            "course"
        } else {
            "courses"
        };
        let units = if summary.total_units == 1 {
            "unit"
        } else {
            "units"
        };
        format!(
            "{} {} · {} {}",
            summary.course_count, courses, summary.total_units, units
        )
    }
}

/// Actions triggered by the summary panel
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryAction {
    None,
    AddCourse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_line_pluralises() {
        assert_eq!(
            SummaryPanel::totals_line(&GpaSummary::default()),
            "0 courses · 0 units"
        );

        let summary = GpaSummary {
            course_count: 1,
            total_units: 1,
            quality_points: 5,
            gpa: "5.00".into(),
        };
        assert_eq!(SummaryPanel::totals_line(&summary), "1 course · 1 unit");
    }
}
