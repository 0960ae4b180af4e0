//! GPA Calculator Main Application
//! Single window: summary panel on top, editable course list below.

use crate::config::AppConfig;
use crate::gui::{CourseList, CourseListAction, SummaryAction, SummaryPanel};
use crate::roster::CourseRoster;
use egui::TopBottomPanel;

/// Main application window. Sole owner and writer of the roster.
pub struct GpaApp {
    roster: CourseRoster,
    summary_panel: SummaryPanel,
    course_list: CourseList,
}

impl GpaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    /// Build the app without a window (also used by tests).
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            roster: CourseRoster::new(),
            summary_panel: SummaryPanel::new(config.window_title.clone()),
            course_list: CourseList::new(config.units_hint()),
        }
    }

    pub fn roster(&self) -> &CourseRoster {
        &self.roster
    }

    /// Handle summary panel action
    fn handle_summary_action(&mut self, action: SummaryAction) {
        match action {
            SummaryAction::AddCourse => {
                self.roster.add_course();
            }
            SummaryAction::None => {}
        }
    }

    /// Apply row edits collected during the frame, in the order they were made
    fn handle_course_actions(&mut self, actions: Vec<CourseListAction>) {
        for action in actions {
            match action {
                CourseListAction::Remove(id) => {
                    self.roster.remove_course(id);
                }
                CourseListAction::Edit(id, edit) => {
                    self.roster.update_course(id, edit);
                }
            }
        }
    }
}

impl eframe::App for GpaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel - GPA and add button
        let summary = self.roster().summary();
        let action = TopBottomPanel::top("summary_panel")
            .show(ctx, |ui| self.summary_panel.show(ui, &summary))
            .inner;
        self.handle_summary_action(action);

        // Central panel - course rows
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| self.course_list.show(ui, &self.roster))
            .inner;
        self.handle_course_actions(actions);
    }
}
