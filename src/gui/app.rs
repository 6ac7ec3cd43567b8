//! Main usersearch window

use crate::router::{Router, USER_DETAIL_PATTERN};
use crate::search::{SearchComponent, SubmitEvent};
use crate::SearchModule;
use eframe::egui;

/// Main application state
pub struct UserSearchApp {
    /// Search form, routing through the injected router
    search: SearchComponent<Router>,
    /// First frame flag (for auto-focus)
    first_frame: bool,
    /// Status bar message
    status_message: String,
}

impl Default for UserSearchApp {
    fn default() -> Self {
        Self {
            search: SearchModule.create_component(Router::with_default_routes()),
            first_frame: true,
            status_message: "Ready".to_string(),
        }
    }
}

impl UserSearchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn submit(&mut self) {
        let mut event = SubmitEvent::new();
        self.search.on_submit(&mut event);

        self.status_message = if self.search.is_input_error {
            self.search.input_error_message.clone()
        } else {
            let router = self.search.navigator();
            match router.last_error() {
                Some(e) => e.to_string(),
                None => format!("Opened {}", router.current_url()),
            }
        };
    }

    /// Render search bar
    fn render_search_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Username:");

                // Edit a copy and push changes back through the input binding
                let mut value = self.search.search_query.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .desired_width(ui.available_width() - 80.0)
                        .hint_text("GitHub username"),
                );

                if self.first_frame {
                    response.request_focus();
                    self.first_frame = false;
                }

                if response.changed() {
                    self.search.on_input(value);
                }

                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Search").clicked() || enter {
                    self.submit();
                    response.request_focus();
                }
            });

            if self.search.is_input_error {
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), &self.search.input_error_message);
            }
            ui.add_space(4.0);
        });
    }

    /// Render status bar
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.search.navigator().current().path.clone());
                ui.separator();
                ui.label(&self.status_message);
            });
        });
    }

    /// Render the view selected by the router
    fn render_body(&mut self, ui: &mut egui::Ui) {
        let router = self.search.navigator();
        let detail = router
            .current_match()
            .filter(|m| m.pattern == USER_DETAIL_PATTERN);

        let Some(matched) = detail else {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Find a user");
                ui.label("Enter a username without spaces and press Enter.");
            });
            return;
        };

        let query = &router.current().query;
        let username = matched.param("username").unwrap_or_default().to_string();
        let page = query.get("page").unwrap_or_default().to_string();
        let per_page = query.get("per_page").unwrap_or_default().to_string();
        let url = router.current_url();

        ui.heading(format!("User: {}", username));
        ui.add_space(8.0);
        egui::Grid::new("user_detail").num_columns(2).show(ui, |ui| {
            ui.label("Page");
            ui.label(page);
            ui.end_row();
            ui.label("Per page");
            ui.label(per_page);
            ui.end_row();
            ui.label("Route");
            ui.monospace(url);
            ui.end_row();
        });
        ui.add_space(8.0);

        if ui.button("Back").clicked() {
            self.search.navigator_mut().back();
            self.status_message = "Back to search".to_string();
        }
    }
}

impl eframe::App for UserSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_search_bar(ctx);
        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_body(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_reports_validation_message() {
        let mut app = UserSearchApp::default();
        app.search.on_input("");
        app.submit();
        assert_eq!(app.status_message, "Username cannot be empty.");
    }

    #[test]
    fn submit_reports_opened_route() {
        let mut app = UserSearchApp::default();
        app.search.on_input("lk");
        app.submit();
        assert_eq!(app.status_message, "Opened /user/lk?page=1&per_page=10");
    }
}
