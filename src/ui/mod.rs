//! UI module for rendering the TUI

mod home;
mod layout;
mod sign_in;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Reserve the bottom line for the status bar
    let main_area = layout::create_layout(area);

    // Draw main content based on current view
    match app.state.current_view {
        View::SignIn => sign_in::draw(frame, main_area, app),
        View::Home => home::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
