mod home;
mod loading;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Page;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.page() {
        Page::Home => home::render(frame, area, app),
        Page::Loading => loading::render(frame, area),
        Page::Quiz => quiz::render(frame, area, app),
        Page::Result => result::render(frame, area, app),
    }
}
