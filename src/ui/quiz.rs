use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::{App, Session};

const OPTION_LABELS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session);
    render_question_text(frame, chunks[1], &session.current_question().question);
    render_options(frame, chunks[2], session, app.cursor());
    render_notice(frame, chunks[3], app.notice());
    render_controls(frame, chunks[4], session);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &Session) {
    let progress = format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.total()
    );
    let lang = session.current_question().lang.as_deref().unwrap_or("");

    let widget = Paragraph::new(Line::from(vec![
        Span::styled(progress, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(lang, Style::default().fg(Color::DarkGray).italic()),
    ]));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &Session, cursor: usize) {
    let chosen = session.current_selection();
    let options = &session.current_question().options;
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_under_cursor = index == cursor;
        let is_chosen = chosen == Some(index);

        let style = if is_chosen {
            Style::default().fg(Color::Green).bold()
        } else if is_under_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_under_cursor { ">" } else { " " };
        let check = if is_chosen { "●" } else { "○" };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", check), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(message) = notice {
        let widget = Paragraph::new(message)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect, session: &Session) {
    let next = if session.current_index() + 1 == session.total() {
        "n finish"
    } else {
        "n next"
    };
    let controls = format!("j/k move  ·  enter choose  ·  p prev  ·  {next}  ·  esc home");

    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
