pub mod scene_view;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Clear, Gauge, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::App;
use fokus::countdown::TimerState;
use fokus::journey;

const OVERLAY_HEIGHT: u16 = 9;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stage = journey::params_at(self.countdown.progress());
        let angry = self.mood.is_angry();

        scene_view::render(&self.scene, &stage, angry, area, buf);

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let hint_style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC);

        let timer_text = self.countdown.to_string();
        let state_text = match self.countdown.state() {
            TimerState::Idle => "press space to start",
            TimerState::Running => {
                if angry {
                    "hey! eyes on your work"
                } else {
                    "focusing"
                }
            }
            TimerState::Paused => "paused",
            TimerState::Completed => "session complete!",
        };
        let stats_text = self.statistics.summary();
        let duration_text = format!("focus: {} min", self.countdown.focus_minutes());
        let hint_text = "(space) start/pause  (r)eset  (↑/↓) duration  (esc)ape";

        let content_width = [
            timer_text.width(),
            state_text.width(),
            stats_text.width(),
            duration_text.width(),
            hint_text.width(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0) as u16;

        let overlay = centered_overlay(area, content_width + 6, OVERLAY_HEIGHT);
        // Blank the overlay region so the starfield doesn't bleed into text
        Clear.render(overlay, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints(
                [
                    Constraint::Length(1), // timer
                    Constraint::Length(1), // state
                    Constraint::Length(1), // padding
                    Constraint::Length(1), // progress gauge
                    Constraint::Length(1), // padding
                    Constraint::Length(1), // stats
                    Constraint::Length(1), // duration
                    Constraint::Length(1), // padding
                    Constraint::Length(1), // hints
                ]
                .as_ref(),
            )
            .split(overlay);

        let timer_style = if angry {
            Style::default().patch(bold_style).fg(Color::Red)
        } else {
            Style::default().patch(bold_style).fg(Color::White)
        };
        Paragraph::new(Span::styled(timer_text, timer_style))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let state_style = match self.countdown.state() {
            TimerState::Running if angry => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            TimerState::Completed => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            TimerState::Idle => Style::default().fg(Color::Yellow),
            _ => dim_style,
        };
        Paragraph::new(Span::styled(state_text, state_style))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let gauge_color = if angry { Color::Red } else { Color::Magenta };
        Gauge::default()
            .ratio(self.countdown.progress().clamp(0.0, 1.0))
            .gauge_style(Style::default().fg(gauge_color))
            .use_unicode(true)
            .render(chunks[3], buf);

        Paragraph::new(Span::styled(stats_text, dim_style))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);

        Paragraph::new(Span::styled(duration_text, dim_style))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);

        Paragraph::new(Span::styled(hint_text, hint_style))
            .alignment(Alignment::Center)
            .render(chunks[8], buf);
    }
}

/// Centered rect for the timer overlay, clamped to the available area.
fn centered_overlay(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
