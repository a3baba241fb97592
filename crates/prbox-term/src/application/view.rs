use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::services::AppState;
use crate::domain::services::Palette;

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

pub const MISSING_CLI_MESSAGE: &str = "It looks like you don't have the GitHub CLI installed.";
pub const HEADER_TEXT: &str = "Unread notifications";
pub const FOOTER_TEXT: &str = "j/k move  enter open  r reload  q quit";

const HEADER_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 2;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = state.screen.rect().intersection(frame.area());
    let palette = Palette::for_mode(state.dark_mode);

    if !state.cli_found {
        render_missing_cli(frame, area, &palette);
        return;
    }

    let [header, content_area, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(HEADER_TEXT)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM)),
        header,
    );
    frame.render_widget(Paragraph::new(content(state, &palette)), content_area);
    frame.render_widget(
        Paragraph::new(FOOTER_TEXT)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP)),
        footer,
    );
}

/// Body of the content region for the current snapshot.
pub fn content(state: &AppState, palette: &Palette) -> Text<'static> {
    if state.loading_notifications {
        return Text::from("Loading notifications...");
    }

    if let Some(err) = &state.notifications_error {
        return Text::from(format!("Error loading notifications: {err}"));
    }

    if state.notifications.is_empty() {
        return Text::from("No notifications");
    }

    let lines = state
        .notifications
        .iter()
        .enumerate()
        .map(|(idx, notification)| {
            if state.active_index == Some(idx) {
                return Line::from(Span::styled(
                    format!("> {}", notification.title),
                    palette.active_style(),
                ));
            }

            return Line::from(Span::styled(
                format!("  {}", notification.title),
                palette.inactive_style(),
            ));
        })
        .collect::<Vec<Line>>();

    return Text::from(lines);
}

fn render_missing_cli(frame: &mut Frame, area: Rect, palette: &Palette) {
    let outer = Block::bordered();
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let text_width = Line::from(MISSING_CLI_MESSAGE).width() as u16;
    let width = (text_width + 4).min(inner.width);
    let text_rows = text_width.div_ceil(width.saturating_sub(4).max(1));
    let height = (text_rows + 2).min(inner.height);

    frame.render_widget(
        Paragraph::new(MISSING_CLI_MESSAGE)
            .style(palette.alert_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(palette.alert_style()),
            ),
        centered_rect(inner, width, height),
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    return Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
}
