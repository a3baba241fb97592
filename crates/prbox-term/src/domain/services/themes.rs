use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

/// Accent colors for one terminal tone. Built per render from the snapshot's
/// `dark_mode` flag; there is no shared style state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub active: Color,
    pub inactive: Color,
    pub alert: Color,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Palette {
        if dark_mode {
            return Palette {
                active: Color::Rgb(0x39, 0xBA, 0xE6),
                inactive: Color::Rgb(0xBF, 0xBD, 0xB6),
                alert: Color::Red,
            };
        }

        return Palette {
            active: Color::Blue,
            inactive: Color::LightBlue,
            alert: Color::Red,
        };
    }

    pub fn active_style(&self) -> Style {
        return Style::default()
            .fg(Color::Reset)
            .bg(self.active)
            .add_modifier(Modifier::BOLD);
    }

    pub fn inactive_style(&self) -> Style {
        return Style::default().fg(self.inactive);
    }

    pub fn alert_style(&self) -> Style {
        return Style::default()
            .fg(self.alert)
            .add_modifier(Modifier::BOLD);
    }
}
