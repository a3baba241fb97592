use ratatui::prelude::Rect;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Screen {
        return Screen { width, height };
    }

    pub fn rect(&self) -> Rect {
        return Rect::new(0, 0, self.width, self.height);
    }
}
