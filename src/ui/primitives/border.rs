use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = match self {
            BorderChar::TopLeft => (theme::borders::TOP_LEFT, theme::borders_ascii::TOP_LEFT),
            BorderChar::TopRight => (theme::borders::TOP_RIGHT, theme::borders_ascii::TOP_RIGHT),
            BorderChar::BottomLeft => (
                theme::borders::BOTTOM_LEFT,
                theme::borders_ascii::BOTTOM_LEFT,
            ),
            BorderChar::BottomRight => (
                theme::borders::BOTTOM_RIGHT,
                theme::borders_ascii::BOTTOM_RIGHT,
            ),
            BorderChar::Horizontal => (
                theme::borders::HORIZONTAL,
                theme::borders_ascii::HORIZONTAL,
            ),
            BorderChar::Vertical => (theme::borders::VERTICAL, theme::borders_ascii::VERTICAL),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }
}
