use crate::ui::layout::center_padding;
use crate::ui::theme::{LOGO_BACKGROUND, LOGO_SUBTITLE, LOGO_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

const SUBTITLE: &str = "Consulta de precios";

/// Store banner shown in the top band of the kiosk.
pub struct Logo<'a> {
    store_name: &'a str,
}

impl<'a> Logo<'a> {
    pub fn new(store_name: &'a str) -> Self {
        Self { store_name }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let lines = vec![
            Line::from(Span::styled(
                spaced(self.store_name),
                Style::default()
                    .fg(LOGO_TEXT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(LOGO_SUBTITLE))),
        ];
        let padding = center_padding(area, lines.len());

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(LOGO_BACKGROUND))
            .block(Block::default().padding(Padding::top(padding)))
    }
}

/// "ENG MARKET" -> "E N G   M A R K E T", a cheap large-type effect.
fn spaced(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_widens_words() {
        assert_eq!(spaced("ENG MARKET"), "E N G   M A R K E T");
        assert_eq!(spaced("  "), "");
    }
}
