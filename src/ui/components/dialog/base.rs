//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the border, both sides together
const PADDING: u16 = 4;

/// Content of a centered dialog
pub struct DialogContent<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Body text, `\n` separates paragraphs
    pub message: &'a str,
    /// Key hint shown at the bottom
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, dialog: DialogContent) {
    let text_width = dialog.max_width.saturating_sub(PADDING + 2).max(1) as usize;
    let body = wrap_text(dialog.message, text_width);

    // Widths are in characters; titles and messages carry accented text
    let widest = body
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(dialog.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let width = (widest + PADDING + 2).min(dialog.max_width);

    // title + blank + body (+ blank + hint) + borders
    let hint_rows = if dialog.hint.is_some() { 2 } else { 0 };
    let height = (2 + body.len() as u16 + hint_rows + 2).max(5);

    let area = centered(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(Line::from(Span::styled(
        dialog.title,
        Style::default()
            .fg(dialog.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.extend(body.into_iter().map(Line::from));
    if let Some(hint) = dialog.hint {
        lines.push(Line::default());
        lines.push(Line::from(hint));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dialog.accent));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(Color::Black));

    frame.render_widget(paragraph, area);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap by character count
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if line_width > 0 && line_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Gracias por tu tiempo. Te contactaremos pronto", 20);
        assert_eq!(
            lines,
            vec!["Gracias por tu", "tiempo. Te", "contactaremos pronto"]
        );
    }

    #[test]
    fn test_wrap_text_counts_characters() {
        // 11 characters but 21 bytes
        let lines = wrap_text("ñññññ ñññññ", 11);
        assert_eq!(lines, vec!["ñññññ ñññññ"]);
    }

    #[test]
    fn test_wrap_text_keeps_blank_paragraphs() {
        let lines = wrap_text("uno\n\ndos", 40);
        assert_eq!(lines, vec!["uno", "", "dos"]);
    }

    #[test]
    fn test_wrap_text_long_word_gets_own_line() {
        let lines = wrap_text("a contactaremos b", 5);
        assert_eq!(lines, vec!["a", "contactaremos", "b"]);
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_centered_fits_inside_small_area() {
        let area = Rect::new(0, 0, 30, 4);
        let rect = centered(area, 50, 8);
        assert_eq!(rect, Rect::new(0, 0, 30, 4));
    }

    #[test]
    fn test_centered_in_offset_area() {
        let area = Rect::new(10, 5, 40, 20);
        assert_eq!(centered(area, 20, 10), Rect::new(20, 10, 20, 10));
    }
}
