//! Glyphs and colors for board cells and agents.
use game_core::{Cell, GameSnapshot, Position};
use ratatui::style::{Color, Modifier, Style};

/// Glyph and style for the board position, agents drawn over cells.
///
/// The seeker wins over a pursuer on the same cell so a capture stays visible
/// through the banner.
pub fn render_position(snapshot: &GameSnapshot, position: Position) -> (&'static str, Style) {
    if snapshot.seeker == position {
        return (
            "@",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    }

    if let Some(pursuer) = snapshot.pursuer_at(position) {
        return if pursuer.ai_controlled {
            ("G", Style::default().fg(Color::Green))
        } else {
            ("g", Style::default().fg(Color::Red))
        };
    }

    match snapshot.cell(position) {
        Some(Cell::Wall) => ("#", Style::default().fg(Color::Blue)),
        Some(Cell::Goal) => ("·", Style::default().fg(Color::Cyan)),
        Some(Cell::Open) | None => (" ", Style::default()),
    }
}

pub fn banner_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}
