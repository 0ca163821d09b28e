//! Frame composition: header, board and the end-of-game banner.
use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use game_core::{GameSnapshot, Position};

use super::theme;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;

pub fn render<B: Backend>(terminal: &mut Terminal<B>, snapshot: &GameSnapshot) -> Result<()> {
    terminal.draw(|frame| draw(frame, snapshot))?;
    Ok(())
}

pub fn draw(frame: &mut Frame, snapshot: &GameSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], snapshot);
    draw_board(frame, chunks[1], snapshot);
    frame.render_widget(
        Paragraph::new("q / Esc: quit").alignment(Alignment::Center),
        chunks[2],
    );

    if let Some(message) = snapshot.message() {
        draw_banner(frame, chunks[1], message);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let text = format!(
        "Score: {}   Tick: {}   Goals left: {}",
        snapshot.score,
        snapshot.tick,
        snapshot.goals.len()
    );
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Chase "));
    frame.render_widget(header, area);
}

/// Draws the grid centered in `area`.
fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let rows: Vec<Line> = (0..snapshot.height as i32)
        .map(|y| {
            let spans: Vec<Span> = (0..snapshot.width as i32)
                .map(|x| {
                    let (glyph, style) = theme::render_position(snapshot, Position::new(x, y));
                    Span::styled(glyph, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    // +2 for the borders
    let board = centered(
        area,
        (snapshot.width as u16).saturating_add(2),
        (snapshot.height as u16).saturating_add(2),
    );
    let paragraph = Paragraph::new(rows).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, board);
}

fn draw_banner(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16).saturating_add(4);
    let banner = centered(area, width, 3);

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(Span::styled(message, theme::banner_style()))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        banner,
    );
}

/// A `width` x `height` rect centered in `area`, clipped to it.
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
