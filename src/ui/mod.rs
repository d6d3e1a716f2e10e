//! Terminal UI scenes.
//!
//! Rendering only: every scene draws from a read-only view of the store and
//! routes key presses back to store operations. Nothing in here owns game
//! state beyond cursor positions and input buffers.

pub mod battle_scene;
pub mod parent_scene;
pub mod shop_scene;
pub mod tasks_scene;

use habit_hero::store::GameStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Top-level tabs of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Battle,
    Tasks,
    Shop,
    Parent,
}

impl Tab {
    pub fn all() -> [Tab; 4] {
        [Tab::Battle, Tab::Tasks, Tab::Shop, Tab::Parent]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Battle => "Battle",
            Tab::Tasks => "Tasks",
            Tab::Shop => "Shop",
            Tab::Parent => "Parents",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Battle => Tab::Tasks,
            Tab::Tasks => Tab::Shop,
            Tab::Shop => Tab::Parent,
            Tab::Parent => Tab::Battle,
        }
    }
}

/// Splits the screen into header bar and scene body.
pub fn split_frame(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draws the header: currency balances on the left, tabs on the right.
pub fn draw_header(frame: &mut Frame, area: Rect, store: &GameStore, active: Tab) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(inner);

    let balances = Line::from(vec![
        Span::raw(" ⚔ "),
        Span::styled(
            format!("{}", store.attacks()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   💎 "),
        Span::styled(
            format!("{}", store.diamonds()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(balances), chunks[0]);

    let mut tab_spans: Vec<Span> = Vec::new();
    for tab in Tab::all() {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tab_spans.push(Span::styled(format!(" {} ", tab.title()), style));
        tab_spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tab_spans)), chunks[1]);
}

/// Stage backdrop tags map to terminal colors here; the core never reads
/// them.
pub fn background_color(tag: &str) -> Color {
    match tag {
        "blue" => Color::Blue,
        "green" => Color::Green,
        "indigo" => Color::Magenta,
        "orange" => Color::LightRed,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        _ => Color::Gray,
    }
}

/// Centers a fixed-size rect inside `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
