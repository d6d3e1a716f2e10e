//! The battle view: the active monster, its health, and dropped diamonds.

use habit_hero::combat::DefeatSequence;
use habit_hero::constants::{BOSS_SLOT, MONSTERS_PER_STAGE};
use habit_hero::store::GameStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::background_color;

pub fn draw_battle(
    frame: &mut Frame,
    area: Rect,
    store: &GameStore,
    defeat: Option<&DefeatSequence>,
) {
    let stage = store.progression().stage_template();
    let monster = store.current_monster();
    let loop_count = store.progression().loop_count();
    let slot = store.progression().current_slot;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(background_color(stage.background)))
        .title(stage_title(stage.name, loop_count));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress dots
            Constraint::Length(1), // boss warning
            Constraint::Length(3), // hp gauge
            Constraint::Min(5),    // monster / drops
            Constraint::Length(2), // hints
        ])
        .split(inner);

    draw_progress_dots(frame, chunks[0], slot);

    if monster.template.is_boss && !monster.is_defeated() {
        let warning = Paragraph::new(Span::styled(
            "⚠ WARNING: BOSS ⚠",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(warning, chunks[1]);
    }

    if !monster.is_defeated() {
        draw_hp_gauge(frame, chunks[2], monster.current_hp, monster.max_hp);
    }

    match defeat {
        Some(seq) if !seq.remaining_drops().is_empty() => {
            draw_drops(frame, chunks[3], seq);
        }
        Some(_) => {
            let burst = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("💥", Style::default())),
                Line::from(""),
                Line::from(Span::styled(
                    "Defeated!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(burst, chunks[3]);
        }
        None => {
            draw_monster(frame, chunks[3], monster.template.name, monster.template.glyph);
        }
    }

    draw_hints(frame, chunks[4], store, defeat);
}

fn stage_title(name: &str, loop_count: u32) -> String {
    if loop_count > 0 {
        format!(" {} +{} ", name, loop_count)
    } else {
        format!(" {} ", name)
    }
}

fn draw_progress_dots(frame: &mut Frame, area: Rect, slot: u8) {
    let mut spans: Vec<Span> = Vec::new();
    for i in 0..MONSTERS_PER_STAGE as u8 {
        let (glyph, style) = if i < slot {
            ("●", Style::default().fg(Color::Green))
        } else if i == slot {
            ("●", Style::default().fg(Color::Yellow))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(glyph, style));
        spans.push(Span::raw(" "));
    }
    let boss_style = if slot == BOSS_SLOT {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(" 💀", boss_style));

    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

fn draw_hp_gauge(frame: &mut Frame, area: Rect, current_hp: u32, max_hp: u32) {
    let ratio = if max_hp == 0 {
        0.0
    } else {
        current_hp as f64 / max_hp as f64
    };
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.2 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{} / {}", current_hp, max_hp));
    frame.render_widget(gauge, area);
}

fn draw_monster(frame: &mut Frame, area: Rect, name: &str, glyph: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            glyph.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            name.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_drops(frame: &mut Frame, area: Rect, seq: &DefeatSequence) {
    // Scatter offsets are cosmetic; the terminal renders drops in a row
    let mut spans: Vec<Span> = Vec::new();
    for i in 0..seq.remaining_drops().len() {
        spans.push(Span::styled(
            format!(" 💎[{}] ", i + 1),
            Style::default().fg(Color::Cyan),
        ));
    }
    let lines = vec![
        Line::from(""),
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(
            "Collect the diamonds! Press a number (or c for the next one)",
            Style::default().fg(Color::Gray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, store: &GameStore, defeat: Option<&DefeatSequence>) {
    let mut lines: Vec<Line> = Vec::new();
    if store.attacks() == 0 && defeat.is_none() {
        lines.push(Line::from(Span::styled(
            "Out of energy! Finish a task to earn attacks",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        "space attack · tab switch view · q quit",
        Style::default().fg(Color::DarkGray),
    )));
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
