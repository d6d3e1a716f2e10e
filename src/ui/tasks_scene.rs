//! The child-facing task list. Read-only: approval happens behind the
//! parent gate.

use habit_hero::store::GameStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct TasksScreen {
    pub selected_index: usize,
}

impl TasksScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, store: &GameStore) {
        if self.selected_index + 1 < store.tasks().len() {
            self.selected_index += 1;
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, store: &GameStore) {
        let block = Block::default().borders(Borders::ALL).title(" My Tasks ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        if store.tasks().is_empty() {
            let empty = Paragraph::new("No tasks yet - ask a parent to add some!")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = store
                .tasks()
                .iter()
                .map(|task| {
                    let icon = task.icon.as_deref().unwrap_or("📋");
                    let (mark, style) = if task.completed {
                        ("✔", Style::default().fg(Color::Green))
                    } else {
                        (" ", Style::default().fg(Color::White))
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!(" {} ", mark), style),
                        Span::raw(format!("{} {}  ", icon, task.name)),
                        Span::styled(
                            format!("+{} ⚔", task.resolved_attack_reward()),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]))
                })
                .collect();

            let list = List::new(items).highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
            let mut state = ListState::default();
            state.select(Some(self.selected_index.min(store.tasks().len() - 1)));
            frame.render_stateful_widget(list, chunks[0], &mut state);
        }

        let hint = Paragraph::new(Span::styled(
            "Finish a chore, then a parent approves it to grant attacks",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
}
