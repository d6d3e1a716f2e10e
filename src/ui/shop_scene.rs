//! The reward shop: the child browses rewards and spends diamonds to
//! request one.

use habit_hero::rewards::RewardStatus;
use habit_hero::store::GameStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct ShopScreen {
    pub selected_index: usize,
}

impl ShopScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, store: &GameStore) {
        if self.selected_index + 1 < store.rewards().len() {
            self.selected_index += 1;
        }
    }

    /// Requests the selected reward. The store enforces affordability and
    /// lifecycle; this only forwards the id.
    pub fn request_selected(&self, store: &mut GameStore) -> bool {
        match store.rewards().get(self.selected_index) {
            Some(reward) => {
                let id = reward.id.clone();
                store.request_reward(&id)
            }
            None => false,
        }
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, store: &GameStore) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Reward Shop ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        if store.rewards().is_empty() {
            let empty = Paragraph::new("The shop is empty - ask a parent to stock it!")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, chunks[0]);
        } else {
            let diamonds = store.diamonds();
            let items: Vec<ListItem> = store
                .rewards()
                .iter()
                .map(|reward| {
                    let icon = reward.icon.as_deref().unwrap_or("🎁");
                    let (tag, tag_style) = match reward.status() {
                        RewardStatus::Available => {
                            if diamonds >= reward.diamond_cost {
                                ("", Style::default())
                            } else {
                                ("(not enough 💎)", Style::default().fg(Color::DarkGray))
                            }
                        }
                        RewardStatus::Pending => {
                            ("waiting for a parent…", Style::default().fg(Color::Yellow))
                        }
                        RewardStatus::Redeemed => ("redeemed ✔", Style::default().fg(Color::Green)),
                    };
                    let name_style = match reward.status() {
                        RewardStatus::Redeemed => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                        _ => Style::default().fg(Color::White),
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw(format!(" {} ", icon)),
                        Span::styled(reward.name.clone(), name_style),
                        Span::styled(
                            format!("  {} 💎  ", reward.diamond_cost),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::styled(tag, tag_style),
                    ]))
                })
                .collect();

            let list = List::new(items).highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
            let mut state = ListState::default();
            state.select(Some(self.selected_index.min(store.rewards().len() - 1)));
            frame.render_stateful_widget(list, chunks[0], &mut state);
        }

        let hint = Paragraph::new(Span::styled(
            "enter request reward · diamonds are spent right away",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
}
