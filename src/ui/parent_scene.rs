//! The parent panel: arithmetic lock screen, then task/reward/settings
//! management.
//!
//! All mutations behind the gate go straight to store operations; this
//! module owns only cursors, input buffers and the form state machine.

use crossterm::event::KeyCode;
use habit_hero::parent_gate::ParentGate;
use habit_hero::rewards::RewardStatus;
use habit_hero::store::GameStore;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::centered_rect;

/// Icon choices offered when creating a reward.
const REWARD_ICONS: [&str; 12] = [
    "🎁", "🎮", "🧸", "🍬", "🍦", "🚗", "📚", "🎨", "🎫", "🚲", "🍔", "🎡",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentTab {
    Tasks,
    Rewards,
    Settings,
}

impl ParentTab {
    fn title(&self) -> &'static str {
        match self {
            ParentTab::Tasks => "Tasks",
            ParentTab::Rewards => "Rewards",
            ParentTab::Settings => "Settings",
        }
    }

    fn next(&self) -> ParentTab {
        match self {
            ParentTab::Tasks => ParentTab::Rewards,
            ParentTab::Rewards => ParentTab::Settings,
            ParentTab::Settings => ParentTab::Tasks,
        }
    }

    fn prev(&self) -> ParentTab {
        match self {
            ParentTab::Tasks => ParentTab::Settings,
            ParentTab::Rewards => ParentTab::Tasks,
            ParentTab::Settings => ParentTab::Rewards,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browsing,
    EnteringName,
    EnteringAmount,
    ChoosingIcon,
    EditingSetting,
}

pub struct ParentScreen {
    tab: ParentTab,
    mode: Mode,
    task_index: usize,
    reward_index: usize,
    setting_index: usize,
    answer_input: String,
    name_input: String,
    amount_input: String,
    icon_index: usize,
    error: Option<String>,
}

impl ParentScreen {
    pub fn new() -> Self {
        Self {
            tab: ParentTab::Tasks,
            mode: Mode::Browsing,
            task_index: 0,
            reward_index: 0,
            setting_index: 0,
            answer_input: String::new(),
            name_input: String::new(),
            amount_input: String::new(),
            icon_index: 0,
            error: None,
        }
    }

    /// True while a text field is capturing keystrokes, so the caller knows
    /// not to treat letters as global shortcuts.
    pub fn is_capturing_input(&self, gate: &ParentGate) -> bool {
        !gate.is_unlocked() || self.mode != Mode::Browsing
    }

    /// Routes one key press. Returns true when the key was consumed.
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        store: &mut GameStore,
        gate: &mut ParentGate,
        rng: &mut impl Rng,
    ) -> bool {
        if !gate.is_unlocked() {
            return self.handle_lock_screen_key(code, gate, rng);
        }
        match self.mode {
            Mode::Browsing => self.handle_browsing_key(code, store, gate, rng),
            Mode::EnteringName => self.handle_name_key(code),
            Mode::EnteringAmount => self.handle_amount_key(code, store),
            Mode::ChoosingIcon => self.handle_icon_key(code, store),
            Mode::EditingSetting => self.handle_setting_key(code, store),
        }
    }

    fn handle_lock_screen_key(
        &mut self,
        code: KeyCode,
        gate: &mut ParentGate,
        rng: &mut impl Rng,
    ) -> bool {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() && self.answer_input.len() < 4 => {
                self.answer_input.push(c);
                true
            }
            KeyCode::Backspace => {
                self.answer_input.pop();
                true
            }
            KeyCode::Enter => {
                if gate.submit(&self.answer_input, rng) {
                    self.error = None;
                } else {
                    self.error = Some("Wrong answer, try again!".to_string());
                }
                self.answer_input.clear();
                true
            }
            _ => false,
        }
    }

    fn handle_browsing_key(
        &mut self,
        code: KeyCode,
        store: &mut GameStore,
        gate: &mut ParentGate,
        rng: &mut impl Rng,
    ) -> bool {
        self.error = None;
        match code {
            KeyCode::Left => {
                self.tab = self.tab.prev();
                true
            }
            KeyCode::Right => {
                self.tab = self.tab.next();
                true
            }
            KeyCode::Esc => {
                gate.lock(rng);
                true
            }
            _ => match self.tab {
                ParentTab::Tasks => self.handle_task_list_key(code, store),
                ParentTab::Rewards => self.handle_reward_list_key(code, store),
                ParentTab::Settings => self.handle_settings_list_key(code),
            },
        }
    }

    fn handle_task_list_key(&mut self, code: KeyCode, store: &mut GameStore) -> bool {
        match code {
            KeyCode::Up => {
                self.task_index = self.task_index.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if self.task_index + 1 < store.tasks().len() {
                    self.task_index += 1;
                }
                true
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.selected_task_id(store) {
                    store.approve_task(&id);
                }
                true
            }
            KeyCode::Char('r') => {
                if let Some(id) = self.selected_task_id(store) {
                    store.reset_task(&id);
                }
                true
            }
            KeyCode::Char('x') => {
                if let Some(id) = self.selected_task_id(store) {
                    store.remove_task(&id);
                    self.task_index = self.task_index.min(store.tasks().len().saturating_sub(1));
                }
                true
            }
            KeyCode::Char('n') => {
                self.begin_form();
                true
            }
            _ => false,
        }
    }

    fn handle_reward_list_key(&mut self, code: KeyCode, store: &mut GameStore) -> bool {
        match code {
            KeyCode::Up => {
                self.reward_index = self.reward_index.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if self.reward_index + 1 < store.rewards().len() {
                    self.reward_index += 1;
                }
                true
            }
            KeyCode::Char('a') => {
                if let Some(id) = self.selected_reward_id(store) {
                    store.approve_reward(&id);
                }
                true
            }
            KeyCode::Char('x') => {
                if let Some(id) = self.selected_reward_id(store) {
                    store.remove_reward(&id);
                    self.reward_index =
                        self.reward_index.min(store.rewards().len().saturating_sub(1));
                }
                true
            }
            KeyCode::Char('n') => {
                self.begin_form();
                true
            }
            _ => false,
        }
    }

    fn handle_settings_list_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up => {
                self.setting_index = self.setting_index.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if self.setting_index == 0 {
                    self.setting_index = 1;
                }
                true
            }
            KeyCode::Enter => {
                self.amount_input.clear();
                self.mode = Mode::EditingSetting;
                true
            }
            _ => false,
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => {
                if self.name_input.len() < 40 {
                    self.name_input.push(c);
                }
                true
            }
            KeyCode::Backspace => {
                self.name_input.pop();
                true
            }
            KeyCode::Enter => {
                if self.name_input.trim().is_empty() {
                    self.error = Some("Name cannot be empty".to_string());
                } else {
                    self.error = None;
                    self.mode = Mode::EnteringAmount;
                }
                true
            }
            KeyCode::Esc => {
                self.cancel_form();
                true
            }
            _ => false,
        }
    }

    fn handle_amount_key(&mut self, code: KeyCode, store: &mut GameStore) -> bool {
        match code {
            KeyCode::Char(c) => {
                if c.is_ascii_digit() && self.amount_input.len() < 6 {
                    self.amount_input.push(c);
                }
                true
            }
            KeyCode::Backspace => {
                self.amount_input.pop();
                true
            }
            KeyCode::Enter => {
                // Malformed input coerces to 0 rather than propagating
                let amount: u32 = self.amount_input.trim().parse().unwrap_or(0);
                match self.tab {
                    ParentTab::Tasks => {
                        store.add_task(self.name_input.trim().to_string(), amount);
                        self.cancel_form();
                    }
                    ParentTab::Rewards => {
                        if amount == 0 {
                            self.error = Some("Cost must be at least 1 💎".to_string());
                        } else {
                            self.error = None;
                            self.mode = Mode::ChoosingIcon;
                        }
                    }
                    ParentTab::Settings => {}
                }
                true
            }
            KeyCode::Esc => {
                self.cancel_form();
                true
            }
            _ => false,
        }
    }

    fn handle_icon_key(&mut self, code: KeyCode, store: &mut GameStore) -> bool {
        match code {
            KeyCode::Left => {
                self.icon_index = (self.icon_index + REWARD_ICONS.len() - 1) % REWARD_ICONS.len();
                true
            }
            KeyCode::Right => {
                self.icon_index = (self.icon_index + 1) % REWARD_ICONS.len();
                true
            }
            KeyCode::Enter => {
                let cost: u32 = self.amount_input.trim().parse().unwrap_or(0);
                store.add_reward(
                    self.name_input.trim().to_string(),
                    cost,
                    Some(REWARD_ICONS[self.icon_index].to_string()),
                );
                self.cancel_form();
                true
            }
            KeyCode::Esc => {
                self.cancel_form();
                true
            }
            KeyCode::Char(_) => true,
            _ => false,
        }
    }

    fn handle_setting_key(&mut self, code: KeyCode, store: &mut GameStore) -> bool {
        match code {
            KeyCode::Char(c) => {
                if c.is_ascii_digit() && self.amount_input.len() < 4 {
                    self.amount_input.push(c);
                }
                true
            }
            KeyCode::Backspace => {
                self.amount_input.pop();
                true
            }
            KeyCode::Enter => {
                // Malformed input coerces to 0 rather than propagating
                let amount: u32 = self.amount_input.trim().parse().unwrap_or(0);
                if self.setting_index == 0 {
                    store.set_normal_monster_diamond_reward(amount);
                } else {
                    store.set_boss_monster_diamond_reward(amount);
                }
                self.cancel_form();
                true
            }
            KeyCode::Esc => {
                self.cancel_form();
                true
            }
            _ => false,
        }
    }

    fn begin_form(&mut self) {
        self.mode = Mode::EnteringName;
        self.name_input.clear();
        self.amount_input.clear();
        self.icon_index = 0;
        self.error = None;
    }

    fn cancel_form(&mut self) {
        self.mode = Mode::Browsing;
        self.name_input.clear();
        self.amount_input.clear();
        self.error = None;
    }

    fn selected_task_id(&self, store: &GameStore) -> Option<String> {
        store.tasks().get(self.task_index).map(|t| t.id.clone())
    }

    fn selected_reward_id(&self, store: &GameStore) -> Option<String> {
        store.rewards().get(self.reward_index).map(|r| r.id.clone())
    }

    // === Drawing ===

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, store: &GameStore, gate: &ParentGate) {
        if !gate.is_unlocked() {
            self.draw_lock_screen(frame, area, gate);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Parent Zone 🔓 ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_sub_tabs(frame, chunks[0]);
        match self.tab {
            ParentTab::Tasks => self.draw_task_list(frame, chunks[1], store),
            ParentTab::Rewards => self.draw_reward_list(frame, chunks[1], store),
            ParentTab::Settings => self.draw_settings(frame, chunks[1], store),
        }
        self.draw_help_line(frame, chunks[2]);

        match self.mode {
            Mode::Browsing => {}
            Mode::EditingSetting => self.draw_setting_dialog(frame, area),
            _ => self.draw_form_dialog(frame, area),
        }
    }

    fn draw_lock_screen(&self, frame: &mut Frame, area: Rect, gate: &ParentGate) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Parent Zone 🔒 ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Answer to unlock",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                gate.challenge().prompt(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("[ {} ]", self.answer_input),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "type the answer · enter submit",
            Style::default().fg(Color::DarkGray),
        )));

        let dialog = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(dialog, inner);
    }

    fn draw_sub_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for tab in [ParentTab::Tasks, ParentTab::Rewards, ParentTab::Settings] {
            let style = if tab == self.tab {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", tab.title()), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_task_list(&self, frame: &mut Frame, area: Rect, store: &GameStore) {
        if store.tasks().is_empty() {
            let empty = Paragraph::new("No tasks. Press n to add one.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }
        let items: Vec<ListItem> = store
            .tasks()
            .iter()
            .map(|task| {
                let icon = task.icon.as_deref().unwrap_or("📋");
                let mark = if task.completed { "✔" } else { "·" };
                let mark_style = if task.completed {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", mark), mark_style),
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
        state.select(Some(self.task_index.min(store.tasks().len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_reward_list(&self, frame: &mut Frame, area: Rect, store: &GameStore) {
        if store.rewards().is_empty() {
            let empty = Paragraph::new("No rewards. Press n to add one.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }
        let items: Vec<ListItem> = store
            .rewards()
            .iter()
            .map(|reward| {
                let icon = reward.icon.as_deref().unwrap_or("🎁");
                let (tag, tag_style) = match reward.status() {
                    RewardStatus::Available => ("", Style::default()),
                    RewardStatus::Pending => (
                        "REQUESTED - press a to fulfill",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    RewardStatus::Redeemed => ("redeemed ✔", Style::default().fg(Color::Green)),
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {} {}  ", icon, reward.name)),
                    Span::styled(
                        format!("{} 💎  ", reward.diamond_cost),
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
        state.select(Some(self.reward_index.min(store.rewards().len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_settings(&self, frame: &mut Frame, area: Rect, store: &GameStore) {
        let rows = [
            (
                "Diamonds per regular monster",
                store.diamond_reward_for(false),
            ),
            ("Diamonds per boss", store.diamond_reward_for(true)),
        ];
        let items: Vec<ListItem> = rows
            .iter()
            .map(|(label, value)| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {}  ", label)),
                    Span::styled(
                        format!("{} 💎", value),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
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
        state.select(Some(self.setting_index));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_help_line(&self, frame: &mut Frame, area: Rect) {
        let help = match self.tab {
            ParentTab::Tasks => "a approve · r reset · n new · x delete · ←/→ tab · esc lock",
            ParentTab::Rewards => "a fulfill · n new · x delete · ←/→ tab · esc lock",
            ParentTab::Settings => "enter edit · ←/→ tab · esc lock",
        };
        let line = Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center);
        frame.render_widget(line, area);
    }

    fn draw_form_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog_area = centered_rect(46, 9, area);
        frame.render_widget(Clear, dialog_area);

        let title = match self.tab {
            ParentTab::Tasks => " New Task ",
            _ => " New Reward ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(title);
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let mut lines = vec![Line::from("")];
        match self.mode {
            Mode::EnteringName => {
                lines.push(Line::from("Name:"));
                lines.push(Line::from(Span::styled(
                    format!("[ {} ]", self.name_input),
                    Style::default().fg(Color::Yellow),
                )));
            }
            Mode::EnteringAmount => {
                let label = match self.tab {
                    ParentTab::Tasks => "Attack reward:",
                    _ => "Diamond cost:",
                };
                lines.push(Line::from(label));
                lines.push(Line::from(Span::styled(
                    format!("[ {} ]", self.amount_input),
                    Style::default().fg(Color::Yellow),
                )));
            }
            Mode::ChoosingIcon => {
                lines.push(Line::from("Icon (←/→ to change):"));
                lines.push(Line::from(Span::styled(
                    format!("  {}  ", REWARD_ICONS[self.icon_index]),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            }
            _ => {}
        }
        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(Span::styled(
            "enter next · esc cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let dialog = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(dialog, inner);
    }

    fn draw_setting_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog_area = centered_rect(46, 7, area);
        frame.render_widget(Clear, dialog_area);

        let label = if self.setting_index == 0 {
            "Diamonds per regular monster:"
        } else {
            "Diamonds per boss:"
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Edit Setting ");
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let lines = vec![
            Line::from(""),
            Line::from(label),
            Line::from(Span::styled(
                format!("[ {} ]", self.amount_input),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                "enter save · esc cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let dialog = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(dialog, inner);
    }
}
