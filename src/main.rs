mod build_info;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use habit_hero::combat::DefeatSequence;
use habit_hero::constants::{
    AUTOSAVE_INTERVAL_SECONDS, COLLECT_ADVANCE_DELAY_MS, DAMAGE_PER_ATTACK,
    DEFEAT_ADVANCE_DELAY_MS,
};
use habit_hero::parent_gate::ParentGate;
use habit_hero::save_manager::SaveManager;
use habit_hero::store::GameStore;
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use ui::battle_scene::draw_battle;
use ui::parent_scene::ParentScreen;
use ui::shop_scene::ShopScreen;
use ui::tasks_scene::TasksScreen;
use ui::Tab;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "habit-hero {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Habit Hero - Chore-Tracking Monster Battle\n");
                println!("Usage: habit-hero [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'habit-hero --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let save_manager = SaveManager::new()?;

    // Restore the last session, falling back to seeded defaults when there is
    // no usable save
    let mut store = if save_manager.save_exists() {
        match save_manager.load() {
            Ok(state) => GameStore::from_state(state),
            Err(e) => {
                println!("Warning: could not restore save ({}). Starting fresh.", e);
                GameStore::new()
            }
        }
    } else {
        GameStore::new()
    };

    let mut rng = rand::thread_rng();
    let mut gate = ParentGate::new(&mut rng);

    // A document saved mid-defeat still has the monster at zero health;
    // re-run its defeat sequence so the advance is never lost
    let mut defeat: Option<DefeatSequence> = None;
    let mut advance_deadline: Option<Instant> = None;
    if store.current_monster().is_defeated() {
        start_defeat_sequence(&store, &mut rng, &mut defeat, &mut advance_deadline);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut active_tab = Tab::Battle;
    let mut tasks_screen = TasksScreen::new();
    let mut shop_screen = ShopScreen::new();
    let mut parent_screen = ParentScreen::new();
    let mut last_autosave = Instant::now();

    // Main loop
    'main: loop {
        // Fire the delayed advance once its cosmetic pause is over
        if let Some(deadline) = advance_deadline {
            if Instant::now() >= deadline {
                if let Some(seq) = defeat.as_mut() {
                    seq.advance(&mut store);
                }
                defeat = None;
                advance_deadline = None;
            }
        }

        // Auto-save every 30 seconds
        if last_autosave.elapsed() >= Duration::from_secs(AUTOSAVE_INTERVAL_SECONDS) {
            store.mark_saved(Utc::now().timestamp());
            save_manager.save(store.state())?;
            last_autosave = Instant::now();
        }

        terminal.draw(|frame| {
            let area = frame.size();
            let (header, body) = ui::split_frame(area);
            ui::draw_header(frame, header, &store, active_tab);
            match active_tab {
                Tab::Battle => draw_battle(frame, body, &store, defeat.as_ref()),
                Tab::Tasks => tasks_screen.draw(frame, body, &store),
                Tab::Shop => shop_screen.draw(frame, body, &store),
                Tab::Parent => parent_screen.draw(frame, body, &store, &gate),
            }
        })?;

        // Handle input
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                let code = key_event.code;

                // Text fields on the parent tab swallow keys first, so typing
                // a name with a 'q' in it does not quit the app
                if active_tab == Tab::Parent
                    && parent_screen.is_capturing_input(&gate)
                    && parent_screen.handle_key(code, &mut store, &mut gate, &mut rng)
                {
                    continue;
                }

                match code {
                    KeyCode::Char('q') => break 'main,
                    KeyCode::Tab => {
                        active_tab = active_tab.next();
                    }
                    _ => match active_tab {
                        Tab::Battle => handle_battle_key(
                            code,
                            &mut store,
                            &mut rng,
                            &mut defeat,
                            &mut advance_deadline,
                        ),
                        Tab::Tasks => match code {
                            KeyCode::Up => tasks_screen.move_up(),
                            KeyCode::Down => tasks_screen.move_down(&store),
                            _ => {}
                        },
                        Tab::Shop => match code {
                            KeyCode::Up => shop_screen.move_up(),
                            KeyCode::Down => shop_screen.move_down(&store),
                            KeyCode::Enter => {
                                shop_screen.request_selected(&mut store);
                            }
                            _ => {}
                        },
                        Tab::Parent => {
                            parent_screen.handle_key(code, &mut store, &mut gate, &mut rng);
                        }
                    },
                }
            }
        }
    }

    // Save on the way out
    store.mark_saved(Utc::now().timestamp());
    save_manager.save(store.state())?;

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}

/// Battle-tab input: attacks and diamond collection.
fn handle_battle_key(
    code: KeyCode,
    store: &mut GameStore,
    rng: &mut ThreadRng,
    defeat: &mut Option<DefeatSequence>,
    advance_deadline: &mut Option<Instant>,
) {
    match code {
        KeyCode::Char(' ') => {
            // No damage while a defeat sequence is in flight, and none
            // without an attack charge
            if defeat.is_none()
                && store.use_attack()
                && store.apply_damage(DAMAGE_PER_ATTACK) == 0
            {
                start_defeat_sequence(store, rng, defeat, advance_deadline);
            }
        }
        KeyCode::Char('c') => {
            collect_drop(0, store, defeat, advance_deadline);
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(digit) = c.to_digit(10) {
                if digit > 0 {
                    collect_drop((digit - 1) as usize, store, defeat, advance_deadline);
                }
            }
        }
        _ => {}
    }
}

/// Begins the defeat sequence for the freshly defeated monster. A zero-drop
/// configuration arms the advance immediately, behind the longer cosmetic
/// pause.
fn start_defeat_sequence(
    store: &GameStore,
    rng: &mut ThreadRng,
    defeat: &mut Option<DefeatSequence>,
    advance_deadline: &mut Option<Instant>,
) {
    let seq = DefeatSequence::begin(store, rng);
    if seq.ready_to_advance() {
        *advance_deadline = Some(Instant::now() + Duration::from_millis(DEFEAT_ADVANCE_DELAY_MS));
    }
    *defeat = Some(seq);
}

/// Collects the drop currently displayed at `index`. Collecting the last one
/// schedules the advance after a short pause.
fn collect_drop(
    index: usize,
    store: &mut GameStore,
    defeat: &mut Option<DefeatSequence>,
    advance_deadline: &mut Option<Instant>,
) {
    if let Some(seq) = defeat.as_mut() {
        if let Some(drop) = seq.remaining_drops().get(index).copied() {
            if seq.collect(drop.id, store) && seq.ready_to_advance() {
                *advance_deadline =
                    Some(Instant::now() + Duration::from_millis(COLLECT_ADVANCE_DELAY_MS));
            }
        }
    }
}
