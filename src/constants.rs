// Stage catalog shape
pub const MONSTERS_PER_STAGE: usize = 5;
pub const BOSS_SLOT: u8 = 5;

// Difficulty scaling per full pass through the stage catalog
pub const HP_LOOP_MULTIPLIER: f64 = 1.5;

// Combat constants
pub const DAMAGE_PER_ATTACK: u32 = 1;

// Diamond drop defaults (parent-configurable at runtime)
pub const DEFAULT_NORMAL_DIAMOND_REWARD: u32 = 1;
pub const DEFAULT_BOSS_DIAMOND_REWARD: u32 = 5;

// Reward granted for tasks that carry no explicit amount
pub const FALLBACK_TASK_ATTACK_REWARD: u32 = 10;

// Parental gate: factors for the arithmetic challenge, inclusive
pub const GATE_FACTOR_MIN: u32 = 2;
pub const GATE_FACTOR_MAX: u32 = 9;

// Save system constants
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;
pub const SAVE_VERSION_MAGIC: u64 = 0x4841424845524F00; // "HABHERO\0" in hex

// Presentation pacing (never consulted by the core state machine)
pub const DEFEAT_ADVANCE_DELAY_MS: u64 = 1500;
pub const COLLECT_ADVANCE_DELAY_MS: u64 = 500;
