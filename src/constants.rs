// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 100;
pub const FEEDBACK_DURATION_MS: u64 = 1500;
pub const REWARD_BANNER_DURATION_MS: u64 = 2000;

/// Ticks the answer feedback stays on screen before the next problem.
pub const FEEDBACK_TICKS: u32 = (FEEDBACK_DURATION_MS / TICK_INTERVAL_MS) as u32;

/// Ticks the special reward banner stays visible.
pub const REWARD_BANNER_TICKS: u32 = (REWARD_BANNER_DURATION_MS / TICK_INTERVAL_MS) as u32;

// Progression constants
pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 4;
pub const LEVEL_UP_STREAK: u32 = 2;

// Reward constants
pub const BASE_REWARD: u32 = 1;
pub const COMBO_BONUS_THRESHOLD: u32 = 5;
pub const COMBO_BONUS: u32 = 2;
pub const SPECIAL_REWARD_THRESHOLD: u32 = 10;
pub const SPECIAL_REWARD_BONUS: u32 = 3;

/// Combo shown on the status bar from this count up.
pub const COMBO_BADGE_THRESHOLD: u32 = 3;

// Input constants
pub const MAX_ANSWER_DIGITS: usize = 3;

// Save system constants
pub const SAVE_DIR_NAME: &str = ".dragon-math";
pub const PROGRESS_FILE_NAME: &str = "progress.json";
pub const LOG_FILE_NAME: &str = "dragon-math.log";
pub const LOG_ENV_VAR: &str = "DRAGON_MATH_LOG";
