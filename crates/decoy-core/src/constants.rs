// Default tuning for a session. Everything here can be overridden through
// `SessionConfig`; these are the values the page ships with.

// Evasion
pub const DRIFT_RADIUS: f32 = 18.0; // px, max drift offset per axis
pub const ESCAPE_LIMIT: u32 = 3; // relocations before a decoy vanishes
pub const SAFE_RADIUS: f32 = 180.0; // px around the confirmation control
pub const IMAGE_PROBABILITY: f64 = 0.5; // image vs phrase artifact

// Placement
pub const MIN_DECOY_DISTANCE: f32 = 60.0;
pub const DECOY_WIDTH: f32 = 120.0; // footprint subtracted from the viewport
pub const DECOY_HEIGHT: f32 = 60.0;
pub const PLACEMENT_ATTEMPTS: u32 = 100;

// Decoy count: max(floor, area / area_per_decoy), scaled on narrow screens
pub const DECOY_COUNT_FLOOR: usize = 15;
pub const AREA_PER_DECOY: f32 = 20_000.0;
pub const NARROW_VIEWPORT_WIDTH: f32 = 600.0;
pub const NARROW_COUNT_MULTIPLIER: f32 = 1.5;

// Drift periods (ms per radian)
pub const DRIFT_PERIOD_X_MS: f64 = 1200.0;
pub const DRIFT_PERIOD_Y_MS: f64 = 1400.0;

// Artifacts
pub const ARTIFACT_LIFETIME_MS: u32 = 5_000;
pub const IMAGE_ROTATION_MAX_DEG: f32 = 20.0;
pub const IMAGE_SCALE_MIN: f32 = 0.8;
pub const IMAGE_SCALE_MAX: f32 = 1.2;

// Reveal
pub const FADE_DELAY_MS: u32 = 600;
pub const LOADER_DELAY_MS: u32 = 1_200;
pub const STICKER_COUNT: usize = 6;
pub const STICKER_SIZE_MIN: f32 = 90.0;
pub const STICKER_SIZE_MAX: f32 = 140.0;
pub const STICKER_PADDING: f32 = 24.0;
pub const STICKER_ATTEMPTS: u32 = 60;
pub const STICKER_ROTATION_MAX_DEG: f32 = 15.0;
pub const HEART_INTERVAL_MS: u32 = 300;
pub const HEART_SPAWN_DURATION_MS: u32 = 6_000;
pub const HEART_SIZE_MIN: f32 = 14.0;
pub const HEART_SIZE_MAX: f32 = 30.0;
pub const HEART_RISE_MIN_MS: u32 = 3_000;
pub const HEART_RISE_MAX_MS: u32 = 5_000;
pub const HEART_SWAY_MAX: f32 = 40.0;

// Default content
pub const DEFAULT_IMAGES: &[&str] = &["assets/cat1.jpg", "assets/cat2.jpg"];

pub const DEFAULT_STICKERS: &[&str] = &[
    "assets/sticker1.png",
    "assets/sticker2.png",
    "assets/sticker3.png",
];

pub const DECOY_LABELS: &[&str] = &[
    "Нет",
    "Неа",
    "Ни за что",
    "Вряд ли",
    "Сомневаюсь",
    "Не думаю",
];

pub const PHRASES: &[&str] = &["Хм…", "Попробуй ещё", "Не сдавайся", "Ты настойчивый :)"];
