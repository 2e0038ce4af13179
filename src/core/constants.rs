// Interaction tuning shared by the pure core and the web frontend.
// Distances are CSS pixels, durations are milliseconds.

// Dodging
pub const DODGE_DISTANCE: f32 = 120.0; // how close the pointer can get before the dodger moves
pub const MOVE_DISTANCE: f32 = 120.0; // how far each dodge tries to push
pub const MOVE_JITTER: f32 = 40.0; // full width of the random jitter added per axis
pub const MAX_MOVES_BEFORE_HOLD: u32 = 999; // set lower to allow clicks after N attempts

// Placement
pub const CONTAINER_PADDING: f32 = 18.0;
pub const PLACEMENT_ATTEMPTS: u32 = 14;
pub const OVERLAP_THRESHOLD_PX2: f32 = 50.0;
pub const AVOID_DISTANCE: f32 = 70.0;
pub const MIN_RANGE_PX: f32 = 4.0; // floor for a negative usable range

// Feedback class lifetimes
pub const CARD_PULSE_MS: f64 = 520.0;
pub const NAME_SHIMMER_MS: f64 = 700.0;
pub const DODGER_MOVING_MS: f64 = 720.0;
pub const DODGER_MOVING_HOLD_MS: f64 = 540.0;
pub const SHAKE_MS: f64 = 360.0;
pub const MOVE_TRANSITION_MS: f64 = 380.0;

// Persuasion
pub const LINE_HIDE_DELAY_MS: f64 = 2800.0;
pub const CHIRP_BASE_HZ: f32 = 660.0;
pub const CHIRP_STEP_SEMITONES: [f32; 5] = [0.0, 2.0, 4.0, 7.0, 9.0];
pub const CHIRP_DURATION_SEC: f64 = 0.09;

// Celebration
pub const YAY_IMAGE_MS: f64 = 4000.0;
pub const NAVIGATE_DELAY_MS: f64 = 600.0;
pub const SUCCESS_DESTINATION: &str = "yes.html";

// Particles
pub const CONFETTI_COUNT: usize = 22;
pub const HEART_BURST_COUNT: usize = 12;
pub const SHOWER_HEART_COUNT: usize = 36;
pub const BG_HEART_COUNT: usize = 40;
pub const PARTICLE_MIN_DURATION_MS: f64 = 1400.0;
pub const PARTICLE_DURATION_SPAN_MS: f64 = 600.0;
pub const SHOWER_MAX_DELAY_MS: f64 = 180.0;
pub const PARTICLE_REMOVAL_GRACE_MS: f64 = 60.0;

// Longest time any celebration particle stays attached
pub const PARTICLE_MAX_LIFETIME_MS: f64 = PARTICLE_MIN_DURATION_MS
    + PARTICLE_DURATION_SPAN_MS
    + SHOWER_MAX_DELAY_MS
    + PARTICLE_REMOVAL_GRACE_MS;

// Ambient hearts
pub const BG_DRIFT_AMPLITUDE_PX: f32 = 40.0;
pub const BG_DRIFT_PHASE_PER_SEC: f32 = 0.36; // 0.006 per frame at 60 fps

pub const CONFETTI_COLORS: [&str; 5] = ["#FF6B9A", "#FF9BC2", "#FFD6E0", "#FFF58F", "#69C0FF"];
pub const HEART_COLORS: [&str; 3] = ["#FF6B9A", "#FF9BC2", "#FFB4CF"];
pub const SHOWER_COLORS: [&str; 4] = ["#FF6B9A", "#FF9BC2", "#FFB4CF", "#FFD6E0"];
pub const BG_HEART_COLORS: [&str; 3] = [
    "rgba(255,107,154,0.36)",
    "rgba(255,155,180,0.28)",
    "rgba(255,180,200,0.22)",
];

pub const DEFAULT_LINES: [&str; 8] = [
    "Are you sure?",
    "Really sure?",
    "Think again!",
    "Pretty please?",
    "I'll be very sad...",
    "You're breaking my heart",
    "Don't do this to me!",
    "Last chance!",
];
