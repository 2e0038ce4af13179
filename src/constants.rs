// Page element ids and class names the frontend wires up.
//
// Markup and stylesheet live outside the crate; these names are the
// contract with them.
pub const CARD_ID: &str = "card";
pub const DODGER_ID: &str = "no-btn";
pub const CONFIRM_ID: &str = "yes-btn";
pub const MODAL_ID: &str = "modal";
pub const MODAL_CLOSE_ID: &str = "modal-close";
pub const MODAL_OK_ID: &str = "modal-ok";
pub const YAY_IMAGE_ID: &str = "yay-img";
pub const PERSUASION_ID: &str = "persuasion";

pub const NAME_SELECTOR: &str = ".name";
pub const BG_HEARTS_SELECTOR: &str = ".bg-hearts";

// Overrides are read from `data-*` attributes on the card
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// Classes applied at start
pub const CARD_ENTER_CLASS: &str = "enter";
pub const CONFIRM_IDLE_CLASS: &str = "pulse";
pub const NAME_IDLE_CLASS: &str = "shimmer";

pub const MODAL_SHOW_CLASS: &str = "show";
pub const LINE_SHOW_CLASS: &str = "show";

pub const PARTICLE_CLASS: &str = "particle";
pub const PARTICLE_HEART_CLASS: &str = "heart";
pub const BG_HEART_CLASS: &str = "bg-heart";
pub const BG_HEART_ANIMATION: &str = "heartRise";

pub const HEART_RADIUS: &str = "50% 50% 50% 50% / 60% 60% 40% 40%";
pub const CONFETTI_RADIUS: &str = "2px";
pub const PARTICLE_Z_INDEX: &str = "2600";
pub const BG_HEART_Z_INDEX: &str = "-3";

pub const MOVE_EASING: &str = "cubic-bezier(.2,.85,.25,1)";
pub const PARTICLE_EASING: &str = "cubic-bezier(.2,.8,.2,1)";

pub const HEART_SVG_PATH: &str = "M23.6 4c-2.2 0-4 1.6-4.6 3.6C18.4 5.6 16.6 4 14.4 4 10.6 4 8 7.2 8 11c0 7.1 9.1 11.5 11.6 12.8.5.3 1.1.3 1.6 0C22.9 22.5 32 18.1 32 11c0-3.8-2.6-7-8.4-7z";

// Shake keyframe offsets (px)
pub const SHAKE_OFFSETS: [f32; 4] = [0.0, -8.0, 6.0, 0.0];

// Chirp loudness
pub const CHIRP_PEAK_GAIN: f32 = 0.08;
