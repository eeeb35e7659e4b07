// Shared tuning constants for the intro screen, consumed by both the pure
// state types here and the web frontend.

// Typed reveal
pub const TYPED_MESSAGE: &str = "Welcome to Swayam's Digital Universe";
pub const TYPING_TICK_MS: i32 = 65; // one character per tick

// Particle field
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const PARTICLE_COUNT_MOBILE: usize = 36;
pub const PARTICLE_COUNT_DESKTOP: usize = 60;
pub const WRAP_MARGIN_PX: f32 = 4.0; // wrap once past this margin off-screen

// Per-particle spawn ranges
pub const RADIUS_MIN_PX: f32 = 0.7;
pub const RADIUS_SPAN_PX: f32 = 1.8;
pub const VEL_SPAN_X: f32 = 0.15; // px per frame, centered on zero
pub const VEL_SPAN_Y: f32 = 0.18;
pub const GLOW_ALPHA_MIN: f32 = 0.2;
pub const GLOW_ALPHA_SPAN: f32 = 0.45;
pub const PINK_THRESHOLD: f32 = 0.45; // uniform draws at or below this are pink

// Rendering
pub const GLOW_RADIUS_MULT: f32 = 8.0; // halo radius relative to core dot
pub const CYAN_GLOW_RGB: [u8; 3] = [105, 233, 255];
pub const PINK_GLOW_RGB: [u8; 3] = [255, 111, 207];
pub const CYAN_CORE_RGBA: &str = "rgba(198, 240, 255, 0.82)";
pub const PINK_CORE_RGBA: &str = "rgba(255, 194, 235, 0.8)";

// Canvas backing store
pub const DEVICE_PIXEL_RATIO_CAP: f64 = 2.0;

// Parallax
pub const PARALLAX_RANGE_PX: f32 = 8.0; // full deflection at viewport edges

// Ambient drone
pub const DRONE_FREQ_HZ: f32 = 88.0;
pub const LFO_FREQ_HZ: f32 = 0.08;
pub const LFO_DEPTH_HZ: f32 = 10.0; // LFO gain into the drone frequency param
pub const AMBIENT_GAIN_ON: f32 = 0.02;
pub const AMBIENT_RAMP_SEC: f64 = 0.6;

// Toggle control labels
pub const AMBIENT_LABEL_ON: &str = "Ambient: On";
pub const AMBIENT_LABEL_OFF: &str = "Ambient: Off";
pub const AMBIENT_LABEL_UNAVAILABLE: &str = "Ambient: Unavailable";

// Navigation handoff
pub const FADE_OUT_MS: i32 = 800;
pub const HOME_URL: &str = "home.html";
