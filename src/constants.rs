// Rendering and interaction tuning constants for the web frontend.

// Camera
pub const CAMERA_Z: f32 = 3.2; // eye distance from the globe center (globe radius = 1)

// Globe surface dots
pub const GLOBE_DOT_COUNT: usize = 6000;
pub const GLOBE_DOT_SIZE: f32 = 0.0065;
pub const GLOBE_BASE_COLOR: [f32; 3] = [0.15, 0.15, 0.18]; // dark base
pub const GLOBE_DOT_BRIGHTNESS: f32 = 2.2;

// Landed markers
pub const MARKER_COLOR: [f32; 3] = [1.0, 0.8, 0.6]; // warm golden glow
pub const MARKER_GLOW: f32 = 2.5; // HDR multiplier so markers bloom

// Flight arcs
pub const ARC_LIFT: f32 = 0.35; // max altitude above the surface for antipodal flights
pub const ARC_TRAIL_SEGMENTS: usize = 24;
pub const ARC_TRAIL_SIZE: f32 = 0.008;
pub const ARC_HEAD_SIZE: f32 = 0.03;
pub const ARC_HEAD_GLOW: f32 = 3.0;
pub const MAX_DRAWN_FLIGHTS: usize = 64;

// Instance buffer capacity covers dots + markers + every drawn flight
pub const MAX_INSTANCES: usize =
    GLOBE_DOT_COUNT + 64 + MAX_DRAWN_FLIGHTS * (ARC_TRAIL_SEGMENTS + 1);

// Input
pub const SEND_COOLDOWN_MS: i32 = 1000; // send button stays disabled this long

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.9;
pub const BLOOM_THRESHOLD: f32 = 0.6;
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
