// Shared lifecycle and globe tuning constants used by both web and native frontends.

// Note lifecycle
pub const FLIGHT_DURATION_MS: f64 = 3000.0; // matches the arc animation length
pub const LANDED_CAPACITY: usize = 50; // most recent landed notes kept
pub const MARKER_LIMIT: usize = 30; // landed notes drawn as globe markers

// Marker sizing (globe radius = 1.0)
pub const MARKER_SIZE_MIN: f32 = 0.03;
pub const MARKER_SIZE_SPAN: f32 = 0.02;

// Random destination bounds (degrees)
pub const RANDOM_LAT_SPAN: f64 = 160.0; // -80..80, keeps arcs off the poles
pub const RANDOM_LNG_SPAN: f64 = 360.0;

// Used when the platform cannot report a location (New York City)
pub const FALLBACK_LAT: f64 = 40.7128;
pub const FALLBACK_LNG: f64 = -74.0060;

// Globe orientation
pub const AUTO_ROTATE_PER_FRAME: f32 = 0.002; // radians of phi per frame when idle
pub const DRAG_PX_PER_RADIAN: f32 = 100.0;
pub const DEFAULT_THETA: f32 = 0.2; // tilt towards the viewer
