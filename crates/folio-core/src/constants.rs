// Blob simulation and carousel tuning constants

use glam::DVec2;

// Blob geometry in logical view units
pub const BLOB_POINT_COUNT: usize = 20;
pub const BLOB_CENTER: DVec2 = DVec2::new(500.0, 500.0);
pub const BLOB_RADIUS: f64 = 350.0;
pub const VIEW_EXTENT: DVec2 = DVec2::new(1000.0, 1000.0); // logical viewBox size

// Per-frame spring integration
pub const BLOB_VISCOSITY: f64 = 0.05; // velocity retained per frame is (1 - this)
pub const BLOB_ELASTICITY: f64 = 0.05; // pull toward rest position per frame

// Ambient drift of each rest position
pub const DRIFT_AMPLITUDE: f64 = 15.0;
pub const DRIFT_FREQ_X: f64 = 4.0; // multiples of the point's ring angle
pub const DRIFT_FREQ_Y: f64 = 3.0;
pub const PHASE_PER_MS: f64 = 0.0015; // shared clock scale for the drift phase

// Pointer repulsion
pub const POINTER_INFLUENCE_RADIUS: f64 = 300.0;
pub const POINTER_REPULSE_STRENGTH: f64 = 2.0;
pub const POINTER_IDLE_MS: f64 = 1000.0; // pointer stops influencing after this

// Carousel behaviour
pub const CAROUSEL_BREAKPOINT_PX: f64 = 960.0; // below this the layout stacks
pub const WHEEL_DELTA_MIN: f64 = 3.0; // ignore trackpad noise below this
pub const LOCK_SETTLE_MS: f64 = 200.0; // swallow wheel momentum right after locking
pub const MOVE_COOLDOWN_MS: f64 = 450.0; // one card move per cooldown window
