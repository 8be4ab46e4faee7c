// Tuning constants shared by the engine and the web frontend.
//
// These are defaults; `SceneConfig` carries the values actually used at runtime.

// Tree layout
pub const TREE_HEIGHT: f32 = 12.0;
pub const TREE_RADIUS_BASE: f32 = 5.0;
pub const SCATTER_RADIUS: f32 = 25.0;
pub const SPIRAL_ANGLE_STEP: f32 = 0.5; // radians per entity index
pub const SPIRAL_ANGLE_JITTER: f32 = 0.5; // max random azimuth offset

// Entity counts
pub const DEFAULT_PARTICLE_COUNT: usize = 3000;
pub const DEFAULT_ORNAMENT_COUNT: usize = 600;
pub const BAUBLE_PERCENT: usize = 70; // remainder are gifts

// Per-category tree jitter amplitudes
pub const PARTICLE_JITTER: f32 = 0.5;
pub const BAUBLE_JITTER: f32 = 0.3;
pub const GIFT_JITTER: f32 = 0.9;
pub const GIFT_MAX_HEIGHT_RATIO: f32 = 0.6; // gifts only fill the bottom of the cone

// Scale policy
pub const PARTICLE_SIZE: f32 = 0.06; // world size of a particle with seed 0.5
pub const BAUBLE_SCALE_MIN: f32 = 0.36;
pub const BAUBLE_SCALE_SPAN: f32 = 0.44;
pub const BAUBLE_VARIATION: f32 = 0.3; // +/- fraction
pub const BAUBLE_SCALE_BOOST: f32 = 1.98;
pub const BAUBLE_SCATTER_SHRINK: f32 = 0.8;
pub const GIFT_SCALE_MIN: f32 = 0.56;
pub const GIFT_SCALE_SPAN: f32 = 0.64;
pub const GIFT_VARIATION: f32 = 0.3; // additive
pub const GIFT_SCALE_BOOST: f32 = 1.56;
pub const STAR_APEX: [f32; 3] = [0.0, 6.5, 0.0];
pub const STAR_SCALE_SCATTERED: f32 = 0.1;
pub const STAR_SCALE_ASSEMBLED: f32 = 0.68;
pub const STAR_SPIN_SPEED: f32 = 0.7; // rad/s while assembled
pub const STAR_TUMBLE_SPEED: f32 = 0.2; // rad/s while scattered

// Progress tracking
pub const PARTICLE_RATE: f32 = 1.2;
pub const ORNAMENT_RATE: f32 = 1.2;
pub const RIBBON_RATE: f32 = 1.2;
pub const PROGRESS_EPSILON: f32 = 0.001;
pub const MAX_FRAME_DELTA: f32 = 0.1; // seconds; longer stalls are treated as this

// Particle stagger: effective = p * GAIN - seed * DELAY
pub const PARTICLE_STAGGER_GAIN: f32 = 1.2;
pub const PARTICLE_STAGGER_DELAY: f32 = 0.2;

// Idle motion amplitudes
pub const PARTICLE_SCATTER_NOISE: f32 = 0.5;
pub const PARTICLE_TREE_NOISE: f32 = 0.05;
pub const BAUBLE_FLOAT_SCATTERED: f32 = 0.5;
pub const BAUBLE_FLOAT_ASSEMBLED: f32 = 0.05;
pub const GIFT_FLOAT_SCATTERED: f32 = 0.5;
pub const GIFT_FLOAT_ASSEMBLED: f32 = 0.03;
pub const BAUBLE_DRIFT_SPIN: f32 = 0.2; // rad/s added to scatter rotation

// Colour boosts (HDR multipliers so ornaments bloom)
pub const PARTICLE_GLOW: f32 = 2.5;
pub const BAUBLE_GLOW: f32 = 2.0;
pub const STAR_GLOW: f32 = 2.0;

// Ribbon growth
pub const RIBBON_DELAY_SEC: f32 = 1.5;
pub const RIBBON_GROW_RATE: f32 = 0.4;
pub const RIBBON_SHRINK_RATE: f32 = 1.5;
pub const RIBBON_SATURATED: f32 = 0.99;
pub const SHIMMER_RATE: f32 = 0.4;
pub const SHIMMER_END: f32 = 1.5;
pub const SHIMMER_RESET: f32 = -0.2;

// Ribbon strip geometry
pub const RIBBON_SEGMENTS: usize = 400;
pub const RIBBON_CONTROL_POINTS: usize = 50;
pub const RIBBON_WIDTH: f32 = 0.63;
pub const RIBBON_TURNS: f32 = 4.5;
pub const RIBBON_HEIGHT: f32 = 11.0;
pub const RIBBON_DROP: f32 = 1.5; // vertical shift below the tree centre
pub const RIBBON_RADIUS_BASE: f32 = 6.85;
pub const RIBBON_RADIUS_OFFSET: f32 = 1.0;
pub const RIBBON_DOVETAIL: f32 = 0.1; // fraction of the length carrying the V-cut

// Audio
pub const MAX_VOLUME: f32 = 0.6;
pub const SINGLE_FADE_RATE: f32 = 1.5; // volume units per second, both directions
pub const CROSSFADE_IN_RATE: f32 = 1.0;
pub const CROSSFADE_OUT_RATE: f32 = 2.5; // faster so tracks do not bleed
pub const VOLUME_EPSILON: f32 = 0.001;
pub const CHAOS_CUE_SEC: f64 = 0.0;
pub const TREE_CUE_SEC: f64 = 44.0;

// Camera
pub const CAMERA_DISTANCE: f32 = 35.0;
pub const CAMERA_MIN_DISTANCE: f32 = 10.0;
pub const CAMERA_MAX_DISTANCE: f32 = 60.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_MAX_ELEVATION: f32 = 1.5; // radians above or below the horizon
pub const ORBIT_SPEED_SCATTERED: f32 = 0.2; // multiples of one turn per minute
pub const ORBIT_SPEED_ASSEMBLED: f32 = 0.5;
pub const SCENE_OFFSET: [f32; 3] = [0.0, -0.5, 0.0];
pub const SCENE_SCALE: f32 = 1.5;
