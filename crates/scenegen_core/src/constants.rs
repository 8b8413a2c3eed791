// Constants shared by every generator.
// Units are whatever the simulator uses; nothing here is converted.

/// Orientation written for every 2D body (the simulator's "upright" angle)
pub const UPRIGHT_THETA: f64 = 1.570796326794897;

/// Density of 2D discs
pub const DISC_DENSITY: f64 = 8.0;

/// Density of 3D spheres
pub const SPHERE_DENSITY: f64 = 1.0;

/// Integrator time step used by all scenes
pub const DT: f64 = 0.01;

/// Camera frame rate
pub const CAMERA_FPS: u32 = 50;

/// Downward gravity for 2D box scenes
pub const GRAVITY_2D: [f64; 2] = [0.0, -10.0];

/// Downward gravity for 3D box scenes
pub const GRAVITY_3D: [f64; 3] = [0.0, -10.0, 0.0];

/// Camera up vector for perspective views
pub const CAMERA_UP: [f64; 3] = [0.0, 1.0, 0.0];

/// Fraction of the lattice separation used as disc radius in the square grid
pub const SQUARE_GRID_FILL: f64 = 0.45;

/// Separation factor of the overlapping cubic lattice (less than 2 means overlap)
pub const OVERLAP_SEPARATION: f64 = 1.01;

/// Fraction of the cubic lattice size filled along y
pub const CUBIC_Y_FRACTION: f64 = 0.7;

/// Speed of the impactor ball in the break scenes
pub const IMPACTOR_SPEED: f64 = 5.0;

/// Seed of the velocity jitter source
pub const DEFAULT_SEED: u64 = 647_863_287_462;
