pub const DEFAULT_GRID_WIDTH: usize = 128;
pub const DEFAULT_GRID_HEIGHT: usize = 128;

/// Footprint sides tried by the section finder, smallest first.
pub const SECTION_SIZES: [usize; 3] = [1, 2, 3];
pub const MAX_SECTION_SIZE: usize = 3;

/// Base FixedUpdate rate at 1x speed (10 Hz).
pub const BASE_TICK_MILLIS: u64 = 100;
