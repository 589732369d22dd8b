pub(crate) const DEFAULT_LEVEL_WIDTH: i32 = 64;
pub(crate) const DEFAULT_LEVEL_LENGTH: i32 = 64;

// Keeps every placement and area computation inside i32
pub(crate) const MAX_LEVEL_SIZE: i32 = 1 << 15;

pub(crate) const DEFAULT_ROOM_SIZE_MIN: i32 = 3;
pub(crate) const DEFAULT_ROOM_SIZE_MAX: i32 = 5;

// Cells kept free of doorways next to each room corner
pub(crate) const DEFAULT_MIN_DISTANCE_FROM_EDGE: i32 = 1;
pub(crate) const DEFAULT_SEPARATION_DISTANCE: i32 = 3;

pub(crate) const DEFAULT_MAX_ROOMS: u32 = 2;
pub(crate) const DEFAULT_MAX_ATTEMPTS: u32 = 16;

#[cfg(test)]
pub(crate) const TEST_SEED: u64 = 0x5eed_1a70;
