use crate::{
    constants::{
        DEFAULT_LEVEL_LENGTH, DEFAULT_LEVEL_WIDTH, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_ROOMS,
        DEFAULT_MIN_DISTANCE_FROM_EDGE, DEFAULT_ROOM_SIZE_MAX, DEFAULT_ROOM_SIZE_MIN,
        DEFAULT_SEPARATION_DISTANCE, MAX_LEVEL_SIZE,
    },
    error::LayoutError,
};

use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "cli", derive(clap::Args))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of the level grid
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_LEVEL_WIDTH))]
    pub width: i32,
    /// Length of the level grid
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_LEVEL_LENGTH))]
    pub length: i32,
    /// Smallest room width (inclusive)
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_ROOM_SIZE_MIN))]
    pub room_width_min: i32,
    /// Largest room width (exclusive)
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_ROOM_SIZE_MAX))]
    pub room_width_max: i32,
    /// Smallest room length (inclusive)
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_ROOM_SIZE_MIN))]
    pub room_length_min: i32,
    /// Largest room length (exclusive)
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_ROOM_SIZE_MAX))]
    pub room_length_max: i32,
    /// Cells next to each room corner that never hold a doorway
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = DEFAULT_MIN_DISTANCE_FROM_EDGE)
    )]
    pub min_distance_from_edge: i32,
    /// Empty cells between two connected rooms
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_SEPARATION_DISTANCE))]
    pub separation_distance: i32,
    /// Number of rooms to place, counting the start room
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_MAX_ROOMS))]
    pub max_rooms: u32,
    /// Consecutive failed placements tolerated before giving up
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS))]
    pub max_attempts: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            width: DEFAULT_LEVEL_WIDTH,
            length: DEFAULT_LEVEL_LENGTH,
            room_width_min: DEFAULT_ROOM_SIZE_MIN,
            room_width_max: DEFAULT_ROOM_SIZE_MAX,
            room_length_min: DEFAULT_ROOM_SIZE_MIN,
            room_length_max: DEFAULT_ROOM_SIZE_MAX,
            min_distance_from_edge: DEFAULT_MIN_DISTANCE_FROM_EDGE,
            separation_distance: DEFAULT_SEPARATION_DISTANCE,
            max_rooms: DEFAULT_MAX_ROOMS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl LayoutConfig {
    /// Rejects every configuration that would make a sampling range empty
    /// later on.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width <= 0 || self.length <= 0 {
            return Err(LayoutError::InvalidDimensions(format!(
                "level bounds must be positive, got [{}x{}]",
                self.width, self.length
            )));
        }

        if self.width > MAX_LEVEL_SIZE || self.length > MAX_LEVEL_SIZE {
            return Err(LayoutError::InvalidDimensions(format!(
                "level bounds cannot exceed {}, got [{}x{}]",
                MAX_LEVEL_SIZE, self.width, self.length
            )));
        }

        Self::validate_room_range("width", self.room_width_min, self.room_width_max)?;
        Self::validate_room_range("length", self.room_length_min, self.room_length_max)?;

        // The start room is placed inside the central half of the level
        Self::validate_span("width", self.width, self.room_width_max)?;
        Self::validate_span("length", self.length, self.room_length_max)?;

        if self.min_distance_from_edge < 0 || self.separation_distance < 0 {
            return Err(LayoutError::InvalidDimensions(format!(
                "edge distance and separation cannot be negative, got {} and {}",
                self.min_distance_from_edge, self.separation_distance
            )));
        }

        // No room that far from its entryway can fit in the level
        if self.separation_distance >= self.width || self.separation_distance >= self.length {
            return Err(LayoutError::InvalidDimensions(format!(
                "separation {} does not fit in a [{}x{}] level",
                self.separation_distance, self.width, self.length
            )));
        }

        if self.max_rooms == 0 || self.max_attempts == 0 {
            return Err(LayoutError::InvalidDimensions(
                "room budget and attempts must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_room_range(axis: &str, min: i32, max: i32) -> Result<(), LayoutError> {
        if min <= 0 {
            return Err(LayoutError::InvalidDimensions(format!(
                "room {} minimum must be positive, got {}",
                axis, min
            )));
        }

        if max <= min {
            return Err(LayoutError::InvalidDimensions(format!(
                "room {} range [{}, {}) is empty",
                axis, min, max
            )));
        }

        Ok(())
    }

    fn validate_span(axis: &str, level_size: i32, room_max: i32) -> Result<(), LayoutError> {
        let span = level_size / 2 - (room_max - 1);
        if span <= 0 {
            return Err(LayoutError::InvalidDimensions(format!(
                "level {} of {} leaves no span for a start room of size {}",
                axis,
                level_size,
                room_max - 1
            )));
        }

        Ok(())
    }
}
