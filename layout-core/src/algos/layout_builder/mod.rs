use crate::{
    error::LayoutError,
    types::{Hallway, Level, Rect, ResolvedHallway, Room, attach_owner},
};

use rand::Rng;
use tracing::{event, span};

mod builder_config;
mod place_room;
mod select_exit;
mod start_room;

pub use builder_config::LayoutConfig;
pub use place_room::calculate_room_position;
pub use select_exit::select_hallway_candidate;

/// Output of a generation pass: the level and the doorways still open for
/// further growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLayout {
    pub level: Level,
    pub open_doorways: Vec<Hallway>,
}

/// Grows a level room by room from a single random source.
pub struct LayoutGenerator<R: Rng> {
    config: LayoutConfig,
    rng: R,
    level: Level,
    open_doorways: Vec<Hallway>,
}

impl<R: Rng> LayoutGenerator<R> {
    pub fn new(config: LayoutConfig, rng: R) -> Result<Self, LayoutError> {
        config.validate()?;

        Ok(LayoutGenerator {
            config,
            rng,
            level: Level::new(config.width, config.length),
            open_doorways: Vec::new(),
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn open_doorways(&self) -> &[Hallway] {
        &self.open_doorways
    }

    /// Attempts to attach one new room to a random open doorway.
    ///
    /// A failed attempt leaves the level and the open doorways untouched.
    /// On success the entryway is resolved and replaced in the frontier by
    /// the new room's remaining doorways.
    pub fn grow(&mut self) -> Result<ResolvedHallway, LayoutError> {
        if self.open_doorways.is_empty() {
            return Err(LayoutError::EmptyFrontier);
        }

        let entryway_idx = self.rng.random_range(0..self.open_doorways.len());
        let entryway = self.open_doorways[entryway_idx];
        let entryway_position = entryway.start_position_absolute()?;

        let room_width = self
            .rng
            .random_range(self.config.room_width_min..self.config.room_width_max);
        let room_length = self
            .rng
            .random_range(self.config.room_length_min..self.config.room_length_max);

        event!(
            tracing::Level::DEBUG,
            "Selected {} entryway at {} for a [{}x{}] room",
            entryway.direction(),
            entryway_position,
            room_width,
            room_length
        );

        let exit = select_hallway_candidate(
            &mut self.rng,
            room_width,
            room_length,
            self.config.min_distance_from_edge,
            &entryway,
        )?;

        event!(
            tracing::Level::DEBUG,
            "Selected {} exit at {}",
            exit.direction(),
            exit.start_position()
        );

        let position = calculate_room_position(
            &entryway,
            room_width,
            room_length,
            self.config.separation_distance,
            exit.start_position(),
        )?;

        let room = Room::new(Rect::new(position.x, position.y, room_width, room_length));
        let hallway = entryway.resolve(room, exit.start_position())?;

        self.level.commit(room, hallway)?;

        event!(
            tracing::Level::DEBUG,
            "Connected {} to {} through {}",
            hallway.start_room().area(),
            room.area(),
            hallway
        );

        self.open_doorways.remove(entryway_idx);

        let doorways = room
            .doorway_candidates(self.config.min_distance_from_edge)
            .into_iter()
            .filter(|candidate| *candidate != exit)
            .collect::<Vec<_>>();
        self.open_doorways.extend(attach_owner(doorways, room));

        Ok(hallway)
    }

    /// Runs a full pass: places the start room if needed and grows the level
    /// until the room budget is met.
    ///
    /// Running out of open doorways or of attempts ends the pass early with
    /// whatever was built so far.
    pub fn generate(mut self) -> Result<GeneratedLayout, LayoutError> {
        let span = span!(tracing::Level::DEBUG, "generate");
        let _guard = span.enter();

        self.place_start_room();

        let mut failed_attempts = 0;

        while (self.level.rooms().len() as u32) < self.config.max_rooms {
            match self.grow() {
                Ok(_) => failed_attempts = 0,
                Err(LayoutError::EmptyFrontier) => {
                    event!(
                        tracing::Level::WARN,
                        "No open doorways left, stopping at {} of {} rooms",
                        self.level.rooms().len(),
                        self.config.max_rooms
                    );
                    break;
                }
                Err(error) if error.is_attempt_failure() => {
                    failed_attempts += 1;
                    event!(
                        tracing::Level::DEBUG,
                        "Placement attempt {} failed: {}",
                        failed_attempts,
                        error
                    );

                    if failed_attempts >= self.config.max_attempts {
                        event!(
                            tracing::Level::WARN,
                            "Giving up after {} failed attempts, stopping at {} of {} rooms",
                            failed_attempts,
                            self.level.rooms().len(),
                            self.config.max_rooms
                        );
                        break;
                    }
                }
                Err(error) => return Err(error),
            }
        }

        event!(
            tracing::Level::DEBUG,
            "Generated {} rooms and {} hallways, {} doorways left open",
            self.level.rooms().len(),
            self.level.hallways().len(),
            self.open_doorways.len()
        );

        Ok(GeneratedLayout {
            level: self.level,
            open_doorways: self.open_doorways,
        })
    }
}
