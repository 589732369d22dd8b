use super::LayoutGenerator;
use crate::types::{Rect, Room, attach_owner};

use rand::Rng;
use tracing::event;

impl<R: Rng> LayoutGenerator<R> {
    /// Samples the start room somewhere inside the central half of the level.
    pub(super) fn get_start_room_rect(&mut self) -> Rect {
        let config = self.config;

        let room_width = self
            .rng
            .random_range(config.room_width_min..config.room_width_max);
        let available_width = config.width / 2 - room_width;
        let room_x = self.rng.random_range(0..available_width) + config.width / 4;

        let room_length = self
            .rng
            .random_range(config.room_length_min..config.room_length_max);
        let available_length = config.length / 2 - room_length;
        let room_y = self.rng.random_range(0..available_length) + config.length / 4;

        Rect::new(room_x, room_y, room_width, room_length)
    }

    /// Places the first room of the level and opens all of its doorways.
    /// A level that already has rooms keeps its start room.
    pub fn place_start_room(&mut self) -> Room {
        if let Some(room) = self.level.rooms().first() {
            return *room;
        }

        let room = Room::new(self.get_start_room_rect());

        let doorways = attach_owner(
            room.doorway_candidates(self.config.min_distance_from_edge),
            room,
        );

        event!(
            tracing::Level::DEBUG,
            "Placed start room {} with {} open doorways",
            room.area(),
            doorways.len()
        );

        self.open_doorways.extend(doorways);
        self.level.add_room(room);

        room
    }
}
