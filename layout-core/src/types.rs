use crate::error::LayoutError;

use std::{
    collections::{HashSet, VecDeque},
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Sub},
};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn scaled_by(&self, factor: i32) -> Point {
        Point {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    // Manhattan distance, which is exact for the axis-aligned corridors we build
    pub fn distance(&self, other: &Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle anchored at its lower-left corner.
///
/// Width and height are expected to be positive, callers building rects
/// from sampled sizes are responsible for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}):[{}x{}]",
            self.origin.x, self.origin.y, self.width, self.height
        )
    }
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "Rect must have a positive area");

        Rect {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn with_origin(&self, origin: Point) -> Rect {
        Rect { origin, ..*self }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.origin.x + self.width
    }

    /// Exclusive top edge.
    pub fn top(&self) -> i32 {
        self.origin.y + self.height
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.origin.x..self.right()).contains(&point.x)
            && (self.origin.y..self.top()).contains(&point.y)
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other.right() <= self.right()
            && other.top() <= self.top()
    }

    // Rects sharing only an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.origin.x < other.right()
            && other.origin.x < self.right()
            && self.origin.y < other.top()
            && other.origin.y < self.top()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
    ];

    pub fn is_horizontal(&self) -> bool {
        match self {
            Direction::Top | Direction::Bottom => false,
            Direction::Left | Direction::Right => true,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
        }
    }

    /// Unit offset pointing away from a room through a doorway on this side.
    pub fn step(&self) -> Point {
        match self {
            Direction::Left => Point::new(-1, 0),
            Direction::Top => Point::new(0, 1),
            Direction::Right => Point::new(1, 0),
            Direction::Bottom => Point::new(0, -1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Top => write!(f, "top"),
            Direction::Right => write!(f, "right"),
            Direction::Bottom => write!(f, "bottom"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    area: Rect,
}

impl Room {
    pub fn new(area: Rect) -> Self {
        Room { area }
    }

    pub fn area(&self) -> &Rect {
        &self.area
    }

    /// Enumerates every single-cell opening a room of the given size could
    /// have, in room-local coordinates, skipping `min_distance_from_edge`
    /// cells next to each corner.
    ///
    /// Bottom/top pairs come first by increasing x, then left/right pairs by
    /// increasing y. A room too small for the margin yields no candidates.
    pub fn calculate_all_possible_doorways(
        width: i32,
        length: i32,
        min_distance_from_edge: i32,
    ) -> Vec<Hallway> {
        let mut candidates = Vec::new();

        let top = length - 1;
        for x in min_distance_from_edge..(width - min_distance_from_edge) {
            candidates.push(Hallway::new(Direction::Bottom, Point::new(x, 0)));
            candidates.push(Hallway::new(Direction::Top, Point::new(x, top)));
        }

        let right = width - 1;
        for y in min_distance_from_edge..(length - min_distance_from_edge) {
            candidates.push(Hallway::new(Direction::Left, Point::new(0, y)));
            candidates.push(Hallway::new(Direction::Right, Point::new(right, y)));
        }

        candidates
    }

    pub fn doorway_candidates(&self, min_distance_from_edge: i32) -> Vec<Hallway> {
        Self::calculate_all_possible_doorways(
            self.area.width,
            self.area.height,
            min_distance_from_edge,
        )
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "room {}", self.area)
    }
}

/// A single-cell opening on the side of a room that has not been connected
/// to a second room yet.
///
/// Candidates are built without an owner and become part of the frontier
/// once a start room is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hallway {
    direction: Direction,
    start_position: Point,
    start_room: Option<Room>,
}

impl Hallway {
    pub fn new(direction: Direction, start_position: Point) -> Self {
        Hallway {
            direction,
            start_position,
            start_room: None,
        }
    }

    pub fn with_start_room(self, start_room: Room) -> Self {
        Hallway {
            start_room: Some(start_room),
            ..self
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn start_position(&self) -> Point {
        self.start_position
    }

    pub fn start_room(&self) -> Option<&Room> {
        self.start_room.as_ref()
    }

    pub fn start_position_absolute(&self) -> Result<Point, LayoutError> {
        let room = self
            .start_room
            .as_ref()
            .ok_or(LayoutError::UnresolvedHallwayAccess)?;

        Ok(self.start_position + room.area.origin)
    }

    /// Connects this opening to `end_room`, whose own opening sits at the
    /// room-local `end_position`.
    pub fn resolve(
        self,
        end_room: Room,
        end_position: Point,
    ) -> Result<ResolvedHallway, LayoutError> {
        let start_room = self.start_room.ok_or(LayoutError::UnresolvedHallwayAccess)?;

        Ok(ResolvedHallway {
            direction: self.direction,
            start_position: self.start_position,
            start_room,
            end_room,
            end_position,
        })
    }
}

/// Attaches `room` as the owner of every candidate.
pub fn attach_owner(candidates: Vec<Hallway>, room: Room) -> Vec<Hallway> {
    candidates
        .into_iter()
        .map(|candidate| candidate.with_start_room(room))
        .collect()
}

/// A hallway connecting two rooms. Its end opening always faces the
/// opposite way of its start opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedHallway {
    direction: Direction,
    start_position: Point,
    start_room: Room,
    end_room: Room,
    end_position: Point,
}

impl ResolvedHallway {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn end_direction(&self) -> Direction {
        self.direction.opposite()
    }

    pub fn start_position(&self) -> Point {
        self.start_position
    }

    pub fn end_position(&self) -> Point {
        self.end_position
    }

    pub fn start_room(&self) -> &Room {
        &self.start_room
    }

    pub fn end_room(&self) -> &Room {
        &self.end_room
    }

    pub fn start_position_absolute(&self) -> Point {
        self.start_position + self.start_room.area.origin
    }

    pub fn end_position_absolute(&self) -> Point {
        self.end_position + self.end_room.area.origin
    }

    pub fn connects(&self, room: &Room) -> bool {
        self.start_room == *room || self.end_room == *room
    }

    /// Cells strictly between the two openings.
    pub fn corridor_cells(&self) -> impl Iterator<Item = Point> {
        let start = self.start_position_absolute();
        let end = self.end_position_absolute();
        let step = self.direction.step();

        (1..start.distance(&end) as i32).map(move |offset| start + step.scaled_by(offset))
    }
}

impl Display for ResolvedHallway {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hallway {} {} -> {} {}",
            self.direction,
            self.start_position_absolute(),
            self.end_direction(),
            self.end_position_absolute()
        )
    }
}

/// The rooms and hallways produced by one generation pass, in the order
/// they were committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    width: i32,
    length: i32,
    rooms: Vec<Room>,
    hallways: Vec<ResolvedHallway>,
}

impl Level {
    pub fn new(width: i32, length: i32) -> Self {
        Level {
            width,
            length,
            rooms: Vec::new(),
            hallways: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.length)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn hallways(&self) -> &[ResolvedHallway] {
        &self.hallways
    }

    pub(crate) fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    pub(crate) fn add_hallway(&mut self, hallway: ResolvedHallway) {
        self.hallways.push(hallway);
    }

    /// Checks that `room` fits in the level without touching any existing
    /// room, and that `hallway` runs through free cells only.
    pub fn check_placement(
        &self,
        room: &Room,
        hallway: &ResolvedHallway,
    ) -> Result<(), LayoutError> {
        if !self.bounds().contains_rect(&room.area) {
            return Err(LayoutError::OutOfBounds {
                candidate: room.area,
            });
        }

        if let Some(existing) = self
            .rooms
            .iter()
            .find(|existing| existing.area.intersects(&room.area))
        {
            return Err(LayoutError::RoomOverlap {
                candidate: room.area,
                existing: existing.area,
            });
        }

        if let Some(cell) = hallway
            .corridor_cells()
            .find(|cell| self.rooms.iter().any(|existing| existing.area.contains(*cell)))
        {
            return Err(LayoutError::HallwayObstructed { at: cell });
        }

        Ok(())
    }

    /// Adds a room together with the hallway leading to it, or nothing at
    /// all if the placement is rejected.
    pub fn commit(&mut self, room: Room, hallway: ResolvedHallway) -> Result<(), LayoutError> {
        self.check_placement(&room, &hallway)?;

        self.rooms.push(room);
        self.hallways.push(hallway);

        Ok(())
    }

    pub fn hallways_of<'a>(&'a self, room: &'a Room) -> impl Iterator<Item = &'a ResolvedHallway> {
        self.hallways
            .iter()
            .filter(move |hallway| hallway.connects(room))
    }

    pub fn is_connected(&self) -> bool {
        let Some(first) = self.rooms.first() else {
            return true;
        };

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(*first);
        queue.push_back(*first);

        while let Some(room) = queue.pop_front() {
            for hallway in self.hallways_of(&room) {
                let other = if hallway.start_room == room {
                    hallway.end_room
                } else {
                    hallway.start_room
                };

                if visited.insert(other) {
                    queue.push_back(other);
                }
            }
        }

        self.rooms.iter().all(|room| visited.contains(room))
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "level [{}x{}] with {} rooms and {} hallways",
            self.width,
            self.length,
            self.rooms.len(),
            self.hallways.len()
        )?;

        for room in self.rooms.iter() {
            writeln!(f, "  {}", room)?;
        }

        for hallway in self.hallways.iter() {
            writeln!(f, "  {}", hallway)?;
        }

        Ok(())
    }
}
