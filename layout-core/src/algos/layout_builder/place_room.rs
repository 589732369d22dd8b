use crate::{
    error::LayoutError,
    types::{Direction, Hallway, Point},
};

/// Computes where a `room_width` x `room_length` room has to be placed so
/// its doorway at the room-local `end_position` lines up with `entryway`,
/// leaving `distance` free cells between both openings.
pub fn calculate_room_position(
    entryway: &Hallway,
    room_width: i32,
    room_length: i32,
    distance: i32,
    end_position: Point,
) -> Result<Point, LayoutError> {
    let mut position = entryway.start_position_absolute()?;

    match entryway.direction() {
        Direction::Left => {
            position.x -= distance + room_width;
            position.y -= end_position.y;
        }
        Direction::Top => {
            position.x -= end_position.x;
            position.y += distance + 1;
        }
        Direction::Right => {
            position.x += distance + 1;
            position.y -= end_position.y;
        }
        Direction::Bottom => {
            position.x -= end_position.x;
            position.y -= distance + room_length;
        }
    }

    Ok(position)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{Rect, Room};

    fn entryway(direction: Direction, position: Point) -> Hallway {
        let room = Room::new(Rect::new(20, 30, 5, 5));
        Hallway::new(direction, position).with_start_room(room)
    }

    #[test]
    fn test_position_for_each_direction() {
        // Entryways sit at absolute (20, 32), (22, 34), (24, 32) and (22, 30)
        let left = entryway(Direction::Left, Point::new(0, 2));
        assert_eq!(
            calculate_room_position(&left, 4, 6, 3, Point::new(3, 1)),
            Ok(Point::new(13, 31))
        );

        let top = entryway(Direction::Top, Point::new(2, 4));
        assert_eq!(
            calculate_room_position(&top, 4, 6, 3, Point::new(1, 0)),
            Ok(Point::new(21, 38))
        );

        let right = entryway(Direction::Right, Point::new(4, 2));
        assert_eq!(
            calculate_room_position(&right, 4, 6, 3, Point::new(0, 4)),
            Ok(Point::new(28, 28))
        );

        let bottom = entryway(Direction::Bottom, Point::new(2, 0));
        assert_eq!(
            calculate_room_position(&bottom, 4, 6, 3, Point::new(2, 5)),
            Ok(Point::new(20, 21))
        );
    }

    #[test]
    fn test_exit_lines_up_with_entryway() {
        let (width, length, distance) = (4, 6, 2);

        for direction in Direction::ALL {
            let entry_room = Room::new(Rect::new(20, 30, 5, 5));
            let entryways = entry_room
                .doorway_candidates(1)
                .into_iter()
                .filter(|candidate| candidate.direction() == direction)
                .map(|candidate| candidate.with_start_room(entry_room));

            for entryway in entryways {
                let exits = Room::calculate_all_possible_doorways(width, length, 1)
                    .into_iter()
                    .filter(|candidate| candidate.direction() == direction.opposite());

                for exit in exits {
                    let origin = calculate_room_position(
                        &entryway,
                        width,
                        length,
                        distance,
                        exit.start_position(),
                    )
                    .unwrap();

                    let exit_absolute = exit.start_position() + origin;
                    let entry_absolute = entryway.start_position_absolute().unwrap();

                    assert_eq!(
                        exit_absolute,
                        entry_absolute + direction.step().scaled_by(distance + 1),
                        "Exit should sit {} cells {} of the entryway",
                        distance + 1,
                        direction
                    );
                }
            }
        }
    }

    #[test]
    fn test_unowned_entryway_is_rejected() {
        let entryway = Hallway::new(Direction::Top, Point::new(1, 4));

        assert_eq!(
            calculate_room_position(&entryway, 3, 3, 3, Point::new(1, 0)),
            Err(LayoutError::UnresolvedHallwayAccess)
        );
    }
}
