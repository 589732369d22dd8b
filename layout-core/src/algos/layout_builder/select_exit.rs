use crate::{
    error::LayoutError,
    types::{Hallway, Room},
};

use rand::Rng;

/// Picks, at random, one doorway of a `width` x `length` room that can face
/// `entryway`.
///
/// Only doorways on the side opposite to the entryway qualify. The returned
/// candidate is unowned and its position is local to the new room.
pub fn select_hallway_candidate(
    rng: &mut impl Rng,
    width: i32,
    length: i32,
    min_distance_from_edge: i32,
    entryway: &Hallway,
) -> Result<Hallway, LayoutError> {
    let required = entryway.direction().opposite();

    let candidates = Room::calculate_all_possible_doorways(width, length, min_distance_from_edge)
        .into_iter()
        .filter(|candidate| candidate.direction() == required)
        .collect::<Vec<_>>();

    if candidates.is_empty() {
        return Err(LayoutError::NoCompatibleExit { required });
    }

    Ok(candidates[rng.random_range(0..candidates.len())])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        constants::TEST_SEED,
        types::{Direction, Point},
    };

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_selected_exit_faces_entryway() {
        let mut rng = StdRng::seed_from_u64(TEST_SEED);

        for direction in Direction::ALL {
            let entryway = Hallway::new(direction, Point::new(0, 2));

            for _ in 0..20 {
                let exit = select_hallway_candidate(&mut rng, 5, 7, 1, &entryway).unwrap();

                assert_eq!(exit.direction(), direction.opposite());
                assert!(exit.start_room().is_none());
                assert!(
                    Room::calculate_all_possible_doorways(5, 7, 1).contains(&exit),
                    "Exit {:?} should be one of the room's doorways",
                    exit
                );
            }
        }
    }

    #[test]
    fn test_no_compatible_exit() {
        let mut rng = StdRng::seed_from_u64(TEST_SEED);

        // Two cells wide with a margin of one leaves no top or bottom doorway
        let entryway = Hallway::new(Direction::Top, Point::new(1, 3));
        assert_eq!(
            select_hallway_candidate(&mut rng, 2, 5, 1, &entryway),
            Err(LayoutError::NoCompatibleExit {
                required: Direction::Bottom
            })
        );

        let entryway = Hallway::new(Direction::Right, Point::new(3, 1));
        let exit = select_hallway_candidate(&mut rng, 2, 5, 1, &entryway).unwrap();
        assert_eq!(exit.direction(), Direction::Left);
    }
}
