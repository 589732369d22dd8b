mod layout_builder;

pub use layout_builder::{
    GeneratedLayout, LayoutConfig, LayoutGenerator, calculate_room_position,
    select_hallway_candidate,
};

use rand::{SeedableRng, rngs::StdRng};

pub(crate) struct RngHandler;

impl RngHandler {
    // A fixed seed replays the exact same level
    pub fn rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
