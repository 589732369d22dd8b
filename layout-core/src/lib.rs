mod algos;
mod constants;
mod error;
mod types;

use tracing::{Level as TraceLevel, event, span};

pub use algos::{
    GeneratedLayout, LayoutConfig, LayoutGenerator, calculate_room_position,
    select_hallway_candidate,
};
pub use error::LayoutError;
pub use types::{Direction, Hallway, Level, Point, Rect, ResolvedHallway, Room, attach_owner};

/// Generates a level from `config`. The same `seed` always yields the same
/// level, `None` draws a fresh one.
pub fn generate_level(config: &LayoutConfig, seed: Option<u64>) -> Result<Level, LayoutError> {
    let span = span!(TraceLevel::DEBUG, "generate_level");
    let _guard = span.enter();

    let rng = algos::RngHandler::rng(seed);
    let generator = LayoutGenerator::new(*config, rng)?;

    let layout = generator.generate()?;

    event!(
        TraceLevel::DEBUG,
        "Level [{}x{}] ready with {} rooms",
        layout.level.width(),
        layout.level.length(),
        layout.level.rooms().len()
    );

    Ok(layout.level)
}
