//! The mansion case
//!
//! Fixed content for the one case the game ships with: the rooms and their
//! clues, which suspect each clue implicates, and the suspect roster.

use crate::data::*;
use crate::GameError;

pub const ENTRANCE_CLUE: &str = "A torn letter bearing the initial 'C'";
pub const LIVING_ROOM_CLUE: &str = "A glass smudged with red lipstick";
pub const KITCHEN_CLUE: &str = "A stained knife";
pub const LIBRARY_CLUE: &str = "A book about poisons lying open";
pub const BEDROOM_CLUE: &str = "A clock stopped at 21:30";
pub const STUDY_CLUE: &str = "A computer with an email left open";
pub const GARDEN_CLUE: &str = "A muddy footprint";

/// Which suspect each clue points to
pub const CLUE_SUSPECTS: [(&str, &str); 7] = [
    (ENTRANCE_CLUE, "Carlos"),
    (LIVING_ROOM_CLUE, "Ana"),
    (KITCHEN_CLUE, "Pedro"),
    (LIBRARY_CLUE, "Mariana"),
    (BEDROOM_CLUE, "João"),
    (STUDY_CLUE, "Carlos"),
    (GARDEN_CLUE, "Pedro"),
];

pub const SUSPECTS: [&str; 5] = ["Carlos", "Ana", "Pedro", "Mariana", "João"];

/// Build the mansion
///
/// ```text
///                 Entrance
///              /            \
///      Living Room         Kitchen
///       /      \           /     \
///   Library  Master     Study   Garden
///            Bedroom
/// ```
pub fn build_mansion() -> Result<RoomMap, GameError> {
    let mut builder = RoomMap::builder();

    let entrance = builder.add_room("Entrance", Some(ENTRANCE_CLUE));
    let living_room = builder.add_room("Living Room", Some(LIVING_ROOM_CLUE));
    let kitchen = builder.add_room("Kitchen", Some(KITCHEN_CLUE));
    let library = builder.add_room("Library", Some(LIBRARY_CLUE));
    let bedroom = builder.add_room("Master Bedroom", Some(BEDROOM_CLUE));
    let study = builder.add_room("Study", Some(STUDY_CLUE));
    let garden = builder.add_room("Garden", Some(GARDEN_CLUE));

    builder.link(entrance, Side::Left, living_room)?;
    builder.link(entrance, Side::Right, kitchen)?;

    builder.link(living_room, Side::Left, library)?;
    builder.link(living_room, Side::Right, bedroom)?;

    builder.link(kitchen, Side::Left, study)?;
    builder.link(kitchen, Side::Right, garden)?;

    builder.build(entrance)
}

pub fn clue_index(bucket_count: usize) -> Result<ClueIndex, GameError> {
    ClueIndex::from_pairs(bucket_count, CLUE_SUSPECTS)
}

pub fn suspect_roster() -> SuspectRoster {
    SuspectRoster::new(SUSPECTS)
}
