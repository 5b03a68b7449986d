use crate::Coordinate;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The maximum number of distinct shapes (and colors) a game can be configured with. `12`.
///
/// # See Also
///
/// * [GameState::init_state](crate::GameState::init_state)
/// * [InitError::TooManyTypes](crate::InitError::TooManyTypes)
pub const MAX_TYPES: usize = 12;
/// The [coordinate](Coordinate) of the only playable cell on an empty board.
///
/// # See Also
///
/// * [Frontier](crate::Frontier)
/// * [Board::is_playable](crate::Board::is_playable)
pub const ORIGIN: Coordinate = (0, 0);
/// The number of points subtracted from a candidate move that leaves a line exactly one
/// [tile](crate::Tile) short of complete for the next player. `2` points.
///
/// # See Also
///
/// * [SearchConfig](crate::SearchConfig)
/// * [GameState::computer_play](crate::GameState::computer_play)
pub const NEAR_COMPLETE_PENALTY: usize = 2;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. If the environment
/// variable named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [Players](crate::Players)
/// * [GameState::determine_winner](crate::GameState::determine_winner)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
/// All racks will be stored on the stack until the number of [tiles](crate::Tile) in a rack
/// becomes greater than `HAND_CAPACITY`. If the environment variable named `HAND_CAPACITY` is
/// present at compile time and is able to be parsed into a `usize`, set to the value of the
/// environment variable. Otherwise, it is set to [MAX_TYPES].
///
/// # See Also
///
/// * [Rack](crate::Rack)
pub const HAND_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("HAND_CAPACITY"), |str| result::ok!(parse_usize(
        str
    ))),
    MAX_TYPES
);
const _: () = assert!(HAND_CAPACITY > 0);
const _: () = assert!(PLAYER_CAPACITY > 0);
