//! Rules engine and move search for a tile-placement, line-scoring game.
//!
//! ## Summary
//!
//! Every [tile](Tile) carries a [shape](shape_of) and a [color](color_of), and a game has
//! `num_types` of each with `copies` identical copies of every [tile](Tile). Players take turns
//! extending rows and columns of [tiles](Tile) where every [tile](Tile) is unique and all of
//! them share either a [shape](shape_of) or a [color](color_of). [GameState] owns the board,
//! the bag, the players and the history of committed turns, and implements the turn
//! lifecycle on top of a [Board] and a [Player]. The player with the most points wins.
//!
//! ## How is the game created?
//!
//! [GameState::init_state] fills and shuffles the bag, deals a rack of `num_types`
//! [tiles](Tile) to each player and lets the player with the longest line in their rack lead.
//! Invalid dimensions are reported through [InitError].
//!
//! ## How is a turn played?
//!
//! A turn is built one placement at a time with [GameState::tile_place] and can be taken
//! back with [GameState::undo_tile_place], [GameState::remove_tile] or
//! [GameState::reset_turn]. While building a turn, [GameState::playable] lists the cells open
//! for the next placement and [GameState::score_turn] shows what the turn is worth.
//! [GameState::end_scoring_turn] commits the turn, and [GameState::end_exchange_turn]
//! exchanges [tiles](Tile) with the bag instead.
//!
//! ### Which cells are open?
//!
//! The [Frontier] holds every empty cell where some [tile](Tile) could be placed next to
//! the committed [tiles](Tile). It only changes around committed placements, so keeping it
//! current does not depend on the size of the board. The first [tile](Tile) of a turn goes
//! on the [Frontier], and the following [tiles](Tile) extend the line of the first one.
//!
//! ## How are points calculated?
//!
//! A turn scores every line it formed or extended. A line scores its length, a lone
//! [tile](Tile) scores nothing and a complete line of `num_types` [tiles](Tile) scores
//! double. The very first [tile](Tile) of the game scores `1` when played alone, and the
//! turn that ends the game earns an extra `num_types` points.
//!
//! ## How does the computer play?
//!
//! [GameState::computer_play] searches every placement order of every line in the rack with
//! backtracking, and leaves the state exactly as it found it. [SearchConfig] tunes the
//! penalty for leaving a line one [tile](Tile) short of complete. When nothing can be
//! placed, the computer exchanges every [tile](Tile) outside its longest line.
//!
//! ## How is the game ended?
//!
//! The game ends once the bag is empty and the player who acted last holds no
//! [tiles](Tile). [GameState::determine_winner] reports every player with the highest score.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to get mutable references to private
//! properties, to build seeded games and to set up common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    missing_debug_implementations,
    unsafe_code
)]

pub use board::*;
pub use config::*;
pub use consts::*;
pub use coordinate::*;
pub use frontier::*;
pub use player::*;
pub use search::*;
pub use state::*;
pub use tile::*;
pub use types::*;

mod board;
mod config;
mod consts;
mod coordinate;
mod frontier;
mod player;
mod search;
mod state;
mod tile;
mod types;
