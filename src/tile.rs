use std::ops::Range;

/// Describes a tile as an integer code in the range `0..num_types²`. The code encodes
/// two attributes: the [shape](shape_of) is `code % num_types` and the [color](color_of) is
/// `code / num_types`.
///
/// # See Also
///
/// * [shape_of]
/// * [color_of]
/// * [tiles]
pub type Tile = usize;

/// # Returns
///
/// The number of distinct [tile](Tile) codes for `num_types` shapes and `num_types` colors.
#[inline]
pub fn tiles_len(num_types: usize) -> usize {
    num_types * num_types
}

/// # Returns
///
/// The range of all [tile](Tile) codes in color then shape order.
#[inline]
pub fn tiles(num_types: usize) -> Range<Tile> {
    0..tiles_len(num_types)
}

/// # Returns
///
/// The shape of `tile`, in the range `0..num_types`.
#[inline]
pub fn shape_of(tile: Tile, num_types: usize) -> usize {
    tile % num_types
}

/// # Returns
///
/// The color of `tile`, in the range `0..num_types`.
#[inline]
pub fn color_of(tile: Tile, num_types: usize) -> usize {
    tile / num_types
}

/// # Returns
///
/// The [tile](Tile) code with `color` and `shape`.
#[inline]
pub fn tile_of(color: usize, shape: usize, num_types: usize) -> Tile {
    color * num_types + shape
}
