/// A tuple with two integer components for the row and the column on the board.
///
/// # See Also
///
/// * [Move](crate::Move)
/// * [Frontier](crate::Frontier)
pub type Coordinate = (isize, isize);

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal.
///
/// # Returns
///
/// An array of 4 [coordinates](Coordinate) in natural lexicographic order.
pub fn adjacent_coordinates((row, col): Coordinate) -> [Coordinate; 4] {
    [(row - 1, col), (row, col - 1), (row, col + 1), (row + 1, col)]
}

/// Searches `haystack` for `needle` from the back.
///
/// # Returns
///
/// The index of the last [coordinate](Coordinate) in `haystack` equal to `needle`, or [None].
pub fn coords_in(needle: Coordinate, haystack: &[Coordinate]) -> Option<usize> {
    haystack.iter().rposition(|&coordinate| coordinate == needle)
}

/// The maximum width or height of the grid reachable when [tiles](crate::Tile) come in
/// `num_types` colors and `num_types` shapes with `copies` copies of each combination.
///
/// # See Also
///
/// * [GridBoard::new](crate::GridBoard::new)
pub fn max_dimension(num_types: usize, copies: usize) -> usize {
    num_types
        .saturating_sub(1)
        .saturating_mul(num_types)
        .saturating_mul(copies)
        .saturating_add(1)
}
