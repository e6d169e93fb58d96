use crate::{Board, Cell, GridError};

/// Computes generation `t+1` from generation `t`.
///
/// Conway's rule is evaluated on interior cells only: an alive cell survives
/// with 2 or 3 alive Moore neighbors, a dead cell births with exactly 3. The
/// outermost rows and columns are never evaluated and come out dead — the
/// field has no wraparound. Boards narrower than 3 cells in either dimension
/// have no interior and die out in one step.
pub fn next_generation(board: &Board) -> Board {
    let (height, width) = board.size();
    let mut next = Board::empty(height, width);
    // dimensions match by construction
    next_generation_into(board, &mut next).unwrap();
    next
}

/// Writes the successor of `board` into `next`, which must have the same
/// dimensions. Fails with `InvalidDimensions` otherwise, leaving `next`
/// untouched.
pub fn next_generation_into(board: &Board, next: &mut Board) -> Result<(), GridError> {
    let (height, width) = board.size();
    if next.size() != (height, width) {
        return Err(GridError::InvalidDimensions {
            expected_height: height,
            expected_width: width,
            height: next.height(),
            width: next.width(),
        });
    }

    for row in 0..height {
        for col in 0..width {
            let on_border = row == 0 || row + 1 == height || col == 0 || col + 1 == width;
            *next.at_mut(row, col) = if on_border {
                Cell::Dead
            } else {
                let neibs = count_neibs(board, row, col);
                let alive = match board.at(row, col) {
                    Cell::Alive => neibs == 2 || neibs == 3,
                    Cell::Dead => neibs == 3,
                };
                if alive {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            };
        }
    }
    Ok(())
}

/// Alive cells among the 8 Moore neighbors of an interior cell.
fn count_neibs(board: &Board, row: usize, col: usize) -> usize {
    board.at(row - 1, col - 1).is_alive() as usize
        + board.at(row - 1, col).is_alive() as usize
        + board.at(row - 1, col + 1).is_alive() as usize
        + board.at(row, col - 1).is_alive() as usize
        + board.at(row, col + 1).is_alive() as usize
        + board.at(row + 1, col - 1).is_alive() as usize
        + board.at(row + 1, col).is_alive() as usize
        + board.at(row + 1, col + 1).is_alive() as usize
}
