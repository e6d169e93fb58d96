use lifegrid::{next_generation, next_generation_into, Board, Cell, GridError};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn assert_all_dead(board: &Board) {
    assert_eq!(board.population(), 0);
}

#[test]
fn test_step_preserves_dimensions() {
    for (h, w) in [(2, 2), (3, 7), (40, 40), (100, 100)] {
        let board = Board::random(h, w, Some(SEED), FILL_RATE);
        assert_eq!(next_generation(&board).size(), (h, w));
    }
}

#[test]
fn test_borders_stay_dead() {
    for (h, w) in [(2, 2), (3, 3), (5, 9), (40, 40)] {
        // fully alive board maximizes the chance of a border cell lighting up
        let mut board = Board::empty(h, w);
        for row in 0..h {
            for col in 0..w {
                board.set(row, col, Cell::Alive).unwrap();
            }
        }
        let next = next_generation(&board);
        for row in 0..h {
            assert_eq!(next.get(row, 0), Ok(Cell::Dead));
            assert_eq!(next.get(row, w - 1), Ok(Cell::Dead));
        }
        for col in 0..w {
            assert_eq!(next.get(0, col), Ok(Cell::Dead));
            assert_eq!(next.get(h - 1, col), Ok(Cell::Dead));
        }
    }
}

#[test]
fn test_block_is_still_life() {
    // 2x2 block padded away from the border
    let mut board = Board::empty(6, 6);
    for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        board.set(row, col, Cell::Alive).unwrap();
    }
    let next = next_generation(&board);
    assert_eq!(next, board);
}

#[test]
fn test_blinker_oscillates() {
    let mut horizontal = Board::empty(7, 7);
    for col in 2..=4 {
        horizontal.set(3, col, Cell::Alive).unwrap();
    }
    let mut vertical = Board::empty(7, 7);
    for row in 2..=4 {
        vertical.set(row, 3, Cell::Alive).unwrap();
    }

    let step1 = next_generation(&horizontal);
    assert_eq!(step1, vertical);
    let step2 = next_generation(&step1);
    assert_eq!(step2, horizontal);
}

#[test]
fn test_empty_stays_empty() {
    for (h, w) in [(1, 1), (2, 5), (40, 40)] {
        let next = next_generation(&Board::empty(h, w));
        assert_eq!(next.size(), (h, w));
        assert_all_dead(&next);
    }
}

#[test]
fn test_randomize_is_deterministic() {
    let a = Board::random(40, 40, Some(SEED), FILL_RATE);
    let b = Board::random(40, 40, Some(SEED), FILL_RATE);
    assert_eq!(a, b);

    let c = Board::random(40, 40, Some(SEED + 1), FILL_RATE);
    assert_ne!(a, c);

    // fill rate is roughly honored
    let alive = a.population() as f64 / (40. * 40.);
    assert!((alive - FILL_RATE).abs() < 0.1, "alive={}", alive);
}

#[test]
fn test_toggle_flips_exactly_one_cell() {
    let mut board = Board::random(10, 10, Some(SEED), FILL_RATE);
    let before = board.clone();

    let was = board.get(4, 7).unwrap();
    assert_eq!(board.toggle(4, 7), Ok(was.toggled()));

    for row in 0..10 {
        for col in 0..10 {
            let expected = if (row, col) == (4, 7) {
                was.toggled()
            } else {
                before.get(row, col).unwrap()
            };
            assert_eq!(board.get(row, col), Ok(expected));
        }
    }
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut board = Board::random(10, 12, Some(SEED), FILL_RATE);
    let before = board.clone();

    let err = GridError::OutOfBounds {
        row: 10,
        col: 0,
        height: 10,
        width: 12,
    };
    assert_eq!(board.get(10, 0), Err(err));
    assert_eq!(board.set(10, 0, Cell::Alive), Err(err));
    assert_eq!(board.toggle(10, 0), Err(err));

    let err = GridError::OutOfBounds {
        row: 3,
        col: 12,
        height: 10,
        width: 12,
    };
    assert_eq!(board.get(3, 12), Err(err));
    assert_eq!(board.toggle(3, 12), Err(err));

    assert_eq!(board, before);
}

#[test]
fn test_step_into_rejects_mismatched_dimensions() {
    let board = Board::random(10, 10, Some(SEED), FILL_RATE);
    let mut next = Board::empty(10, 11);
    assert_eq!(
        next_generation_into(&board, &mut next),
        Err(GridError::InvalidDimensions {
            expected_height: 10,
            expected_width: 10,
            height: 10,
            width: 11,
        })
    );
    assert_all_dead(&next);

    let mut next = Board::empty(10, 10);
    assert_eq!(next_generation_into(&board, &mut next), Ok(()));
    assert_eq!(next, next_generation(&board));
}

#[test]
fn test_no_wraparound_at_edges() {
    // a blinker touching the left border would birth cells at col 0 (or wrap)
    // under a toroidal rule; here the border row simply clamps it
    let mut board = Board::empty(5, 5);
    for row in 1..=3 {
        board.set(row, 1, Cell::Alive).unwrap();
    }
    let next = next_generation(&board);
    for row in 0..5 {
        assert_eq!(next.get(row, 0), Ok(Cell::Dead));
        assert_eq!(next.get(row, 4), Ok(Cell::Dead));
    }
    // the interior of the oscillation is still produced
    assert_eq!(next.get(2, 1), Ok(Cell::Alive));
    assert_eq!(next.get(2, 2), Ok(Cell::Alive));
}
