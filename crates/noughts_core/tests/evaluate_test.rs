//! Exhaustive checks of board evaluation over all 3^9 cell combinations.

use noughts_core::{Board, Cell, Line, Mark, Outcome, evaluate};

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut n| {
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            n /= 3;
        }
        Board::from_cells(cells)
    })
}

fn complete_lines(board: &Board) -> Vec<(Mark, Line)> {
    Line::ALL
        .into_iter()
        .filter_map(|line| {
            let [a, b, c] = line.indices().map(|i| board.cells()[i]);
            match a {
                Cell::Occupied(mark) if a == b && b == c => Some((mark, line)),
                _ => None,
            }
        })
        .collect()
}

#[test]
fn test_every_board_evaluates_consistently() {
    let mut counts = [0usize; 3];
    for board in all_boards() {
        let lines = complete_lines(&board);
        let full = board.cells().iter().all(|c| !c.is_empty());

        match evaluate(&board) {
            Outcome::Win { mark, line } => {
                counts[0] += 1;
                assert_eq!(lines.first(), Some(&(mark, line)), "board:\n{board}");
            }
            Outcome::Draw => {
                counts[1] += 1;
                assert!(lines.is_empty(), "draw reported with a line:\n{board}");
                assert!(full, "draw reported on open board:\n{board}");
            }
            Outcome::Ongoing => {
                counts[2] += 1;
                assert!(lines.is_empty(), "ongoing reported with a line:\n{board}");
                assert!(!full, "ongoing reported on full board:\n{board}");
            }
        }
    }
    assert_eq!(counts.iter().sum::<usize>(), 19_683);
    assert!(counts.iter().all(|&c| c > 0));
}

#[test]
fn test_single_line_boards_report_that_line() {
    for line in Line::ALL {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::new();
            for pos in line.positions() {
                board.set(pos, Cell::Occupied(mark));
            }
            assert_eq!(evaluate(&board), Outcome::Win { mark, line });
        }
    }
}

#[test]
fn test_evaluate_is_deterministic() {
    let board: Board = "XO./.XO/..X".parse().unwrap();
    let first = evaluate(&board);
    for _ in 0..10 {
        assert_eq!(evaluate(&board), first);
    }
}

#[test]
fn test_draw_scenario_board() {
    // X O X / X O O / O X X
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
}
