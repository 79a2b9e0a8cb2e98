use crate::{Cell, GridError, LifeGrid, pattern::dedent};
use itertools::Itertools;
use std::str::FromStr;

const GLIDER: &str = "
    .o.
    ..o
    ooo";

const BOAT: &str = "
    .....
    .oo..
    .o.o.
    ..o..
    .....";

fn picture(s: &str) -> String {
    dedent(s).join("\n")
}

fn every_cell(grid: &LifeGrid) -> impl Iterator<Item = (isize, isize)> + use<> {
    let (width, height) = grid.dimensions();
    (0..height as isize).cartesian_product(0..width as isize).map(|(y, x)| (x, y))
}

mod life_grid {
    use super::*;

    #[test]
    fn test_new_is_dead() {
        let grid = LifeGrid::new(60, 40).unwrap();
        assert_eq!(grid.dimensions(), (60, 40));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert!(every_cell(&grid).all(|(x, y)| grid.cell_state(x, y) == Ok(Cell::Dead)));
    }

    #[test]
    fn test_invalid_dimensions() {
        for (width, height) in [(0, 5), (5, 0), (0, 0), (usize::MAX, 2), (usize::MAX, 1)] {
            assert_eq!(
                LifeGrid::new(width, height).unwrap_err(),
                GridError::InvalidDimensions { width, height }
            );
        }
    }

    #[test]
    fn test_dimensions_never_change() {
        let mut grid = LifeGrid::new(7, 3).unwrap();
        grid.toggle(1, 1).unwrap();
        grid.toggle(2, 1).unwrap();
        grid.toggle(3, 1).unwrap();
        for _ in 0..5 {
            grid.step();
            assert_eq!(grid.dimensions(), (7, 3));
        }
        grid.reset();
        assert_eq!(grid.dimensions(), (7, 3));
        assert_eq!((grid.width(), grid.height()), (7, 3));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut grid = LifeGrid::from_str(BOAT).unwrap();
        let before = grid.clone();
        for (x, y) in every_cell(&before) {
            let old = grid.cell_state(x, y).unwrap();
            assert_eq!(grid.toggle(x, y), Ok(old.toggled()));
            assert_eq!(grid.toggle(x, y), Ok(old));
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn test_toggle_touches_one_cell() {
        let mut grid = LifeGrid::new(4, 4).unwrap();
        assert_eq!(grid.toggle(2, 1), Ok(Cell::Alive));
        assert_eq!(grid.live_cells().collect_vec(), [(2, 1)]);
    }

    #[test]
    fn test_set() {
        let mut grid = LifeGrid::new(4, 4).unwrap();
        assert_eq!(grid.set(3, 2, Cell::Alive), Ok(()));
        assert_eq!(grid.set(0, 0, Cell::Dead), Ok(()));
        assert_eq!(grid.cell_state(3, 2), Ok(Cell::Alive));
        assert_eq!(grid.live_cells().collect_vec(), [(3, 2)]);
        assert_eq!(grid.set(3, 2, Cell::Dead), Ok(()));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_reset_kills_everything() {
        let mut grid = LifeGrid::from_str(BOAT).unwrap();
        grid.step();
        grid.reset();
        assert_eq!(grid.generation(), 0);
        assert!(every_cell(&grid).all(|(x, y)| grid.cell_state(x, y) == Ok(Cell::Dead)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = LifeGrid::from_str(BOAT).unwrap();
        let before = grid.clone();
        let (w, h) = (5, 5);
        assert!(matches!(
            grid.toggle(-1, 0),
            Err(GridError::OutOfBounds { x: -1, y: 0, .. })
        ));
        assert!(matches!(
            grid.toggle(w, 0),
            Err(GridError::OutOfBounds { x: 5, y: 0, .. })
        ));
        assert_eq!(
            grid.cell_state(w, h),
            Err(GridError::OutOfBounds {
                x: 5,
                y: 5,
                width: 5,
                height: 5
            })
        );
        assert!(grid.set(0, -3, Cell::Alive).is_err());
        assert!(!grid.is_alive(-1, -1));
        assert!(!grid.contains(w, 0));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_live_cells_row_major() {
        let grid = LifeGrid::from_str(BOAT).unwrap();
        assert_eq!(
            grid.live_cells().collect_vec(),
            [(1, 1), (2, 1), (1, 2), (3, 2), (2, 3)]
        );
        assert_eq!(grid.population(), 5);
    }
}

mod rules {
    use super::*;

    #[test]
    fn test_block() {
        // Block is constant.
        let mut grid = LifeGrid::new(10, 10).unwrap();
        for (x, y) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            grid.toggle(x, y).unwrap();
        }
        let before = grid.clone();
        grid.step();
        assert_eq!(grid, before);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn test_boat() {
        // Boat is constant.
        let mut grid = LifeGrid::from_str(BOAT).unwrap();
        grid.step();
        assert_eq!(grid.to_string(), picture(BOAT));
    }

    #[test]
    fn test_blinker() {
        // Blinker blinks with period 2.
        let mut grid = LifeGrid::new(10, 10).unwrap();
        for x in 4..=6 {
            grid.toggle(x, 5).unwrap();
        }
        let horizontal = grid.clone();
        grid.step();
        assert_eq!(grid.live_cells().collect_vec(), [(5, 4), (5, 5), (5, 6)]);
        grid.step();
        assert_eq!(grid, horizontal);
    }

    #[test]
    fn test_corner_cell_dies() {
        let mut grid = LifeGrid::new(10, 10).unwrap();
        grid.toggle(0, 0).unwrap();
        grid.step();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // Half a blinker survives against the left edge; a torus would
        // also give birth at (9, 5).
        let mut grid = LifeGrid::new(10, 10).unwrap();
        grid.place(0, 4, "o\no\no").unwrap();
        grid.step();
        assert_eq!(grid.live_cells().collect_vec(), [(0, 5), (1, 5)]);
        grid.step();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_glider_frame() {
        let mut grid = LifeGrid::from_str(
            "
            .o...
            ..o..
            ooo..
            .....
            .....",
        )
        .unwrap();
        grid.step();
        let expected = "
            .....
            o.o..
            .oo..
            .o...
            .....";
        assert_eq!(grid.to_string(), picture(expected));
    }

    #[test]
    fn test_glider_moves() {
        // Every four generations the glider moves one cell down and right.
        let mut grid = LifeGrid::new(12, 12).unwrap();
        grid.place(1, 1, GLIDER).unwrap();
        for i in 1..=3 {
            for _ in 0..4 {
                grid.step();
                assert_eq!(grid.population(), 5);
            }
            let mut expected = LifeGrid::new(12, 12).unwrap();
            expected.place(1 + i, 1 + i, GLIDER).unwrap();
            assert_eq!(grid, expected);
        }
        assert_eq!(grid.generation(), 12);
    }
}

mod placement {
    use super::*;

    #[test]
    fn test_place() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        assert_eq!(grid.place(1, 1, GLIDER), Ok(5));
        let expected = "
            .....
            ..o..
            ...o.
            .ooo.
            .....";
        assert_eq!(grid.to_string(), picture(expected));
    }

    #[test]
    fn test_place_is_all_or_nothing() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        assert!(matches!(
            grid.place(3, 0, "ooo"),
            Err(GridError::OutOfBounds { x: 5, y: 0, .. })
        ));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_dead_margin_may_overhang() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        assert_eq!(grid.place(3, 4, "oo...\n....."), Ok(2));
        assert_eq!(grid.live_cells().collect_vec(), [(3, 4), (4, 4)]);
    }

    #[test]
    fn test_picture_round_trip() {
        let grid = LifeGrid::from_str(BOAT).unwrap();
        assert_eq!(LifeGrid::from_str(&grid.to_string()), Ok(grid));
    }
}
