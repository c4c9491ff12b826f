//! Property tests for terrain generation, scrolling and collision checks

use proptest::prelude::*;

use river_ride::core::terrain::longest_channel_run;
use river_ride::core::{evaluate, generate_initial, generate_row, seeded, ScrollBuffer, TerrainGrid};
use river_ride::types::{Cell, GoalPolicy, Outcome, Player, MIN_CHANNEL_WIDTH};

fn grid_from(width: usize, cells: &[bool]) -> TerrainGrid {
    let height = cells.len() / width.max(1);
    let mut grid = TerrainGrid::new(width, height);
    for (i, &open) in cells.iter().take(width * height).enumerate() {
        if open {
            grid.set((i % width) as i32, (i / width) as i32, Cell::Channel);
        }
    }
    grid
}

proptest! {
    #[test]
    fn initial_rows_always_have_a_wide_channel(
        seed in any::<u64>(),
        width in 20usize..120,
        height in 10usize..60,
    ) {
        let grid = generate_initial(width, height, &mut seeded(seed));
        prop_assert_eq!(grid.width(), width);
        prop_assert_eq!(grid.height(), height);
        for row in grid.rows() {
            prop_assert!(longest_channel_run(row) >= MIN_CHANNEL_WIDTH as usize);
        }
    }

    #[test]
    fn generated_rows_keep_minimum_width(
        seed in any::<u64>(),
        width in 8usize..120,
        steps in 1usize..200,
    ) {
        let mut rng = seeded(seed);
        let mut row = vec![Cell::Land; width];
        for _ in 0..steps {
            row = generate_row(width, &row, &mut rng);
            prop_assert_eq!(row.len(), width);
            prop_assert!(longest_channel_run(&row) >= MIN_CHANNEL_WIDTH as usize);
        }
    }

    #[test]
    fn scroll_keeps_shape_and_scores_once(
        seed in any::<u64>(),
        width in 1usize..80,
        height in 2usize..40,
    ) {
        let mut rng = seeded(seed);
        let grid = generate_initial(width, height, &mut rng);
        let second_row = grid.row(1).map(<[Cell]>::to_vec);
        let mut buffer = ScrollBuffer::new(grid);

        prop_assert!(buffer.scroll(&mut rng));
        prop_assert_eq!(buffer.score(), 1);
        prop_assert_eq!(buffer.terrain().width(), width);
        prop_assert_eq!(buffer.terrain().height(), height);
        prop_assert_eq!(buffer.terrain().top_row().map(<[Cell]>::to_vec), second_row);
        for row in buffer.terrain().rows() {
            prop_assert_eq!(row.len(), width);
        }
    }

    #[test]
    fn scroll_of_short_grid_is_noop(
        seed in any::<u64>(),
        width in 0usize..80,
        height in 0usize..2,
    ) {
        let mut rng = seeded(seed);
        let grid = generate_initial(width, height, &mut rng);
        let mut buffer = ScrollBuffer::new(grid.clone());

        prop_assert!(!buffer.scroll(&mut rng));
        prop_assert_eq!(buffer.score(), 0);
        prop_assert_eq!(buffer.terrain(), &grid);
    }

    #[test]
    fn evaluate_matches_cell_lookup(
        width in 1usize..12,
        cells in prop::collection::vec(any::<bool>(), 1..144),
        x in -3i32..15,
        y in -3i32..15,
    ) {
        let grid = grid_from(width, &cells);
        let player = Player::new(x, y);
        let outcome = evaluate(player, &grid, GoalPolicy::Endless);

        let inside = x >= 0 && y >= 0 && (x as usize) < grid.width() && (y as usize) < grid.height();
        prop_assert_eq!(outcome == Outcome::OutOfBounds, !inside);
        prop_assert_eq!(outcome == Outcome::OnLand, inside && grid.get(x, y) == Some(Cell::Land));
        prop_assert!(outcome != Outcome::GoalReached);
    }
}
