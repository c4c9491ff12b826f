//! Terrain module - the playfield grid and channel generation
//!
//! The grid is stored as a deque of rows so that scrolling can drop the top
//! row and append a new bottom row without moving the rows in between.
//! Coordinates: (x, y) where x grows to the right and y grows downwards,
//! row 0 being the top of the playfield.
//!
//! Generation comes in two flavours:
//!
//! - [`generate_initial`] builds a whole grid around a sinusoidal centre line
//! - [`generate_row`] continues an existing channel one row at a time
//!
//! Both take the random source explicitly and never index outside a row;
//! positions that fall off the grid are dropped.

use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

use crate::types::{
    Cell, Player, BRANCH_ODDS, FALLBACK_CHANNEL_WIDTH, INITIAL_BRANCH_LEN,
    MAX_INITIAL_CHANNEL_WIDTH, MIN_CHANNEL_WIDTH, MIN_INITIAL_CHANNEL_WIDTH, ROW_BRANCH_LEN,
    SPAWN_ROWS_FROM_BOTTOM, WAVE_AMPLITUDE, WAVE_PERIOD, WIDTH_CHANGE_ODDS,
};

/// One row of terrain, left to right.
pub type Row = Vec<Cell>;

/// Rectangular terrain grid, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerrainGrid {
    width: usize,
    rows: VecDeque<Row>,
}

impl TerrainGrid {
    /// Create a grid of the given size filled with land.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Cell::Land)
    }

    /// Create a grid of the given size filled with `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            rows: (0..height).map(|_| vec![cell; width]).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows.is_empty()
    }

    /// Check if position is outside the grid
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.rows.len()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if self.is_out_of_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn top_row(&self) -> Option<&[Cell]> {
        self.row(0)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub(crate) fn pop_top(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    /// Append `row` at the bottom, padded or cut to the grid width.
    pub(crate) fn push_bottom(&mut self, mut row: Row) {
        row.resize(self.width, Cell::Land);
        self.rows.push_back(row);
    }
}

/// Leftmost and rightmost channel columns of `row`.
pub fn channel_bounds(row: &[Cell]) -> Option<(i32, i32)> {
    let left = row.iter().position(|c| c.is_passable())?;
    let right = row.iter().rposition(|c| c.is_passable())?;
    Some((left as i32, right as i32))
}

/// Length of the longest contiguous channel run in `row`.
pub fn longest_channel_run(row: &[Cell]) -> usize {
    let mut best = 0;
    let mut current = 0;
    for cell in row {
        if cell.is_passable() {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// Horizontal offset of the initial channel's centre line at row `y`.
pub fn wave_offset(y: usize) -> i32 {
    ((y as f64 / WAVE_PERIOD).sin() * WAVE_AMPLITUDE).round() as i32
}

/// Build a complete grid with a winding channel through it.
///
/// The channel width is drawn once in `[10, 20]`; each row's centre follows
/// `width/2 + round(sin(y/5) * 10)`. One row in twenty also grows a diagonal
/// branch that runs down and sideways for 5 to 14 rows.
pub fn generate_initial<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> TerrainGrid {
    let mut grid = TerrainGrid::new(width, height);
    if grid.is_empty() {
        return grid;
    }

    let channel_width = rng.random_range(MIN_INITIAL_CHANNEL_WIDTH..=MAX_INITIAL_CHANNEL_WIDTH);
    let mid = (width / 2) as i32;

    for y in 0..height {
        let center = mid + wave_offset(y);
        carve_span(&mut grid.rows[y], center, channel_width);

        if rng.random_ratio(1, BRANCH_ODDS) {
            let length = rng.random_range(INITIAL_BRANCH_LEN.0..=INITIAL_BRANCH_LEN.1);
            let direction = random_direction(rng);
            for i in 0..length {
                if let Some(row) = grid.rows.get_mut(y + i as usize) {
                    mark_channel(row, center + (i + 1) * direction);
                }
            }
        }
    }

    grid
}

/// Generate the next row of a channel from a reference row.
///
/// The reference row's channel bounds give the current centre and width.
/// The centre drifts by at most one column; the width changes by at most one
/// column one time in ten and never drops below 8. A reference row without
/// any channel yields a centred channel of width 15. A channel pressed
/// against an edge is shifted inward rather than narrowed.
pub fn generate_row<R: Rng + ?Sized>(width: usize, previous_top_row: &[Cell], rng: &mut R) -> Row {
    let mut row = vec![Cell::Land; width];
    if width == 0 {
        return row;
    }

    let Some((left, right)) = channel_bounds(previous_top_row) else {
        carve_span(&mut row, (width / 2) as i32, FALLBACK_CHANNEL_WIDTH);
        return row;
    };

    let mut center = left + (right - left) / 2;
    let mut channel_width = right - left + 1;

    center += rng.random_range(-1..=1);
    if rng.random_ratio(1, WIDTH_CHANGE_ODDS) {
        channel_width += rng.random_range(-1..=1);
    }
    channel_width = channel_width.max(MIN_CHANNEL_WIDTH);

    carve_span(&mut row, center, channel_width);

    if rng.random_ratio(1, BRANCH_ODDS) {
        let direction = random_direction(rng);
        let length = rng.random_range(ROW_BRANCH_LEN.0..=ROW_BRANCH_LEN.1);
        for i in 0..length {
            mark_channel(&mut row, center + i * direction);
        }
    }

    row
}

/// Where a new run puts the player.
///
/// Prefers the channel cell nearest the middle of the channel five rows
/// above the bottom, then any channel cell scanning from the bottom up.
/// `None` when the grid has no channel at all.
pub fn spawn_point(grid: &TerrainGrid) -> Option<Player> {
    let y = (grid.height() as i32 - SPAWN_ROWS_FROM_BOTTOM).max(0);

    if let Some(row) = grid.row(y as usize) {
        if let Some((left, right)) = channel_bounds(row) {
            let mid = left + (right - left) / 2;
            let x = (left..=right)
                .filter(|&x| row[x as usize].is_passable())
                .min_by_key(|&x| (x - mid).abs());
            if let Some(x) = x {
                return Some(Player::new(x, y));
            }
        }
    }

    grid.rows
        .iter()
        .enumerate()
        .rev()
        .find_map(|(y, row)| {
            row.iter()
                .position(|c| c.is_passable())
                .map(|x| Player::new(x as i32, y as i32))
        })
}

/// Mark `[center - width/2, center + width/2]` as channel.
///
/// A span that would cross an edge is slid back inside so it keeps its full
/// length; only spans longer than the row are cut to the row.
fn carve_span(row: &mut [Cell], center: i32, width: i32) {
    let len = row.len() as i32;
    if len == 0 {
        return;
    }

    let half = width.max(1) / 2;
    let span = 2 * half + 1;
    let (lo, hi) = if span >= len {
        (0, len - 1)
    } else {
        let lo = (center - half).clamp(0, len - span);
        (lo, lo + span - 1)
    };

    for cell in &mut row[lo as usize..=hi as usize] {
        *cell = Cell::Channel;
    }
}

fn mark_channel(row: &mut [Cell], x: i32) {
    if x >= 0 {
        if let Some(cell) = row.get_mut(x as usize) {
            *cell = Cell::Channel;
        }
    }
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if rng.random_bool(0.5) {
        1
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    fn row_from(pattern: &str) -> Row {
        pattern
            .chars()
            .map(|c| if c == '~' { Cell::Channel } else { Cell::Land })
            .collect()
    }

    #[test]
    fn test_new_grid_is_all_land() {
        let grid = TerrainGrid::new(7, 3);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert!(grid.rows().all(|row| row.iter().all(|&c| c == Cell::Land)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = TerrainGrid::new(4, 4);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 4), None);
        assert_eq!(grid.get(3, 3), Some(Cell::Land));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = TerrainGrid::new(4, 4);
        assert!(!grid.set(-1, 0, Cell::Channel));
        assert!(!grid.set(4, 0, Cell::Channel));
        assert!(grid.set(2, 1, Cell::Channel));
        assert_eq!(grid.get(2, 1), Some(Cell::Channel));
    }

    #[test]
    fn test_channel_bounds() {
        assert_eq!(channel_bounds(&row_from("..~~~..")), Some((2, 4)));
        assert_eq!(channel_bounds(&row_from("~.....~")), Some((0, 6)));
        assert_eq!(channel_bounds(&row_from(".......")), None);
        assert_eq!(channel_bounds(&[]), None);
    }

    #[test]
    fn test_longest_channel_run() {
        assert_eq!(longest_channel_run(&row_from("~~.~~~~.~")), 4);
        assert_eq!(longest_channel_run(&row_from("....")), 0);
    }

    #[test]
    fn test_wave_offset_stays_within_amplitude() {
        assert_eq!(wave_offset(0), 0);
        for y in 0..200 {
            assert!(wave_offset(y).abs() <= WAVE_AMPLITUDE as i32);
        }
        // sin(8/5) is just under 1.0
        assert_eq!(wave_offset(8), 10);
    }

    #[test]
    fn test_carve_span_inclusive() {
        let mut row = vec![Cell::Land; 20];
        carve_span(&mut row, 10, 6);
        assert_eq!(channel_bounds(&row), Some((7, 13)));
        assert_eq!(longest_channel_run(&row), 7);
    }

    #[test]
    fn test_carve_span_slides_inside_edges() {
        let mut row = vec![Cell::Land; 20];
        carve_span(&mut row, 0, 10);
        assert_eq!(channel_bounds(&row), Some((0, 10)));

        let mut row = vec![Cell::Land; 20];
        carve_span(&mut row, 25, 10);
        assert_eq!(channel_bounds(&row), Some((9, 19)));
    }

    #[test]
    fn test_carve_span_wider_than_row() {
        let mut row = vec![Cell::Land; 5];
        carve_span(&mut row, 2, 15);
        assert!(row.iter().all(|c| c.is_passable()));
    }

    #[test]
    fn test_generate_initial_dimensions() {
        let mut rng = seeded(7);
        let grid = generate_initial(40, 20, &mut rng);
        assert_eq!(grid.width(), 40);
        assert_eq!(grid.height(), 20);
        assert!(grid.rows().all(|row| row.len() == 40));
    }

    #[test]
    fn test_generate_initial_deterministic() {
        let a = generate_initial(60, 30, &mut seeded(99));
        let b = generate_initial(60, 30, &mut seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_initial_zero_size() {
        let mut rng = seeded(1);
        assert!(generate_initial(0, 10, &mut rng).is_empty());
        assert!(generate_initial(10, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_generate_initial_row_zero_centered() {
        for seed in 0..50 {
            let grid = generate_initial(40, 20, &mut seeded(seed));
            let (left, right) = channel_bounds(grid.top_row().unwrap()).unwrap();
            let width = right - left + 1;
            let center = left + (right - left) / 2;
            // Span is inclusive on both ends, so W in [10, 20] covers W/2*2+1 cells.
            assert!((11..=21).contains(&width), "seed {seed}: width {width}");
            assert!((center - 20).abs() <= 10, "seed {seed}: center {center}");
        }
    }

    #[test]
    fn test_generate_row_fallback_without_channel() {
        let mut rng = seeded(3);
        let row = generate_row(40, &row_from(&".".repeat(40)), &mut rng);
        assert_eq!(channel_bounds(&row), Some((13, 27)));
    }

    #[test]
    fn test_generate_row_follows_previous_channel() {
        let previous = row_from("..........~~~~~~~~~~~.........");
        for seed in 0..100 {
            let row = generate_row(previous.len(), &previous, &mut seeded(seed));
            assert_eq!(row.len(), previous.len());
            assert!(longest_channel_run(&row) >= MIN_CHANNEL_WIDTH as usize);
            // Drift is at most one column, so the old centre stays open.
            assert!(row[15].is_passable(), "seed {seed}");
            let (left, right) = channel_bounds(&row).unwrap();
            assert!(left >= 8 && right <= 22, "seed {seed}: {left}..{right}");
        }
    }

    #[test]
    fn test_generate_row_enforces_min_width() {
        let previous = row_from("..........~~~~..........");
        let row = generate_row(previous.len(), &previous, &mut seeded(11));
        assert!(longest_channel_run(&row) >= MIN_CHANNEL_WIDTH as usize);
    }

    #[test]
    fn test_generate_initial_branches_follow_diagonals() {
        const WIDTH: usize = 60;
        const HEIGHT: usize = 30;
        let center = |y: usize| (WIDTH / 2) as i32 + wave_offset(y);
        let mut branch_cells = 0;

        for seed in 0..300 {
            // The channel width is the generator's first draw.
            let channel_width: i32 =
                seeded(seed).random_range(MIN_INITIAL_CHANNEL_WIDTH..=MAX_INITIAL_CHANNEL_WIDTH);
            let half = channel_width / 2;
            let grid = generate_initial(WIDTH, HEIGHT, &mut seeded(seed));

            for (y, row) in grid.rows().enumerate() {
                let (lo, hi) = (center(y) - half, center(y) + half);
                for (x, cell) in row.iter().enumerate() {
                    let x = x as i32;
                    if (lo..=hi).contains(&x) {
                        assert_eq!(*cell, Cell::Channel, "seed {seed}: ({x}, {y})");
                        continue;
                    }
                    if !cell.is_passable() {
                        continue;
                    }
                    branch_cells += 1;
                    // Some earlier row's branch must pass through (x, y).
                    let on_diagonal = (y.saturating_sub(INITIAL_BRANCH_LEN.1 as usize - 1)..=y)
                        .any(|y0| {
                            let step = (y - y0 + 1) as i32;
                            x == center(y0) + step || x == center(y0) - step
                        });
                    assert!(on_diagonal, "seed {seed}: stray channel at ({x}, {y})");
                }
            }
        }

        assert!(branch_cells > 0);
    }

    #[test]
    fn test_generate_row_branch_extends_from_center() {
        let mut previous = vec![Cell::Land; 60];
        for cell in &mut previous[26..=33] {
            *cell = Cell::Channel;
        }
        let mut branched = 0;

        for seed in 0..2000 {
            let row = generate_row(previous.len(), &previous, &mut seeded(seed));
            let (left, right) = channel_bounds(&row).unwrap();
            let count = row.iter().filter(|c| c.is_passable()).count();

            // Branch cells start at the centre, so the channel stays one run.
            assert_eq!(longest_channel_run(&row), count, "seed {seed}");
            // Width 8 or 9 both carve nine cells; a six-long branch adds one.
            match count {
                9 => assert!((24..=26).contains(&left), "seed {seed}: left {left}"),
                10 => {
                    branched += 1;
                    assert!((23..=26).contains(&left), "seed {seed}: left {left}");
                    assert!((32..=35).contains(&right), "seed {seed}: right {right}");
                }
                n => panic!("seed {seed}: {n} channel cells"),
            }
        }

        assert!(branched > 0);
    }

    #[test]
    fn test_generate_row_zero_width() {
        let row = generate_row(0, &[], &mut seeded(1));
        assert!(row.is_empty());
    }

    #[test]
    fn test_spawn_point_in_channel() {
        let grid = generate_initial(40, 20, &mut seeded(5));
        let player = spawn_point(&grid).unwrap();
        assert_eq!(player.y, 15);
        assert_eq!(grid.get(player.x, player.y), Some(Cell::Channel));
    }

    #[test]
    fn test_spawn_point_falls_back_to_any_channel() {
        let mut grid = TerrainGrid::new(10, 10);
        grid.set(3, 2, Cell::Channel);
        assert_eq!(spawn_point(&grid), Some(Player::new(3, 2)));
    }

    #[test]
    fn test_spawn_point_without_channel() {
        assert_eq!(spawn_point(&TerrainGrid::new(10, 10)), None);
        assert_eq!(spawn_point(&TerrainGrid::new(0, 0)), None);
    }

    #[test]
    fn test_pop_and_push_keep_shape() {
        let mut grid = TerrainGrid::new(5, 3);
        grid.set(0, 1, Cell::Channel);
        let dropped = grid.pop_top();
        grid.push_bottom(vec![Cell::Channel; 2]);
        assert_eq!(dropped, Some(vec![Cell::Land; 5]));
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(0, 0), Some(Cell::Channel));
        assert_eq!(
            grid.row(2).unwrap(),
            &[Cell::Channel, Cell::Channel, Cell::Land, Cell::Land, Cell::Land]
        );
    }
}
