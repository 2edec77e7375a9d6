//! The board container.
//!
//! `Board` owns 24 index-addressable points, one bar per color and one
//! bear-off counter per color. It performs no rule checking: every legality
//! decision lives in `rules::MoveRuleEngine`. Each mutating method changes
//! exactly one point, one bar, or one bear-off counter (`bear_off` moves a
//! checker from a point to its counter).
//!
//! Read accessors treat out-of-range indices as empty points; mutators report
//! them as `BoardError::InvalidPoint`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardError, Checker, Color, ColorMap};

/// Number of points on the board.
pub const POINT_COUNT: usize = 24;

/// Checkers each color owns.
pub const CHECKERS_PER_COLOR: usize = 15;

/// One board point: an ordered stack of checkers, bottom first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    checkers: SmallVec<[Checker; 8]>,
}

impl Point {
    /// Checkers on this point, bottom first.
    #[must_use]
    pub fn checkers(&self) -> &[Checker] {
        &self.checkers
    }

    /// Number of checkers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Check if the point is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Color of the bottom checker, if any.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.checkers.first().map(|c| c.color())
    }
}

/// Board state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    points: [Point; POINT_COUNT],
    bars: ColorMap<SmallVec<[Checker; 4]>>,
    borne_off: ColorMap<u8>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn point_index(point: u8) -> Result<usize, BoardError> {
        let index = point as usize;
        if index < POINT_COUNT {
            Ok(index)
        } else {
            Err(BoardError::InvalidPoint(point))
        }
    }

    // === Points ===

    /// Get a point, or `None` if the index is off the board.
    #[must_use]
    pub fn point(&self, point: u8) -> Option<&Point> {
        self.points.get(point as usize)
    }

    /// Place a checker on top of a point.
    pub fn add_checker(&mut self, point: u8, checker: Checker) -> Result<(), BoardError> {
        let index = Self::point_index(point)?;
        self.points[index].checkers.push(checker);
        Ok(())
    }

    /// Stack `count` checkers on an on-board point.
    ///
    /// Layout tables are checked against `POINT_COUNT` by their tests, so
    /// this indexes directly.
    pub(super) fn stack(&mut self, point: usize, checker: Checker, count: usize) {
        self.points[point]
            .checkers
            .extend(std::iter::repeat(checker).take(count));
    }

    /// Remove the top checker of a point.
    pub fn remove_top_checker(&mut self, point: u8) -> Result<Checker, BoardError> {
        let index = Self::point_index(point)?;
        self.points[index]
            .checkers
            .pop()
            .ok_or(BoardError::EmptyPoint(point))
    }

    /// Checkers on a point, bottom first.
    #[must_use]
    pub fn checkers_at(&self, point: u8) -> &[Checker] {
        self.point(point).map(Point::checkers).unwrap_or(&[])
    }

    /// Number of checkers on a point.
    #[must_use]
    pub fn count_at(&self, point: u8) -> usize {
        self.point(point).map_or(0, Point::len)
    }

    /// Owner of a point, or `None` if it is empty.
    #[must_use]
    pub fn color_at(&self, point: u8) -> Option<Color> {
        self.point(point).and_then(Point::color)
    }

    /// Check if a point holds no checkers.
    #[must_use]
    pub fn is_point_empty(&self, point: u8) -> bool {
        self.count_at(point) == 0
    }

    /// Indices of points owned by a color, ascending.
    pub fn points_of(&self, color: Color) -> impl Iterator<Item = u8> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.color() == Some(color))
            .map(|(i, _)| i as u8)
    }

    // === Bars ===

    /// Put a captured checker on its color's bar.
    pub fn add_to_bar(&mut self, checker: Checker) {
        self.bars[checker.color()].push(checker);
    }

    /// Take a checker off a color's bar.
    pub fn remove_from_bar(&mut self, color: Color) -> Option<Checker> {
        self.bars[color].pop()
    }

    /// Number of checkers on a color's bar.
    #[must_use]
    pub fn bar_count(&self, color: Color) -> usize {
        self.bars[color].len()
    }

    /// Check if a color's bar is empty.
    #[must_use]
    pub fn is_bar_empty(&self, color: Color) -> bool {
        self.bars[color].is_empty()
    }

    // === Bear-off ===

    /// Checkers a color has borne off.
    #[must_use]
    pub fn borne_off(&self, color: Color) -> u8 {
        self.borne_off[color]
    }

    /// Remove the top checker of a point from play and count it as borne off.
    pub fn bear_off(&mut self, point: u8) -> Result<Checker, BoardError> {
        let checker = self.remove_top_checker(point)?;
        self.borne_off[checker.color()] += 1;
        Ok(checker)
    }

    // === Aggregates ===

    /// Checkers of a color on points, on the bar, and borne off.
    ///
    /// Equals 15 for both colors on any board reached through legal play.
    #[must_use]
    pub fn total_checkers(&self, color: Color) -> usize {
        let on_points = self
            .points
            .iter()
            .flat_map(|p| p.checkers.iter())
            .filter(|c| c.color() == color)
            .count();
        let on_bar = self.bars[color].iter().filter(|c| c.color() == color).count();
        on_points + on_bar + self.borne_off(color) as usize
    }

    /// First point holding checkers of both colors, if any.
    #[must_use]
    pub fn mixed_point(&self) -> Option<u8> {
        self.points
            .iter()
            .position(|p| p.checkers.iter().any(|c| Some(c.color()) != p.color()))
            .map(|i| i as u8)
    }

    /// Checkers of a color on points outside its home range.
    #[must_use]
    pub fn checkers_outside_home(&self, color: Color) -> usize {
        self.points_of(color)
            .filter(|&p| !color.is_home(p))
            .map(|p| self.count_at(p))
            .sum()
    }

    /// Clear all points, bars and bear-off counts.
    pub fn reset(&mut self) {
        for point in self.points.iter_mut() {
            point.checkers.clear();
        }
        for (_, bar) in self.bars.iter_mut() {
            bar.clear();
        }
        for (_, count) in self.borne_off.iter_mut() {
            *count = 0;
        }
    }

    /// Signed checker count (White positive, Black negative).
    #[must_use]
    pub fn signed_count(&self, point: u8) -> i32 {
        match self.color_at(point) {
            Some(Color::White) => self.count_at(point) as i32,
            Some(Color::Black) => -(self.count_at(point) as i32),
            None => 0,
        }
    }
}

impl std::fmt::Display for Board {
    /// Two rows of signed counts (White positive), points 12–23 on top
    /// and 11–0 below, followed by bars and bear-off counts.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top: Vec<u8> = (12..24).collect();
        let bottom: Vec<u8> = (0..12).rev().collect();

        for row in [top, bottom] {
            for &p in &row {
                write!(f, "{:>4}", p)?;
            }
            writeln!(f)?;
            for &p in &row {
                write!(f, "{:>4}", self.signed_count(p))?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "bar W:{} B:{}  off W:{} B:{}",
            self.bar_count(Color::White),
            self.bar_count(Color::Black),
            self.borne_off(Color::White),
            self.borne_off(Color::Black),
        )
    }
}
