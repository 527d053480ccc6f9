//! Odd-Multiple Table Generation
//!
//! Precomputes the table consumed by windowed (wNAF) scalar multipliers:
//! for window width W the table holds 2^(W-1) points, entry i being
//! (2i+1)·G. The table is built once and read-only afterwards; rendering it
//! to any output format belongs to the consumer.

use crate::bigint::DivisionByZero;
use crate::point::Point;

/// Precomputed odd multiples 1·G, 3·G, …, (2^W - 1)·G
#[derive(Clone, Debug)]
pub struct WnafTable {
    window: u32,
    points: Vec<Point>,
}

impl WnafTable {
    /// Generate the table for window width `window`.
    ///
    /// Starting from G, each entry is the previous one plus 2G, so entry i
    /// lands on (2i+1)·G in strictly increasing order.
    ///
    /// # Panics
    ///
    /// Panics if `window` is outside 1..=16.
    pub fn generate(window: u32) -> Result<Self, DivisionByZero> {
        assert!(window >= 1 && window <= 16, "window width out of range");
        let count = 1usize << (window - 1);

        let two_g = Point::generator().double()?;
        let mut points = Vec::with_capacity(count);
        let mut cur = Point::generator();
        for _ in 0..count {
            points.push(cur);
            cur = cur.add(&two_g)?;
        }

        Ok(WnafTable { window, points })
    }

    /// Window width the table was generated for
    pub fn window(&self) -> u32 {
        self.window
    }

    /// Number of entries, 2^(W-1)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True only for a table that lost its points (never happens for
    /// generated tables; provided for the len/is_empty convention)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point (2i+1)·G
    pub fn point(&self, index: usize) -> &Point {
        &self.points[index]
    }

    /// All entries in index order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The odd multiple represented by entry `index`
    pub fn multiple(&self, index: usize) -> u64 {
        2 * index as u64 + 1
    }
}
