use crate::collections::FxHashMap;
use crate::geometry::{Bounds, Loc};

use std::fmt::{self, Display, Write};


/// Sparse 2D grid keyed by [`Loc`]
/// Cells never written read back as the configured empty value
/// The bounding rectangle grows with every `set` and never shrinks
#[derive(Clone, Debug)]
pub struct Grid<T> {
    bounds: Bounds,
    values: FxHashMap<Loc, T>,
    empty: T,
}

impl<T> Grid<T> {

    /// Create an empty grid, `empty` is returned for cells that were never set
    pub fn new(empty: T) -> Self {
        Self {
            bounds: Bounds::empty(),
            values: FxHashMap::default(),
            empty,
        }
    }

    /// Upsert the value at `loc` and extend the bounds to cover it
    pub fn set(&mut self, loc: Loc, value: T) {
        self.bounds = self.bounds.extend(loc);
        self.values.insert(loc, value);
    }

    /// Stored value at `loc`, if any
    pub fn get(&self, loc: Loc) -> Option<&T> {
        self.values.get(&loc)
    }

    /// Value at `loc` together with whether it was ever set
    /// Falls back to the empty value for unset cells
    pub fn at(&self, loc: Loc) -> (&T, bool) {
        match self.values.get(&loc) {
            Some(value) => (value, true),
            None => (&self.empty, false),
        }
    }

    pub fn get_or_empty(&self, loc: Loc) -> &T {
        self.at(loc).0
    }

    pub fn empty_value(&self) -> &T {
        &self.empty
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn in_bounds(&self, loc: Loc) -> bool {
        self.bounds.is_inside(loc)
    }

    /// Coordinates holding a stored value, in no particular order
    pub fn locs(&self) -> impl Iterator<Item = Loc> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Loc, &T)> + '_ {
        self.values.iter().map(|(loc, value)| (*loc, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: PartialEq> Grid<T> {

    /// Number of stored cells equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.values.values().filter(|v| *v == value).count()
    }
}

impl<T: Display> Grid<T> {

    /// Render one row across the grid's current x range
    pub fn render_row(&self, y: i64) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = self.render_cells(&mut out, y, self.bounds);
        out
    }

    /// Render every row of `area`, each terminated by a newline
    pub fn render_area(&self, area: Bounds) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = self.render_into(&mut out, area);
        out
    }

    fn render_into(&self, out: &mut impl Write, area: Bounds) -> fmt::Result {
        for y in area.min_y()..=area.max_y() {
            self.render_cells(out, y, area)?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn render_cells(&self, out: &mut impl Write, y: i64, area: Bounds) -> fmt::Result {
        for x in area.min_x()..=area.max_x() {
            write!(out, "{}", self.get_or_empty(Loc::new(x, y)))?;
        }
        Ok(())
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f, self.bounds)
    }
}
