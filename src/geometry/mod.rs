use num_traits::{Num, Signed};
use std::{fmt, ops::Add};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// 2D integer coordinate, x grows right and y grows down
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loc {
    pub x: i64,
    pub y: i64,
}

impl Loc {

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cardinal neighbours (up, right, down, left)
    /// Neighbours outside the i64 range are skipped
    pub fn neighbors_4(self) -> impl Iterator<Item = Loc> {
        [
            self.checked_add(Loc::new(0, -1)),
            self.checked_add(Loc::new(1, 0)),
            self.checked_add(Loc::new(0, 1)),
            self.checked_add(Loc::new(-1, 0)),
        ]
        .into_iter()
        .flatten()
    }

    /// Offset by `other`, None when either coordinate overflows
    pub fn checked_add(self, other: Loc) -> Option<Loc> {
        Some(Loc::new(self.x.checked_add(other.x)?, self.y.checked_add(other.y)?))
    }

    /// Manhattan distance, saturating at i64::MAX
    pub fn manhattan(self, other: Loc) -> i64 {
        let distance = self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y));
        i64::try_from(distance).unwrap_or(i64::MAX)
    }
}

/// Plain integer addition, overflows like i64 does; see [`Loc::checked_add`]
impl Add for Loc {
    type Output = Loc;

    fn add(self, other: Loc) -> Loc {
        Loc::new(self.x + other.x, self.y + other.y)
    }
}

impl From<(i64, i64)> for Loc {
    fn from((x, y): (i64, i64)) -> Self {
        Loc::new(x, y)
    }
}

impl From<[i64; 2]> for Loc {
    fn from([x, y]: [i64; 2]) -> Self {
        Loc::new(x, y)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{x: {}, y: {}}}", self.x, self.y)
    }
}


/// Axis aligned rectangle, inclusive on all four edges
/// An empty rectangle is inverted (min > max) so the first extend sets real bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {

    pub const fn new(min_x: i64, max_x: i64, min_y: i64, max_y: i64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Inverted sentinel rectangle containing nothing
    pub const fn empty() -> Self {
        Self::new(i64::MAX, i64::MIN, i64::MAX, i64::MIN)
    }

    /// Smallest rectangle covering every location
    pub fn of<I>(locs: I) -> Self
    where
        I: IntoIterator<Item = Loc>,
    {
        locs.into_iter().fold(Self::empty(), Bounds::extend)
    }

    pub fn min_x(&self) -> i64 { self.min_x }
    pub fn max_x(&self) -> i64 { self.max_x }
    pub fn min_y(&self) -> i64 { self.min_y }
    pub fn max_y(&self) -> i64 { self.max_y }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Number of columns covered, saturating at u64::MAX
    pub fn width(&self) -> u64 {
        if self.is_empty() { 0 } else { self.max_x.abs_diff(self.min_x).saturating_add(1) }
    }

    /// Number of rows covered, saturating at u64::MAX
    pub fn height(&self) -> u64 {
        if self.is_empty() { 0 } else { self.max_y.abs_diff(self.min_y).saturating_add(1) }
    }

    /// Widen the rectangle so it covers `loc`, never narrows
    pub fn extend(self, loc: Loc) -> Self {
        Self {
            min_x: self.min_x.min(loc.x),
            max_x: self.max_x.max(loc.x),
            min_y: self.min_y.min(loc.y),
            max_y: self.max_y.max(loc.y),
        }
    }

    pub fn is_inside(&self, loc: Loc) -> bool {
        self.min_x <= loc.x && loc.x <= self.max_x &&
        self.min_y <= loc.y && loc.y <= self.max_y
    }

    /// Does this rectangle cover every cell of `other`
    pub fn covers(&self, other: &Bounds) -> bool {
        other.is_empty() || (
            self.min_x <= other.min_x && other.max_x <= self.max_x &&
            self.min_y <= other.min_y && other.max_y <= self.max_y
        )
    }
}
