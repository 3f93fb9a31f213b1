use std::fmt;

/// Grid cell. `y` grows downwards, so North is `y - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance.
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Neighbors in expansion order: North, East, South, West.
    pub fn neighbors(&self) -> [(Action, Position); 4] {
        [
            (Action::North, Position::new(self.x, self.y - 1)),
            (Action::East, Position::new(self.x + 1, self.y)),
            (Action::South, Position::new(self.x, self.y + 1)),
            (Action::West, Position::new(self.x - 1, self.y)),
        ]
    }

    /// Smallest Manhattan distance to any of `others`, `None` when empty.
    pub fn min_distance<'a>(&self, others: impl IntoIterator<Item = &'a Position>) -> Option<i32> {
        others.into_iter().map(|p| self.distance(p)).min()
    }

    /// Closest of `candidates`, ties broken by position ordering.
    pub fn nearest<'a>(&self, candidates: impl IntoIterator<Item = &'a Position>) -> Option<Position> {
        candidates
            .into_iter()
            .min_by_key(|p| (self.distance(p), **p))
            .copied()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    North,
    South,
    East,
    West,
    Stop,
}

impl Action {
    /// Engine enumeration order.
    pub const ALL: [Action; 5] = [
        Action::North,
        Action::South,
        Action::East,
        Action::West,
        Action::Stop,
    ];

    pub fn apply(&self, pos: Position) -> Position {
        match self {
            Action::North => Position::new(pos.x, pos.y - 1),
            Action::South => Position::new(pos.x, pos.y + 1),
            Action::East => Position::new(pos.x + 1, pos.y),
            Action::West => Position::new(pos.x - 1, pos.y),
            Action::Stop => pos,
        }
    }

    pub fn left(&self) -> Action {
        match self {
            Action::North => Action::West,
            Action::West => Action::South,
            Action::South => Action::East,
            Action::East => Action::North,
            Action::Stop => Action::Stop,
        }
    }

    pub fn right(&self) -> Action {
        match self {
            Action::North => Action::East,
            Action::East => Action::South,
            Action::South => Action::West,
            Action::West => Action::North,
            Action::Stop => Action::Stop,
        }
    }

    pub fn reverse(&self) -> Action {
        match self {
            Action::North => Action::South,
            Action::South => Action::North,
            Action::East => Action::West,
            Action::West => Action::East,
            Action::Stop => Action::Stop,
        }
    }

    pub fn as_str_name(&self) -> &'static str {
        match self {
            Action::North => "North",
            Action::South => "South",
            Action::East => "East",
            Action::West => "West",
            Action::Stop => "Stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}
