use std::collections::{HashSet, VecDeque};

use crate::infra::{Action, AgentError, Position};
use crate::state::WallSet;

/// Result of a single path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    AlreadyAtGoal,
    Unreachable,
    Path(VecDeque<Action>),
}

impl PathOutcome {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, PathOutcome::Unreachable)
    }

    /// Flatten into a plain move sequence; both non-path outcomes become empty.
    pub fn into_actions(self) -> VecDeque<Action> {
        match self {
            PathOutcome::Path(actions) => actions,
            PathOutcome::AlreadyAtGoal | PathOutcome::Unreachable => VecDeque::new(),
        }
    }
}

/// Breadth-first search over the 4-connected grid.
pub struct PathFinder;

impl PathFinder {
    /// Shortest move sequence from `start` to `goal`, empty when the goal is
    /// the start cell or cannot be reached.
    pub fn find_path(start: Position, goal: Position, walls: &WallSet) -> Vec<Action> {
        Self::search(start, goal, walls).into_actions().into()
    }

    /// Moves towards `goal` for a policy that caches them. Empty when already
    /// there; an unreachable goal is an error the caller recovers from.
    pub fn route(
        start: Position,
        goal: Position,
        walls: &WallSet,
    ) -> Result<VecDeque<Action>, AgentError> {
        match Self::search(start, goal, walls) {
            PathOutcome::Path(actions) => Ok(actions),
            PathOutcome::AlreadyAtGoal => Ok(VecDeque::new()),
            PathOutcome::Unreachable => Err(AgentError::UnreachableGoal { from: start, goal }),
        }
    }

    #[tracing::instrument(level = "trace", skip(walls))]
    pub fn search(start: Position, goal: Position, walls: &WallSet) -> PathOutcome {
        if start == goal {
            return PathOutcome::AlreadyAtGoal;
        }
        if walls.is_blocked(&goal) {
            return PathOutcome::Unreachable;
        }

        let mut frontier: VecDeque<(Position, VecDeque<Action>)> = VecDeque::new();
        let mut explored: HashSet<Position> = HashSet::new();
        frontier.push_back((start, VecDeque::new()));

        while let Some((current, path)) = frontier.pop_front() {
            if current == goal {
                return PathOutcome::Path(path);
            }
            if !explored.insert(current) {
                continue;
            }

            for (action, neighbor) in current.neighbors() {
                if explored.contains(&neighbor) || walls.is_blocked(&neighbor) {
                    continue;
                }
                let mut next_path = path.clone();
                next_path.push_back(action);
                frontier.push_back((neighbor, next_path));
            }
        }

        PathOutcome::Unreachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(start: Position, actions: &[Action], walls: &WallSet) -> Position {
        actions.iter().fold(start, |pos, action| {
            let next = action.apply(pos);
            assert!(!walls.is_blocked(&next), "Path crosses blocked cell {:?}", next);
            next
        })
    }

    #[test]
    fn test_open_grid_corner_to_corner() {
        let walls = WallSet::new(5, 5);
        let start = Position::new(0, 0);
        let goal = Position::new(4, 4);

        let path = PathFinder::find_path(start, goal, &walls);
        assert_eq!(path.len(), 8);
        assert_eq!(path.iter().filter(|a| **a == Action::East).count(), 4);
        assert_eq!(path.iter().filter(|a| **a == Action::South).count(), 4);
        assert_eq!(walk(start, &path, &walls), goal);
    }

    #[test]
    fn test_path_is_deterministic() {
        let walls = WallSet::new(5, 5);
        let first = PathFinder::find_path(Position::new(0, 0), Position::new(4, 4), &walls);
        let second = PathFinder::find_path(Position::new(0, 0), Position::new(4, 4), &walls);
        assert_eq!(first, second);
        // East is expanded before South, so the path leads with it.
        assert_eq!(first[0], Action::East);
    }

    #[test]
    fn test_length_matches_manhattan_distance_on_open_grid() {
        let walls = WallSet::new(6, 4);
        let start = Position::new(3, 1);
        for x in 0..6 {
            for y in 0..4 {
                let goal = Position::new(x, y);
                let path = PathFinder::find_path(start, goal, &walls);
                assert_eq!(path.len() as i32, start.distance(&goal));
                assert_eq!(walk(start, &path, &walls), goal);
            }
        }
    }

    #[test]
    fn test_routes_around_wall() {
        // Vertical wall at x=2 with a gap at y=4
        let mut walls = WallSet::new(5, 5);
        for y in 0..4 {
            walls.insert(Position::new(2, y));
        }
        let start = Position::new(0, 0);
        let goal = Position::new(4, 0);

        let path = PathFinder::find_path(start, goal, &walls);
        assert_eq!(path.len(), 12);
        assert_eq!(walk(start, &path, &walls), goal);
    }

    #[test]
    fn test_unreachable_goal() {
        let mut walls = WallSet::new(5, 5);
        for y in 0..5 {
            walls.insert(Position::new(2, y));
        }
        let start = Position::new(0, 0);
        let goal = Position::new(4, 4);

        assert_eq!(PathFinder::search(start, goal, &walls), PathOutcome::Unreachable);
        assert!(PathFinder::find_path(start, goal, &walls).is_empty());
    }

    #[test]
    fn test_route_reports_unreachable_goal() {
        let mut walls = WallSet::new(3, 3);
        walls.insert(Position::new(1, 0));
        walls.insert(Position::new(0, 1));
        let start = Position::new(2, 2);
        let goal = Position::new(0, 0);

        let result = PathFinder::route(start, goal, &walls);
        assert!(matches!(
            result,
            Err(AgentError::UnreachableGoal { from, goal: g }) if from == start && g == goal
        ));
        assert_eq!(PathFinder::route(start, start, &walls).unwrap().len(), 0);
        assert_eq!(PathFinder::route(start, Position::new(2, 0), &walls).unwrap().len(), 2);
    }

    #[test]
    fn test_goal_inside_wall_is_unreachable() {
        let mut walls = WallSet::new(3, 3);
        walls.insert(Position::new(1, 1));
        let outcome = PathFinder::search(Position::new(0, 0), Position::new(1, 1), &walls);
        assert!(outcome.is_unreachable());
    }

    #[test]
    fn test_start_equals_goal() {
        let walls = WallSet::new(3, 3);
        let pos = Position::new(1, 1);
        assert_eq!(PathFinder::search(pos, pos, &walls), PathOutcome::AlreadyAtGoal);
        assert!(PathFinder::find_path(pos, pos, &walls).is_empty());
    }
}
