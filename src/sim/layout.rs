use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::infra::{AgentError, Position};
use crate::state::WallSet;

/// Small maze used when no layout file is configured.
pub const DEFAULT_LAYOUT: &str = "\
%%%%%%%%%%%%%%%%%%%%
%......%G  G%......%
%.%%...%%  %%...%%.%
%.%....%....%...%%.%
%.%%.%.%%.%%%.%.%%.%
%........P.........%
%%%%%%%%%%%%%%%%%%%%";

/// Parsed ASCII maze: `%` wall, `.` food, `P` agent, `G` pursuer.
#[derive(Debug, Clone)]
pub struct Layout {
    pub walls: WallSet,
    pub food: HashSet<Position>,
    pub agent_start: Position,
    pub pursuer_starts: Vec<Position>,
}

impl Layout {
    pub fn load(path: &Path) -> Result<Self, AgentError> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    pub fn width(&self) -> i32 {
        self.walls.width
    }

    pub fn height(&self) -> i32 {
        self.walls.height
    }
}

impl FromStr for Layout {
    type Err = AgentError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(AgentError::InvalidLayout {
                line: 1,
                reason: "layout is empty".to_string(),
            });
        };
        let width = first.chars().count();

        let mut walls = WallSet::new(width as i32, rows.len() as i32);
        let mut food = HashSet::new();
        let mut agent_start = None;
        let mut pursuer_starts = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(AgentError::InvalidLayout {
                    line: y + 1,
                    reason: format!("expected {} columns, found {}", width, row.chars().count()),
                });
            }
            for (x, cell) in row.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                match cell {
                    '%' => {
                        walls.insert(pos);
                    }
                    '.' => {
                        food.insert(pos);
                    }
                    'P' if agent_start.is_none() => agent_start = Some(pos),
                    'P' => {
                        return Err(AgentError::InvalidLayout {
                            line: y + 1,
                            reason: "more than one agent start".to_string(),
                        });
                    }
                    'G' => pursuer_starts.push(pos),
                    ' ' => {}
                    other => {
                        return Err(AgentError::InvalidLayout {
                            line: y + 1,
                            reason: format!("unexpected character {:?}", other),
                        });
                    }
                }
            }
        }

        let agent_start = agent_start.ok_or_else(|| AgentError::InvalidLayout {
            line: rows.len(),
            reason: "no agent start".to_string(),
        })?;

        Ok(Self {
            walls,
            food,
            agent_start,
            pursuer_starts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_parses() {
        let layout: Layout = DEFAULT_LAYOUT.parse().unwrap();
        assert_eq!(layout.width(), 20);
        assert_eq!(layout.height(), 7);
        assert_eq!(layout.agent_start, Position::new(9, 5));
        assert_eq!(layout.pursuer_starts, vec![Position::new(8, 1), Position::new(11, 1)]);
        assert!(!layout.food.is_empty());
        assert!(layout.walls.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = "%%%\n%P\n%%%".parse::<Layout>();
        assert!(matches!(result, Err(AgentError::InvalidLayout { line: 2, .. })));
    }

    #[test]
    fn test_missing_agent_rejected() {
        let result = "%%%\n%.%\n%%%".parse::<Layout>();
        assert!(matches!(result, Err(AgentError::InvalidLayout { .. })));
    }

    #[test]
    fn test_unknown_character_rejected() {
        let result = "%%%\n%P?\n%%%".parse::<Layout>();
        assert!(matches!(
            result,
            Err(AgentError::InvalidLayout { line: 2, reason }) if reason.contains('?')
        ));
    }
}
