use std::fmt;

/// The direction the blank moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Successors are generated in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renders a solution as `up; left; down; ` in execution order.
pub fn format_actions(actions: &[Direction]) -> String {
    let mut output = String::new();
    for action in actions {
        output.push_str(action.label());
        output.push_str("; ");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_actions() {
        let actions = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        assert_eq!(format_actions(&actions), "up; left; down; right; ");
        assert_eq!(format_actions(&[]), "");
    }

    #[test]
    fn test_offsets_are_unit_steps() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            assert_eq!(dx.abs() + dy.abs(), 1, "{direction}");
        }
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Right.offset(), (1, 0));
    }
}
