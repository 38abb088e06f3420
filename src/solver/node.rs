use super::*;

pub type NodeId = u32;

pub const ROOT: NodeId = 0;

/// A node of the search tree. Parents are arena indices, so a node never
/// outlives the ancestors its path is rebuilt from.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    pub parent: Option<NodeId>,
    pub action: Option<Direction>,
    pub depth: u32,
}

/// Append-only arena owning every node generated during one search.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new(root: Board) -> Self {
        Self {
            nodes: vec![SearchNode {
                board: root,
                parent: None,
                action: None,
                depth: 0,
            }],
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id as usize]
    }

    pub fn push(&mut self, board: Board, parent: NodeId, action: Direction) -> NodeId {
        let depth = self.get(parent).depth + 1;
        self.nodes.push(SearchNode {
            board,
            parent: Some(parent),
            action: Some(action),
            depth,
        });
        (self.nodes.len() - 1) as NodeId
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Actions from `id` back up to the root, goal first.
    pub fn trace_back(&self, id: NodeId) -> Vec<Direction> {
        let mut actions = Vec::with_capacity(self.get(id).depth as usize);
        let mut node = self.get(id);
        while let (Some(action), Some(parent)) = (node.action, node.parent) {
            actions.push(action);
            node = self.get(parent);
        }
        actions
    }

    /// Actions from the root down to `id`, in execution order.
    pub fn path_to(&self, id: NodeId) -> Vec<Direction> {
        let mut actions = self.trace_back(id);
        actions.reverse();
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;

    #[test]
    fn test_path_reconstruction() {
        let tiles: Vec<Tile> = [0, 1, 2, 3].into_iter().map(Tile::new).collect();
        let root = Board::new(2, 2, &tiles).unwrap();
        let mut tree = SearchTree::new(root.clone());

        let right = root.apply_move(Direction::Right).unwrap().unwrap();
        let a = tree.push(right.clone(), ROOT, Direction::Right);
        let down = right.apply_move(Direction::Down).unwrap().unwrap();
        let b = tree.push(down, a, Direction::Down);

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(b).depth, 2);
        assert_eq!(tree.get(b).parent, Some(a));
        assert_eq!(tree.trace_back(b), vec![Direction::Down, Direction::Right]);
        assert_eq!(tree.path_to(b), vec![Direction::Right, Direction::Down]);
        assert!(tree.path_to(ROOT).is_empty());
    }
}
