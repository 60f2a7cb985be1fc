//! A scripted game tree implementing [`Rules`], for steering selectors into
//! exact situations without finding a real position for each.

use chess_core::{Board, Color, GameStatus, LegalMoves, Move, Piece, PieceKind, Position, Rules};

pub struct Node {
    board: Board,
    side: Color,
    /// Reported when the node has no children.
    leaf_status: GameStatus,
    children: Vec<(Move, usize)>,
}

pub struct TreeGame {
    nodes: Vec<Node>,
    path: Vec<usize>,
}

impl TreeGame {
    /// Tree with a single root node built from `fen`.
    pub fn new(fen: &str) -> Self {
        let pos = Position::from_fen(fen).unwrap();
        Self {
            nodes: vec![Node {
                board: pos.board,
                side: pos.side_to_move,
                leaf_status: GameStatus::Ongoing,
                children: Vec::new(),
            }],
            path: vec![0],
        }
    }

    pub const ROOT: usize = 0;

    /// Adds a child of `parent` reached by a move tagged `tag`.
    pub fn add(&mut self, parent: usize, tag: u8, fen: &str, leaf_status: GameStatus) -> usize {
        let pos = Position::from_fen(fen).unwrap();
        let id = self.nodes.len();
        self.nodes.push(Node {
            board: pos.board,
            side: pos.side_to_move,
            leaf_status,
            children: Vec::new(),
        });
        self.nodes[parent].children.push((tag_move(tag), id));
        id
    }

    pub fn moves_at(&self, id: usize) -> Vec<Move> {
        self.nodes[id].children.iter().map(|&(mv, _)| mv).collect()
    }

    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    fn current(&self) -> &Node {
        &self.nodes[*self.path.last().unwrap()]
    }
}

/// Distinct placeholder move identified by `tag`.
pub fn tag_move(tag: u8) -> Move {
    Move::new(tag % 64, (tag + 1) % 64, Piece::new(Color::White, PieceKind::Pawn), None)
}

impl Rules for TreeGame {
    fn board(&self) -> &Board {
        &self.current().board
    }

    fn side_to_move(&self) -> Color {
        self.current().side
    }

    fn legal_moves(&mut self) -> LegalMoves {
        let node = self.current();
        let moves: Vec<Move> = node.children.iter().map(|&(mv, _)| mv).collect();
        let status = if moves.is_empty() {
            node.leaf_status
        } else {
            GameStatus::Ongoing
        };
        LegalMoves { moves, status }
    }

    fn make_move(&mut self, mv: Move) {
        let next = self
            .current()
            .children
            .iter()
            .find(|&&(m, _)| m == mv)
            .map(|&(_, id)| id)
            .expect("move is not scripted here");
        self.path.push(next);
    }

    fn undo_move(&mut self) -> Option<Move> {
        if self.path.len() < 2 {
            return None;
        }
        let child = self.path.pop()?;
        let parent = *self.path.last()?;
        self.nodes[parent]
            .children
            .iter()
            .find(|&&(_, id)| id == child)
            .map(|&(mv, _)| mv)
    }
}
