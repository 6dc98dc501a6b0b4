//! Shared helpers for integration tests
//!
//! `TreePosition` is a synthetic game tree: every node carries a piece placement (so the real
//! evaluator scores it) and a list of child nodes reachable by "moves" (the child ids).

#![allow(dead_code)]

use chess_search::{
    evaluate_position, select_candidates, ChessEngineError, ChessEngineResult, Piece, PieceKind,
    Score, SearchPosition, SearchStats, Side, SCORE_INF,
};
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub pieces: Vec<(usize, Piece)>,
    pub children: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct TreePosition {
    nodes: Vec<TreeNode>,
    path: Vec<usize>,
    root_side: Side,
    rejected: Option<usize>,
}

impl TreePosition {
    /// Tree rooted at node 0
    pub fn new(nodes: Vec<TreeNode>, root_side: Side) -> Self {
        assert!(!nodes.is_empty());
        Self {
            nodes,
            path: vec![0],
            root_side,
            rejected: None,
        }
    }

    /// Make `push` refuse `node` even though its parent lists it
    pub fn with_rejected(mut self, node: usize) -> Self {
        self.rejected = Some(node);
        self
    }

    pub fn applied(&self) -> usize {
        self.path.len() - 1
    }

    pub fn current(&self) -> usize {
        *self.path.last().unwrap()
    }

    fn node(&self) -> &TreeNode {
        &self.nodes[self.current()]
    }
}

impl SearchPosition for TreePosition {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        self.node().children.clone()
    }

    fn push(&mut self, mv: &usize) -> ChessEngineResult<()> {
        if !self.node().children.contains(mv) || self.rejected == Some(*mv) {
            return Err(ChessEngineError::IllegalMove { mv: mv.to_string() });
        }
        self.path.push(*mv);
        Ok(())
    }

    fn pop(&mut self) -> ChessEngineResult<()> {
        if self.path.len() == 1 {
            return Err(ChessEngineError::StackUnderflow { depth: 0 });
        }
        self.path.pop();
        Ok(())
    }

    fn is_game_over(&self) -> bool {
        self.node().children.is_empty()
    }

    fn piece_at(&self, square: usize) -> Option<Piece> {
        self.node()
            .pieces
            .iter()
            .find(|(s, _)| *s == square)
            .map(|(_, p)| *p)
    }

    fn side_to_move(&self) -> Side {
        if self.applied() % 2 == 0 {
            self.root_side
        } else {
            self.root_side.opponent()
        }
    }
}

/// Incremental tree construction; node 0 is the root
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<TreeNode>,
}

impl TreeBuilder {
    pub fn new(root_pieces: Vec<(usize, Piece)>) -> Self {
        Self {
            nodes: vec![TreeNode {
                pieces: root_pieces,
                children: Vec::new(),
            }],
        }
    }

    /// Add a child under `parent` and return its id
    pub fn child(&mut self, parent: usize, pieces: Vec<(usize, Piece)>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            pieces,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn build(self, root_side: Side) -> TreePosition {
        TreePosition::new(self.nodes, root_side)
    }
}

pub fn white(kind: PieceKind, square: usize) -> (usize, Piece) {
    (square, Piece::white(kind))
}

pub fn black(kind: PieceKind, square: usize) -> (usize, Piece) {
    (square, Piece::black(kind))
}

/// Random tree with up to `branching` children per node and at most `depth` plies
pub fn random_tree(rng: &mut StdRng, depth: u32, branching: usize) -> TreePosition {
    let mut builder = TreeBuilder::new(random_pieces(rng));
    let mut frontier = vec![(0usize, 0u32)];

    while let Some((parent, level)) = frontier.pop() {
        if level == depth {
            continue;
        }
        let width = rng.random_range(0..=branching);
        for _ in 0..width {
            let id = builder.child(parent, random_pieces(rng));
            frontier.push((id, level + 1));
        }
    }

    let side = if rng.random_bool(0.5) {
        Side::White
    } else {
        Side::Black
    };
    builder.build(side)
}

fn random_pieces(rng: &mut StdRng) -> Vec<(usize, Piece)> {
    let count = rng.random_range(1..=4);
    (0..count)
        .map(|_| {
            let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
            let side = if rng.random_bool(0.5) {
                Side::White
            } else {
                Side::Black
            };
            (rng.random_range(0..64), Piece::new(kind, side))
        })
        .collect()
}

/// Minimax over the same forward-pruned candidate lists, without alpha-beta
pub fn brute_force<P: SearchPosition>(position: &mut P, depth: u32, maximizing: bool) -> Score {
    if depth == 0 || position.is_game_over() {
        return evaluate_position(position);
    }

    let mut stats = SearchStats::default();
    let moves = position.legal_moves();
    let candidates = select_candidates(position, moves, maximizing, &mut stats).unwrap();

    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
    for candidate in candidates {
        position.push(&candidate.mv).unwrap();
        let score = brute_force(position, depth - 1, !maximizing);
        position.pop().unwrap();
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Minimax over every legal move (no candidate truncation, no alpha-beta)
pub fn full_minimax<P: SearchPosition>(position: &mut P, depth: u32, maximizing: bool) -> Score {
    if depth == 0 || position.is_game_over() {
        return evaluate_position(position);
    }

    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
    for mv in position.legal_moves() {
        position.push(&mv).unwrap();
        let score = full_minimax(position, depth - 1, !maximizing);
        position.pop().unwrap();
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
