//! Search node storage shared by the solver and the shuffler.
//!
//! Nodes live in one `Vec` for the whole search and refer to their parent by
//! index, so dropping the arena frees every node at once. The frontier is a
//! min-heap of `(primary, secondary, id)` keys; the order policy decides
//! what goes into the first two slots.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use crate::moves::Move;
use crate::state::TileState;

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub state: TileState,
    pub blank: usize,
    pub g: u32,
    pub h: u32,
    /// Step from the parent; `None` only for the root.
    pub mv: Option<Move>,
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn root(state: TileState, blank: usize, h: u32) -> Self {
        Self {
            state,
            blank,
            g: 0,
            h,
            mv: None,
            parent: None,
        }
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Priority of a node in the frontier; smaller keys pop first.
pub trait FrontierOrder {
    /// `seq` is the number of nodes inserted before this one.
    fn key(node: &Node, seq: u64) -> (u32, u64);
}

/// A*: lowest `g + h`, ties broken by packed state.
pub struct BestFirst;

impl FrontierOrder for BestFirst {
    fn key(node: &Node, _seq: u64) -> (u32, u64) {
        (node.f(), node.state)
    }
}

/// Breadth-first: lowest depth, ties broken by insertion order.
pub struct BreadthFirst;

impl FrontierOrder for BreadthFirst {
    fn key(node: &Node, seq: u64) -> (u32, u64) {
        (node.g, seq)
    }
}

pub struct NodeArena<O: FrontierOrder> {
    nodes: Vec<Node>,
    open: BinaryHeap<Reverse<(u32, u64, NodeId)>>,
    order: PhantomData<O>,
}

impl<O: FrontierOrder> NodeArena<O> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            order: PhantomData,
        }
    }

    /// Stores `node` and queues it on the frontier.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        let (primary, secondary) = O::key(&node, id as u64);
        self.nodes.push(node);
        self.open.push(Reverse((primary, secondary, id)));
        id
    }

    /// Removes the best frontier entry. Entries for states that were already
    /// expanded are not filtered here; callers skip them.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.open.pop().map(|Reverse((_, _, id))| id)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn frontier_len(&self) -> usize {
        self.open.len()
    }

    /// Moves from the root to `id`, in order.
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.nodes[id].g as usize);
        let mut current = Some(id);
        while let Some(at) = current {
            let node = &self.nodes[at];
            if let Some(mv) = node.mv {
                moves.push(mv);
            }
            current = node.parent;
        }
        moves.reverse();
        moves
    }
}

impl<O: FrontierOrder> Default for NodeArena<O> {
    fn default() -> Self {
        Self::new()
    }
}
