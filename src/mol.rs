//! The molecular graph the fingerprinter reads.
//!
//! [`Mol`] is generic over its atom and bond payloads so callers can attach
//! coordinates (see [`wrappers`](crate::wrappers)) or their own types, as
//! long as they implement the accessor traits in [`traits`](crate::traits).

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// One of the four carriers named by a stereo annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomId {
    /// A graph atom.
    Node(NodeIndex),
    /// The `k`th suppressed hydrogen of the given atom.
    VirtualH(NodeIndex, u8),
}

/// Sense in which `above[1..]` run when seen from `above[0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winding {
    #[default]
    Anticlockwise,
    Clockwise,
}

/// Tetrahedral configuration at `center`.
///
/// Looking from `above[0]` toward the center, `above[1]`, `above[2]` and
/// `above[3]` run in the direction given by `winding`. A suppressed hydrogen
/// is written as [`AtomId::VirtualH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TetrahedralStereo {
    pub center: NodeIndex,
    pub above: [AtomId; 4],
    pub winding: Winding,
}

impl TetrahedralStereo {
    /// An anticlockwise configuration.
    pub fn new(center: NodeIndex, above: [AtomId; 4]) -> Self {
        Self {
            center,
            above,
            winding: Winding::Anticlockwise,
        }
    }

    pub fn clockwise(center: NodeIndex, above: [AtomId; 4]) -> Self {
        Self {
            center,
            above,
            winding: Winding::Clockwise,
        }
    }

    /// The mirror-image configuration.
    pub fn inverted(self) -> Self {
        let [a, b, c, d] = self.above;
        Self {
            above: [a, b, d, c],
            ..self
        }
    }

    /// The same configuration written anticlockwise.
    pub fn anticlockwise(self) -> Self {
        match self.winding {
            Winding::Anticlockwise => self,
            Winding::Clockwise => Self::new(self.center, self.inverted().above),
        }
    }
}

/// Undirected molecular graph plus per-center stereo annotations.
///
/// Bonds remember the order of their endpoints: the first atom passed to
/// [`add_bond`](Mol::add_bond) is the begin atom that wedge markers are read
/// from.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
    tetrahedral_stereo: Vec<TetrahedralStereo>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            tetrahedral_stereo: Vec::new(),
        }
    }

    pub fn with_capacity(atoms: usize, bonds: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(atoms, bonds),
            tetrahedral_stereo: Vec::new(),
        }
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    /// Adds a bond whose begin atom is `a`.
    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    /// Endpoints of a bond as `(begin, end)`.
    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    pub fn tetrahedral_stereo(&self) -> &[TetrahedralStereo] {
        &self.tetrahedral_stereo
    }

    pub fn set_tetrahedral_stereo(&mut self, stereo: Vec<TetrahedralStereo>) {
        self.tetrahedral_stereo = stereo;
    }

    pub fn tetrahedral_stereo_for(&self, center: NodeIndex) -> Option<&TetrahedralStereo> {
        self.tetrahedral_stereo.iter().find(|s| s.center == center)
    }

    /// Records the configuration at `stereo.center`, replacing any earlier
    /// annotation of the same center.
    pub fn add_tetrahedral_stereo(&mut self, stereo: TetrahedralStereo) {
        match self
            .tetrahedral_stereo
            .iter_mut()
            .find(|s| s.center == stereo.center)
        {
            Some(existing) => *existing = stereo,
            None => self.tetrahedral_stereo.push(stereo),
        }
    }

    pub fn remove_tetrahedral_stereo(&mut self, center: NodeIndex) {
        self.tetrahedral_stereo.retain(|s| s.center != center);
    }

    /// Same connectivity and annotations with every atom payload rewritten.
    /// Indices are preserved.
    pub fn map_atoms<C, F>(&self, mut f: F) -> Mol<C, B>
    where
        B: Clone,
        F: FnMut(NodeIndex, &A) -> C,
    {
        Mol {
            graph: self.graph.map(|idx, atom| f(idx, atom), |_, bond| bond.clone()),
            tetrahedral_stereo: self.tetrahedral_stereo.clone(),
        }
    }
}

impl<A: Clone, B: Clone> Mol<A, B> {
    /// Copy with every annotated center inverted.
    ///
    /// Wedge markers and coordinates are left alone, so this only mirrors
    /// molecules whose stereo is carried by annotations.
    pub fn enantiomer(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            tetrahedral_stereo: self
                .tetrahedral_stereo
                .iter()
                .map(|s| s.inverted())
                .collect(),
        }
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            tetrahedral_stereo: self.tetrahedral_stereo.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .field("tetrahedral_stereo", &self.tetrahedral_stereo)
            .finish()
    }
}
