//! Atom identities: radius-0 seeds and the per-radius recombination step.

use crate::biotype::BioTypes;
use crate::crc::{crc32, Crc32};
use crate::element;
use crate::excavate::ExcavatedGraph;
use crate::stereo::Rubric;

/// Neighbor tag used in place of the bond order for a strictly aromatic bond.
pub(crate) const AROMATIC_TAG: u8 = 0xF;

/// Elemental (ECFP) seeds: a checksum over heavy degree, free valence,
/// element, charge, hydrogens and ring membership. Hydrogen slots get 0.
pub(crate) fn elemental_seeds(graph: &ExcavatedGraph) -> Vec<i32> {
    (0..graph.atom_count())
        .map(|atom| {
            if graph.is_active(atom) {
                elemental_seed(graph, atom)
            } else {
                0
            }
        })
        .collect()
}

fn elemental_seed(graph: &ExcavatedGraph, atom: usize) -> i32 {
    let atomic_num = graph.atomic_num[atom];
    let heavy = graph.neighbors(atom).len() as i32;
    let hydrogens = graph.hydrogen_count(atom) as i32;
    let degree = element::normal_bonding(atomic_num) as i32 - hydrogens;
    let in_ring = (graph.ring_block(atom) > 0) as i32;
    let bytes = [
        ((heavy << 4) | degree) as u8,
        atomic_num,
        (graph.charge[atom] as i32 + 128) as u8,
        ((hydrogens << 4) | in_ring) as u8,
    ];
    crc32(&bytes) as i32
}

/// Functional (FCFP) seeds: the pharmacophore mask itself.
pub(crate) fn functional_seeds(graph: &ExcavatedGraph, types: &BioTypes) -> Vec<i32> {
    (0..graph.atom_count())
        .map(|atom| {
            if graph.is_active(atom) {
                types.mask(atom) as i32
            } else {
                0
            }
        })
        .collect()
}

/// Rolls identities outward one radius at a time.
///
/// Each atom's rubric is spent the first time its four carriers have
/// pairwise distinct identities; the parity byte is folded into that
/// iteration's identity and never again.
pub(crate) struct CircularIterator<'a> {
    graph: &'a ExcavatedGraph,
    rubrics: Vec<Option<Rubric>>,
    resolved_at: Vec<Option<u32>>,
    pairs: Vec<(u8, i32)>,
}

impl<'a> CircularIterator<'a> {
    pub fn new(graph: &'a ExcavatedGraph, rubrics: Vec<Option<Rubric>>) -> Self {
        let n = graph.atom_count();
        Self {
            graph,
            rubrics,
            resolved_at: vec![None; n],
            pairs: Vec::new(),
        }
    }

    /// Identities at `radius` given those at `radius - 1`.
    pub fn iterate(&mut self, radius: u32, identity: &[i32]) -> Vec<i32> {
        let graph = self.graph;
        let mut next = identity.to_vec();
        for atom in graph.active_atoms() {
            self.pairs.clear();
            for (&nb, &bond) in graph.atom_adj[atom].iter().zip(&graph.bond_adj[atom]) {
                let tag = if graph.is_aromatic_bond(bond) {
                    AROMATIC_TAG
                } else {
                    graph.bond_order[bond]
                };
                self.pairs.push((tag, identity[nb]));
            }
            gnome_sort(&mut self.pairs);

            let mut crc = Crc32::new();
            crc.update(&[radius as u8]);
            crc.update(&identity[atom].to_be_bytes());
            for &(tag, id) in &self.pairs {
                crc.update(&[tag]);
                crc.update(&id.to_be_bytes());
            }
            if let Some(parity) = self.resolve_chirality(atom, radius, identity) {
                crc.update(&[parity]);
            }
            next[atom] = crc.value() as i32;
        }
        next
    }

    /// Radius at which `atom`'s rubric was folded in, if it was.
    #[cfg(test)]
    pub fn resolved_at(&self, atom: usize) -> Option<u32> {
        self.resolved_at[atom]
    }

    pub fn num_resolved(&self) -> usize {
        self.resolved_at.iter().filter(|r| r.is_some()).count()
    }

    fn resolve_chirality(&mut self, atom: usize, radius: u32, identity: &[i32]) -> Option<u8> {
        let rubric = self.rubrics[atom]?;
        let ids = rubric.map(|carrier| carrier.map_or(0, |nb| identity[nb]));
        for i in 0..4 {
            for j in i + 1..4 {
                if ids[i] == ids[j] {
                    return None;
                }
            }
        }
        let mut inversions = 0;
        for i in 0..4 {
            for j in i + 1..4 {
                if ids[i] > ids[j] {
                    inversions += 1;
                }
            }
        }
        self.rubrics[atom] = None;
        self.resolved_at[atom] = Some(radius);
        Some(if inversions % 2 == 0 { 1 } else { 2 })
    }
}

/// Ascending sort that steps back one place after every swap.
fn gnome_sort(pairs: &mut [(u8, i32)]) {
    let mut p = 0;
    while p + 1 < pairs.len() {
        if pairs[p] > pairs[p + 1] {
            pairs.swap(p, p + 1);
            p = p.saturating_sub(1);
        } else {
            p += 1;
        }
    }
}
