use petgraph::graph::NodeIndex;

use crate::aromaticity::StrictAromaticity;
use crate::element;
use crate::mol::Mol;
use crate::rings::RingInfo;
use crate::traits::{FingerprintAtom, FingerprintBond};

/// Heavy-atom view of a molecule. Per-atom arrays span every atom slot;
/// hydrogen slots stay inactive.
#[derive(Debug, Clone)]
pub struct ExcavatedGraph {
    pub(crate) active: Vec<bool>,
    pub(crate) atomic_num: Vec<u8>,
    pub(crate) charge: Vec<i8>,
    pub(crate) atom_adj: Vec<Vec<usize>>,
    pub(crate) bond_adj: Vec<Vec<usize>>,
    /// Hydrogen graph nodes attached to each heavy atom.
    pub(crate) explicit_h: Vec<Vec<usize>>,
    pub(crate) hcount: Vec<u8>,
    pub(crate) bond_order: Vec<u8>,
    /// Bonds the input already declared aromatic.
    pub(crate) declared_aromatic: Vec<bool>,
    /// Atoms whose pi bond is only implied by declared-aromatic bonds.
    pub(crate) declared_pi: Vec<bool>,
    pub(crate) rings: RingInfo,
    pub(crate) aromaticity: StrictAromaticity,
}

impl ExcavatedGraph {
    pub fn new<A, B>(mol: &Mol<A, B>) -> Self
    where
        A: FingerprintAtom,
        B: FingerprintBond,
    {
        let na = mol.atom_count();
        let atomic_num: Vec<u8> = mol.atoms().map(|i| mol.atom(i).atomic_num()).collect();
        let charge: Vec<i8> = mol.atoms().map(|i| mol.atom(i).formal_charge()).collect();
        let active: Vec<bool> = atomic_num.iter().map(|&z| z > 1).collect();

        let bond_order: Vec<u8> = mol
            .bonds()
            .map(|e| mol.bond(e).bond_order().as_u8())
            .collect();
        let declared_aromatic: Vec<bool> = mol.bonds().map(|e| mol.bond(e).is_aromatic()).collect();

        let mut atom_adj = vec![Vec::new(); na];
        let mut bond_adj = vec![Vec::new(); na];
        let mut explicit_h = vec![Vec::new(); na];
        let mut order_sum = vec![0i32; na];

        for edge in mol.bonds() {
            let Some((a, b)) = mol.bond_endpoints(edge) else {
                continue;
            };
            let (a, b) = (a.index(), b.index());
            order_sum[a] += bond_order[edge.index()] as i32;
            order_sum[b] += bond_order[edge.index()] as i32;
            match (active[a], active[b]) {
                (true, true) => {
                    atom_adj[a].push(b);
                    bond_adj[a].push(edge.index());
                    atom_adj[b].push(a);
                    bond_adj[b].push(edge.index());
                }
                (true, false) if atomic_num[b] == 1 => explicit_h[a].push(b),
                (false, true) if atomic_num[a] == 1 => explicit_h[b].push(a),
                _ => {}
            }
        }

        let declared_pi: Vec<bool> = (0..na)
            .map(|i| {
                bond_adj[i].iter().any(|&b| declared_aromatic[b])
                    && !bond_adj[i].iter().any(|&b| bond_order[b] == 2)
            })
            .collect();
        for (sum, &pi) in order_sum.iter_mut().zip(&declared_pi) {
            *sum += pi as i32;
        }

        let hcount: Vec<u8> = (0..na)
            .map(|i| {
                if !active[i] {
                    return 0;
                }
                let implicit = match mol.atom(NodeIndex::new(i)).hydrogen_count() {
                    Some(h) => h,
                    None => derived_hydrogens(atomic_num[i], charge[i], order_sum[i]),
                };
                implicit.saturating_add(explicit_h[i].len() as u8)
            })
            .collect();

        let mut graph = Self {
            active,
            atomic_num,
            charge,
            atom_adj,
            bond_adj,
            explicit_h,
            hcount,
            bond_order,
            declared_aromatic,
            declared_pi,
            rings: RingInfo::default(),
            aromaticity: StrictAromaticity::default(),
        };
        graph.rings = RingInfo::small_rings(&graph);
        graph.aromaticity = StrictAromaticity::perceive(&graph);
        graph
    }

    /// Number of atom slots, hydrogens included.
    pub fn atom_count(&self) -> usize {
        self.active.len()
    }

    pub fn heavy_atom_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn is_active(&self, atom: usize) -> bool {
        self.active[atom]
    }

    pub fn active_atoms(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.active.len()).filter(|&i| self.active[i])
    }

    pub fn neighbors(&self, atom: usize) -> &[usize] {
        &self.atom_adj[atom]
    }

    /// Suppressed plus explicit hydrogens on `atom`.
    pub fn hydrogen_count(&self, atom: usize) -> u8 {
        self.hcount[atom]
    }

    pub fn rings(&self) -> &RingInfo {
        &self.rings
    }

    pub fn aromaticity(&self) -> &StrictAromaticity {
        &self.aromaticity
    }

    pub fn ring_block(&self, atom: usize) -> usize {
        self.rings.ring_block(atom)
    }

    pub fn is_aromatic_atom(&self, atom: usize) -> bool {
        self.aromaticity.is_aromatic_atom(atom)
    }

    pub fn is_aromatic_bond(&self, bond: usize) -> bool {
        self.aromaticity.is_aromatic_bond(bond)
    }

    pub fn find_bond(&self, a: usize, b: usize) -> Option<usize> {
        self.atom_adj[a]
            .iter()
            .position(|&nb| nb == b)
            .map(|i| self.bond_adj[a][i])
    }

    pub(crate) fn has_bond_of_order(&self, atom: usize, order: u8) -> bool {
        self.bond_adj[atom]
            .iter()
            .any(|&b| self.bond_order[b] == order)
    }

    /// A double bond, or a declared-aromatic bond standing in for one.
    pub(crate) fn has_pi_bond(&self, atom: usize) -> bool {
        self.declared_pi[atom] || self.has_bond_of_order(atom, 2)
    }
}

// Carbon loses a bond for either sign of charge; heteroatoms gain one per
// positive charge.
fn derived_hydrogens(atomic_num: u8, charge: i8, order_sum: i32) -> u8 {
    let Some(valence) = element::implicit_valence(atomic_num) else {
        return 0;
    };
    let correction = if atomic_num == 6 {
        -(charge as i32).abs()
    } else {
        charge as i32
    };
    (valence as i32 - order_sum + correction).clamp(0, u8::MAX as i32) as u8
}
