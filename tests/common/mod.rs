//! Molecule builders shared by the integration tests.
#![allow(dead_code)]

use circfp::{Atom, AtomId, Bond, BondOrder, Mol, TetrahedralStereo};
use petgraph::graph::NodeIndex;
use serde::Deserialize;

/// A molecule written out as atomic numbers and `(begin, end, order)` bonds.
#[derive(Debug, Deserialize)]
pub struct MolSpec {
    pub name: String,
    pub atoms: Vec<u8>,
    pub bonds: Vec<(usize, usize, u8)>,
    #[serde(default)]
    pub charges: Vec<(usize, i8)>,
}

impl MolSpec {
    pub fn build(&self) -> Mol<Atom, Bond> {
        let mut mol = mol_from(&self.atoms, &self.bonds);
        for &(atom, charge) in &self.charges {
            mol.atom_mut(NodeIndex::new(atom)).formal_charge = charge;
        }
        mol
    }
}

pub fn order(n: u8) -> BondOrder {
    match n {
        2 => BondOrder::Double,
        3 => BondOrder::Triple,
        4 => BondOrder::Quadruple,
        _ => BondOrder::Single,
    }
}

pub fn mol_from(atoms: &[u8], bonds: &[(usize, usize, u8)]) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for &z in atoms {
        mol.add_atom(Atom::new(z));
    }
    for &(a, b, o) in bonds {
        mol.add_bond(NodeIndex::new(a), NodeIndex::new(b), Bond::new(order(o)));
    }
    mol
}

/// Copy of `mol` where old atom `i` becomes atom `perm[i]`. Bonds are
/// re-added in reverse order with swapped endpoints, and stereo annotations
/// follow their atoms.
pub fn renumber(mol: &Mol<Atom, Bond>, perm: &[usize]) -> Mol<Atom, Bond> {
    let mut old_of = vec![0; perm.len()];
    for (old, &new) in perm.iter().enumerate() {
        old_of[new] = old;
    }
    let mut out = Mol::new();
    for &old in &old_of {
        out.add_atom(*mol.atom(NodeIndex::new(old)));
    }
    let edges: Vec<_> = mol.bonds().collect();
    for &e in edges.iter().rev() {
        let Some((a, b)) = mol.bond_endpoints(e) else {
            continue;
        };
        out.add_bond(
            NodeIndex::new(perm[b.index()]),
            NodeIndex::new(perm[a.index()]),
            *mol.bond(e),
        );
    }
    let map = |id: AtomId| match id {
        AtomId::Node(n) => AtomId::Node(NodeIndex::new(perm[n.index()])),
        AtomId::VirtualH(n, k) => AtomId::VirtualH(NodeIndex::new(perm[n.index()]), k),
    };
    for stereo in mol.tetrahedral_stereo() {
        out.add_tetrahedral_stereo(TetrahedralStereo {
            center: NodeIndex::new(perm[stereo.center.index()]),
            above: stereo.above.map(map),
            ..*stereo
        });
    }
    out
}
