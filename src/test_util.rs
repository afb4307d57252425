use petgraph::graph::NodeIndex;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrder};
use crate::mol::Mol;

pub(crate) fn order(n: u8) -> BondOrder {
    match n {
        2 => BondOrder::Double,
        3 => BondOrder::Triple,
        4 => BondOrder::Quadruple,
        _ => BondOrder::Single,
    }
}

/// Molecule from atomic numbers and `(begin, end, order)` bonds; hydrogen
/// counts are left for the valence table.
pub(crate) fn mol_from(atoms: &[u8], bonds: &[(usize, usize, u8)]) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for &z in atoms {
        mol.add_atom(Atom::new(z));
    }
    for &(a, b, o) in bonds {
        mol.add_bond(NodeIndex::new(a), NodeIndex::new(b), Bond::new(order(o)));
    }
    mol
}

pub(crate) fn methane() -> Mol<Atom, Bond> {
    mol_from(&[6], &[])
}

pub(crate) fn benzene() -> Mol<Atom, Bond> {
    mol_from(
        &[6; 6],
        &[
            (0, 1, 2),
            (1, 2, 1),
            (2, 3, 2),
            (3, 4, 1),
            (4, 5, 2),
            (5, 0, 1),
        ],
    )
}

/// Rings 0-1-2-3-4-9 and 4-5-6-7-8-9, fused on the 4=9 bond.
pub(crate) fn naphthalene() -> Mol<Atom, Bond> {
    mol_from(
        &[6; 10],
        &[
            (0, 1, 2),
            (1, 2, 1),
            (2, 3, 2),
            (3, 4, 1),
            (4, 9, 2),
            (9, 0, 1),
            (4, 5, 1),
            (5, 6, 2),
            (6, 7, 1),
            (7, 8, 2),
            (8, 9, 1),
        ],
    )
}
