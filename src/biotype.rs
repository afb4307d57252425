//! Pharmacophore typing for the functional (FCFP) seeds.
//!
//! Each heavy atom gets six flags: hydrogen-bond donor, acceptor, positive
//! ionizable, negative ionizable, aromatic and halide. The rules are simple
//! graph tests over bond orders, hydrogen counts and charges; no pKa or
//! tautomer model is involved.

use crate::element;
use crate::excavate::ExcavatedGraph;

pub const DONOR: u8 = 1;
pub const ACCEPTOR: u8 = 1 << 1;
pub const POSITIVE: u8 = 1 << 2;
pub const NEGATIVE: u8 = 1 << 3;
pub const AROMATIC: u8 = 1 << 4;
pub const HALIDE: u8 = 1 << 5;

#[derive(Debug, Clone, Default)]
pub struct BioTypes {
    donor: Vec<bool>,
    acceptor: Vec<bool>,
    positive: Vec<bool>,
    negative: Vec<bool>,
    aromatic: Vec<bool>,
    halide: Vec<bool>,
}

/// Per-atom facts the typing rules are written against.
struct Facts {
    aliphatic: Vec<bool>,
    has_double: Vec<bool>,
    has_triple: Vec<bool>,
    /// Double bond to an oxygen.
    oxide: Vec<bool>,
    lone_pair: Vec<bool>,
    aromatic: Vec<bool>,
    tetrazole: Vec<bool>,
}

impl Facts {
    fn new(graph: &ExcavatedGraph) -> Self {
        let n = graph.atom_count();
        let mut facts = Self {
            aliphatic: vec![false; n],
            has_double: vec![false; n],
            has_triple: vec![false; n],
            oxide: vec![false; n],
            lone_pair: vec![false; n],
            aromatic: vec![false; n],
            tetrazole: vec![false; n],
        };

        for atom in graph.active_atoms() {
            // A declared aromatic ring stands in for its Kekulé double bonds.
            let pi = graph.declared_pi[atom];
            facts.has_double[atom] = pi;
            let mut bond_sum = graph.hydrogen_count(atom) as i32 + pi as i32;
            let mut all_single = true;
            for (&nb, &b) in graph.atom_adj[atom].iter().zip(&graph.bond_adj[atom]) {
                let order = graph.bond_order[b];
                bond_sum += order as i32;
                all_single &= order == 1 && !graph.declared_aromatic[b];
                match order {
                    2 => {
                        facts.has_double[atom] = true;
                        if graph.atomic_num[nb] == 8 {
                            facts.oxide[atom] = true;
                        }
                    }
                    3 => facts.has_triple[atom] = true,
                    _ => {}
                }
            }
            facts.aliphatic[atom] =
                graph.atomic_num[atom] == 6 && all_single && !graph.is_aromatic_atom(atom);
            facts.lone_pair[atom] = element::lone_pair_valence(graph.atomic_num[atom])
                .is_some_and(|v| bond_sum + (graph.charge[atom] as i32) < v as i32);
        }

        for ring in graph.rings().rings() {
            let size = ring.len();
            if (5..=7).contains(&size) {
                let doubled = ring.iter().filter(|&&a| facts.has_double[a]).count();
                let conjugated = ring
                    .iter()
                    .all(|&a| facts.has_double[a] || facts.lone_pair[a]);
                if conjugated && doubled + 2 >= size {
                    for &a in ring {
                        facts.aromatic[a] = true;
                    }
                }
            }
            if size == 5 && is_tetrazole(graph, ring) {
                for &a in ring {
                    facts.tetrazole[a] = true;
                }
            }
        }

        facts
    }
}

/// One carbon, four nitrogens and exactly two ring double bonds.
fn is_tetrazole(graph: &ExcavatedGraph, ring: &[usize]) -> bool {
    let carbons = ring.iter().filter(|&&a| graph.atomic_num[a] == 6).count();
    let nitrogens = ring.iter().filter(|&&a| graph.atomic_num[a] == 7).count();
    if carbons != 1 || nitrogens != 4 {
        return false;
    }
    let doubles = (0..ring.len())
        .filter_map(|i| graph.find_bond(ring[i], ring[(i + 1) % ring.len()]))
        .filter(|&b| graph.bond_order[b] == 2)
        .count();
    doubles == 2
}

impl BioTypes {
    pub fn new(graph: &ExcavatedGraph) -> Self {
        let n = graph.atom_count();
        let facts = Facts::new(graph);
        let mut types = Self {
            donor: vec![false; n],
            acceptor: vec![false; n],
            positive: vec![false; n],
            negative: vec![false; n],
            aromatic: facts.aromatic.clone(),
            halide: vec![false; n],
        };

        let z = |a: usize| graph.atomic_num[a];
        let charge = |a: usize| graph.charge[a];
        let hydrogens = |a: usize| graph.hydrogen_count(a);
        let bond_to = |a: usize, b: usize| graph.find_bond(a, b).map(|e| graph.bond_order[e]);

        let basic_amine: Vec<bool> = (0..n)
            .map(|a| {
                graph.is_active(a)
                    && z(a) == 7
                    && charge(a) == 0
                    && !facts.has_double[a]
                    && !facts.has_triple[a]
                    && !facts.aromatic[a]
                    && !graph.is_aromatic_atom(a)
                    && graph.neighbors(a).iter().all(|&nb| facts.aliphatic[nb])
            })
            .collect();

        for atom in graph.active_atoms() {
            let element = z(atom);
            let nbs = graph.neighbors(atom);

            types.halide[atom] = element::is_halide(element);

            if hydrogens(atom) > 0 {
                types.donor[atom] = match element {
                    7 | 8 => {
                        !facts.tetrazole[atom]
                            && !nbs
                                .iter()
                                .any(|&nb| facts.oxide[nb] && (element == 8 || z(nb) != 6))
                    }
                    16 => !facts.has_double[atom],
                    6 => facts.has_triple[atom],
                    _ => false,
                };
            }

            if facts.lone_pair[atom] && charge(atom) <= 0 {
                types.acceptor[atom] = element != 7
                    || (!basic_amine[atom]
                        && !(facts.aromatic[atom] && hydrogens(atom) > 0)
                        && !nbs.iter().any(|&nb| facts.oxide[nb]));
            }

            if charge(atom) > 0 && !nbs.iter().any(|&nb| charge(nb) < 0) {
                types.positive[atom] = true;
            }
            if charge(atom) < 0 && !nbs.iter().any(|&nb| charge(nb) > 0) {
                types.negative[atom] = true;
            }
            if basic_amine[atom] {
                types.positive[atom] = true;
            }

            // Amidine and guanidine: the imine nitrogen of N=C-N, and for a
            // charged imine the other nitrogen shares the charge. Ring
            // nitrogens of aromatic heterocycles are not imines.
            if element == 7 && !facts.aromatic[atom] {
                for &c in nbs {
                    if z(c) != 6 || bond_to(atom, c) != Some(2) {
                        continue;
                    }
                    for &other in graph.neighbors(c) {
                        if other == atom
                            || z(other) != 7
                            || charge(other) != 0
                            || bond_to(c, other) != Some(1)
                        {
                            continue;
                        }
                        if charge(atom) == 0 {
                            types.positive[atom] = true;
                        } else if charge(atom) > 0 {
                            types.positive[other] = true;
                        }
                    }
                }
            }

            // Acids: an oxide center with an acidic oxygen makes all of its
            // oxygens negative.
            if matches!(element, 6 | 15 | 16) && facts.oxide[atom] {
                let acidic = |o: usize| {
                    z(o) == 8
                        && bond_to(atom, o) == Some(1)
                        && (hydrogens(o) > 0 || charge(o) < 0)
                };
                if nbs.iter().any(|&o| acidic(o)) {
                    for &o in nbs {
                        if acidic(o) || (z(o) == 8 && bond_to(atom, o) == Some(2)) {
                            types.negative[o] = true;
                        }
                    }
                }
            }
        }

        for ring in graph.rings().rings() {
            if ring.len() != 5 || !ring.iter().all(|&a| facts.tetrazole[a]) {
                continue;
            }
            let acidic = ring
                .iter()
                .any(|&a| z(a) == 7 && (hydrogens(a) > 0 || charge(a) < 0));
            if acidic {
                for &a in ring {
                    if z(a) == 7 {
                        types.negative[a] = true;
                    }
                }
            }
        }

        types
    }

    pub fn is_donor(&self, atom: usize) -> bool {
        self.donor[atom]
    }

    pub fn is_acceptor(&self, atom: usize) -> bool {
        self.acceptor[atom]
    }

    pub fn is_positive(&self, atom: usize) -> bool {
        self.positive[atom]
    }

    pub fn is_negative(&self, atom: usize) -> bool {
        self.negative[atom]
    }

    pub fn is_aromatic(&self, atom: usize) -> bool {
        self.aromatic[atom]
    }

    pub fn is_halide(&self, atom: usize) -> bool {
        self.halide[atom]
    }

    /// Six-bit pharmacophore mask in [`DONOR`]..[`HALIDE`] order.
    pub fn mask(&self, atom: usize) -> u8 {
        let mut mask = 0;
        for (flag, bit) in [
            (self.donor[atom], DONOR),
            (self.acceptor[atom], ACCEPTOR),
            (self.positive[atom], POSITIVE),
            (self.negative[atom], NEGATIVE),
            (self.aromatic[atom], AROMATIC),
            (self.halide[atom], HALIDE),
        ] {
            if flag {
                mask |= bit;
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::mol::Mol;
    use crate::test_util::{benzene, mol_from};
    use petgraph::graph::NodeIndex;

    fn types(atoms: &[u8], bonds: &[(usize, usize, u8)]) -> BioTypes {
        BioTypes::new(&ExcavatedGraph::new(&mol_from(atoms, bonds)))
    }

    fn charged(mut mol: Mol<Atom, Bond>, charges: &[(usize, i8)]) -> BioTypes {
        for &(a, c) in charges {
            mol.atom_mut(NodeIndex::new(a)).formal_charge = c;
        }
        BioTypes::new(&ExcavatedGraph::new(&mol))
    }

    #[test]
    fn ethanol_hydroxyl() {
        let t = types(&[6, 6, 8], &[(0, 1, 1), (1, 2, 1)]);
        assert_eq!(t.mask(2), DONOR | ACCEPTOR);
        assert_eq!(t.mask(0), 0);
        assert_eq!(t.mask(1), 0);
    }

    #[test]
    fn acetic_acid_oxygens_negative() {
        let t = types(&[6, 6, 8, 8], &[(0, 1, 1), (1, 2, 2), (1, 3, 1)]);
        assert_eq!(t.mask(2), ACCEPTOR | NEGATIVE);
        // The acid hydroxyl sits next to the carbonyl and does not donate.
        assert_eq!(t.mask(3), ACCEPTOR | NEGATIVE);
        assert_eq!(t.mask(1), 0);
    }

    #[test]
    fn ketone_oxygen_only_accepts() {
        let t = types(&[6, 6, 8, 6], &[(0, 1, 1), (1, 2, 2), (1, 3, 1)]);
        assert_eq!(t.mask(2), ACCEPTOR);
    }

    #[test]
    fn methylamine_is_basic() {
        let t = types(&[6, 7], &[(0, 1, 1)]);
        assert!(t.is_positive(1));
        assert!(t.is_donor(1));
        assert!(!t.is_acceptor(1));
    }

    #[test]
    fn amide_nitrogen_donates_but_does_not_accept() {
        let t = types(&[6, 6, 8, 7], &[(0, 1, 1), (1, 2, 2), (1, 3, 1)]);
        assert_eq!(t.mask(3), DONOR);
        assert_eq!(t.mask(2), ACCEPTOR);
    }

    #[test]
    fn pyridine_nitrogen_accepts() {
        let t = types(
            &[7, 6, 6, 6, 6, 6],
            &[(0, 1, 2), (1, 2, 1), (2, 3, 2), (3, 4, 1), (4, 5, 2), (5, 0, 1)],
        );
        assert_eq!(t.mask(0), ACCEPTOR | AROMATIC);
        assert_eq!(t.mask(3), AROMATIC);
    }

    #[test]
    fn pyrrole_nitrogen_donates() {
        let t = types(
            &[7, 6, 6, 6, 6],
            &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (3, 4, 2), (4, 0, 1)],
        );
        assert_eq!(t.mask(0), DONOR | AROMATIC);
        for atom in 1..5 {
            assert!(t.is_aromatic(atom));
        }
    }

    #[test]
    fn cyclopentadiene_not_aromatic() {
        let t = types(
            &[6; 5],
            &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (3, 4, 2), (4, 0, 1)],
        );
        assert!((0..5).all(|a| !t.is_aromatic(a)));
    }

    #[test]
    fn benzene_aromatic_only() {
        let t = BioTypes::new(&ExcavatedGraph::new(&benzene()));
        for atom in 0..6 {
            assert_eq!(t.mask(atom), AROMATIC);
        }
    }

    #[test]
    fn aniline_nitrogen_not_basic() {
        let mut bonds = vec![(0, 1, 2), (1, 2, 1), (2, 3, 2), (3, 4, 1), (4, 5, 2), (5, 0, 1)];
        bonds.push((0, 6, 1));
        let t = types(&[6, 6, 6, 6, 6, 6, 7], &bonds);
        assert_eq!(t.mask(6), DONOR | ACCEPTOR);
    }

    #[test]
    fn halides_flagged() {
        let t = types(&[6, 9, 17, 35, 53], &[(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)]);
        for atom in 1..5 {
            assert!(t.is_halide(atom));
        }
        assert!(!t.is_halide(0));
    }

    #[test]
    fn thiol_donates_thioketone_does_not() {
        let thiol = types(&[6, 16], &[(0, 1, 1)]);
        assert!(thiol.is_donor(1));
        let thione = BioTypes::new(&ExcavatedGraph::new(&{
            let mut mol = mol_from(&[6, 16], &[(0, 1, 2)]);
            mol.atom_mut(NodeIndex::new(1)).hydrogen_count = Some(1);
            mol
        }));
        assert!(!thione.is_donor(1));
    }

    #[test]
    fn terminal_alkyne_donates() {
        let t = types(&[6, 6, 6], &[(0, 1, 1), (1, 2, 3)]);
        assert!(t.is_donor(2));
        assert!(!t.is_donor(0));
        assert!(!t.is_donor(1));
    }

    #[test]
    fn amidine_imine_positive() {
        let t = types(&[6, 6, 7, 7], &[(0, 1, 1), (1, 2, 2), (1, 3, 1)]);
        assert!(t.is_positive(2));
        assert!(!t.is_positive(3));
    }

    #[test]
    fn amidinium_shares_charge() {
        let mol = mol_from(&[6, 6, 7, 7], &[(0, 1, 1), (1, 2, 2), (1, 3, 1)]);
        let t = charged(mol, &[(2, 1)]);
        assert!(t.is_positive(2));
        assert!(t.is_positive(3));
    }

    #[test]
    fn aromatic_ring_nitrogen_not_an_imine() {
        // Imidazole: N1=C2-N3 inside an aromatic ring.
        let t = types(
            &[6, 7, 6, 7, 6],
            &[(0, 1, 1), (1, 2, 2), (2, 3, 1), (3, 4, 1), (4, 0, 2)],
        );
        assert!(t.is_aromatic(1));
        assert!(!t.is_positive(1));
        assert_eq!(t.mask(1), ACCEPTOR | AROMATIC);
        assert_eq!(t.mask(3), DONOR | AROMATIC);
    }

    #[test]
    fn zwitterionic_nitro_is_neutral() {
        let mol = mol_from(&[6, 7, 8, 8], &[(0, 1, 1), (1, 2, 2), (1, 3, 1)]);
        let t = charged(mol, &[(1, 1), (3, -1)]);
        assert!(!t.is_positive(1));
        assert!(!t.is_negative(3));
        assert!(!t.is_acceptor(1));
    }

    #[test]
    fn carboxylate_negative() {
        let mol = mol_from(&[6, 6, 8, 8], &[(0, 1, 1), (1, 2, 2), (1, 3, 1)]);
        let t = charged(mol, &[(3, -1)]);
        assert!(t.is_negative(2));
        assert!(t.is_negative(3));
        assert!(!t.is_donor(3));
    }

    #[test]
    fn tetrazole_nitrogens_negative() {
        let t = types(
            &[6, 7, 7, 7, 7],
            &[(0, 1, 2), (1, 2, 1), (2, 3, 2), (3, 4, 1), (4, 0, 1)],
        );
        for atom in 1..5 {
            assert!(t.is_negative(atom), "atom {atom}");
        }
        assert!(!t.is_negative(0));
        assert!(!t.is_donor(4));
    }

    #[test]
    fn quaternary_ammonium_positive() {
        let mol = mol_from(&[7, 6, 6, 6, 6], &[(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)]);
        let t = charged(mol, &[(0, 1)]);
        assert_eq!(t.mask(0), POSITIVE);
    }
}
