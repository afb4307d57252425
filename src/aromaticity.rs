use crate::excavate::ExcavatedGraph;

#[derive(Debug, Clone, Default)]
pub struct StrictAromaticity {
    atoms: Vec<bool>,
    bonds: Vec<bool>,
}

impl StrictAromaticity {
    pub(crate) fn perceive(graph: &ExcavatedGraph) -> Self {
        let mut atoms = vec![false; graph.atom_count()];
        // Declared aromatic bonds match either phase from the start.
        let mut bonds = graph.declared_aromatic.clone();

        let mut maybe: Vec<(&[usize], [usize; 6])> = graph
            .rings
            .rings()
            .iter()
            .filter(|r| r.len() == 6)
            .filter_map(|r| candidate_bonds(graph, r).map(|b| (r.as_slice(), b)))
            .collect();

        loop {
            let mut changed = false;
            let mut n = maybe.len();
            while n > 0 {
                n -= 1;
                let (ring, ring_bonds) = maybe[n];
                let mut phase1 = true;
                let mut phase2 = true;
                for (i, &b) in ring_bonds.iter().enumerate() {
                    if bonds[b] {
                        continue;
                    }
                    let order = graph.bond_order[b];
                    phase1 = phase1 && order == 2 - (i as u8 & 1);
                    phase2 = phase2 && order == 1 + (i as u8 & 1);
                }
                if !phase1 && !phase2 {
                    continue;
                }
                for &atom in ring {
                    atoms[atom] = true;
                }
                for &b in &ring_bonds {
                    bonds[b] = true;
                }
                maybe.remove(n);
                changed = true;
            }
            if !changed {
                break;
            }
        }

        Self { atoms, bonds }
    }

    pub fn is_aromatic_atom(&self, atom: usize) -> bool {
        self.atoms.get(atom).copied().unwrap_or(false)
    }

    pub fn is_aromatic_bond(&self, bond: usize) -> bool {
        self.bonds.get(bond).copied().unwrap_or(false)
    }

    pub fn num_aromatic_atoms(&self) -> usize {
        self.atoms.iter().filter(|&&a| a).count()
    }
}

fn candidate_bonds(graph: &ExcavatedGraph, ring: &[usize]) -> Option<[usize; 6]> {
    let mut ring_bonds = [0usize; 6];
    for (i, &atom) in ring.iter().enumerate() {
        if !graph.has_pi_bond(atom) {
            return None;
        }
        let b = graph.find_bond(atom, ring[(i + 1) % 6])?;
        if !graph.declared_aromatic[b] && !matches!(graph.bond_order[b], 1 | 2) {
            return None;
        }
        ring_bonds[i] = b;
    }
    Some(ring_bonds)
}
