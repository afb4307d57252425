use std::collections::HashMap;

use crate::excavate::ExcavatedGraph;

/// One circular environment: its identity, the radius it was produced at and
/// the sorted heavy atoms it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FingerprintRecord {
    hash: i32,
    iteration: u32,
    atoms: Vec<usize>,
}

impl FingerprintRecord {
    pub fn new(hash: i32, iteration: u32, atoms: Vec<usize>) -> Self {
        Self {
            hash,
            iteration,
            atoms,
        }
    }

    pub fn hash(&self) -> i32 {
        self.hash
    }

    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }
}

/// `atoms` plus every heavy neighbor of every member, ascending. `mask` is
/// left cleared.
pub(crate) fn grow_atoms(graph: &ExcavatedGraph, atoms: &[usize], mask: &mut [bool]) -> Vec<usize> {
    let mut count = 0;
    for &atom in atoms {
        for &member in std::iter::once(&atom).chain(graph.neighbors(atom)) {
            if !mask[member] {
                mask[member] = true;
                count += 1;
            }
        }
    }
    let mut grown = vec![0; count];
    for atom in (0..mask.len()).rev() {
        if mask[atom] {
            count -= 1;
            grown[count] = atom;
            mask[atom] = false;
        }
    }
    grown
}

#[derive(Debug, Default)]
pub(crate) struct FingerprintCollector {
    records: Vec<FingerprintRecord>,
    by_atoms: HashMap<Vec<usize>, usize>,
}

impl FingerprintCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate. A candidate for an atom set already held only
    /// replaces the held record when that record is neither from an earlier
    /// iteration nor lower-hashed.
    pub fn consider(&mut self, candidate: FingerprintRecord) {
        match self.by_atoms.get(&candidate.atoms) {
            None => {
                self.by_atoms
                    .insert(candidate.atoms.clone(), self.records.len());
                self.records.push(candidate);
            }
            Some(&slot) => {
                let existing = &self.records[slot];
                if existing.iteration < candidate.iteration || existing.hash < candidate.hash {
                    return;
                }
                self.records[slot] = candidate;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn into_records(self) -> Vec<FingerprintRecord> {
        self.records
    }
}
