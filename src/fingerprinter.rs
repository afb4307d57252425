//! The circular fingerprint engine.
//!
//! [`CircularFingerprinter`] only holds its configuration. Every call to
//! [`calculate`](CircularFingerprinter::calculate) builds its own working
//! state (heavy-atom graph, rubrics, identities, atom sets, records) and
//! drops it on return, so one engine can serve any number of threads.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::biotype::BioTypes;
use crate::config::{FingerprintClass, FingerprintConfig};
use crate::environment::{grow_atoms, FingerprintCollector, FingerprintRecord};
use crate::error::FingerprintError;
use crate::excavate::ExcavatedGraph;
use crate::fold::{CountFingerprint, FoldedFingerprint};
use crate::identity::{elemental_seeds, functional_seeds, CircularIterator};
use crate::mol::Mol;
use crate::stereo::{annotated_rubrics, perceived_rubrics};
use crate::traits::{FingerprintAtom, FingerprintBond};

/// Extended-connectivity (ECFP) and functional-class (FCFP) fingerprints.
///
/// # Examples
///
/// ```
/// use circfp::{Atom, Bond, BondOrder, CircularFingerprinter, FingerprintClass, Mol};
///
/// // Acetaldehyde
/// let mut mol = Mol::<Atom, Bond>::new();
/// let c1 = mol.add_atom(Atom::new(6));
/// let c2 = mol.add_atom(Atom::new(6));
/// let o = mol.add_atom(Atom::new(8));
/// mol.add_bond(c1, c2, Bond::default());
/// mol.add_bond(c2, o, Bond::new(BondOrder::Double));
///
/// let fp = CircularFingerprinter::new(FingerprintClass::Ecfp4).calculate(&mol);
/// assert_eq!(fp.records()[0].atoms(), &[0]);
/// assert!(fp.folded().count_ones() > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircularFingerprinter {
    config: FingerprintConfig,
}

impl CircularFingerprinter {
    /// An engine for `class` with the default folded length.
    pub fn new(class: FingerprintClass) -> Self {
        Self {
            config: FingerprintConfig::new(class),
        }
    }

    pub fn with_config(config: FingerprintConfig) -> Result<Self, FingerprintError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// An engine from a numeric class code (`1..=8`, ECFP0 through FCFP6).
    pub fn from_class_code(code: i32, folded_length: usize) -> Result<Self, FingerprintError> {
        let class = FingerprintClass::try_from(code)?;
        Self::with_config(FingerprintConfig::new(class).with_folded_length(folded_length))
    }

    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    pub fn class(&self) -> FingerprintClass {
        self.config.class
    }

    /// Runs the full pipeline over `mol`.
    pub fn calculate<A, B>(&self, mol: &Mol<A, B>) -> Fingerprints
    where
        A: FingerprintAtom,
        B: FingerprintBond,
    {
        let class = self.config.class;
        let graph = ExcavatedGraph::new(mol);
        debug!(
            "{}: {} heavy atoms, {} rings in {} blocks, {} aromatic atoms",
            class,
            graph.heavy_atom_count(),
            graph.rings().num_rings(),
            graph.rings().num_ring_blocks(),
            graph.aromaticity.num_aromatic_atoms()
        );

        let rubrics = if self.config.perceive_stereo {
            perceived_rubrics(mol, &graph)
        } else {
            annotated_rubrics(mol, &graph)
        };
        let num_rubrics = rubrics.iter().filter(|r| r.is_some()).count();

        let mut identity = if class.is_functional() {
            functional_seeds(&graph, &BioTypes::new(&graph))
        } else {
            elemental_seeds(&graph)
        };

        let mut collector = FingerprintCollector::new();
        let mut groups: Vec<Vec<usize>> = (0..graph.atom_count()).map(|a| vec![a]).collect();
        for atom in graph.active_atoms() {
            collector.consider(FingerprintRecord::new(identity[atom], 0, vec![atom]));
        }

        let mut iterator = CircularIterator::new(&graph, rubrics);
        let mut mask = vec![false; graph.atom_count()];
        for radius in 1..=class.max_radius() {
            identity = iterator.iterate(radius, &identity);
            for atom in graph.active_atoms() {
                groups[atom] = grow_atoms(&graph, &groups[atom], &mut mask);
                collector.consider(FingerprintRecord::new(
                    identity[atom],
                    radius,
                    groups[atom].clone(),
                ));
            }
            trace!("radius {}: {} records", radius, collector.len());
        }

        debug!(
            "{}: {} records, {} of {} stereocenters resolved",
            class,
            collector.len(),
            iterator.num_resolved(),
            num_rubrics
        );

        Fingerprints {
            records: collector.into_records(),
            folded_length: self.config.folded_length,
        }
    }

    pub fn records<A, B>(&self, mol: &Mol<A, B>) -> Vec<FingerprintRecord>
    where
        A: FingerprintAtom,
        B: FingerprintBond,
    {
        self.calculate(mol).into_records()
    }

    pub fn folded_fingerprint<A, B>(&self, mol: &Mol<A, B>) -> FoldedFingerprint
    where
        A: FingerprintAtom,
        B: FingerprintBond,
    {
        self.calculate(mol).folded()
    }

    pub fn count_fingerprint<A, B>(&self, mol: &Mol<A, B>) -> CountFingerprint
    where
        A: FingerprintAtom,
        B: FingerprintBond,
    {
        self.calculate(mol).counts()
    }

    /// String-keyed fingerprints are not produced by this engine.
    pub fn raw_fingerprint<A, B>(&self, _mol: &Mol<A, B>) -> Result<BTreeMap<String, u32>, FingerprintError> {
        Err(FingerprintError::Unsupported("raw fingerprint"))
    }
}

/// Records from one [`calculate`](CircularFingerprinter::calculate) call,
/// plus the folded length the engine was configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprints {
    records: Vec<FingerprintRecord>,
    folded_length: usize,
}

impl Fingerprints {
    pub fn records(&self) -> &[FingerprintRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FingerprintRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn folded_length(&self) -> usize {
        self.folded_length
    }

    pub fn folded(&self) -> FoldedFingerprint {
        FoldedFingerprint::from_records(&self.records, self.folded_length)
    }

    pub fn counts(&self) -> CountFingerprint {
        CountFingerprint::from_records(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::mol::{AtomId, TetrahedralStereo};
    use crate::test_util::{benzene, methane, mol_from};
    use crate::wrappers::{with_conformer, WithPosition3D};
    use petgraph::graph::NodeIndex;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn engine_is_shareable() {
        assert_send_sync::<CircularFingerprinter>();
        assert_send_sync::<Fingerprints>();
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            CircularFingerprinter::from_class_code(0, 1024),
            Err(FingerprintError::InvalidClass(0))
        );
        assert_eq!(
            CircularFingerprinter::from_class_code(3, 0),
            Err(FingerprintError::InvalidFoldedLength(0))
        );
        let fp = CircularFingerprinter::from_class_code(7, 2048).unwrap();
        assert_eq!(fp.class(), FingerprintClass::Fcfp4);
        assert_eq!(fp.config().folded_length, 2048);
    }

    #[test]
    fn raw_fingerprint_unsupported() {
        let fp = CircularFingerprinter::default();
        assert_eq!(
            fp.raw_fingerprint(&methane()),
            Err(FingerprintError::Unsupported("raw fingerprint"))
        );
    }

    #[test]
    fn methane_single_record() {
        for class in [FingerprintClass::Ecfp0, FingerprintClass::Ecfp6] {
            let fp = CircularFingerprinter::new(class).calculate(&methane());
            assert_eq!(fp.len(), 1);
            assert_eq!(fp.records()[0].iteration(), 0);
            assert_eq!(fp.records()[0].atoms(), &[0]);
        }
    }

    #[test]
    fn empty_molecule() {
        let mol = Mol::<Atom, Bond>::new();
        let fp = CircularFingerprinter::default().calculate(&mol);
        assert!(fp.is_empty());
        assert_eq!(fp.folded().count_ones(), 0);
        assert!(fp.counts().is_empty());
    }

    #[test]
    fn benzene_ecfp4_records() {
        // Six singletons, six triples and six five-atom arcs.
        let fp = CircularFingerprinter::new(FingerprintClass::Ecfp4).calculate(&benzene());
        assert_eq!(fp.len(), 18);
        let fp = CircularFingerprinter::new(FingerprintClass::Ecfp6).calculate(&benzene());
        assert_eq!(fp.len(), 19);
        assert_eq!(fp.counts().len(), 4);
    }

    #[test]
    fn repeated_calls_agree() {
        let engine = CircularFingerprinter::new(FingerprintClass::Fcfp6);
        let mol = mol_from(&[6, 6, 8, 7], &[(0, 1, 1), (1, 2, 2), (1, 3, 1)]);
        assert_eq!(engine.calculate(&mol), engine.calculate(&mol));
    }

    #[test]
    fn convenience_outputs_match_calculate() {
        let engine = CircularFingerprinter::new(FingerprintClass::Ecfp4);
        let mol = benzene();
        let all = engine.calculate(&mol);
        assert_eq!(engine.records(&mol), all.records());
        assert_eq!(engine.folded_fingerprint(&mol), all.folded());
        assert_eq!(engine.count_fingerprint(&mol), all.counts());
        assert_eq!(all.folded().len(), 1024);
    }

    fn chiral_3d(swap: bool) -> Mol<WithPosition3D<Atom>, Bond> {
        let mut positions = [
            [0.0, 0.0, 1.0],
            [1.0, 0.0, -0.33],
            [-0.5, 0.866, -0.33],
            [-0.5, -0.866, -0.33],
        ];
        if swap {
            positions.swap(2, 3);
        }
        let skeleton = mol_from(&[6, 9, 17, 35, 53], &[(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)]);
        let mut coords = vec![[0.0; 3]];
        coords.extend(positions);
        with_conformer(&skeleton, &coords).unwrap()
    }

    #[test]
    fn perceived_stereo_separates_enantiomers() {
        let config = FingerprintConfig::new(FingerprintClass::Ecfp2).with_perceive_stereo(true);
        let engine = CircularFingerprinter::with_config(config).unwrap();
        let left = engine.calculate(&chiral_3d(false));
        let right = engine.calculate(&chiral_3d(true));
        assert_ne!(left, right);

        // Annotation mode ignores the coordinates entirely.
        let flat = CircularFingerprinter::new(FingerprintClass::Ecfp2);
        assert_eq!(flat.calculate(&chiral_3d(false)), flat.calculate(&chiral_3d(true)));
    }

    #[test]
    fn annotation_matches_geometry() {
        let mut annotated = mol_from(&[6, 9, 17, 35, 53], &[(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)]);
        let n = NodeIndex::new;
        annotated.add_tetrahedral_stereo(TetrahedralStereo::new(
            n(0),
            [
                AtomId::Node(n(1)),
                AtomId::Node(n(2)),
                AtomId::Node(n(3)),
                AtomId::Node(n(4)),
            ],
        ));
        let from_annotation = CircularFingerprinter::new(FingerprintClass::Ecfp4).calculate(&annotated);

        let config = FingerprintConfig::new(FingerprintClass::Ecfp4).with_perceive_stereo(true);
        let from_geometry = CircularFingerprinter::with_config(config)
            .unwrap()
            .calculate(&chiral_3d(false));
        assert_eq!(from_annotation.records(), from_geometry.records());
    }
}
