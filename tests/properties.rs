mod common;

use circfp::{
    tanimoto, Atom, AtomId, Bond, CircularFingerprinter, FingerprintClass, Fingerprints, Mol,
    TetrahedralStereo,
};
use common::{mol_from, renumber};
use petgraph::graph::NodeIndex;

fn sorted_hashes(fp: &Fingerprints) -> Vec<i32> {
    let mut hashes: Vec<i32> = fp.records().iter().map(|r| r.hash()).collect();
    hashes.sort_unstable();
    hashes
}

/// Deterministic shuffles of `0..n` without pulling in a random source.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn gcd(a: usize, b: usize) -> usize {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }

    let mut out = vec![(0..n).rev().collect::<Vec<_>>()];
    // i -> (i * stride + 2) mod n is a bijection when stride and n are coprime.
    for stride in [1, 2, 3, 5, 7] {
        if gcd(stride, n) == 1 {
            out.push((0..n).map(|i| (i * stride + 2) % n).collect());
        }
    }
    out
}

fn test_molecules() -> Vec<(&'static str, Mol<Atom, Bond>)> {
    vec![
        (
            "isoleucine skeleton",
            mol_from(
                &[6, 6, 6, 6, 6, 7, 6, 8, 8],
                &[
                    (0, 1, 1),
                    (1, 2, 1),
                    (2, 3, 1),
                    (2, 4, 1),
                    (4, 5, 1),
                    (4, 6, 1),
                    (6, 7, 2),
                    (6, 8, 1),
                ],
            ),
        ),
        (
            "indole",
            mol_from(
                &[7, 6, 6, 6, 6, 6, 6, 6, 6],
                &[
                    (0, 1, 1),
                    (1, 2, 2),
                    (2, 3, 1),
                    (3, 4, 2),
                    (4, 5, 1),
                    (5, 6, 2),
                    (6, 7, 1),
                    (7, 8, 2),
                    (8, 3, 1),
                    (8, 0, 1),
                ],
            ),
        ),
        (
            "chloropyridine",
            mol_from(
                &[7, 6, 6, 6, 6, 6, 17],
                &[
                    (0, 1, 2),
                    (1, 2, 1),
                    (2, 3, 2),
                    (3, 4, 1),
                    (4, 5, 2),
                    (5, 0, 1),
                    (3, 6, 1),
                ],
            ),
        ),
    ]
}

/// Bromochlorofluoroiodomethane with an explicit tetrahedral annotation.
/// Both hands list the halogens in the same order; only the winding differs.
fn halomethane(clockwise: bool) -> Mol<Atom, Bond> {
    let mut mol = mol_from(
        &[6, 9, 17, 35, 53],
        &[(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)],
    );
    let n = |i| AtomId::Node(NodeIndex::new(i));
    let center = NodeIndex::new(0);
    let above = [n(1), n(2), n(3), n(4)];
    mol.add_tetrahedral_stereo(if clockwise {
        TetrahedralStereo::clockwise(center, above)
    } else {
        TetrahedralStereo::new(center, above)
    });
    mol
}

#[test]
fn renumbering_never_changes_the_hash_multiset() {
    for (name, mol) in test_molecules() {
        for class in FingerprintClass::ALL {
            let engine = CircularFingerprinter::new(class);
            let reference = sorted_hashes(&engine.calculate(&mol));
            for perm in permutations(mol.atom_count()) {
                let shuffled = renumber(&mol, &perm);
                assert_eq!(
                    sorted_hashes(&engine.calculate(&shuffled)),
                    reference,
                    "{name} {class} {perm:?}"
                );
            }
        }
    }
}

#[test]
fn annotated_center_survives_renumbering() {
    let engine = CircularFingerprinter::new(FingerprintClass::Ecfp4);
    for clockwise in [false, true] {
        let mol = halomethane(clockwise);
        let reference = sorted_hashes(&engine.calculate(&mol));
        for perm in permutations(mol.atom_count()) {
            let shuffled = renumber(&mol, &perm);
            assert_eq!(
                sorted_hashes(&engine.calculate(&shuffled)),
                reference,
                "clockwise={clockwise} {perm:?}"
            );
        }
    }
}

#[test]
fn enantiomers_differ_only_past_the_seeds() {
    let engine = CircularFingerprinter::new(FingerprintClass::Ecfp4);
    let left = engine.calculate(&halomethane(false));
    let right = engine.calculate(&halomethane(true));
    assert_ne!(sorted_hashes(&left), sorted_hashes(&right));

    let seeds = |fp: &Fingerprints| {
        let mut hashes: Vec<i32> = fp
            .records()
            .iter()
            .filter(|r| r.iteration() == 0)
            .map(|r| r.hash())
            .collect();
        hashes.sort_unstable();
        hashes
    };
    assert_eq!(seeds(&left), seeds(&right));

    let mirrored = engine.calculate(&halomethane(false).enantiomer());
    assert_eq!(mirrored, right);
}

#[test]
fn one_engine_shared_across_threads() {
    let engine = CircularFingerprinter::new(FingerprintClass::Fcfp6);
    let molecules = test_molecules();
    let expected: Vec<Fingerprints> = molecules.iter().map(|(_, m)| engine.calculate(m)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    molecules
                        .iter()
                        .map(|(_, m)| engine.calculate(m))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn explicit_hydrogen_nodes_do_not_change_records() {
    for (name, mol) in test_molecules() {
        let mut explicit = mol.clone();
        let heavy: Vec<NodeIndex> = mol.atoms().collect();
        let graph = circfp::ExcavatedGraph::new(&mol);
        for atom in heavy {
            let h = graph.hydrogen_count(atom.index());
            explicit.atom_mut(atom).hydrogen_count = Some(0);
            for _ in 0..h {
                let hydrogen = explicit.add_atom(Atom::new(1));
                explicit.add_bond(atom, hydrogen, Bond::default());
            }
        }
        for class in FingerprintClass::ALL {
            let engine = CircularFingerprinter::new(class);
            assert_eq!(
                engine.calculate(&explicit).records(),
                engine.calculate(&mol).records(),
                "{name} {class}"
            );
        }
    }
}

#[test]
fn self_similarity_is_one() {
    for (name, mol) in test_molecules() {
        for class in FingerprintClass::ALL {
            let fp = CircularFingerprinter::new(class).folded_fingerprint(&mol);
            assert_eq!(tanimoto(&fp, &fp), Some(1.0), "{name} {class}");
        }
    }
}
