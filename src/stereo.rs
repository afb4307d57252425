//! Tetrahedral rubrics: four carriers per stereocenter, ordered so that,
//! looking from the first, the other three run anticlockwise.
//!
//! A rubric is either read from the molecule's [`TetrahedralStereo`]
//! annotations or perceived from coordinates and wedge bonds. Either way a
//! hydrogen carrier is stored as `None`. Centers that cannot be resolved get
//! no rubric; the engine never guesses a configuration.

use log::warn;
use petgraph::graph::NodeIndex;

use crate::bond::BondStereo;
use crate::element;
use crate::excavate::ExcavatedGraph;
use crate::mol::{AtomId, Mol, TetrahedralStereo};
use crate::traits::{FingerprintAtom, FingerprintBond, HasPosition2D, HasPosition3D};

pub(crate) type Rubric = [Option<usize>; 4];

type Vec3 = [f64; 3];

/// Smallest z spread that makes 3D coordinates count as non-planar.
const Z_TOLERANCE: f64 = 0.01;
/// Cosine above which two carrier directions are taken as the same.
const DUPLICATE_COSINE: f64 = 0.996;
/// Smallest normalized tetrahedral volume that fixes a handedness.
const VOLUME_TOLERANCE: f64 = 1e-3;

/// Rubrics from stereo annotations, indexed by atom.
pub(crate) fn annotated_rubrics<A, B>(mol: &Mol<A, B>, graph: &ExcavatedGraph) -> Vec<Option<Rubric>> {
    let mut rubrics = vec![None; graph.atom_count()];
    for stereo in mol.tetrahedral_stereo() {
        let center = stereo.center.index();
        if center >= graph.atom_count() || !graph.is_active(center) {
            warn!("ignoring tetrahedral annotation on non-heavy atom {}", center);
            continue;
        }
        match annotation_rubric(mol, graph, stereo) {
            Some(rubric) => rubrics[center] = Some(rubric),
            None => warn!(
                "ignoring malformed tetrahedral annotation on {}{}",
                element::symbol(graph.atomic_num[center]),
                center
            ),
        }
    }
    rubrics
}

fn annotation_rubric<A, B>(
    mol: &Mol<A, B>,
    graph: &ExcavatedGraph,
    stereo: &TetrahedralStereo,
) -> Option<Rubric> {
    let stereo = stereo.anticlockwise();
    let center = stereo.center;
    let mut rubric = [None; 4];
    let mut hydrogens = 0;
    for (slot, carrier) in rubric.iter_mut().zip(stereo.above) {
        match carrier {
            AtomId::VirtualH(owner, _) => {
                if owner != center {
                    return None;
                }
                hydrogens += 1;
            }
            AtomId::Node(idx) => {
                mol.bond_between(center, idx)?;
                if graph.is_active(idx.index()) {
                    *slot = Some(idx.index());
                } else {
                    hydrogens += 1;
                }
            }
        }
    }
    if hydrogens > 1 {
        return None;
    }
    Some(rubric)
}

/// Rubrics perceived from 3D coordinates, or from 2D coordinates plus wedge
/// bonds, indexed by atom.
pub(crate) fn perceived_rubrics<A, B>(mol: &Mol<A, B>, graph: &ExcavatedGraph) -> Vec<Option<Rubric>>
where
    A: FingerprintAtom,
    B: FingerprintBond,
{
    (0..graph.atom_count())
        .map(|atom| {
            if graph.is_active(atom) {
                perceive_center(mol, graph, atom)
            } else {
                None
            }
        })
        .collect()
}

fn perceive_center<A, B>(mol: &Mol<A, B>, graph: &ExcavatedGraph, atom: usize) -> Option<Rubric>
where
    A: FingerprintAtom,
    B: FingerprintBond,
{
    if !element::is_p_block(graph.atomic_num[atom]) {
        return None;
    }
    let heavy = graph.neighbors(atom);
    match (heavy.len(), graph.hydrogen_count(atom)) {
        (3, 1) | (4, 0) => {}
        _ => return None,
    }

    let center = NodeIndex::new(atom);
    if mol
        .bonds_of(center)
        .any(|e| mol.bond(e).bond_stereo() == BondStereo::Either)
    {
        return None;
    }

    let mut carriers: [Option<usize>; 4] = [None; 4];
    for (slot, &nb) in carriers.iter_mut().zip(heavy) {
        *slot = Some(nb);
    }
    let hydrogen = if heavy.len() == 3 {
        graph.explicit_h[atom].first().copied()
    } else {
        None
    };

    let raw = offsets_3d(mol, atom, heavy, hydrogen)
        .or_else(|| offsets_2d(mol, atom, heavy, hydrogen))?;
    let dirs = unit_directions(raw)?;

    let ambiguous = (0..4)
        .filter(|&i| (0..4).any(|j| j != i && dot(dirs[i], dirs[j]) > DUPLICATE_COSINE))
        .count();
    if ambiguous > 1 {
        return None;
    }

    let one = signed_volume(dirs[0], dirs[1], dirs[2], dirs[3]);
    let two = signed_volume(dirs[0], dirs[1], dirs[3], dirs[2]);
    if (one - two).abs() < VOLUME_TOLERANCE {
        return None;
    }
    if one > two {
        carriers.swap(2, 3);
    }
    Some(carriers)
}

fn position_3d<A: HasPosition3D, B>(mol: &Mol<A, B>, atom: usize) -> Option<Vec3> {
    mol.atom(NodeIndex::new(atom)).position_3d()
}

fn position_2d<A: HasPosition2D + HasPosition3D, B>(mol: &Mol<A, B>, atom: usize) -> Option<[f64; 2]> {
    let a = mol.atom(NodeIndex::new(atom));
    a.position_2d()
        .or_else(|| a.position_3d().map(|[x, y, _]| [x, y]))
}

/// Offsets from real 3D coordinates, when they exist and are not flat.
/// The fourth slot is `None` when the hydrogen must be synthesized.
fn offsets_3d<A, B>(
    mol: &Mol<A, B>,
    atom: usize,
    heavy: &[usize],
    hydrogen: Option<usize>,
) -> Option<[Option<Vec3>; 4]>
where
    A: FingerprintAtom,
{
    let origin = position_3d(mol, atom)?;
    let mut offsets = [None; 4];
    let (mut zlo, mut zhi) = (origin[2], origin[2]);
    for (slot, &nb) in offsets.iter_mut().zip(heavy) {
        let p = position_3d(mol, nb)?;
        zlo = zlo.min(p[2]);
        zhi = zhi.max(p[2]);
        *slot = Some(sub(p, origin));
    }
    if let Some(h) = hydrogen {
        offsets[3] = position_3d(mol, h).map(|p| sub(p, origin));
    }
    if zhi - zlo < Z_TOLERANCE {
        return None;
    }
    Some(offsets)
}

/// Offsets from 2D coordinates, lifted out of the plane by wedge bonds that
/// start at the center. Without such a wedge there is nothing to go on.
fn offsets_2d<A, B>(
    mol: &Mol<A, B>,
    atom: usize,
    heavy: &[usize],
    hydrogen: Option<usize>,
) -> Option<[Option<Vec3>; 4]>
where
    A: FingerprintAtom,
    B: FingerprintBond,
{
    let origin = position_2d(mol, atom)?;
    let center = NodeIndex::new(atom);
    let mut offsets = [None; 4];
    let mut wedged = false;

    let lift = |nb: usize, p: [f64; 2]| -> (Vec3, bool) {
        let (dx, dy) = (p[0] - origin[0], p[1] - origin[1]);
        let len = (dx * dx + dy * dy).sqrt();
        let stereo = mol
            .bond_between(center, NodeIndex::new(nb))
            .filter(|&e| mol.bond_endpoints(e).map(|(begin, _)| begin) == Some(center))
            .map(|e| mol.bond(e).bond_stereo())
            .unwrap_or_default();
        match stereo {
            BondStereo::Up => ([dx, dy, len], true),
            BondStereo::Down => ([dx, dy, -len], true),
            _ => ([dx, dy, 0.0], false),
        }
    };

    for (slot, &nb) in offsets.iter_mut().zip(heavy) {
        let (v, w) = lift(nb, position_2d(mol, nb)?);
        wedged |= w;
        *slot = Some(v);
    }
    if let Some(h) = hydrogen {
        if let Some(p) = position_2d(mol, h) {
            let (v, w) = lift(h, p);
            wedged |= w;
            offsets[3] = Some(v);
        }
    }
    if !wedged {
        return None;
    }
    Some(offsets)
}

/// Normalizes the offsets, placing a missing hydrogen opposite the other
/// three carriers.
fn unit_directions(raw: [Option<Vec3>; 4]) -> Option<[Vec3; 4]> {
    let mut dirs = [[0.0; 3]; 4];
    for i in 0..3 {
        dirs[i] = normalize(raw[i]?)?;
    }
    dirs[3] = match raw[3] {
        Some(v) => normalize(v)?,
        None => normalize([
            -(dirs[0][0] + dirs[1][0] + dirs[2][0]),
            -(dirs[0][1] + dirs[1][1] + dirs[2][1]),
            -(dirs[0][2] + dirs[1][2] + dirs[2][2]),
        ])?,
    };
    Some(dirs)
}

/// Six times the signed volume of the tetrahedron `abcd`; negative when,
/// seen from `a`, the points `b`, `c`, `d` run anticlockwise.
fn signed_volume(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f64 {
    triple(b, c, d) - triple(a, c, d) + triple(a, b, d) - triple(a, b, c)
}

fn triple(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    dot(a, cross(b, c))
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn normalize(v: Vec3) -> Option<Vec3> {
    let len = dot(v, v).sqrt();
    if len < 1e-6 {
        return None;
    }
    Some([v[0] / len, v[1] / len, v[2] / len])
}
