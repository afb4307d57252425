use crate::error::FingerprintError;
use crate::mol::Mol;
use crate::traits::*;

#[derive(Debug, Clone, PartialEq)]
pub struct WithPosition2D<T> {
    pub inner: T,
    pub position_2d: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithPosition3D<T> {
    pub inner: T,
    pub position_3d: Option<[f64; 3]>,
}

impl<T> WithPosition2D<T> {
    pub fn new(inner: T, position: [f64; 2]) -> Self {
        Self {
            inner,
            position_2d: Some(position),
        }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> WithPosition3D<T> {
    pub fn new(inner: T, position: [f64; 3]) -> Self {
        Self {
            inner,
            position_3d: Some(position),
        }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

/// Attaches a depiction to `mol`, one `[x, y]` per atom in index order.
pub fn with_depiction<A: Clone, B: Clone>(
    mol: &Mol<A, B>,
    coords: &[[f64; 2]],
) -> Result<Mol<WithPosition2D<A>, B>, FingerprintError> {
    check_count(mol, coords.len())?;
    Ok(mol.map_atoms(|idx, atom| WithPosition2D::new(atom.clone(), coords[idx.index()])))
}

/// Attaches a conformer to `mol`, one `[x, y, z]` per atom in index order.
pub fn with_conformer<A: Clone, B: Clone>(
    mol: &Mol<A, B>,
    coords: &[[f64; 3]],
) -> Result<Mol<WithPosition3D<A>, B>, FingerprintError> {
    check_count(mol, coords.len())?;
    Ok(mol.map_atoms(|idx, atom| WithPosition3D::new(atom.clone(), coords[idx.index()])))
}

fn check_count<A, B>(mol: &Mol<A, B>, coordinates: usize) -> Result<(), FingerprintError> {
    if coordinates != mol.atom_count() {
        return Err(FingerprintError::CoordinateCount {
            atoms: mol.atom_count(),
            coordinates,
        });
    }
    Ok(())
}

impl<T> HasPosition2D for WithPosition2D<T> {
    fn position_2d(&self) -> Option<[f64; 2]> {
        self.position_2d
    }
}

impl<T> HasPosition3D for WithPosition3D<T> {
    fn position_3d(&self) -> Option<[f64; 3]> {
        self.position_3d
    }
}

macro_rules! delegate_trait {
    ($wrapper:ident, $trait:ident, $method:ident, $ret:ty) => {
        impl<T: $trait> $trait for $wrapper<T> {
            fn $method(&self) -> $ret {
                self.inner.$method()
            }
        }
    };
}

macro_rules! delegate_atom {
    ($wrapper:ident) => {
        delegate_trait!($wrapper, HasAtomicNum, atomic_num, u8);
        delegate_trait!($wrapper, HasFormalCharge, formal_charge, i8);
        delegate_trait!($wrapper, HasHydrogenCount, hydrogen_count, Option<u8>);
    };
}

delegate_atom!(WithPosition2D);
delegate_trait!(WithPosition2D, HasPosition3D, position_3d, Option<[f64; 3]>);

delegate_atom!(WithPosition3D);
delegate_trait!(WithPosition3D, HasPosition2D, position_2d, Option<[f64; 2]>);
