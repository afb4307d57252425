use crate::bond::{BondOrder, BondStereo};

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

/// Suppressed hydrogens carried by an atom; `None` when undeclared.
pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> Option<u8>;
}

pub trait HasPosition2D {
    fn position_2d(&self) -> Option<[f64; 2]> {
        None
    }
}

pub trait HasPosition3D {
    fn position_3d(&self) -> Option<[f64; 3]> {
        None
    }
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

pub trait HasBondStereo {
    fn bond_stereo(&self) -> BondStereo;
}

pub trait HasBondAromaticity {
    fn is_aromatic(&self) -> bool;
}

/// Everything the fingerprint engine reads from an atom.
pub trait FingerprintAtom:
    HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasPosition2D + HasPosition3D
{
}

impl<T> FingerprintAtom for T where
    T: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasPosition2D + HasPosition3D
{
}

/// Everything the fingerprint engine reads from a bond.
pub trait FingerprintBond: HasBondOrder + HasBondStereo + HasBondAromaticity {}

impl<T> FingerprintBond for T where T: HasBondOrder + HasBondStereo + HasBondAromaticity {}
