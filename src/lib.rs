//! Circular (Morgan-type) molecular fingerprints.
//!
//! [`CircularFingerprinter`] turns a [`Mol`] into ECFP or FCFP records: one
//! 32-bit identifier per distinct atom-centered environment, grown one bond
//! further per iteration. Records can be folded into a fixed-width bit
//! vector for screening or kept as a sparse count map.
//!
//! ```
//! use circfp::{Atom, Bond, CircularFingerprinter, FingerprintClass, Mol};
//!
//! let mut ethanol = Mol::<Atom, Bond>::new();
//! let c1 = ethanol.add_atom(Atom::new(6));
//! let c2 = ethanol.add_atom(Atom::new(6));
//! let o = ethanol.add_atom(Atom::new(8));
//! ethanol.add_bond(c1, c2, Bond::default());
//! ethanol.add_bond(c2, o, Bond::default());
//!
//! let fp = CircularFingerprinter::new(FingerprintClass::Ecfp4).calculate(&ethanol);
//! assert_eq!(fp.len(), 6);
//! assert_eq!(fp.counts().total(), 6);
//! ```

pub mod aromaticity;
pub mod atom;
pub mod biotype;
pub mod bond;
pub mod config;
mod crc;
pub mod element;
pub mod environment;
pub mod error;
pub mod excavate;
pub mod fingerprinter;
pub mod fold;
mod identity;
pub mod mol;
pub mod rings;
mod stereo;
pub mod traits;
pub mod wrappers;

pub use atom::Atom;
pub use biotype::BioTypes;
pub use bond::{Bond, BondOrder, BondStereo};
pub use config::{FingerprintClass, FingerprintConfig, DEFAULT_FOLDED_LENGTH};
pub use environment::FingerprintRecord;
pub use error::FingerprintError;
pub use excavate::ExcavatedGraph;
pub use fingerprinter::{CircularFingerprinter, Fingerprints};
pub use fold::{tanimoto, CountFingerprint, FoldedFingerprint};
pub use mol::{AtomId, Mol, TetrahedralStereo, Winding};
pub use traits::{
    FingerprintAtom, FingerprintBond, HasAtomicNum, HasBondAromaticity, HasBondOrder,
    HasBondStereo, HasFormalCharge, HasHydrogenCount, HasPosition2D, HasPosition3D,
};
pub use wrappers::{with_conformer, with_depiction, WithPosition2D, WithPosition3D};

#[cfg(test)]
mod test_util;
