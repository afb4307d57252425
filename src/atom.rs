/// Default atom type for a molecular graph node.
///
/// `Atom` stores the intrinsic properties the fingerprint engine reads:
/// element, formal charge and the number of suppressed hydrogens. It
/// deliberately omits coordinates; those are provided by the wrapper types
/// in the [`wrappers`](crate::wrappers) module when stereo perception from
/// geometry is wanted.
///
/// # Examples
///
/// ```
/// use circfp::Atom;
///
/// let carbon = Atom {
///     atomic_num: 6,
///     formal_charge: 0,
///     hydrogen_count: Some(3),
/// };
/// assert_eq!(carbon.atomic_num, 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Atom {
    /// Element, by atomic number. `1` marks a hydrogen node, which the
    /// fingerprinter folds into its neighbor's hydrogen count.
    pub atomic_num: u8,
    /// Formal charge; part of the elemental seed and of the ionic FCFP types.
    pub formal_charge: i8,
    /// Suppressed hydrogens on this atom.
    ///
    /// These are not graph nodes. `None` means the count was never
    /// declared, in which case it is derived from a conservative valence
    /// table when the molecule is fingerprinted. Hydrogens that *are* graph
    /// nodes are always added on top of this count.
    pub hydrogen_count: Option<u8>,
}

impl Atom {
    /// An atom of the given element with an undeclared hydrogen count.
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> Option<u8> {
        self.hydrogen_count
    }
}

impl crate::traits::HasPosition2D for Atom {}

impl crate::traits::HasPosition3D for Atom {}
