#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Quadruple,
}

impl BondOrder {
    /// Numeric bond order, 1 through 4.
    pub fn as_u8(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Quadruple => 4,
        }
    }
}

/// Wedge marker of a drawn bond.
///
/// `Up` and `Down` are read from the bond's begin atom (its first endpoint):
/// the end atom sits above or below the drawing plane. `Either` is the
/// "squiggly" bond of unknown configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondStereo {
    #[default]
    None,
    Up,
    Down,
    Either,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bond {
    pub order: BondOrder,
    pub stereo: BondStereo,
    /// Declared aromatic by the producer of the graph. `order` is then
    /// usually `Single`; the bond still counts as one pi bond for hydrogen
    /// derivation and matches either phase of the alternation test.
    pub is_aromatic: bool,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// A single bond flagged aromatic.
    pub fn aromatic() -> Self {
        Self {
            is_aromatic: true,
            ..Self::default()
        }
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasBondStereo for Bond {
    fn bond_stereo(&self) -> BondStereo {
        self.stereo
    }
}

impl crate::traits::HasBondAromaticity for Bond {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}
