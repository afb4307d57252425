//! Per-element constant tables used while fingerprinting.

pub fn normal_bonding(atomic_num: u8) -> u8 {
    NORMAL_BONDING
        .get(atomic_num as usize)
        .copied()
        .unwrap_or(0)
}

/// Number of bonds an element usually forms, indexed by atomic number.
/// Elements past xenon and the d-block have no usual count.
static NORMAL_BONDING: [u8; 55] = [
    0,  // dummy
    1, 0,                                                 // H  He
    1, 2, 3, 4, 3, 2, 1, 0,                              // Li Be B  C  N  O  F  Ne
    1, 2, 3, 4, 3, 2, 1, 0,                              // Na Mg Al Si P  S  Cl Ar
    1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 4, 3, 2, 1, 0, // K  Ca Sc..Zn Ga Ge As Se Br Kr
    1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 4, 3, 2, 1, 0, // Rb Sr Y ..Cd In Sn Sb Te I  Xe
];

/// Valence used to derive undeclared hydrogen counts. Only the common
/// organic elements are covered; everything else gets no hydrogens.
pub fn implicit_valence(atomic_num: u8) -> Option<u8> {
    match atomic_num {
        6 => Some(4),
        7 => Some(3),
        8 => Some(2),
        15 => Some(3),
        16 => Some(2),
        _ => None,
    }
}

/// Bond-order sum plus charge below which N, O and S still hold a lone pair.
pub fn lone_pair_valence(atomic_num: u8) -> Option<u8> {
    match atomic_num {
        7 => Some(4),
        8 | 16 => Some(3),
        _ => None,
    }
}

pub fn is_p_block(atomic_num: u8) -> bool {
    matches!(atomic_num, 5..=10 | 13..=18 | 31..=36 | 49..=54 | 81..=86 | 113..=118)
}

pub fn is_halide(atomic_num: u8) -> bool {
    matches!(atomic_num, 9 | 17 | 35 | 53)
}

/// Element symbol for log output; `"*"` past xenon.
pub fn symbol(atomic_num: u8) -> &'static str {
    SYMBOLS.get(atomic_num as usize).copied().unwrap_or("*")
}

static SYMBOLS: [&str; 55] = [
    "*", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe",
];
