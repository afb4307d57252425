//! Output forms of a fingerprint: a folded bit vector and a sparse count map.

use std::collections::BTreeMap;

use crate::environment::FingerprintRecord;

/// Fixed-width bit fingerprint; each record sets bit `hash mod len`, with
/// the hash taken as unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldedFingerprint {
    bits: Vec<u64>,
    len: usize,
}

impl FoldedFingerprint {
    /// An empty fingerprint of `len` bits.
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![0; len.div_ceil(64)],
            len,
        }
    }

    pub(crate) fn from_records(records: &[FingerprintRecord], len: usize) -> Self {
        let mut fp = Self::new(len);
        if len == 0 {
            return fp;
        }
        for record in records {
            fp.set(fold_index(record.hash(), len));
        }
        fp
    }

    /// Sets bit `index`; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.bits[index / 64] |= 1 << (index % 64);
        }
    }

    pub fn get(&self, index: usize) -> bool {
        index < self.len && (self.bits[index / 64] >> (index % 64)) & 1 == 1
    }

    pub fn count_ones(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of the set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().flat_map(|(w, &word)| {
            (0..64usize)
                .filter(move |b| (word >> b) & 1 == 1)
                .map(move |b| w * 64 + b)
        })
    }
}

/// Bit position a hash folds onto.
pub fn fold_index(hash: i32, len: usize) -> usize {
    (hash as u32) as usize % len
}

/// Tanimoto coefficient of two folded fingerprints; `None` when their
/// lengths differ. Two empty fingerprints are identical.
pub fn tanimoto(a: &FoldedFingerprint, b: &FoldedFingerprint) -> Option<f64> {
    if a.len != b.len {
        return None;
    }
    let mut both = 0u32;
    let mut either = 0u32;
    for (x, y) in a.bits.iter().zip(&b.bits) {
        both += (x & y).count_ones();
        either += (x | y).count_ones();
    }
    if either == 0 {
        return Some(1.0);
    }
    Some(both as f64 / either as f64)
}

/// Sparse `(hash, count)` fingerprint over the full 32-bit hash space,
/// ordered by hash.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountFingerprint {
    entries: Vec<(i32, u32)>,
}

impl CountFingerprint {
    pub(crate) fn from_records(records: &[FingerprintRecord]) -> Self {
        let mut counts: BTreeMap<i32, u32> = BTreeMap::new();
        for record in records {
            *counts.entry(record.hash()).or_default() += 1;
        }
        Self {
            entries: counts.into_iter().collect(),
        }
    }

    /// Notional width of the fingerprint: every 32-bit hash is a position.
    pub fn size(&self) -> u64 {
        1 << 32
    }

    /// Number of distinct hashes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hash(&self, index: usize) -> i32 {
        self.entries[index].0
    }

    pub fn count(&self, index: usize) -> u32 {
        self.entries[index].1
    }

    /// Occurrences of `hash`, zero when absent.
    pub fn count_of(&self, hash: i32) -> u32 {
        self.entries
            .binary_search_by_key(&hash, |&(h, _)| h)
            .map(|i| self.entries[i].1)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|&(_, c)| c).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.entries.iter().copied()
    }
}
