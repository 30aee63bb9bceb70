//! Identifier handles.

use std::fmt;

/// Number of interner shards a [`Name`] can address.
pub(crate) const SHARDS: usize = 16;

const SLOT_BITS: u32 = 28;

/// Largest per-shard slot a [`Name`] can address.
pub(crate) const SLOT_LIMIT: u32 = (1 << SLOT_BITS) - 1;

/// Handle to identifier text held by a [`StringInterner`](crate::StringInterner).
///
/// The top 4 bits select the shard, the low 28 the slot inside it. Equal
/// names mean equal text, so candidate de-duplication and header lookups are
/// integer comparisons. Names have no `Ord`; slot order is only interning
/// order, and suggestions are ranked by text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty identifier. Every interner holds it in shard 0, slot 0.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub(crate) const fn pack(shard: u32, slot: u32) -> Self {
        debug_assert!((shard as usize) < SHARDS);
        debug_assert!(slot <= SLOT_LIMIT);
        Name((shard << SLOT_BITS) | slot)
    }

    /// `(shard, slot)` inside the interner that produced this name.
    #[inline]
    pub(crate) const fn unpack(self) -> (usize, usize) {
        ((self.0 >> SLOT_BITS) as usize, (self.0 & SLOT_LIMIT) as usize)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (shard, slot) = self.unpack();
        write!(f, "Name({shard}:{slot})")
    }
}

#[cfg(test)]
mod tests;
