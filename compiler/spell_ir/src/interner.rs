//! Sharded string interner for identifier storage.
//!
//! Interning happens while the analyzer builds its scopes and the header
//! table is loaded; afterwards the suggestion core only reads. Each shard has
//! its own `RwLock` so concurrent lookups from independent diagnostics never
//! contend on a single lock.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::name::{Name, SHARDS, SLOT_LIMIT};

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by local index.
    strings: Vec<&'static str>,
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        shard.map.insert("", 0);
        shard.strings.push("");
        shard
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded the 28-bit local index space.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {shard_idx} exceeded capacity: {count} strings, max is {}",
                SLOT_LIMIT
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Sharded string interner.
///
/// Strings are leaked on first insertion, so every `&str` handed out lives
/// for the rest of the process. That is the right trade for identifier text:
/// the set is small, and hints can refer to names without borrowing the
/// interner.
pub struct StringInterner {
    shards: [RwLock<InternShard>; SHARDS],
    /// Total count of interned strings across all shards.
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner holding only the empty string.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });
        Self {
            shards,
            total_count: AtomicUsize::new(1),
        }
    }

    /// Compute shard for a string from its leading bytes.
    #[inline]
    fn shard_for(s: &str) -> u32 {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        // SHARDS is 16, always fits.
        hash % 16
    }

    /// Try to intern a string, returning its `Name` or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if s.is_empty() {
            return Ok(Name::EMPTY);
        }
        let shard_idx = Self::shard_for(s);
        let shard = &self.shards[shard_idx as usize];

        if let Some(&local) = shard.read().map.get(s) {
            return Ok(Name::pack(shard_idx, local));
        }

        let mut guard = shard.write();
        // Another writer may have won the race between the two locks.
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::pack(shard_idx, local));
        }

        let count = guard.strings.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= SLOT_LIMIT)
            .ok_or(InternError::ShardOverflow {
                shard_idx: shard_idx as usize,
                count,
            })?;

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::pack(shard_idx, local))
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if a shard runs out of local indices. Use `try_intern` for
    /// fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up a string that was interned earlier, without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        if s.is_empty() {
            return Some(Name::EMPTY);
        }
        let shard_idx = Self::shard_for(s);
        let guard = self.shards[shard_idx as usize].read();
        guard.map.get(s).map(|&local| Name::pack(shard_idx, local))
    }

    /// Look up the string for a `Name`.
    ///
    /// # Panics
    /// Panics if `name` was produced by a different interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        let (shard, slot) = name.unpack();
        self.shards[shard].read().strings[slot]
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner only has the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Reference-counted interner for sharing across threads.
#[derive(Clone, Debug, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
