//! Identifier → header mapping for "missing `#include`" hints.
//!
//! The table is built once per session and never changes afterwards. It is
//! passed to the suggester explicitly rather than living in a global, so a
//! test can hand in a three-entry fixture instead of the standard library.

use rustc_hash::FxHashMap;
use spell_ir::{Name, StringInterner};

/// Common C and C++ standard-library names and the header declaring them.
const CXX_STANDARD_HEADERS: &[(&str, &str)] = &[
    // <cstddef>, <cstdint>
    ("size_t", "<cstddef>"),
    ("ptrdiff_t", "<cstddef>"),
    ("nullptr_t", "<cstddef>"),
    ("int8_t", "<cstdint>"),
    ("int16_t", "<cstdint>"),
    ("int32_t", "<cstdint>"),
    ("int64_t", "<cstdint>"),
    ("uint8_t", "<cstdint>"),
    ("uint16_t", "<cstdint>"),
    ("uint32_t", "<cstdint>"),
    ("uint64_t", "<cstdint>"),
    ("uintptr_t", "<cstdint>"),
    // <cstdio>, <cstdlib>, <cstring>
    ("printf", "<cstdio>"),
    ("fprintf", "<cstdio>"),
    ("snprintf", "<cstdio>"),
    ("puts", "<cstdio>"),
    ("FILE", "<cstdio>"),
    ("fopen", "<cstdio>"),
    ("malloc", "<cstdlib>"),
    ("free", "<cstdlib>"),
    ("abort", "<cstdlib>"),
    ("exit", "<cstdlib>"),
    ("memcpy", "<cstring>"),
    ("memset", "<cstring>"),
    ("strlen", "<cstring>"),
    ("strcmp", "<cstring>"),
    // Containers
    ("vector", "<vector>"),
    ("array", "<array>"),
    ("deque", "<deque>"),
    ("list", "<list>"),
    ("forward_list", "<forward_list>"),
    ("map", "<map>"),
    ("multimap", "<map>"),
    ("set", "<set>"),
    ("multiset", "<set>"),
    ("unordered_map", "<unordered_map>"),
    ("unordered_set", "<unordered_set>"),
    ("queue", "<queue>"),
    ("priority_queue", "<queue>"),
    ("stack", "<stack>"),
    ("span", "<span>"),
    // Strings and streams
    ("string", "<string>"),
    ("wstring", "<string>"),
    ("to_string", "<string>"),
    ("string_view", "<string_view>"),
    ("cout", "<iostream>"),
    ("cerr", "<iostream>"),
    ("cin", "<iostream>"),
    ("endl", "<ostream>"),
    ("stringstream", "<sstream>"),
    ("ostringstream", "<sstream>"),
    ("ifstream", "<fstream>"),
    ("ofstream", "<fstream>"),
    // Utilities
    ("pair", "<utility>"),
    ("move", "<utility>"),
    ("forward", "<utility>"),
    ("swap", "<utility>"),
    ("tuple", "<tuple>"),
    ("optional", "<optional>"),
    ("variant", "<variant>"),
    ("any", "<any>"),
    ("function", "<functional>"),
    ("unique_ptr", "<memory>"),
    ("shared_ptr", "<memory>"),
    ("weak_ptr", "<memory>"),
    ("make_unique", "<memory>"),
    ("make_shared", "<memory>"),
    ("sort", "<algorithm>"),
    ("find", "<algorithm>"),
    ("min", "<algorithm>"),
    ("max", "<algorithm>"),
    ("accumulate", "<numeric>"),
    ("numeric_limits", "<limits>"),
    ("thread", "<thread>"),
    ("mutex", "<mutex>"),
    ("atomic", "<atomic>"),
    ("initializer_list", "<initializer_list>"),
];

/// Read-only mapping from an exact identifier to the header declaring it.
#[derive(Clone, Debug, Default)]
pub struct HeaderTable {
    entries: FxHashMap<Name, Name>,
}

impl HeaderTable {
    /// Build a table from `(identifier, header)` pairs.
    ///
    /// If an identifier appears twice the first header wins.
    pub fn from_entries<'s>(
        interner: &StringInterner,
        entries: impl IntoIterator<Item = (&'s str, &'s str)>,
    ) -> Self {
        let mut map = FxHashMap::default();
        for (ident, header) in entries {
            map.entry(interner.intern(ident))
                .or_insert_with(|| interner.intern(header));
        }
        tracing::debug!(entries = map.len(), "built header table");
        HeaderTable { entries: map }
    }

    /// The built-in table of common C and C++ standard-library names.
    pub fn cxx_standard(interner: &StringInterner) -> Self {
        Self::from_entries(interner, CXX_STANDARD_HEADERS.iter().copied())
    }

    /// Header declaring exactly `name`.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Name> {
        self.entries.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
