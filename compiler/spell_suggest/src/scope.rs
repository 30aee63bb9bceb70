//! Read-only view of the analyzer's scopes.
//!
//! The suggestion core does not own a symbol table. It reads one through
//! [`ScopeGraph`], which the analyzer implements over whatever structure it
//! already has. [`ScopeTree`] is a small arena implementation for embedders
//! without one, and for tests.

use spell_ir::{Name, StringInterner};

/// Handle to a scope inside a [`ScopeGraph`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ScopeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of declarative region a scope is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ScopeKind {
    Block,
    Function,
    Class,
    Namespace,
    /// An enumeration. Only `scoped` enums keep their enumerators to
    /// themselves; an unscoped enum's enumerators are also declared in the
    /// enclosing scope by the analyzer.
    Enum { scoped: bool },
}

/// Read-only access to scopes, their members, and their nesting.
///
/// Implementations must return members and child namespaces in a stable
/// order (declaration order is the natural choice) so that suggestions are
/// reproducible.
pub trait ScopeGraph {
    /// Kind of `scope`, or `None` if the handle does not belong to this graph.
    fn kind(&self, scope: ScopeId) -> Option<ScopeKind>;

    /// Lexically enclosing scope. `None` for the global namespace.
    fn parent(&self, scope: ScopeId) -> Option<ScopeId>;

    /// Declared name of the scope itself. `None` for anonymous scopes.
    fn name(&self, scope: ScopeId) -> Option<Name>;

    /// Names declared directly in `scope`.
    fn members(&self, scope: ScopeId) -> &[Name];

    /// Namespaces declared directly in `scope`.
    fn child_namespaces(&self, scope: ScopeId) -> &[ScopeId];

    fn contains(&self, scope: ScopeId) -> bool {
        self.kind(scope).is_some()
    }
}

/// Render the `::`-joined path of named scopes from the global namespace
/// down to `scope`. Anonymous scopes are skipped; the global namespace
/// renders as the empty string.
pub fn qualified_path<G: ScopeGraph + ?Sized>(
    graph: &G,
    scope: ScopeId,
    interner: &StringInterner,
) -> String {
    let mut segments: Vec<&str> = std::iter::successors(Some(scope), |&s| graph.parent(s))
        .filter_map(|s| graph.name(s))
        .map(|name| interner.lookup(name))
        .collect();
    segments.reverse();
    segments.join("::")
}

#[derive(Clone, Debug)]
struct ScopeData {
    kind: ScopeKind,
    parent: Option<ScopeId>,
    name: Option<Name>,
    members: Vec<Name>,
    namespaces: Vec<ScopeId>,
}

/// Arena-backed [`ScopeGraph`].
///
/// The global namespace is created with the tree and is always
/// [`ScopeTree::root`].
///
/// # Usage
///
/// ```ignore
/// let mut tree = ScopeTree::new();
/// let std_ns = tree.add_scope(tree.root(), ScopeKind::Namespace, Some(interner.intern("std")));
/// tree.declare(std_ns, interner.intern("vector"));
/// ```
#[derive(Clone, Debug)]
pub struct ScopeTree {
    scopes: Vec<ScopeData>,
}

impl ScopeTree {
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![ScopeData {
                kind: ScopeKind::Namespace,
                parent: None,
                name: None,
                members: Vec::new(),
                namespaces: Vec::new(),
            }],
        }
    }

    /// The global namespace.
    #[inline]
    pub const fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Open a new scope nested in `parent`.
    ///
    /// # Panics
    /// Panics if `parent` was not created by this tree.
    pub fn add_scope(&mut self, parent: ScopeId, kind: ScopeKind, name: Option<Name>) -> ScopeId {
        assert!(
            self.contains(parent),
            "parent scope {} does not belong to this tree",
            parent.raw()
        );
        let id = ScopeId(u32::try_from(self.scopes.len()).unwrap_or(u32::MAX));
        self.scopes.push(ScopeData {
            kind,
            parent: Some(parent),
            name,
            members: Vec::new(),
            namespaces: Vec::new(),
        });
        if kind == ScopeKind::Namespace {
            self.scopes[parent.index()].namespaces.push(id);
        }
        id
    }

    /// Declare `name` in `scope`. Redeclaring a name keeps its first position.
    ///
    /// # Panics
    /// Panics if `scope` was not created by this tree.
    pub fn declare(&mut self, scope: ScopeId, name: Name) {
        let members = &mut self.scopes[scope.index()].members;
        if !members.contains(&name) {
            members.push(name);
        }
    }

    /// Declare every name in `names`, in order.
    pub fn declare_all(&mut self, scope: ScopeId, names: impl IntoIterator<Item = Name>) {
        for name in names {
            self.declare(scope, name);
        }
    }

    /// Number of scopes, including the global namespace.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    fn get(&self, scope: ScopeId) -> Option<&ScopeData> {
        self.scopes.get(scope.index())
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeGraph for ScopeTree {
    fn kind(&self, scope: ScopeId) -> Option<ScopeKind> {
        self.get(scope).map(|s| s.kind)
    }

    fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.get(scope).and_then(|s| s.parent)
    }

    fn name(&self, scope: ScopeId) -> Option<Name> {
        self.get(scope).and_then(|s| s.name)
    }

    fn members(&self, scope: ScopeId) -> &[Name] {
        match self.get(scope) {
            Some(s) => &s.members,
            None => &[],
        }
    }

    fn child_namespaces(&self, scope: ScopeId) -> &[ScopeId] {
        match self.get(scope) {
            Some(s) => &s.namespaces,
            None => &[],
        }
    }
}
