//! Candidate names and the sources that produce them.
//!
//! A [`CandidateSource`] enumerates the names visible in one kind of
//! context, closest scopes first. Every source suppresses repeated names so
//! that a name shadowed by a closer declaration is only offered once, at its
//! closest position.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use spell_ir::Name;

use crate::{HeaderTable, ScopeGraph, ScopeId, ScopeKind};

/// Where a candidate name was found.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Provenance {
    /// Visible through the lexical scope chain at the error.
    Scope,
    /// Declared in a namespace the lookup did not search; needs qualifying.
    OtherNamespace { namespace: ScopeId },
    /// Enumerator of the scoped enumeration named at the error.
    ScopedEnum { enumeration: ScopeId },
    /// Direct member of the scope named by an explicit qualifier.
    Member { scope: ScopeId },
    /// Standard name whose header has not been included.
    MissingHeader { header: Name },
}

/// A name considered as a correction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Candidate {
    pub name: Name,
    pub provenance: Provenance,
    /// Closeness rank, 0 for the innermost scope searched.
    pub depth: u32,
}

/// Produces candidate names for one lookup context.
pub trait CandidateSource {
    /// Lazily enumerate candidates, closer scopes first, without repeating a
    /// name.
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_;
}

/// Drop candidates whose name was already produced.
fn unique(candidates: impl Iterator<Item = Candidate>) -> impl Iterator<Item = Candidate> {
    let mut seen = FxHashSet::default();
    candidates.filter(move |c| seen.insert(c.name))
}

fn depth_of(level: usize) -> u32 {
    u32::try_from(level).unwrap_or(u32::MAX)
}

/// Names visible along the scope chain starting at `start`.
pub struct ScopeChainSource<'g, G: ?Sized> {
    graph: &'g G,
    start: ScopeId,
}

impl<'g, G: ScopeGraph + ?Sized> ScopeChainSource<'g, G> {
    pub fn new(graph: &'g G, start: ScopeId) -> Self {
        ScopeChainSource { graph, start }
    }
}

impl<G: ScopeGraph + ?Sized> CandidateSource for ScopeChainSource<'_, G> {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        let graph = self.graph;
        let chain = std::iter::successors(Some(self.start), move |&s| graph.parent(s));
        unique(chain.enumerate().flat_map(move |(level, scope)| {
            let depth = depth_of(level);
            graph.members(scope).iter().map(move |&name| Candidate {
                name,
                provenance: Provenance::Scope,
                depth,
            })
        }))
    }
}

/// Names declared in namespaces that an unqualified lookup from `start`
/// never searches.
///
/// For each namespace enclosing `start`, innermost first, its child
/// namespaces that are not themselves on the chain are visited in
/// declaration order, depth-first. A namespace found one level further out,
/// or nested one level deeper, ranks one step farther away.
pub struct OtherNamespaceSource<'g, G: ?Sized> {
    graph: &'g G,
    start: ScopeId,
}

impl<'g, G: ScopeGraph + ?Sized> OtherNamespaceSource<'g, G> {
    pub fn new(graph: &'g G, start: ScopeId) -> Self {
        OtherNamespaceSource { graph, start }
    }

    /// Namespaces to search, paired with their closeness rank.
    fn namespaces(&self) -> Vec<(ScopeId, u32)> {
        let graph = self.graph;
        let chain: SmallVec<[ScopeId; 8]> =
            std::iter::successors(Some(self.start), |&s| graph.parent(s))
                .filter(|&s| graph.kind(s) == Some(ScopeKind::Namespace))
                .collect();

        let mut found = Vec::new();
        let mut stack: Vec<(ScopeId, u32)> = Vec::new();
        for (level, &enclosing) in chain.iter().enumerate() {
            let depth = depth_of(level + 1);
            stack.extend(
                graph
                    .child_namespaces(enclosing)
                    .iter()
                    .rev()
                    .filter(|&&ns| !chain.contains(&ns))
                    .map(|&ns| (ns, depth)),
            );
            while let Some((ns, depth)) = stack.pop() {
                found.push((ns, depth));
                stack.extend(
                    graph
                        .child_namespaces(ns)
                        .iter()
                        .rev()
                        .map(|&child| (child, depth.saturating_add(1))),
                );
            }
        }
        found
    }
}

impl<G: ScopeGraph + ?Sized> CandidateSource for OtherNamespaceSource<'_, G> {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        let graph = self.graph;
        unique(self.namespaces().into_iter().flat_map(move |(namespace, depth)| {
            graph.members(namespace).iter().map(move |&name| Candidate {
                name,
                provenance: Provenance::OtherNamespace { namespace },
                depth,
            })
        }))
    }
}

/// Direct members of one explicitly named scope.
pub struct MemberSource<'g, G: ?Sized> {
    graph: &'g G,
    scope: ScopeId,
}

impl<'g, G: ScopeGraph + ?Sized> MemberSource<'g, G> {
    pub fn new(graph: &'g G, scope: ScopeId) -> Self {
        MemberSource { graph, scope }
    }
}

impl<G: ScopeGraph + ?Sized> CandidateSource for MemberSource<'_, G> {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        let scope = self.scope;
        unique(self.graph.members(scope).iter().map(move |&name| Candidate {
            name,
            provenance: Provenance::Member { scope },
            depth: 0,
        }))
    }
}

/// Enumerators of one scoped enumeration.
pub struct EnumeratorSource<'g, G: ?Sized> {
    graph: &'g G,
    enumeration: ScopeId,
}

impl<'g, G: ScopeGraph + ?Sized> EnumeratorSource<'g, G> {
    pub fn new(graph: &'g G, enumeration: ScopeId) -> Self {
        EnumeratorSource { graph, enumeration }
    }
}

impl<G: ScopeGraph + ?Sized> CandidateSource for EnumeratorSource<'_, G> {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        let enumeration = self.enumeration;
        unique(self.graph.members(enumeration).iter().map(move |&name| Candidate {
            name,
            provenance: Provenance::ScopedEnum { enumeration },
            depth: 0,
        }))
    }
}

/// The header-table entry for exactly `name`, if there is one.
pub struct HeaderSource<'t> {
    table: &'t HeaderTable,
    name: Name,
}

impl<'t> HeaderSource<'t> {
    pub fn new(table: &'t HeaderTable, name: Name) -> Self {
        HeaderSource { table, name }
    }
}

impl CandidateSource for HeaderSource<'_> {
    fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.table
            .lookup(self.name)
            .map(|header| Candidate {
                name: self.name,
                provenance: Provenance::MissingHeader { header },
                depth: 0,
            })
            .into_iter()
    }
}
