/*!
Clauses: a non-empty, duplicate-free, non-tautological sequence of literals, interpreted as
their disjunction.

The canonical representation of a clause is a vector of [Literal]s. A [Clause] does not own its
position in a [Formula](crate::structures::formula::Formula); clauses are referred to by a
[ClauseId], a stable, non-owning identifier assigned when the clause is added to a formula.
*/

use crate::structures::{atom::Atom, literal::Literal};

/// A clause: a non-empty sequence of literals, treated as a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Builds a clause from already-normalized literals (no duplicates, no complementary pair).
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// The number of literals in the clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause has no literals. A well-formed [Formula] never stores one of these.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// An iterator over the literals of the clause, in insertion order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// An iterator over the distinct atoms mentioned by the clause.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().map(|l| l.atom())
    }

    /// The clause rendered as DIMACS tokens, terminated with `0`.
    pub fn as_dimacs(&self) -> String {
        let mut rendered = self
            .literals
            .iter()
            .map(|l| l.as_dimacs().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        rendered.push_str(" 0");
        rendered
    }
}

/// A stable, non-owning reference to a clause held by a [Formula](crate::structures::formula::Formula).
///
/// `ClauseId`s remain valid for the duration of a run; they index into the formula's clause
/// arena and are never reused or invalidated once issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseId(pub usize);

impl std::fmt::Display for ClauseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}
