/*!
The semantic oracle adapter: an IPASIR-shaped incremental SAT solver interface, used by the
[gate analyzer](crate::gates::analyzer) to settle candidates that patterns can't classify.

Modelled on the `assume`/`add`/`solve` shape of the IPASIR C ABI (see
[otter_sat's own adapter](crate::oracle) for the source of this idiom) rather than on a specific
vendored IPASIR implementation — no real IPASIR build is a fetchable crate dependency, so
[internal::InternalOracle] implements the trait directly over this crate's own clause types.
*/

pub mod internal;

use crate::structures::literal::Literal;

/// The result of a [SemanticOracle::solve] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Sat,
    Unsat,
    /// The oracle could not determine satisfiability within its configured deadline. The
    /// analyzer treats this the same as a pattern mismatch: classify the candidate as NONE.
    Unknown,
}

/// An incremental SAT solver, exposed the way the IPASIR C ABI exposes one: clauses and
/// assumptions accumulate across calls; nothing is ever retracted within one adapter's lifetime.
pub trait SemanticOracle {
    /// Assumes `literal` true for the next [solve](SemanticOracle::solve) call only.
    fn assume(&mut self, literal: Literal);

    /// Appends `literal` to the clause currently being built.
    fn add(&mut self, literal: Literal);

    /// Terminates the clause currently being built (the IPASIR `add(0)` convention).
    fn add_terminator(&mut self);

    /// Solves under the assumptions accumulated since the last call.
    fn solve(&mut self) -> Answer;

    /// A short identifier for the oracle implementation, for diagnostics.
    fn signature(&self) -> String;
}
