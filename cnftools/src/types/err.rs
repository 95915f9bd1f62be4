/*!
Error types used in the crate.

- Most of these are only reachable on malformed input or on an oracle misbehaving.
- `ErrorKind` is a union of the leaf error types below, so that `?` composes across module
  boundaries without every function importing every leaf type.
*/

use crate::structures::atom::Atom;

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error while parsing DIMACS input.
    Parse(ParseError),

    /// An error from the semantic oracle.
    Oracle(OracleError),

    /// An invariant of the clause index or gate formula was violated.
    ///
    /// Should never occur on well-formed input; indicates a bug in the analyzer.
    Internal(InternalError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Parse(e) => write!(f, "parse error: {e}"),
            ErrorKind::Oracle(e) => write!(f, "oracle error: {e}"),
            ErrorKind::Internal(e) => write!(f, "internal error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

impl From<InternalError> for ErrorKind {
    fn from(e: InternalError) -> Self {
        ErrorKind::Internal(e)
    }
}

/// Errors during parsing of DIMACS input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The file could not be read.
    NoFile,

    /// Some issue with the `p cnf V C` problem line.
    ProblemSpecification,

    /// A token where a literal or the clause terminator `0` was expected, at the given line.
    Token(usize),

    /// A clause mentions a variable greater than the declared variable count.
    VariableOutOfRange { declared: Atom, found: Atom },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::NoFile => write!(f, "could not read input file"),
            ParseError::ProblemSpecification => {
                write!(f, "malformed 'p cnf V C' problem line")
            }
            ParseError::Token(line) => write!(f, "malformed token on line {line}"),
            ParseError::VariableOutOfRange { declared, found } => write!(
                f,
                "variable {found} exceeds the {declared} declared in the problem line"
            ),
        }
    }
}

/// Errors from the semantic oracle adapter.
///
/// A failed [solve](crate::oracle::SemanticOracle::solve) call that is due to a timeout is not an
/// error: it is reported as [Answer::Unknown](crate::oracle::Answer::Unknown) and the analyzer
/// treats the candidate as ungated. These variants are for conditions the oracle cannot recover
/// from within a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The oracle could not be initialized.
    Init,

    /// A call into the oracle failed.
    Call,
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleError::Init => write!(f, "the oracle could not be initialized"),
            OracleError::Call => write!(f, "a call into the oracle failed"),
        }
    }
}

/// Violations of an invariant the analyzer relies on; should never occur on well-formed input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InternalError {
    /// A variable removed from the index reappeared in one of its buckets.
    RemovedVariableReappeared(Atom),

    /// A gate was recorded for a variable that is already the output of another gate.
    DuplicateGateOutput(Atom),
}

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternalError::RemovedVariableReappeared(v) => {
                write!(f, "variable {v} reappeared in the index after removal")
            }
            InternalError::DuplicateGateOutput(v) => {
                write!(f, "variable {v} is already the output of a gate")
            }
        }
    }
}
