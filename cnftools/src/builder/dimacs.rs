/*!
Parses DIMACS CNF text into a [Formula].

Tolerant of comment lines, a `p cnf V C` header, and whitespace/newlines that are not
significant within a clause. Tautological clauses (containing `l` and `~l`) are discarded, as
are duplicate literals within a clause; otherwise clauses are preserved in insertion order.
*/

use std::io::BufRead;

use crate::{
    misc::log::targets::PARSER,
    structures::{atom::Atom, formula::Formula, literal::Literal},
    types::err::{ErrorKind, ParseError},
};

/// Reads a DIMACS file into a fresh [Formula].
///
/// ```rust
/// # use cnftools::builder::dimacs::read_dimacs;
/// let dimacs = b"c a comment\np cnf 2 2\n1 2 0\n-1 -2 0\n";
/// let formula = read_dimacs(&dimacs[..]).unwrap();
/// assert_eq!(formula.num_vars(), 2);
/// assert_eq!(formula.num_clauses(), 2);
/// ```
pub fn read_dimacs(mut reader: impl BufRead) -> Result<Formula, ErrorKind> {
    let mut buffer = String::with_capacity(1024);
    let mut line_number = 0usize;

    let mut declared_vars: Atom = 0;
    let mut declared_clauses: usize = 0;

    // First phase: skip comments until the problem line (or the formula, if there is none).
    loop {
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(_) => return Err(ParseError::Token(line_number).into()),
        }

        match buffer.trim_start().chars().next() {
            Some('c') => {
                buffer.clear();
                continue;
            }
            Some('p') => {
                let mut fields = buffer.split_whitespace();
                let (_, _, v, c) = (fields.next(), fields.next(), fields.next(), fields.next());
                declared_vars = v
                    .and_then(|s| s.parse().ok())
                    .ok_or(ParseError::ProblemSpecification)?;
                declared_clauses = c
                    .and_then(|s| s.parse().ok())
                    .ok_or(ParseError::ProblemSpecification)?;
                buffer.clear();
                break;
            }
            _ => break,
        }
    }

    log::debug!(target: PARSER, "expecting {declared_vars} atoms across {declared_clauses} clauses");

    let mut formula = Formula::new(declared_vars);
    if declared_vars > 0 || declared_clauses > 0 {
        formula.set_header(declared_vars, declared_clauses);
    }
    let mut clause_buffer: Vec<Literal> = Vec::new();
    let mut clauses_read = 0usize;

    // Process whatever is already in `buffer` (a clause line left over from phase one, if its
    // first non-comment line was already a clause, rather than a header) before reading more --
    // this way a single-line, header-less input still has its last clause tokenized before EOF.
    loop {
        match buffer.trim_start().chars().next() {
            Some('c') | None => {}
            Some('%') => break,
            _ => {
                for token in buffer.split_whitespace() {
                    if token == "0" {
                        let clause = std::mem::take(&mut clause_buffer);
                        if formula.add_clause(clause).is_some() {
                            clauses_read += 1;
                        }
                        continue;
                    }

                    let value: isize = token
                        .parse()
                        .map_err(|_| ParseError::Token(line_number))?;
                    let literal = Literal::from(value);

                    if declared_vars > 0 && literal.atom() > declared_vars {
                        return Err(ParseError::VariableOutOfRange {
                            declared: declared_vars,
                            found: literal.atom(),
                        }
                        .into());
                    }
                    formula.ensure_atom(literal.atom());
                    clause_buffer.push(literal);
                }
            }
        }

        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(_) => return Err(ParseError::Token(line_number).into()),
        }
    }

    log::debug!(target: PARSER, "read {clauses_read} clauses over {} atoms", formula.num_vars());

    Ok(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_header_are_skipped() {
        let dimacs = b"c hello\nc world\np cnf 3 3\n1 2 3 0\n-1 -2 0\n-1 -3 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        assert_eq!(formula.num_vars(), 3);
        assert_eq!(formula.num_clauses(), 3);
    }

    #[test]
    fn tautology_is_not_added() {
        let dimacs = b"p cnf 2 2\n1 -1 2 0\n1 2 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        assert_eq!(formula.num_clauses(), 1);
    }

    #[test]
    fn out_of_range_variable_is_an_error() {
        let dimacs = b"p cnf 1 1\n1 2 0\n";
        assert!(matches!(
            read_dimacs(&dimacs[..]),
            Err(ErrorKind::Parse(ParseError::VariableOutOfRange { .. }))
        ));
    }

    #[test]
    fn headerless_single_line_clause_is_not_dropped_at_eof() {
        let dimacs = b"1 2 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        assert_eq!(formula.num_clauses(), 1);
        assert_eq!(formula.num_vars(), 2);
    }

    #[test]
    fn headerless_input_without_a_trailing_newline_is_not_dropped() {
        let dimacs = b"1 2 0";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        assert_eq!(formula.num_clauses(), 1);
    }

    #[test]
    fn malformed_problem_line_is_an_error() {
        let dimacs = b"p cnf\n1 0\n";
        assert!(matches!(
            read_dimacs(&dimacs[..]),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        ));
    }
}
