/*!
A small DPLL solver satisfying [SemanticOracle], used when no external oracle is configured.

Clauses accumulate across calls, never retracted, matching the IPASIR contract; each
[solve](SemanticOracle::solve) is a fresh search under whatever assumptions were set since the
last call. The search itself is unit propagation plus naive branching — these constraints are
small (one candidate's defining clauses), so nothing fancier is warranted.
*/

use std::collections::HashMap;

use crate::{
    oracle::{Answer, SemanticOracle},
    structures::{atom::Atom, literal::Literal},
};

/// A self-contained incremental SAT solver over this crate's own [Literal] type.
#[derive(Default)]
pub struct InternalOracle {
    clauses: Vec<Vec<Literal>>,
    building: Vec<Literal>,
    assumptions: Vec<Literal>,
}

impl InternalOracle {
    pub fn new() -> Self {
        Self::default()
    }

    fn solve_under(clauses: &[Vec<Literal>], forced: &[Literal]) -> bool {
        let mut assignment: HashMap<Atom, bool> = HashMap::new();
        for lit in forced {
            assignment.insert(lit.atom(), lit.polarity());
        }
        Self::dpll(clauses, &mut assignment)
    }

    fn dpll(clauses: &[Vec<Literal>], assignment: &mut HashMap<Atom, bool>) -> bool {
        loop {
            let mut progressed = false;
            let mut conflict = false;

            for clause in clauses {
                let mut unassigned: Option<Literal> = None;
                let mut satisfied = false;
                let mut unassigned_count = 0;

                for &lit in clause {
                    match assignment.get(&lit.atom()) {
                        Some(&value) if value == lit.polarity() => {
                            satisfied = true;
                            break;
                        }
                        Some(_) => {}
                        None => {
                            unassigned_count += 1;
                            unassigned = Some(lit);
                        }
                    }
                }

                if satisfied {
                    continue;
                }
                if unassigned_count == 0 {
                    conflict = true;
                    break;
                }
                if unassigned_count == 1 {
                    let lit = unassigned.unwrap();
                    assignment.insert(lit.atom(), lit.polarity());
                    progressed = true;
                }
            }

            if conflict {
                return false;
            }
            if !progressed {
                break;
            }
        }

        let unassigned_var = clauses
            .iter()
            .flatten()
            .map(|l| l.atom())
            .find(|a| !assignment.contains_key(a));

        let Some(var) = unassigned_var else {
            return clauses.iter().all(|clause| {
                clause
                    .iter()
                    .any(|l| assignment.get(&l.atom()) == Some(&l.polarity()))
            });
        };

        for guess in [true, false] {
            let mut branch = assignment.clone();
            branch.insert(var, guess);
            if Self::dpll(clauses, &mut branch) {
                *assignment = branch;
                return true;
            }
        }
        false
    }
}

impl SemanticOracle for InternalOracle {
    fn assume(&mut self, literal: Literal) {
        self.assumptions.push(literal);
    }

    fn add(&mut self, literal: Literal) {
        self.building.push(literal);
    }

    fn add_terminator(&mut self) {
        let clause = std::mem::take(&mut self.building);
        self.clauses.push(clause);
    }

    fn solve(&mut self) -> Answer {
        let forced = std::mem::take(&mut self.assumptions);
        match Self::solve_under(&self.clauses, &forced) {
            true => Answer::Sat,
            false => Answer::Unsat,
        }
    }

    fn signature(&self) -> String {
        "cnftools-internal-dpll".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clause_set_is_sat() {
        let mut oracle = InternalOracle::new();
        assert_eq!(oracle.solve(), Answer::Sat);
    }

    #[test]
    fn unit_conflict_is_unsat() {
        let mut oracle = InternalOracle::new();
        oracle.add(Literal::new(1, true));
        oracle.add_terminator();
        oracle.add(Literal::new(1, false));
        oracle.add_terminator();
        assert_eq!(oracle.solve(), Answer::Unsat);
    }

    #[test]
    fn assumption_narrows_the_search() {
        let mut oracle = InternalOracle::new();
        oracle.add(Literal::new(1, true));
        oracle.add(Literal::new(2, true));
        oracle.add_terminator();
        oracle.assume(Literal::new(1, false));
        oracle.assume(Literal::new(2, false));
        assert_eq!(oracle.solve(), Answer::Unsat);
    }
}
