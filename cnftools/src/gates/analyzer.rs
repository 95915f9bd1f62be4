/*!
The gate recognition loop: root estimation, breadth-first candidate expansion, and per-candidate
classification (nested-monotonic, then pattern, then semantic).
*/

use std::collections::HashSet;

use crate::{
    config::AnalyzerConfig,
    gates::{GateFormula, GateType},
    index::ClauseIndex,
    misc::log::targets::ANALYZER,
    oracle::{internal::InternalOracle, Answer, SemanticOracle},
    structures::{atom::Atom, clause::ClauseId, formula::Formula, literal::Literal},
    types::err::ErrorKind,
};

/// Drives gate recognition to completion over a borrowed [Formula] and a chosen [ClauseIndex]
/// implementation.
pub struct GateAnalyzer<'f, I: ClauseIndex<'f>> {
    index: I,
    gate_formula: GateFormula,
    config: AnalyzerConfig,
    oracle: Option<Box<dyn SemanticOracle>>,
    formula: &'f Formula,
}

impl<'f, I: ClauseIndex<'f>> GateAnalyzer<'f, I> {
    /// Builds an analyzer over `formula`, allocating a fresh [InternalOracle] when
    /// `config.semantic` is set.
    pub fn new(formula: &'f Formula, config: AnalyzerConfig) -> Self {
        let oracle: Option<Box<dyn SemanticOracle>> = if config.semantic {
            Some(Box::new(InternalOracle::new()))
        } else {
            None
        };

        Self {
            index: I::new(formula),
            gate_formula: GateFormula::new(formula.num_vars()),
            config,
            oracle,
            formula,
        }
    }

    /// Runs recognition to completion: up to `config.repeat` root-estimation passes, then
    /// records whatever remains in the index as the remainder.
    pub fn analyze(mut self) -> Result<GateFormula, ErrorKind> {
        let mut root_clauses = self.index.estimate_roots();

        for _ in 0..self.config.repeat() {
            if root_clauses.is_empty() {
                break;
            }

            let mut candidates = Vec::new();
            for &clause in &root_clauses {
                self.gate_formula.add_root(clause);
                candidates.extend(self.formula.clause(clause).literals());
            }

            self.gate_recognition(candidates)?;
            root_clauses = self.index.estimate_roots();
        }

        let remainder: Vec<ClauseId> = (0..self.formula.num_clauses())
            .map(ClauseId)
            .filter(|&id| self.index.contains(id))
            .collect();
        self.gate_formula.set_remainder(remainder);

        Ok(self.gate_formula)
    }

    /// Breadth-first expansion from `roots`: each pass tests every distinct candidate literal
    /// exactly once, then the inputs of whatever gates were found become the next frontier.
    fn gate_recognition(&mut self, roots: Vec<Literal>) -> Result<(), ErrorKind> {
        let mut frontier = roots;

        while !frontier.is_empty() {
            let mut seen = HashSet::new();
            let candidates: Vec<Literal> = std::mem::take(&mut frontier)
                .into_iter()
                .filter(|l| seen.insert(*l))
                .collect();

            for candidate in candidates {
                if let Some(inputs) = self.try_gate(candidate)? {
                    frontier.extend(inputs.into_iter().map(|v| Literal::new(v, true)));
                }
            }
        }

        Ok(())
    }

    /// Tests whether `out` is a gate output. On success, records the gate, removes its variable
    /// from the index, and returns its (sorted, de-duplicated) input variables.
    fn try_gate(&mut self, out: Literal) -> Result<Option<Vec<Atom>>, ErrorKind> {
        let forward = self.index.buckets(out.negate());
        if forward.is_empty() || !self.index.is_blocked_set(out) {
            return Ok(None);
        }
        let backward = self.index.buckets(out);

        let kind = if is_nested_monotonic(&self.gate_formula, self.formula, out, &forward, &backward) {
            Some(GateType::Mono)
        } else if self.config.patterns {
            pattern_classify(self.formula, out, &forward, &backward)
        } else {
            None
        };

        let kind = match kind {
            Some(k) => Some(k),
            None if self.config.semantic => {
                let oracle = self
                    .oracle
                    .as_deref_mut()
                    .expect("semantic oracle configured when config.semantic is set");
                semantic_classify(oracle, self.formula, out, &forward, &backward)?
            }
            None => None,
        };

        let Some(kind) = kind else {
            return Ok(None);
        };

        let inputs = input_variables(self.formula, out, &forward, &backward);
        log::debug!(target: ANALYZER, "gate {out} classified {kind}, inputs {inputs:?}");

        self.gate_formula
            .add_gate(out, inputs.clone(), forward, backward, kind);
        self.index.remove(out.atom());

        Ok(Some(inputs))
    }
}

/// `vars(forward ∪ backward) \ {var(out)}`, sorted ascending and de-duplicated.
fn input_variables(
    formula: &Formula,
    out: Literal,
    forward: &[ClauseId],
    backward: &[ClauseId],
) -> Vec<Atom> {
    let mut inputs: Vec<Atom> = forward
        .iter()
        .chain(backward.iter())
        .flat_map(|&id| formula.clause(id).atoms().collect::<Vec<_>>())
        .filter(|&v| v != out.atom())
        .collect();
    inputs.sort_unstable();
    inputs.dedup();
    inputs
}

/// `o` is nested-monotonic iff every variable in its defining clauses (other than `var(o)`) is
/// already a gate output, and appears only in the polarity that gate's own definition produces.
///
/// Approximated here as: every such variable already has a recorded gate, and for each of them
/// the literal actually appearing in `o`'s defining clauses always matches the polarity of that
/// gate's own output literal (the monotone direction a nested AIG never flips for a pre-existing
/// sub-gate's output wire).
pub fn is_nested_monotonic(
    gate_formula: &GateFormula,
    formula: &Formula,
    out: Literal,
    forward: &[ClauseId],
    backward: &[ClauseId],
) -> bool {
    let mut polarity_of: std::collections::HashMap<Atom, bool> = std::collections::HashMap::new();

    for &id in forward.iter().chain(backward.iter()) {
        for lit in formula.clause(id).literals() {
            if lit.atom() == out.atom() {
                continue;
            }
            let Some(gate) = gate_formula.get_gate(Literal::new(lit.atom(), true)) else {
                return false;
            };
            let expected = gate.output.polarity();
            match polarity_of.get(&lit.atom()) {
                Some(&seen) if seen != lit.polarity() => return false,
                _ => {
                    polarity_of.insert(lit.atom(), lit.polarity());
                }
            }
            if lit.polarity() != expected {
                return false;
            }
        }
    }

    true
}

/// Structural pattern classification, per [§4.2.4](crate).
pub fn pattern_classify(
    formula: &Formula,
    out: Literal,
    forward: &[ClauseId],
    backward: &[ClauseId],
) -> Option<GateType> {
    let fwd_inputs: HashSet<Atom> = forward
        .iter()
        .flat_map(|&id| formula.clause(id).atoms().collect::<Vec<_>>())
        .filter(|&v| v != out.atom())
        .collect();
    let bwd_inputs: HashSet<Atom> = backward
        .iter()
        .flat_map(|&id| formula.clause(id).atoms().collect::<Vec<_>>())
        .filter(|&v| v != out.atom())
        .collect();
    if fwd_inputs != bwd_inputs {
        return None;
    }

    let fixed_size = |ids: &[ClauseId], n: usize| ids.iter().all(|&id| formula.clause(id).len() == n);

    if forward.len() == 1 && fixed_size(backward, 2) {
        return Some(GateType::Or);
    }
    if backward.len() == 1 && fixed_size(forward, 2) {
        return Some(GateType::And);
    }

    let inp_size = fwd_inputs.len();
    if forward.len() + backward.len() == 2usize.pow(inp_size as u32)
        && fixed_size(forward, inp_size + 1)
        && fixed_size(backward, inp_size + 1)
    {
        return Some(match inp_size {
            1 => GateType::Triv,
            2 if forward.len() == backward.len() => GateType::Eqiv,
            _ => GateType::Full,
        });
    }

    None
}

/// Semantic classification, per [§4.2.5](crate): every occurrence of `var(out)` in its own
/// defining clauses is rewritten to the single literal `~out` before being added to the oracle's
/// permanent (never-retracted) state, then the oracle is asked, under the assumption `out` is
/// true, whether that rewritten definition is unsatisfiable. UNSAT means `out` really is pinned
/// by `forward ∪ backward` to some function of its inputs — classify as GENERIC.
///
/// `var(out)` is fixed to false in the oracle afterwards regardless of the result, so later
/// candidates never see it as free.
pub fn semantic_classify(
    oracle: &mut dyn SemanticOracle,
    formula: &Formula,
    out: Literal,
    forward: &[ClauseId],
    backward: &[ClauseId],
) -> Result<Option<GateType>, ErrorKind> {
    for &id in forward.iter().chain(backward.iter()) {
        for lit in formula.clause(id).literals() {
            let emitted = if lit.atom() == out.atom() {
                Literal::new(out.atom(), false)
            } else {
                lit
            };
            oracle.add(emitted);
        }
        oracle.add_terminator();
    }

    oracle.assume(Literal::new(out.atom(), true));
    let result = oracle.solve();

    oracle.add(Literal::new(out.atom(), false));
    oracle.add_terminator();

    match result {
        Answer::Unsat => Ok(Some(GateType::Generic)),
        Answer::Sat | Answer::Unknown => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::dimacs::read_dimacs, index::occurrence::OccurrenceIndex};

    fn parse(dimacs: &str) -> Formula {
        read_dimacs(dimacs.as_bytes()).unwrap()
    }

    fn analyze(formula: &Formula, config: AnalyzerConfig) -> GateFormula {
        GateAnalyzer::<OccurrenceIndex>::new(formula, config)
            .analyze()
            .unwrap()
    }

    /// `(1 2 3), (-1 -2), (-1 -3)`: the root is the length-3 clause. Mechanically, candidate
    /// output `1` has forward = {(-1 -2), (-1 -3)} (size 2) and backward = {(1 2 3)} (size 1), so
    /// `fPattern`'s AND branch (`backward.len() == 1 && fixed_size(forward, 2)`) fires, not OR.
    #[test]
    fn root_of_size_three_with_two_binary_duals_is_and() {
        let formula = parse("p cnf 3 3\n1 2 3 0\n-1 -2 0\n-1 -3 0\n");
        let gf = analyze(&formula, AnalyzerConfig::default());

        let gate = gf.get_gate(Literal::new(1, true)).unwrap();
        assert_eq!(gate.kind, GateType::And);
        assert_eq!(gate.inputs, vec![2, 3]);
        assert!(gf.remainder().is_empty());
    }

    /// A Tseitin-style AND with a unit root: `(-1 2), (-1 3), (1 -2 -3)` plus the fact `1`. The
    /// unit clause is evicted by root estimation before candidate `1` is ever tested, so it
    /// can't contaminate the blocked-set check on its own variable.
    #[test]
    fn unit_root_is_evicted_so_its_own_variable_can_still_gate() {
        let formula = parse("p cnf 3 4\n1 0\n-1 2 0\n-1 3 0\n1 -2 -3 0\n");
        let gf = analyze(&formula, AnalyzerConfig::default());

        let gate = gf.get_gate(Literal::new(1, true)).unwrap();
        assert_eq!(gate.kind, GateType::And);
        assert_eq!(gate.inputs, vec![2, 3]);
        assert!(gf.remainder().is_empty());
    }

    /// `(1 2), (1 -2)`: candidate `1`'s forward bucket is empty (no clause contains `-1`), so
    /// the precondition `forward.is_empty()` fails and `1` is never classified. Both clauses
    /// survive as the remainder.
    #[test]
    fn empty_forward_bucket_blocks_classification() {
        let formula = parse("p cnf 2 2\n1 2 0\n1 -2 0\n");
        let gf = analyze(&formula, AnalyzerConfig::default());

        assert!(gf.is_empty());
        let mut remainder = gf.remainder().to_vec();
        remainder.sort();
        assert_eq!(remainder, vec![ClauseId(0), ClauseId(1)]);
    }

    /// `(-1 2 3), (-1 -2 -3), (1 2 -3), (1 -2 3)`: candidate `1` has forward = {(-1 2 3),
    /// (-1 -2 -3)}, backward = {(1 2 -3), (1 -2 3)}, both of size 2 over inputs {2, 3} — the
    /// FULL/EQIV/TRIV branch fires (`2 + 2 == 2^2`), and `forward.len() == backward.len()`
    /// selects EQIV.
    #[test]
    fn balanced_four_clause_shape_over_two_inputs_is_eqiv() {
        let formula = parse("p cnf 3 4\n-1 2 3 0\n-1 -2 -3 0\n1 2 -3 0\n1 -2 3 0\n");
        let gf = analyze(&formula, AnalyzerConfig::default());

        let gate = gf.get_gate(Literal::new(1, true)).unwrap();
        assert_eq!(gate.kind, GateType::Eqiv);
        assert_eq!(gate.inputs, vec![2, 3]);
    }

    /// With both classification stages disabled, no candidate is ever classified: every clause
    /// of the root ends up in the remainder, none in a gate.
    #[test]
    fn patterns_and_semantic_both_off_yields_no_gates() {
        let formula = parse("p cnf 3 3\n1 2 3 0\n-1 -2 0\n-1 -3 0\n");
        let config = AnalyzerConfig::new(false, false, 1);
        let gf = analyze(&formula, config);

        assert!(gf.is_empty());
        assert_eq!(gf.remainder().len(), 3);
    }

    /// A candidate with a gate-recognized input only in the polarity its sub-gate produces is
    /// nested-monotonic and short-circuits pattern/semantic classification with `MONO`.
    #[test]
    fn nested_monotonic_input_short_circuits_to_mono() {
        let mut gf = GateFormula::new(4);
        gf.add_gate(
            Literal::new(2, true),
            vec![3, 4],
            vec![ClauseId(0)],
            vec![ClauseId(1)],
            GateType::Or,
        );

        let formula = parse("p cnf 4 2\n-1 2 0\n1 2 0\n");
        assert!(is_nested_monotonic(
            &gf,
            &formula,
            Literal::new(1, true),
            &[ClauseId(0)],
            &[ClauseId(1)],
        ));
    }
}
