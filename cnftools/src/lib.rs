/*!
A toolbox for analysing propositional formulas in conjunctive normal form (CNF).

The centrepiece of the library is the [gate analyzer](gates::analyzer), which recovers an
and-inverter-like circuit whose output clauses entail a given CNF formula, by iteratively
identifying literals that behave as outputs of logic gates (AND, OR, equivalence, full
encodings of boolean functions, and monotonically-nested or semantically-defined gates).

# Orientation

- [structures] holds the typed representation of variables, literals, clauses and formulas.
- [builder] reads a [Formula](structures::formula::Formula) from DIMACS text, and renders one back
  out in normalized form.
- [index] maps literals to the clauses that currently mention them, the basic structure the
  analyzer queries and mutates as it recognizes gates.
- [gates] holds the recognized gate hierarchy ([GateFormula](gates::GateFormula)) and the
  [analyzer](gates::analyzer) that builds one.
- [oracle] is the semantic-gate-check collaborator: an incremental SAT-solver-shaped trait used
  when pattern recognition alone cannot classify a candidate.
- [features] computes numeric descriptors of a formula, and of a recovered gate formula.
- [transform] holds small formula-to-formula reductions external to gate recognition.
- [dispatch] selects and runs one of the command-line tools.

# Example

```rust
# use cnftools::{
#     builder::dimacs::read_dimacs, config::AnalyzerConfig, gates::analyzer::GateAnalyzer,
#     index::occurrence::OccurrenceIndex,
# };
let cnf = b"p cnf 3 3\n1 2 3 0\n-1 -2 0\n-1 -3 0\n";
let formula = read_dimacs(&cnf[..]).unwrap();

let analyzer = GateAnalyzer::<OccurrenceIndex>::new(&formula, AnalyzerConfig::default());
let gate_formula = analyzer.analyze().unwrap();

assert_eq!(gate_formula.len(), 1);
```
*/

pub mod builder;
pub mod config;
pub mod dispatch;
pub mod features;
pub mod gates;
pub mod index;
pub mod misc;
pub mod oracle;
pub mod structures;
pub mod transform;
pub mod types;
