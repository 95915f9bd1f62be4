/*!
The feature extractor: numeric descriptors of a [Formula] and, optionally, of a recovered
[GateFormula](crate::gates::GateFormula).

Descriptors are grouped into fixed families — problem size, Horn/inverted-Horn populations,
positive/negative balance, and variable/clause/literal graph degree distributions — each
distribution summarised by mean, (population) variance, min, max and Shannon entropy. Entropy is
computed over the normalized distribution (each value divided by the distribution's sum), base-2,
and is zero whenever the distribution is empty or sums to zero, matching the "Base" ordering
variant rather than the older "Satzilla" one (see [DESIGN.md](crate) for the rationale).
*/

use crate::{gates::GateFormula, structures::formula::Formula};

/// One named numeric descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub name: String,
    pub value: f64,
}

impl Feature {
    fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A summary of a distribution of non-negative values: mean, variance, min, max, entropy.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Distribution {
    mean: f64,
    variance: f64,
    min: f64,
    max: f64,
    entropy: f64,
}

impl Distribution {
    fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                variance: 0.0,
                min: 0.0,
                max: 0.0,
                entropy: 0.0,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let total: f64 = values.iter().sum();
        let entropy = if total <= 0.0 {
            0.0
        } else {
            -values
                .iter()
                .map(|v| {
                    if *v <= 0.0 {
                        0.0
                    } else {
                        let p = v / total;
                        p * p.log2()
                    }
                })
                .sum::<f64>()
        };

        Self {
            mean,
            variance,
            min,
            max,
            entropy,
        }
    }

    fn push(self, out: &mut Vec<Feature>, prefix: &str) {
        out.push(Feature::new(format!("{prefix}_mean"), self.mean));
        out.push(Feature::new(format!("{prefix}_variance"), self.variance));
        out.push(Feature::new(format!("{prefix}_min"), self.min));
        out.push(Feature::new(format!("{prefix}_max"), self.max));
        out.push(Feature::new(format!("{prefix}_entropy"), self.entropy));
    }
}

/// Computes the full ordered feature vector for `formula`, optionally enriched with
/// [GateFormula]-derived descriptors when `gates` is supplied.
pub fn extract(formula: &Formula, gates: Option<&GateFormula>) -> Vec<Feature> {
    let mut out = Vec::new();

    out.push(Feature::new("clauses", formula.num_clauses() as f64));
    out.push(Feature::new("variables", formula.num_vars() as f64));

    let mut clause_sizes = [0usize; 10];
    for (_, clause) in formula.clauses() {
        let len = clause.len();
        if len < clause_sizes.len() {
            clause_sizes[len] += 1;
        }
    }
    for (size, name) in (1..=9).zip([
        "clause_size_1",
        "clause_size_2",
        "clause_size_3",
        "clause_size_4",
        "clause_size_5",
        "clause_size_6",
        "clause_size_7",
        "clause_size_8",
        "clause_size_9",
    ]) {
        out.push(Feature::new(name, clause_sizes[size] as f64));
    }

    let mut horn = 0usize;
    let mut inv_horn = 0usize;
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut variable_horn = vec![0usize; formula.num_vars() as usize + 1];
    let mut variable_inv_horn = vec![0usize; formula.num_vars() as usize + 1];
    let mut variable_occurrences = vec![0usize; formula.num_vars() as usize + 1];
    let mut variable_pos = vec![0usize; formula.num_vars() as usize + 1];
    let mut variable_neg = vec![0usize; formula.num_vars() as usize + 1];
    let mut variable_degree = vec![0usize; formula.num_vars() as usize + 1];
    let mut pos_neg_per_clause = Vec::with_capacity(formula.num_clauses());
    let mut clause_occurrences = Vec::with_capacity(formula.num_clauses());

    for (_, clause) in formula.clauses() {
        let len = clause.len();
        clause_occurrences.push(len as f64);

        let neg = clause.literals().filter(|l| !l.polarity()).count();
        let pos = len - neg;

        for atom in clause.atoms() {
            variable_occurrences[atom as usize] += 1;
            variable_degree[atom as usize] += len - 1;
        }
        for lit in clause.literals() {
            if lit.polarity() {
                variable_pos[lit.atom() as usize] += 1;
            } else {
                variable_neg[lit.atom() as usize] += 1;
            }
        }

        pos_neg_per_clause.push(balance(pos as f64, neg as f64));

        if neg <= 1 {
            if neg == 0 {
                positive += 1;
            }
            horn += 1;
            for atom in clause.atoms() {
                variable_horn[atom as usize] += 1;
            }
        }
        if pos <= 1 {
            if pos == 0 {
                negative += 1;
            }
            inv_horn += 1;
            for atom in clause.atoms() {
                variable_inv_horn[atom as usize] += 1;
            }
        }
    }

    out.push(Feature::new("horn_clauses", horn as f64));
    out.push(Feature::new("inv_horn_clauses", inv_horn as f64));
    out.push(Feature::new("positive_clauses", positive as f64));
    out.push(Feature::new("negative_clauses", negative as f64));

    Distribution::of(&as_f64(&variable_horn[1..])).push(&mut out, "horn_vars");
    Distribution::of(&as_f64(&variable_inv_horn[1..])).push(&mut out, "inv_horn_vars");
    Distribution::of(&pos_neg_per_clause).push(&mut out, "balance_clause");

    let pos_neg_per_variable: Vec<f64> = (1..=formula.num_vars() as usize)
        .map(|v| balance(variable_pos[v] as f64, variable_neg[v] as f64))
        .collect();
    Distribution::of(&pos_neg_per_variable).push(&mut out, "balance_vars");

    Distribution::of(&as_f64(&variable_occurrences[1..])).push(&mut out, "vcg_vdegrees");
    Distribution::of(&clause_occurrences).push(&mut out, "vcg_cdegrees");
    Distribution::of(&as_f64(&variable_degree[1..])).push(&mut out, "vg_degrees");

    let clause_degree: Vec<f64> = formula
        .clauses()
        .map(|(_, clause)| {
            let raw: usize = clause
                .atoms()
                .map(|a| variable_occurrences[a as usize])
                .sum();
            (raw - clause.len()) as f64
        })
        .collect();
    Distribution::of(&clause_degree).push(&mut out, "cg_degrees");

    if let Some(gf) = gates {
        push_gate_features(&mut out, gf);
    }

    out
}

/// `min(pos, neg) / max(pos, neg)`, zero when both are zero.
fn balance(pos: f64, neg: f64) -> f64 {
    let hi = pos.max(neg);
    if hi > 0.0 {
        pos.min(neg) / hi
    } else {
        0.0
    }
}

fn as_f64(values: &[usize]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}

fn push_gate_features(out: &mut Vec<Feature>, gf: &GateFormula) {
    use crate::gates::GateType;

    let counts = |kind: GateType| gf.gates().filter(|g| g.kind == kind).count() as f64;

    out.push(Feature::new("gate_count", gf.len() as f64));
    out.push(Feature::new("gate_and", counts(GateType::And)));
    out.push(Feature::new("gate_or", counts(GateType::Or)));
    out.push(Feature::new("gate_triv", counts(GateType::Triv)));
    out.push(Feature::new("gate_eqiv", counts(GateType::Eqiv)));
    out.push(Feature::new("gate_full", counts(GateType::Full)));
    out.push(Feature::new("gate_mono", counts(GateType::Mono)));
    out.push(Feature::new("gate_generic", counts(GateType::Generic)));
    out.push(Feature::new("remainder_clauses", gf.remainder().len() as f64));

    let depths: Vec<f64> = gf.gates().map(|g| g.depth as f64).collect();
    Distribution::of(&depths).push(out, "gate_depth");
}

/// Renders a feature vector as `name=value` lines, one per descriptor, in the order produced by
/// [extract].
pub fn render(features: &[Feature]) -> String {
    features
        .iter()
        .map(|f| format!("{}={}", f.name, f.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::dimacs::read_dimacs;

    #[test]
    fn problem_size_counts_match() {
        let dimacs = b"p cnf 3 3\n1 2 3 0\n-1 -2 0\n-1 -3 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let features = extract(&formula, None);

        let get = |name: &str| features.iter().find(|f| f.name == name).unwrap().value;
        assert_eq!(get("clauses"), 3.0);
        assert_eq!(get("variables"), 3.0);
        assert_eq!(get("clause_size_2"), 2.0);
        assert_eq!(get("clause_size_3"), 1.0);
    }

    #[test]
    fn empty_formula_has_all_zero_distributions() {
        let formula = Formula::new(0);
        let features = extract(&formula, None);
        for f in &features {
            assert!(f.value >= 0.0, "{} was negative: {}", f.name, f.value);
            assert!(f.value.is_finite(), "{} was not finite", f.name);
        }
    }

    #[test]
    fn horn_clause_is_counted_once() {
        // (-1 -2 3): two negatives, one positive -> not horn (neg=2), is inv-horn (pos=1).
        let dimacs = b"p cnf 3 1\n-1 -2 3 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let features = extract(&formula, None);
        let get = |name: &str| features.iter().find(|f| f.name == name).unwrap().value;
        assert_eq!(get("horn_clauses"), 0.0);
        assert_eq!(get("inv_horn_clauses"), 1.0);
    }

    #[test]
    fn entropy_and_variance_are_never_negative() {
        let dimacs = b"p cnf 4 4\n1 2 3 0\n-1 -2 0\n-1 -3 0\n4 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let features = extract(&formula, None);
        for f in &features {
            if f.name.ends_with("_entropy") || f.name.ends_with("_variance") {
                assert!(f.value >= 0.0, "{} was negative: {}", f.name, f.value);
            }
        }
    }

    #[test]
    fn render_produces_name_equals_value_lines_in_order() {
        let features = vec![
            Feature::new("clauses", 3.0),
            Feature::new("variables", 2.0),
        ];
        assert_eq!(render(&features), "clauses=3\nvariables=2");
    }
}
