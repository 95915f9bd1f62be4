/*!
Reduces satisfiability of a CNF formula to the existence of an independent set of a given size in
a graph, rendered in the `p edge` DIMACS graph format.

Every literal occurrence in the formula becomes a node. Within a clause, every pair of occurrences
is joined by an edge (a satisfying assignment can pick at most one literal per clause into the
independent set). Across the whole formula, every pair of occurrences of complementary literals
(`v` and `~v`) is also joined (an independent set cannot contain both). The formula is satisfiable
iff the graph has an independent set of size `n_clauses`.
*/

use std::fmt::Write as _;

use crate::structures::{atom::Atom, formula::Formula};

/// The `p edge` graph produced by the reduction: one node per literal occurrence, edges as
/// described in the module docs.
pub struct IndependentSetProblem {
    pub num_nodes: usize,
    pub edges: Vec<(usize, usize)>,
    /// A satisfying assignment of the original formula corresponds to an independent set of
    /// (at least) this size.
    pub target_set_size: usize,
}

/// Builds the independent-set reduction of `formula`.
pub fn reduce(formula: &Formula) -> IndependentSetProblem {
    let mut edges = Vec::new();
    let mut node = 0usize;
    let mut occurrences: Vec<Vec<usize>> =
        vec![Vec::new(); (formula.num_vars() as usize + 1) * 2];

    for (_, clause) in formula.clauses() {
        let first_node = node + 1;
        for (offset, literal) in clause.literals().enumerate() {
            let this_node = first_node + offset;
            occurrences[literal.index()].push(this_node);
            for other in first_node..this_node {
                edges.push((other, this_node));
            }
        }
        node += clause.len();
    }

    for var in 1..=formula.num_vars() {
        let positive = &occurrences[positive_index(var)];
        let negative = &occurrences[negative_index(var)];
        for &a in positive {
            for &b in negative {
                edges.push((a, b));
            }
        }
    }

    IndependentSetProblem {
        num_nodes: node,
        edges,
        target_set_size: formula.num_clauses(),
    }
}

fn positive_index(var: Atom) -> usize {
    (var as usize) * 2
}

fn negative_index(var: Atom) -> usize {
    (var as usize) * 2 + 1
}

/// Renders the reduction as `p edge` DIMACS graph text, preceded by a comment stating the
/// satisfiability-equivalent independent set size.
pub fn render(problem: &IndependentSetProblem) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "c satisfiable iff independent set size is {}",
        problem.target_set_size
    );
    let _ = writeln!(out, "p edge {} {}", problem.num_nodes, problem.edges.len());
    for &(a, b) in &problem.edges {
        let _ = writeln!(out, "{a} {b} 0");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::dimacs::read_dimacs;

    #[test]
    fn single_binary_clause_has_one_edge() {
        let dimacs = b"p cnf 2 1\n1 2 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let problem = reduce(&formula);

        assert_eq!(problem.num_nodes, 2);
        assert_eq!(problem.edges, vec![(1, 2)]);
        assert_eq!(problem.target_set_size, 1);
    }

    #[test]
    fn complementary_literals_across_clauses_are_joined() {
        let dimacs = b"p cnf 1 2\n1 0\n-1 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let problem = reduce(&formula);

        // one node per clause (unit clauses), joined because they're complementary.
        assert_eq!(problem.num_nodes, 2);
        assert_eq!(problem.edges, vec![(1, 2)]);
    }

    #[test]
    fn clause_clique_has_no_self_loops() {
        let dimacs = b"p cnf 3 1\n1 2 3 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let problem = reduce(&formula);

        assert_eq!(problem.num_nodes, 3);
        assert!(problem.edges.iter().all(|&(a, b)| a != b));
        assert_eq!(problem.edges.len(), 3);
    }

    #[test]
    fn render_includes_header_and_comment() {
        let dimacs = b"p cnf 2 1\n1 2 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let problem = reduce(&formula);
        let text = render(&problem);

        assert!(text.starts_with("c satisfiable iff independent set size is 1\n"));
        assert!(text.contains("p edge 2 1\n"));
        assert!(text.contains("1 2 0\n"));
    }
}
