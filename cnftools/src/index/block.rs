/*!
A block-partitioned [ClauseIndex](super::ClauseIndex): the clause id space is sharded into
fixed-size blocks, each holding its own per-literal occurrence lists, presence bits, and a
partition of that literal's bucket keyed by the set of *other* variables each clause mentions.

The partition is what distinguishes this variant from [OccurrenceIndex](super::occurrence::OccurrenceIndex):
[is_blocked_set](BlockIndex::is_blocked_set) iterates pairs of partitions, not the full
`forward x backward` Cartesian product of clauses, and rejects the whole candidate the moment it
finds a forward/backward partition pair whose keys share no variable (no clause in one partition
can possibly resolve tautologically against a clause in the other).
*/

use std::collections::{BTreeSet, HashMap};

use crate::{
    index::ClauseIndex,
    structures::{atom::Atom, clause::ClauseId, formula::Formula, literal::Literal},
};

const BLOCK_SIZE: usize = 64;

/// The variables of a clause other than `exclude`, the key a block partitions a literal's
/// bucket by.
type PartitionKey = BTreeSet<Atom>;

struct Block {
    buckets: Vec<Vec<ClauseId>>,
    partitions: Vec<HashMap<PartitionKey, Vec<ClauseId>>>,
    present: Vec<bool>,
}

/// A [ClauseIndex] whose occurrence lists are sharded into fixed-size blocks of clause ids.
pub struct BlockIndex<'f> {
    formula: &'f Formula,
    blocks: Vec<Block>,
    size: usize,
}

impl<'f> BlockIndex<'f> {
    fn block_of(&self, id: ClauseId) -> (usize, usize) {
        (id.0 / BLOCK_SIZE, id.0 % BLOCK_SIZE)
    }

    /// The partition of `buckets(literal)`, keyed by the set of variables each clause mentions
    /// other than `literal`'s own, merged across blocks and filtered to clauses still present.
    fn partitioned_buckets(&self, literal: Literal) -> HashMap<PartitionKey, Vec<ClauseId>> {
        let mut merged: HashMap<PartitionKey, Vec<ClauseId>> = HashMap::new();
        for block in &self.blocks {
            let Some(parts) = block.partitions.get(literal.index()) else {
                continue;
            };
            for (key, ids) in parts {
                for &id in ids {
                    if block.present[id.0 % BLOCK_SIZE] {
                        merged.entry(key.clone()).or_default().push(id);
                    }
                }
            }
        }
        merged
    }
}

impl<'f> ClauseIndex<'f> for BlockIndex<'f> {
    fn new(formula: &'f Formula) -> Self {
        let bucket_count = (formula.num_vars() as usize + 1) * 2;
        let block_count = formula.num_clauses().div_ceil(BLOCK_SIZE).max(1);

        let mut blocks: Vec<Block> = (0..block_count)
            .map(|_| Block {
                buckets: vec![Vec::new(); bucket_count],
                partitions: vec![HashMap::new(); bucket_count],
                present: vec![true; BLOCK_SIZE],
            })
            .collect();

        for (id, clause) in formula.clauses() {
            let block_index = id.0 / BLOCK_SIZE;
            for literal in clause.literals() {
                blocks[block_index].buckets[literal.index()].push(id);

                let key: PartitionKey = clause
                    .atoms()
                    .filter(|&atom| atom != literal.atom())
                    .collect();
                blocks[block_index].partitions[literal.index()]
                    .entry(key)
                    .or_default()
                    .push(id);
            }
        }

        Self {
            formula,
            blocks,
            size: formula.num_clauses(),
        }
    }

    fn formula(&self) -> &'f Formula {
        self.formula
    }

    fn size(&self) -> usize {
        self.size
    }

    fn buckets(&self, literal: Literal) -> Vec<ClauseId> {
        let mut found = Vec::new();
        for block in &self.blocks {
            let Some(ids) = block.buckets.get(literal.index()) else {
                continue;
            };
            found.extend(
                ids.iter()
                    .copied()
                    .filter(|id| block.present[id.0 % BLOCK_SIZE]),
            );
        }
        found
    }

    /// Iterates pairs of partitions of `buckets(~output)` and `buckets(output)`, keyed by the
    /// other variables each clause mentions, instead of the full Cartesian product of clauses.
    /// A partition pair whose keys share no variable fails the blocking test immediately: no
    /// clause in one can resolve tautologically against a clause in the other.
    fn is_blocked_set(&self, output: Literal) -> bool {
        let forward_partitions = self.partitioned_buckets(output.negate());
        let backward_partitions = self.partitioned_buckets(output);

        if forward_partitions.is_empty() || backward_partitions.is_empty() {
            return true;
        }

        let formula = self.formula();
        for (f_key, f_ids) in &forward_partitions {
            for (b_key, b_ids) in &backward_partitions {
                if f_key.is_disjoint(b_key) {
                    return false;
                }

                for &f_id in f_ids {
                    let f_clause = formula.clause(f_id);
                    for &b_id in b_ids {
                        let b_clause = formula.clause(b_id);
                        let tautological = f_clause.literals().any(|x| {
                            x.atom() != output.atom()
                                && b_clause.literals().any(|y| y == x.negate())
                        });
                        if !tautological {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    fn remove(&mut self, atom: Atom) {
        for polarity in [true, false] {
            let literal = Literal::new(atom, polarity);
            for block in &mut self.blocks {
                let Some(ids) = block.buckets.get(literal.index()) else {
                    continue;
                };
                for &id in ids.clone().iter() {
                    let slot = id.0 % BLOCK_SIZE;
                    if std::mem::replace(&mut block.present[slot], false) {
                        self.size -= 1;
                    }
                }
            }
        }
    }

    fn contains(&self, id: ClauseId) -> bool {
        let (block_index, slot) = self.block_of(id);
        self.blocks
            .get(block_index)
            .map(|b| b.present[slot])
            .unwrap_or(false)
    }

    fn evict(&mut self, id: ClauseId) {
        let (block_index, slot) = self.block_of(id);
        if let Some(block) = self.blocks.get_mut(block_index) {
            if std::mem::replace(&mut block.present[slot], false) {
                self.size -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::dimacs::read_dimacs;

    #[test]
    fn disjoint_partition_keys_reject_without_a_per_clause_check() {
        // forward = {(-1 2)} (key {2}), backward = {(1 3)} (key {3}): the keys share no
        // variable, so no clause pair across them can resolve tautologically on 1.
        let dimacs = b"p cnf 3 2\n-1 2 0\n1 3 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let index = BlockIndex::new(&formula);
        assert!(!index.is_blocked_set(Literal::new(1, true)));
    }

    #[test]
    fn blocked_set_holds_across_distinct_but_overlapping_partitions() {
        // forward = {(-1 2), (-1 2 3)} (keys {2}, {2,3}), backward = {(1 -2), (1 -2 4)}
        // (keys {2}, {2,4}): every key pair shares atom 2, and every clause agrees with
        // the others of its bucket on atom 2's polarity, so every resolvent is
        // tautological on 2 regardless of the other atoms.
        let dimacs = b"p cnf 4 4\n-1 2 0\n-1 2 3 0\n1 -2 0\n1 -2 4 0\n";
        let formula = read_dimacs(&dimacs[..]).unwrap();
        let index = BlockIndex::new(&formula);
        assert!(index.is_blocked_set(Literal::new(1, true)));
    }
}
