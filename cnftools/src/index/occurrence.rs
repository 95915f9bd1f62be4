/*!
A flat occurrence-list [ClauseIndex](super::ClauseIndex): one vector of [ClauseId]s per literal,
built once and filtered against a presence bitset as clauses are removed.
*/

use crate::{
    index::ClauseIndex,
    structures::{atom::Atom, clause::ClauseId, formula::Formula, literal::Literal},
};

/// An occurrence list per literal, over a borrowed [Formula].
pub struct OccurrenceIndex<'f> {
    formula: &'f Formula,
    buckets: Vec<Vec<ClauseId>>,
    present: Vec<bool>,
    size: usize,
}

impl<'f> ClauseIndex<'f> for OccurrenceIndex<'f> {
    fn new(formula: &'f Formula) -> Self {
        let bucket_count = (formula.num_vars() as usize + 1) * 2;
        let mut buckets = vec![Vec::new(); bucket_count];

        for (id, clause) in formula.clauses() {
            for literal in clause.literals() {
                buckets[literal.index()].push(id);
            }
        }

        Self {
            formula,
            buckets,
            present: vec![true; formula.num_clauses()],
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
        match self.buckets.get(literal.index()) {
            Some(ids) => ids.iter().copied().filter(|&id| self.present[id.0]).collect(),
            None => Vec::new(),
        }
    }

    fn remove(&mut self, atom: Atom) {
        for polarity in [true, false] {
            let literal = Literal::new(atom, polarity);
            let Some(ids) = self.buckets.get(literal.index()) else {
                continue;
            };
            for &id in ids.clone().iter() {
                if std::mem::replace(&mut self.present[id.0], false) {
                    self.size -= 1;
                }
            }
        }
    }

    fn contains(&self, id: ClauseId) -> bool {
        self.present.get(id.0).copied().unwrap_or(false)
    }

    fn evict(&mut self, id: ClauseId) {
        if let Some(slot) = self.present.get_mut(id.0) {
            if std::mem::replace(slot, false) {
                self.size -= 1;
            }
        }
    }
}
