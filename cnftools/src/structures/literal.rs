/*!
Literals: an atom paired with a polarity.

By convention the index `2v` encodes the positive literal of atom `v` and `2v + 1` encodes the
negative literal; this is the index a [ClauseIndex](crate::index::ClauseIndex) keys its buckets
with, via [Literal::index].
*/

use crate::structures::atom::Atom;

/// A literal: an atom together with a polarity.
#[derive(Clone, Copy, Debug)]
pub struct Literal {
    atom: Atom,
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a boolean polarity.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal (`true` for positive, `false` for negative).
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The index used to key a [ClauseIndex](crate::index::ClauseIndex)'s buckets: `2v` for the
    /// positive literal of atom `v`, `2v + 1` for the negative literal.
    pub fn index(&self) -> usize {
        let base = (self.atom as usize) * 2;
        match self.polarity {
            true => base,
            false => base + 1,
        }
    }

    /// The literal whose index is `index`, the inverse of [Literal::index].
    pub fn from_index(index: usize) -> Self {
        Self {
            atom: (index / 2) as Atom,
            polarity: index.is_multiple_of(2),
        }
    }

    /// The literal as a signed DIMACS integer.
    pub fn as_dimacs(&self) -> isize {
        match self.polarity {
            true => self.atom as isize,
            false => -(self.atom as isize),
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for Literal {}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    /// Literals are ordered by atom, then by polarity with `false` (negative) before `true`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.atom
            .cmp(&other.atom)
            .then(self.polarity.cmp(&other.polarity))
    }
}

impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}

impl From<isize> for Literal {
    fn from(value: isize) -> Self {
        Literal::new(value.unsigned_abs() as Atom, value.is_positive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips() {
        for atom in 0..50 {
            for polarity in [true, false] {
                let lit = Literal::new(atom, polarity);
                assert_eq!(Literal::from_index(lit.index()), lit);
            }
        }
    }

    #[test]
    fn negation_flips_polarity_only() {
        let lit = Literal::new(7, true);
        let neg = lit.negate();
        assert_eq!(neg.atom(), 7);
        assert!(!neg.polarity());
        assert_eq!(neg.negate(), lit);
    }

    #[test]
    fn ordering_is_by_atom_then_polarity() {
        let mut lits = vec![
            Literal::new(2, true),
            Literal::new(1, false),
            Literal::new(1, true),
        ];
        lits.sort();
        assert_eq!(
            lits,
            vec![
                Literal::new(1, false),
                Literal::new(1, true),
                Literal::new(2, true),
            ]
        );
    }
}
