/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are the variables of a CNF formula: things to which assigning a boolean value is of
interest. An atom is a positive integer, `1..=V` for a formula declaring `V` variables — `0` is
reserved as the clause terminator on the DIMACS wire format and is never itself an atom.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;
