/*!
Tools for building a [Formula](crate::structures::formula::Formula) from DIMACS text, and for
rendering one back out in normalized form.
*/

pub mod dimacs;
pub mod normalize;
