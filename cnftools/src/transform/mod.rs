/*!
Small formula-to-formula reductions external to gate recognition.
*/

pub mod independent_set;
