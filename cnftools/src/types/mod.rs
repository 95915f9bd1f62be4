/*!
Crate-wide types not specific to any one module.
*/

pub mod err;
