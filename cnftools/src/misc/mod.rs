/*!
Miscellaneous crate-wide support code.
*/

pub mod log;
