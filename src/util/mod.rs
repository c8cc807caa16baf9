#[macro_use]
mod macros;

pub mod difficulty;
pub mod float_ext;
pub mod map_or_attrs;
pub mod minimize;
pub mod quadrature;
pub mod root_finding;
