pub mod domain;
pub mod prelude;
