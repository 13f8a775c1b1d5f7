pub mod effect;
pub mod env;
pub mod git;
pub mod table;
