pub mod cards;
pub mod env;
pub mod print;
pub mod styles;
