pub mod cards;
pub mod env;
pub mod search;
pub mod styles;
