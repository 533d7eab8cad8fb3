pub mod crawler;
pub mod fuzzable;
pub mod urlext;
