//! Ready-made game definitions built on the engine.

pub mod cat_vs_human;
