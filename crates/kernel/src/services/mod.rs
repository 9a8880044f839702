//! Services built on the models and the theme engine.

pub mod publish;
