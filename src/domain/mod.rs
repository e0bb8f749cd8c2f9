// Domain layer - Odds formats and conversion logic

pub mod fraction;
pub mod model;
pub mod probability;
pub mod rules;
