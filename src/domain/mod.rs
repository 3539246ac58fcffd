// Domain layer - Core data types and fixed classification rules

pub mod model;
pub mod rules;
