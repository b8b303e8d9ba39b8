/// Sequential composition of lattice stages
pub mod cascade;
/// Causality directions and per-order neighbor geometry
pub mod direction;
/// Order-recursive lattice predictor
pub mod lattice;
