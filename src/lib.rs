pub mod bench;
pub mod combinatorics;
pub mod evaluator;
pub mod sampler;
pub mod verify;
