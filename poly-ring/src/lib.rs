pub mod arith;
pub mod errors;
pub mod numext;
pub mod poly;
pub mod ring;
