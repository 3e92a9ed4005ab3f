pub mod rng;

pub use rng::RngManager;
