pub mod animator;
pub mod curve;
pub mod hotkeys;
pub mod registry;
pub mod sampler;
pub mod scaler;
pub mod session;
pub mod stroke;
pub mod ticker;
