pub mod bit_ops;
pub mod math;
pub mod round;
pub mod wasm_logger;
