pub mod calculation_handlers;

pub use calculation_handlers::*;
