pub mod calculation;

pub use calculation::calculation_routes;
