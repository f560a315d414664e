pub mod error;
pub mod interpolate;
pub mod table;

pub use error::SampleError;
pub use interpolate::{interpolate_derivatives, interpolate_positions};
pub use table::{densify_path, ShapeTable, DEFAULT_SUBDIVISIONS};
