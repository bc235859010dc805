pub mod binder;
pub mod bound;
pub mod builder;
pub mod shape;

pub use binder::ParameterBinder;
pub use bound::BoundStatement;
pub use builder::StatementBuilder;
pub use shape::{GEOMETRY_PLACEHOLDER, PLACEHOLDER, StatementShape, build_shape};
