pub mod envelope;
pub mod geom;
pub mod query;
