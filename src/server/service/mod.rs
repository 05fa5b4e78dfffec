//! Business logic between the controllers and the data layer.

pub mod feedback;
