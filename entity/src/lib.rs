//! SeaORM entity definitions for the feedback store.

pub mod prelude;

pub mod feedback;
