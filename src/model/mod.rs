//! Wire-level data transfer objects shared by the HTTP layer and its tests.

pub mod feedback;
