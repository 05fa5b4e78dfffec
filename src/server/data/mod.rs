//! Database repository layer.
//!
//! Repositories handle the CRUD statements for each domain. They use SeaORM entity
//! models internally and return domain models to keep the data layer separate from
//! the service and controller layers.

pub mod feedback;

#[cfg(test)]
mod test;
