//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of model conversions and as default values for factory builders.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let feedback = fixture::feedback::entity();
//! let low = fixture::feedback::entity_builder().rating(1).build();
//! ```

pub mod feedback;
