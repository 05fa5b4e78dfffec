//! Factory methods for creating test data.
//!
//! Factories insert records into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let feedback = factory::create_feedback(&db).await?;
//!
//! let custom = factory::feedback::FeedbackFactory::new(&db)
//!     .employee_id("E42")
//!     .rating(-3)
//!     .build()
//!     .await?;
//! ```

pub mod feedback;
pub mod helpers;

pub use feedback::create_feedback;
