//! HTTP request handlers.
//!
//! Controllers decode the request, convert DTOs into parameter models, call the
//! service layer and convert the result back into a response.

pub mod fallback;
pub mod feedback;
pub mod greeting;

#[cfg(test)]
mod test;
