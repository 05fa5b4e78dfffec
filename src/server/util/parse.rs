use crate::server::error::AppError;

/// Parses a feedback ID from a path segment
///
/// # Arguments
/// - `value` - The raw path segment to parse into `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed the segment
/// - `Err(AppError::BadRequest)` - The segment is not an integer within `i32`,
///   the range of the `feedback.id` column
pub fn parse_feedback_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid ID".to_string()))
}
