use crate::server::{
    data::feedback::FeedbackRepository, error::AppError, model::feedback::FeedbackParams,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn params(employee_id: &str, feedback_text: &str, rating: i32) -> FeedbackParams {
    FeedbackParams {
        employee_id: employee_id.to_string(),
        feedback_text: feedback_text.to_string(),
        rating,
    }
}
