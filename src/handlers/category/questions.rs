use crate::{
    error::{self, Result},
    extractors::Json,
    SharedTrait,
};
use axum::extract::{Path, State};
use entity::questions;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<questions::Model>,
    total_questions: usize,
    current_category: i32,
}

pub async fn questions_in_category<S: SharedTrait>(
    State(shared): State<S>,
    Path(category_id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(category_id) = category_id.parse::<i32>() else {
        return Err(error::CATEGORY_NOT_FOUND);
    };

    let questions = questions::Entity::find()
        .filter(questions::Column::Category.eq(category_id))
        .order_by_asc(questions::Column::Id)
        .all(shared.db())
        .await?;

    if questions.is_empty() {
        return Err(error::CATEGORY_NOT_FOUND);
    }

    Ok(Json(Response {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}
