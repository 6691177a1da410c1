use crate::{
    error::{self, Result},
    extractors::Json,
    SharedTrait,
};
use axum::extract::{Path, State};
use entity::questions;
use sea_orm::EntityTrait;
use serde::Serialize;

#[derive(Serialize)]
pub struct Response {
    success: bool,
}

pub async fn delete_question<S: SharedTrait>(
    State(shared): State<S>,
    Path(id): Path<String>,
) -> Result<Json<Response>> {
    let Ok(id) = id.parse::<i32>() else {
        return Err(error::QUESTION_NOT_FOUND);
    };

    let result = questions::Entity::delete_by_id(id).exec(shared.db()).await?;

    // two concurrent deletes race at the store, the loser gets a 404
    if result.rows_affected == 0 {
        return Err(error::QUESTION_NOT_FOUND);
    }

    Ok(Json(Response { success: true }))
}
