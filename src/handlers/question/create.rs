use crate::{
    error::{self, DatabaseError, Error, Result},
    extractors::{Json, ValidatedJson},
    SharedTrait,
};
use axum::{extract::State, http::StatusCode};
use entity::questions;
use sea_orm::{ActiveValue::NotSet, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1))]
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    question: questions::Model,
}

pub async fn create_question<S: SharedTrait>(
    State(shared): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let question = questions::ActiveModel {
        id: NotSet,
        question: Set(request.question.clone()),
        answer: Set(request.answer.clone()),
        category: Set(request.category),
        difficulty: Set(request.difficulty),
    };

    let result = questions::Entity::insert(question)
        .exec(shared.db())
        .await
        .map_err(|error| {
            if error.constraint_violation() {
                error::QUESTION_NOT_INSERTED
            } else {
                Error::internal(error)
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            success: true,
            question: questions::Model {
                id: result.last_insert_id,
                question: request.question,
                answer: request.answer,
                category: request.category,
                difficulty: request.difficulty,
            },
        }),
    ))
}
