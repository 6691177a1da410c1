use crate::{error::Result, extractors::Json, SharedTrait};
use axum::extract::State;
use entity::{categories, questions};
use rand::seq::SliceRandom;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    quiz_category: QuizCategory,
    previous_questions: Vec<i32>,
}

#[derive(Deserialize)]
pub struct QuizCategory {
    id: i32,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    question: Option<questions::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<i32>,
    /// Question texts left in the pool after exclusion. Debug-style output,
    /// not relied on by the frontend.
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining: Option<Vec<String>>,
}

/// Picks one random question that has not been shown yet. The caller owns
/// the quiz session state and resubmits `previous_questions` every round.
pub async fn next_question<S: SharedTrait>(
    State(shared): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    // id 0 (or any id that does not exist) means "all categories"
    let category = categories::Entity::find_by_id(request.quiz_category.id)
        .one(shared.db())
        .await?;

    let mut pool = match &category {
        Some(category) => {
            questions::Entity::find()
                .filter(questions::Column::Category.eq(category.id))
                .all(shared.db())
                .await?
        }
        None => questions::Entity::find().all(shared.db()).await?,
    };

    pool.retain(|question| !request.previous_questions.contains(&question.id));

    let Some(question) = pool.choose(&mut rand::thread_rng()).cloned() else {
        // quiz complete, not an error
        return Ok(Json(Response {
            success: true,
            question: None,
            category: None,
            remaining: None,
        }));
    };

    Ok(Json(Response {
        success: true,
        question: Some(question),
        category: Some(request.quiz_category.id),
        remaining: Some(pool.into_iter().map(|question| question.question).collect()),
    }))
}
