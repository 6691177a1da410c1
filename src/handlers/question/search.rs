use crate::{error::Result, extractors::Json, SharedTrait};
use axum::extract::State;
use entity::questions;
use sea_orm::{sea_query::Expr, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<questions::Model>,
    current_category: Option<i32>,
}

pub async fn search_questions<S: SharedTrait>(
    State(shared): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<Response>> {
    // both sides go through the store's lower(), so the comparison stays in
    // one collation no matter the backend. `%` and `_` in the term stay
    // unescaped and act as LIKE wildcards, matching the original behavior.
    let pattern = format!("%{}%", request.search_term);

    let questions = questions::Entity::find()
        .filter(Expr::cust_with_values(
            "LOWER(question) LIKE LOWER(?)",
            [pattern],
        ))
        .order_by_asc(questions::Column::Id)
        .all(shared.db())
        .await?;

    Ok(Json(Response {
        success: true,
        questions,
        current_category: None,
    }))
}
