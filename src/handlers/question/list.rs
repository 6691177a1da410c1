use crate::{
    error::{self, Result},
    extractors::Json,
    utils::{page_number, paginate},
    SharedTrait,
};
use axum::extract::{Query, State};
use entity::{categories, questions};
use sea_orm::{EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub struct Params {
    // raw so that a non-numeric value falls back to the first page
    // instead of rejecting the request
    page: Option<String>,
}

#[derive(Serialize)]
pub struct Response {
    success: bool,
    questions: Vec<questions::Model>,
    total_questions: usize,
    categories: BTreeMap<i32, String>,
    current_category: Option<i32>,
}

pub async fn list_questions<S: SharedTrait>(
    State(shared): State<S>,
    Query(params): Query<Params>,
) -> Result<Json<Response>> {
    let questions = questions::Entity::find()
        .order_by_asc(questions::Column::Id)
        .all(shared.db())
        .await?;

    let categories = categories::Entity::find()
        .order_by_asc(categories::Column::Kind)
        .all(shared.db())
        .await?;

    let total_questions = questions.len();
    let page = paginate(questions, page_number(params.page.as_deref()));

    if page.is_empty() {
        return Err(error::PAGE_NOT_FOUND);
    }

    Ok(Json(Response {
        success: true,
        questions: page,
        total_questions,
        categories: categories
            .into_iter()
            .map(|category| (category.id, category.kind))
            .collect(),
        current_category: None,
    }))
}
