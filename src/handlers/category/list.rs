use crate::{error::Result, extractors::Json, SharedTrait};
use axum::extract::State;
use entity::categories;
use sea_orm::EntityTrait;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct Response {
    success: bool,
    categories: BTreeMap<i32, String>,
}

pub async fn list_categories<S: SharedTrait>(State(shared): State<S>) -> Result<Json<Response>> {
    let categories = categories::Entity::find().all(shared.db()).await?;

    Ok(Json(Response {
        success: true,
        categories: categories
            .into_iter()
            .map(|category| (category.id, category.kind))
            .collect(),
    }))
}
