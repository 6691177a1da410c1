mod list;
mod questions;

use crate::SharedTrait;
use axum::{routing::get, Router};

pub fn routes<S: SharedTrait>() -> Router<S> {
    Router::new()
        .route("/categories", get(list::list_categories::<S>))
        .route(
            "/categories/:category_id/questions",
            get(questions::questions_in_category::<S>),
        )
}
