mod create;
mod delete;
mod list;
mod search;

use crate::SharedTrait;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn routes<S: SharedTrait>() -> Router<S> {
    Router::new()
        .route(
            "/questions",
            get(list::list_questions::<S>).post(create::create_question::<S>),
        )
        .route("/questions/:id", delete(delete::delete_question::<S>))
        .route("/search", post(search::search_questions::<S>))
}
