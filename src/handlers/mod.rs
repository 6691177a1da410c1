mod category;
mod question;
mod quiz;

use crate::SharedTrait;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use sea_orm::ConnectionTrait;

pub fn routes<S: SharedTrait>() -> Router<S> {
    Router::new()
        .merge(category::routes::<S>())
        .merge(question::routes::<S>())
        .route("/quizzes", post(quiz::next_question::<S>))
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

async fn liveness<S: SharedTrait>(State(shared): State<S>) -> StatusCode {
    if shared.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
