mod utils;

use utils::prelude::*;

#[tokio::test]
async fn returns_a_question_from_the_requested_category() {
    let env = setup().await;

    env.create_question("science question", "answer", 1, 1).await;
    env.create_question("art question", "answer", 2, 1).await;

    let res = env
        .post("/quizzes")
        .json(&json!({
            "quiz_category": { "id": 1 },
            "previous_questions": [],
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["category"], json!(1));
    assert_eq!(body["question"]["category"], json!(1));
}

#[tokio::test]
async fn excludes_previously_seen_questions() {
    let env = setup().await;

    let first = env.create_question("first", "answer", 1, 1).await;
    let second = env.create_question("second", "answer", 1, 1).await;

    let res = env
        .post("/quizzes")
        .json(&json!({
            "quiz_category": { "id": 1 },
            "previous_questions": [first],
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["question"]["id"], json!(second));
    assert_eq!(body["remaining"], json!(["second"]));
}

#[tokio::test]
async fn exhausted_category_signals_quiz_complete() {
    let env = setup().await;

    let first = env.create_question("first", "answer", 1, 1).await;
    let second = env.create_question("second", "answer", 1, 1).await;

    let res = env
        .post("/quizzes")
        .json(&json!({
            "quiz_category": { "id": 1 },
            "previous_questions": [first, second],
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn category_zero_draws_from_every_category() {
    let env = setup().await;

    env.create_question("science question", "answer", 1, 1).await;

    let res = env
        .post("/quizzes")
        .json(&json!({
            "quiz_category": { "id": 0 },
            "previous_questions": [],
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["question"]["question"], json!("science question"));
    assert_eq!(body["category"], json!(0));
}

#[tokio::test]
async fn category_zero_still_excludes_previous_questions() {
    let env = setup().await;

    let id = env.create_question("only one", "answer", 1, 1).await;

    let res = env
        .post("/quizzes")
        .json(&json!({
            "quiz_category": { "id": 0 },
            "previous_questions": [id],
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn unknown_category_falls_back_to_every_category() {
    let env = setup().await;

    env.create_question("science question", "answer", 1, 1).await;

    let res = env
        .post("/quizzes")
        .json(&json!({
            "quiz_category": { "id": 999 },
            "previous_questions": [],
        }))
        .send()
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await;
    assert_eq!(body["question"]["question"], json!("science question"));
}
