use super::request::RequestBuilder;
use http::StatusCode;
use migration::{Migrator, MigratorTrait};
use reqwest::Client;
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use trivia_backend::Shared;

/// Starts a fresh backend on a random port, backed by its own in-memory
/// database, so tests are independent and can run in parallel.
#[allow(unused)]
pub async fn setup() -> Env {
    // a single pooled connection keeps the in-memory database alive for
    // the whole test
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);

    let conn = Database::connect(opts)
        .await
        .expect("failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("failed to apply migrations");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shared = Shared::with_database(conn);

    tokio::spawn(async move {
        trivia_backend::run(listener, shared).await.unwrap();
    });

    Env {
        addr,
        client: Client::new(),
    }
}

#[derive(Clone)]
pub struct Env {
    addr: SocketAddr,
    client: Client,
}

#[allow(unused)]
impl Env {
    fn get_url(&self, url: &str) -> String {
        format!("http://{}{}", self.addr, url)
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.get_url(url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.get_url(url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.get_url(url)))
    }
}

#[allow(unused)]
impl Env {
    /// Inserts a question through the public API and returns its id.
    pub async fn create_question(
        &self,
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> i64 {
        let res = self
            .post("/questions")
            .json(&json!({
                "question": question,
                "answer": answer,
                "category": category,
                "difficulty": difficulty,
            }))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await;
        body["question"]["id"].as_i64().expect("missing question id")
    }
}
