use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{FixedOffset, TimeZone};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::{Value, json};
use spark_api::{
    application::http::server::{app_state::AppState, http_server::api_router},
    args::Args,
};
use spark_core::{
    application::create_service_with_connection, domain::common::LLMConfig, entity::foods,
};
use test_context::{AsyncTestContext, test_context};

fn disabled_llm() -> LLMConfig {
    LLMConfig {
        openai_api_key: None,
        openai_model: "gpt-3.5-turbo".to_string(),
        openai_base_url: "https://api.openai.com/v1".to_string(),
        request_timeout_secs: 30,
    }
}

fn server_with(db: DatabaseConnection) -> TestServer {
    let service = create_service_with_connection(db, &disabled_llm()).unwrap();
    let state = AppState::new(Arc::new(Args::default()), service);

    TestServer::new(api_router(state)).unwrap()
}

fn food_row(id: &str, name: &str, protein_g: f64, kcal: i32) -> foods::Model {
    foods::Model {
        id: id.to_string(),
        name: name.to_string(),
        category: "bowl".to_string(),
        tags: json!(["protein"]),
        protein_g,
        carbs_g: 40.0,
        fat_g: 12.0,
        kcal,
        areas: json!(["downtown"]),
        chains: json!([]),
        price_tier: "medium".to_string(),
        created_at: FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .unwrap(),
    }
}

/// Router over a database that is never queried.
struct OfflineApi {
    server: TestServer,
}

impl AsyncTestContext for OfflineApi {
    async fn setup() -> Self {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        Self {
            server: server_with(db),
        }
    }
}

#[test_context(OfflineApi)]
#[tokio::test]
async fn daily_goals_fall_back_to_mifflin_st_jeor(ctx: &mut OfflineApi) {
    let response = ctx
        .server
        .post("/api/nutrition/daily-goals")
        .json(&json!({
            "user_profile": {"age": 30, "weight": 70, "height": 170},
            "health_context": {"activity_level": "moderate"}
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["calories"], 2507);
    assert_eq!(body["data"]["protein_g"], 156);
    assert_eq!(body["data"]["carbs_g"], 282);
    assert_eq!(body["data"]["fat_g"], 83);
    assert_eq!(body["data"]["fiber_g"], 25);
}

#[test_context(OfflineApi)]
#[tokio::test]
async fn invalid_profile_is_unprocessable(ctx: &mut OfflineApi) {
    let response = ctx
        .server
        .post("/api/nutrition/daily-goals")
        .json(&json!({
            "user_profile": {"age": 0, "weight": 70, "height": 170}
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["code"], "E_UNPROCESSABLE_ENTITY");
}

#[test_context(OfflineApi)]
#[tokio::test]
async fn ai_status_reports_disabled_client(ctx: &mut OfflineApi) {
    let response = ctx.server.get("/api/nutrition/ai-status").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["status"], "disabled");
    assert_eq!(body["data"]["ai_enabled"], false);
    assert_eq!(body["data"]["model"], "none");
    assert_eq!(body["data"]["request_count"], 0);
    assert_eq!(
        body["data"]["features_enabled"].as_array().map(Vec::len),
        Some(5)
    );
}

#[test_context(OfflineApi)]
#[tokio::test]
async fn cost_tips_fall_back_to_fixed_tips(ctx: &mut OfflineApi) {
    let response = ctx.server.get("/api/nutrition/cost-optimization").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["tips"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["data"]["total_potential_savings"], "$25/week");
}

#[test_context(OfflineApi)]
#[tokio::test]
async fn liveness_does_not_touch_the_database(ctx: &mut OfflineApi) {
    let response = ctx.server.get("/api/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn foods_are_listed_from_storage() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            food_row("food_001", "Chicken Rice Bowl", 35.0, 450),
            food_row("food_007", "Salmon Poke Bowl", 32.0, 480),
        ]])
        .into_connection();

    let response = server_with(db).get("/api/foods?category=bowl").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let foods = body["data"].as_array().unwrap();
    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0]["id"], "food_001");
    assert_eq!(foods[0]["macros"]["protein_g"], 35.0);
    assert_eq!(foods[0]["availability"]["areas"], json!(["downtown"]));
}

#[tokio::test]
async fn unknown_food_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<foods::Model>::new()])
        .into_connection();

    let response = server_with(db).get("/api/foods/food_999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_NOT_FOUND");
    assert_eq!(body["message"], "Food 'food_999' not found");
}

#[tokio::test]
async fn meal_analysis_uses_fallback_without_completion_client() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![food_row("food_001", "Chicken Rice Bowl", 30.0, 450)]])
        .into_connection();

    let response = server_with(db)
        .post("/api/foods/analyze-meal")
        .json(&json!({"food_ids": ["food_001"], "daily_goals": {"calories": 2000}}))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    // 450 / 600 kcal and 30 / 20 g protein capped at 1
    assert_eq!(body["data"]["balance_score"], 0.875);
    assert_eq!(body["data"]["strengths"], json!(["adequate calories"]));
    assert_eq!(body["data"]["weaknesses"], json!([]));
    assert_eq!(body["data"]["next_meal_focus"], "balance");
}

#[tokio::test]
async fn intense_activity_recommends_high_protein_foods() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            food_row("food_002", "Garden Salad", 8.0, 250),
            food_row("food_007", "Salmon Poke Bowl", 32.0, 480),
            food_row("food_010", "Steak Burrito", 38.0, 620),
        ]])
        .into_connection();

    let response = server_with(db)
        .post("/api/foods/recommend")
        .json(&json!({
            "user_pref": {"diet_style": "omnivore"},
            "health_context": {"activity_level": "intense"},
            "limit": 5
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    let picks: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|pick| pick["food"]["id"].as_str())
        .collect();
    assert_eq!(picks, vec!["food_010", "food_007"]);
    assert_eq!(body["data"][0]["score"], 0.7);
}

#[tokio::test]
async fn recommend_rejects_oversized_limit() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let response = server_with(db)
        .post("/api/foods/recommend")
        .json(&json!({"user_pref": {}, "limit": 50}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
