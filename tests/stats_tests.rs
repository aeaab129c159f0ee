// tests/stats_tests.rs

use quiz_board::{
    catalog::default_catalog, config::Config, routes, state::AppState, store::Store,
};
use serde_json::{Value, json};

async fn spawn_app() -> String {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        admin_refresh_secs: 30,
        quiz_catalog_path: None,
    };

    let state = AppState::new(Store::new(default_catalog()), config);
    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn answer(client: &reqwest::Client, address: &str, user: &str, quiz: &str, option: &str) -> Value {
    client
        .post(&format!("{}/api/quizzes/answer", address))
        .json(&json!({
            "userName": user,
            "userId": format!("id_{}", user),
            "quizId": quiz,
            "selectedOption": option
        }))
        .send()
        .await
        .expect("Submit failed")
        .json()
        .await
        .expect("Failed to parse answer json")
}

async fn get_json(client: &reqwest::Client, address: &str, path: &str) -> Value {
    let response = client
        .get(&format!("{}{}", address, path))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status().as_u16(), 200, "{}", path);
    response.json().await.expect("Failed to parse json")
}

#[tokio::test]
async fn worked_example_for_one_user() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let first = answer(&client, &address, "张三", "quiz_1", "B").await;
    assert_eq!(first["isCorrect"], true);
    let second = answer(&client, &address, "张三", "quiz_2", "A").await;
    assert_eq!(second["isCorrect"], false);

    // Assert
    let board = get_json(&client, &address, "/api/stats/users").await;
    let row = &board[0];
    assert_eq!(row["rank"], 1);
    assert_eq!(row["userName"], "张三");
    assert_eq!(row["userId"], "id_张三");
    assert_eq!(row["score"], 10);
    assert_eq!(row["correct"], 1);
    assert_eq!(row["wrong"], 1);
    assert_eq!(row["total"], 2);
    assert_eq!(row["accuracy"], 50.0);
}

#[tokio::test]
async fn repeated_submissions_are_all_counted() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        answer(&client, &address, "dup", "quiz_1", "B").await;
        answer(&client, &address, "dup", "quiz_3", "C").await;
    }

    let board = get_json(&client, &address, "/api/stats/users").await;
    assert_eq!(board[0]["correct"], 2);
    assert_eq!(board[0]["wrong"], 2);
    assert_eq!(board[0]["score"], 20);

    let records = get_json(&client, &address, "/api/stats/quiz-records").await;
    assert_eq!(records.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn leaderboard_is_ranked_by_score() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    answer(&client, &address, "low", "quiz_1", "A").await;
    answer(&client, &address, "mid", "quiz_1", "B").await;
    answer(&client, &address, "top", "quiz_1", "B").await;
    answer(&client, &address, "top", "quiz_2", "C").await;
    answer(&client, &address, "tie", "quiz_3", "A").await;

    let board = get_json(&client, &address, "/api/stats/users").await;
    let rows = board.as_array().unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r["userName"].as_str().unwrap()).collect();
    // "mid" reached 10 points before "tie"
    assert_eq!(names, ["top", "mid", "tie", "low"]);

    let scores: Vec<u64> = rows.iter().map(|r| r["score"].as_u64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(rows[3]["accuracy"], 0.0);
}

#[tokio::test]
async fn overview_and_quiz_stats() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    answer(&client, &address, "a", "quiz_1", "B").await;
    answer(&client, &address, "b", "quiz_1", "A").await;
    answer(&client, &address, "b", "quiz_1", "B").await;
    answer(&client, &address, "c", "quiz_2", "D").await;
    client
        .post(&format!("{}/api/comments", address))
        .json(&json!({ "userName": "a", "content": "hello" }))
        .send()
        .await
        .unwrap();

    let overview = get_json(&client, &address, "/api/stats/overview").await;
    assert_eq!(overview["totalUsers"], 3);
    assert_eq!(overview["totalAnswers"], 4);
    assert_eq!(overview["totalCorrect"], 2);
    assert_eq!(overview["totalComments"], 1);
    assert_eq!(overview["overallAccuracy"], 50.0);

    let stats = get_json(&client, &address, "/api/quizzes/quiz_1/stats").await;
    assert_eq!(stats["quizId"], "quiz_1");
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["correct"], 2);
    assert_eq!(stats["wrong"], 1);
    assert_eq!(stats["accuracy"], 66.67);
    let options = stats["options"].as_array().unwrap();
    assert_eq!(options[0]["label"], "A");
    assert_eq!(options[0]["count"], 1);
    assert_eq!(options[1]["count"], 2);
    assert_eq!(options[1]["isCorrect"], true);

    let untouched = get_json(&client, &address, "/api/quizzes/quiz_3/stats").await;
    assert_eq!(untouched["total"], 0);
    assert_eq!(untouched["accuracy"], 0.0);
}

#[tokio::test]
async fn empty_store_reports_zeros() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let overview = get_json(&client, &address, "/api/stats/overview").await;
    assert_eq!(overview["totalUsers"], 0);
    assert_eq!(overview["overallAccuracy"], 0.0);

    let board = get_json(&client, &address, "/api/stats/users").await;
    assert!(board.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn quiz_records_are_newest_first() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    answer(&client, &address, "first", "quiz_1", "B").await;
    answer(&client, &address, "second", "quiz_2", "C").await;

    let records = get_json(&client, &address, "/api/stats/quiz-records").await;
    assert_eq!(records[0]["userName"], "second");
    assert_eq!(records[0]["quizId"], "quiz_2");
    assert_eq!(records[0]["selectedOption"], "C");
    assert_eq!(records[0]["isCorrect"], true);
    assert!(records[0]["time"].is_string());
    assert!(records[0]["timestamp"].is_string());
    assert_eq!(records[1]["userName"], "first");
}

#[tokio::test]
async fn comment_stats_totals() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for (user, text) in [("a", "one"), ("b", "two"), ("a", "three")] {
        let created: Value = client
            .post(&format!("{}/api/comments", address))
            .json(&json!({ "userName": user, "content": text }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        ids.push(created["id"].as_str().unwrap().to_string());
    }
    for id in [&ids[0], &ids[1], &ids[1]] {
        client
            .post(&format!("{}/api/comments/like", address))
            .json(&json!({ "commentId": id }))
            .send()
            .await
            .unwrap();
    }

    let stats = get_json(&client, &address, "/api/stats/comments").await;
    assert_eq!(stats["totalComments"], 3);
    assert_eq!(stats["totalLikes"], 3);
    assert_eq!(stats["users"][0]["userName"], "a");
    assert_eq!(stats["users"][0]["commentCount"], 2);
    assert_eq!(stats["users"][0]["likes"], 1);
    assert_eq!(stats["users"][1]["userName"], "b");
    assert_eq!(stats["users"][1]["likes"], 2);
}

#[tokio::test]
async fn export_returns_csv_attachment() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    answer(&client, &address, "张三", "quiz_1", "B").await;
    answer(&client, &address, "李四", "quiz_1", "D").await;

    let response = client
        .get(&format!("{}/api/export/quiz-records", address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let headers = response.headers().clone();
    assert!(
        headers["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );
    assert!(
        headers["content-disposition"]
            .to_str()
            .unwrap()
            .starts_with("attachment; filename=\"quiz_records_")
    );

    let body = response.text().await.unwrap();
    let lines: Vec<&str> = body.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,李四,quiz_1,D,wrong,"));
    assert!(lines[2].starts_with("2,张三,quiz_1,B,correct,"));
}
