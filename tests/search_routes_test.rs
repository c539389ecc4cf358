use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use mockito::Matcher;
use plateful::api::{handlers::AppState, routes::create_router};
use plateful::config::{ServerConfig, Settings};
use plateful::upstream::{RecipeApiClient, UpstreamConfig};
use tower::ServiceExt;

fn test_app(upstream_url: &str) -> axum::Router {
    let settings = Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            external_url: None,
            api_rate_limit: 100,
            max_request_body_size: 1048576,
        },
    };

    let client = RecipeApiClient::new(UpstreamConfig {
        api_key: "test-key".to_string(),
        base_url: upstream_url.to_string(),
        timeout_secs: 5,
    })
    .unwrap();

    create_router(
        AppState {
            client,
            settings: settings.clone(),
        },
        &settings,
    )
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_search_forwards_exactly_the_supplied_facets() {
    let mut server = mockito::Server::new_async().await;

    // Exact query-string match: defaults and facets in adapter order,
    // and no `query` parameter at all
    let mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Exact(
            "apiKey=test-key&number=5&offset=0&addRecipeInformation=true\
             &sort=time&sortDirection=desc&cuisine=italian&diet=vegan"
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "results": [],
                "offset": 0,
                "number": 5,
                "totalResults": 0
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let app = test_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/recipes/search?cuisine=italian&diet=vegan&sort=time&number=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_normalizes_page_and_drops_idless_records() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "results": [
                    {
                        "id": 715415,
                        "title": "Red Lentil Soup",
                        "image": "https://img.example.com/715415.jpg",
                        "readyInMinutes": 15,
                        "servings": 4,
                        "nutrition": {
                            "nutrients": [
                                { "name": "Calories", "amount": 310.0, "unit": "kcal" }
                            ]
                        }
                    },
                    { "title": "No id, gets dropped" }
                ],
                "offset": 0,
                "number": 12,
                "totalResults": 25
            })
            .to_string(),
        )
        .create_async()
        .await;

    let app = test_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/recipes/search?query=lentil")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["results"][0]["id"], 715415);
    assert_eq!(body["results"][0]["difficulty"], "Easy");
    assert_eq!(body["results"][0]["nutrients"][0]["name"], "Calories");
    assert_eq!(body["totalResults"], 25);
    // 25 results at 12 per page
    assert_eq!(body["totalPages"], 3);
}

#[tokio::test]
async fn test_search_estimates_total_when_upstream_omits_it() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "results": [
                    { "id": 1, "title": "a" },
                    { "id": 2, "title": "b" },
                    { "id": 3, "title": "c" }
                ],
                "offset": 12,
                "number": 12
            })
            .to_string(),
        )
        .create_async()
        .await;

    let app = test_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/recipes/search?query=soup&offset=12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_json(response).await;
    // Lower-bound estimate: offset + items.len()
    assert_eq!(body["totalResults"], 15);
}

#[tokio::test]
async fn test_search_surfaces_upstream_error_with_details() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let app = test_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/recipes/search?query=soup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Recipe API request failed");
    assert!(body["details"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_search_rejects_negative_page_size_without_upstream_call() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let app = test_app(&server.url());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/recipes/search?number=-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    mock.assert_async().await;
}
