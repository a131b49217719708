pub mod players;

use axum::Json;
use axum::Router;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use tracing::{debug, error};

use roster_core::{Data, PlayerError};

pub fn router(data: Data) -> Router {
    Router::new()
        .route(
            "/rest/players",
            get(players::list_players).post(players::create_player),
        )
        .route("/rest/players/count", get(players::count_players))
        .route(
            "/rest/players/:id",
            get(players::get_player)
                .post(players::update_player)
                .delete(players::delete_player),
        )
        .with_state(data)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// HTTP face of [`PlayerError`].
#[derive(Debug)]
pub struct ApiError(PlayerError);

impl From<PlayerError> for ApiError {
    fn from(error: PlayerError) -> Self {
        Self(error)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(PlayerError::bad_request(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(PlayerError::bad_request(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PlayerError::BadRequest(reason) => {
                debug!(%reason, "rejected player request");
                StatusCode::BAD_REQUEST
            }
            PlayerError::NotFound(id) => {
                debug!(player_id = id, "player not found");
                StatusCode::NOT_FOUND
            }
            PlayerError::Store(source) => {
                error!(?source, "player store failure");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_owned(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt as _;

    use roster_core::{Data, PlayerService};
    use roster_database::StoreBackend;

    use super::router;

    // 2010-01-01T00:00:00Z
    const BIRTHDAY_2010: i64 = 1_262_304_000_000;

    fn app() -> Router {
        router(Data {
            players: PlayerService::new(StoreBackend::memory()),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    fn new_player(name: &str, experience: i32) -> Value {
        json!({
            "name": name,
            "title": "Wanderer",
            "race": "HUMAN",
            "profession": "WARRIOR",
            "birthday": BIRTHDAY_2010,
            "experience": experience,
            "level": 999,
        })
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let app = app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/rest/players",
            Some(new_player("Ada", 750_000)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["id"], 1);
        assert_eq!(created["level"], 121);
        assert_eq!(created["untilNextLevel"], 300);
        assert_eq!(created["banned"], false);

        let (status, fetched) = send(&app, Method::GET, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn maps_errors_to_status_codes() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/rest/players/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/rest/players/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, Method::GET, "/rest/players/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "player 999 not found");

        let (status, _) = send(&app, Method::DELETE, "/rest/players/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::POST,
            "/rest/players",
            Some(json!({ "name": "Ada" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            Method::POST,
            "/rest/players",
            Some(json!({ "name": "Ada", "experience": "lots" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/rest/players?minLevel=high", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lists_with_filters_order_and_paging() {
        let app = app();
        for (name, experience) in [("Cid", 300), ("Ann", 100), ("Bree", 500), ("Dax", 0)] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/rest/players",
                Some(new_player(name, experience)),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, page) = send(
            &app,
            Method::GET,
            "/rest/players?minExperience=100&order=NAME&pageSize=2",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = page
            .as_array()
            .unwrap()
            .iter()
            .map(|player| player["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Ann", "Bree"]);

        let (_, page) = send(&app, Method::GET, "/rest/players?pageNumber=5", None).await;
        assert_eq!(page, json!([]));

        let (status, count) = send(
            &app,
            Method::GET,
            "/rest/players/count?minExperience=100",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count, 3);

        let (_, count) = send(&app, Method::GET, "/rest/players/count?name=a", None).await;
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn update_and_delete() {
        let app = app();
        send(
            &app,
            Method::POST,
            "/rest/players",
            Some(new_player("Ada", 0)),
        )
        .await;

        let (status, updated) = send(
            &app,
            Method::POST,
            "/rest/players/1",
            Some(json!({ "experience": 300, "banned": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["level"], 2);
        assert_eq!(updated["untilNextLevel"], 300);
        assert_eq!(updated["banned"], true);

        let (status, _) = send(
            &app,
            Method::POST,
            "/rest/players/1",
            Some(json!({ "experience": -5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, Method::DELETE, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, Method::GET, "/rest/players/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
