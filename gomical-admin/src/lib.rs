//! Admin client for the garbage schedule service.
//!
//! All paths live under `/admin`. Every operation returns the
//! [`ApiResponse`] envelope by value: transport failures, non-2xx
//! statuses, and undecodable bodies are normalized into a synthesized
//! `{ success: false, error }` rather than surfacing as `Err`. UI code
//! built on this client only ever branches on the envelope.

use gomical_core::{ApiResponse, GarbageType, Weekday, deserialize_days};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default base URL of the admin service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5100";

#[derive(Debug, Clone, Serialize)]
/// Form body for creating a category.
pub struct CategoryForm {
    /// Display name.
    pub category: String,
    /// Collection days, serialized under `date` as an array.
    #[serde(rename = "date")]
    pub days: Vec<Weekday>,
    /// How to put the garbage out.
    pub method: String,
    /// Exceptional collection dates.
    pub special_days: Vec<String>,
    /// Free-text notes.
    pub notion: String,
    /// Item names to register under the category.
    pub garbage_types: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Partial form for updating a category; `None` fields are omitted from
/// the body and left unchanged server-side.
pub struct CategoryPatch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New collection days.
    #[serde(rename = "date", skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<Weekday>>,
    /// New method text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// New exceptional dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_days: Option<Vec<String>>,
    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notion: Option<String>,
    /// Replacement item-name list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garbage_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Category record as returned by the admin list/create/update endpoints.
pub struct AdminCategory {
    /// Unique identifier.
    pub id: i64,
    /// Display name.
    pub category: String,
    /// Collection days; tolerates the legacy single-string `date` form.
    #[serde(rename = "date", deserialize_with = "deserialize_days")]
    pub days: Vec<Weekday>,
    /// How to put the garbage out.
    #[serde(default)]
    pub method: String,
    /// Exceptional collection dates.
    #[serde(default)]
    pub special_days: Vec<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notion: String,
    /// Number of registered item names.
    #[serde(default)]
    pub garbage_types_count: u64,
    /// Creation timestamp, as formatted by the server.
    #[serde(default)]
    pub created_at: String,
    /// Last-update timestamp, as formatted by the server.
    #[serde(default)]
    pub updated_at: String,
    /// Registered item names.
    #[serde(default)]
    pub garbage_types: Vec<GarbageType>,
}

/// Body of `POST /admin/import`.
#[derive(Debug, Serialize)]
struct ImportRequest {
    data: Value,
    clear_existing: bool,
}

/// Client for the admin endpoints.
pub struct AdminClient {
    client: Client,
    base_url: String,
}

impl AdminClient {
    /// Create a client against an explicit base URL (no trailing slash).
    #[must_use]
    pub fn new<S: Into<String>>(client: Client, base_url: S) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client against [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_default_base_url(client: Client) -> Self {
        Self::new(client, DEFAULT_BASE_URL)
    }

    /// List every category with admin metadata.
    pub async fn categories(&self) -> ApiResponse<Vec<AdminCategory>> {
        self.request(self.client.get(self.url("/categories"))).await
    }

    /// Create a category from the given form.
    pub async fn create_category(&self, form: &CategoryForm) -> ApiResponse<AdminCategory> {
        self.request(self.client.post(self.url("/categories")).json(form))
            .await
    }

    /// Update a category; unset patch fields stay unchanged server-side.
    pub async fn update_category(&self, id: i64, patch: &CategoryPatch) -> ApiResponse<AdminCategory> {
        self.request(self.client.put(self.url(&format!("/categories/{id}"))).json(patch))
            .await
    }

    /// Delete a category.
    pub async fn delete_category(&self, id: i64) -> ApiResponse<()> {
        self.request(self.client.delete(self.url(&format!("/categories/{id}"))))
            .await
    }

    /// Export the whole dataset as an opaque payload.
    pub async fn export_data(&self) -> ApiResponse<Value> {
        self.request(self.client.get(self.url("/export"))).await
    }

    /// Import a previously exported payload; `clear_existing` wipes the
    /// current records first.
    pub async fn import_data(&self, payload: Value, clear_existing: bool) -> ApiResponse<Value> {
        let body = ImportRequest {
            data: payload,
            clear_existing,
        };
        self.request(self.client.post(self.url("/import")).json(&body))
            .await
    }

    /// Reset the database. Destructive and irreversible from here.
    pub async fn reset_database(&self) -> ApiResponse<Value> {
        self.request(self.client.post(self.url("/reset")).json(&serde_json::json!({})))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/admin{path}", self.base_url)
    }

    // Normalize every failure class into the envelope: transport errors
    // and undecodable bodies become a synthesized failure, and a non-2xx
    // status prefers the body's error string over the bare status code.
    async fn request<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResponse<T> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => return ApiResponse::failure(err.to_string()),
        };

        let status = response.status();
        let body = match response.json::<ApiResponse<T>>().await {
            Ok(body) => body,
            Err(err) => {
                let message = if status.is_success() {
                    err.to_string()
                } else {
                    format!("HTTP {}", status.as_u16())
                };
                return ApiResponse::failure(message);
            }
        };

        if !status.is_success() {
            let message = body
                .error
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return ApiResponse::failure(message);
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use gomical_core::Weekday;
    use reqwest::Client;
    use serde_json::{Value, json};

    use crate::{AdminClient, CategoryForm, CategoryPatch};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> AdminClient {
        AdminClient::new(Client::new(), base_url)
    }

    fn sample_form() -> CategoryForm {
        CategoryForm {
            category: String::from("資源ゴミ"),
            days: vec![Weekday::Monday, Weekday::Thursday],
            method: String::from("束ねて出す"),
            special_days: vec![],
            notion: String::new(),
            garbage_types: vec![String::from("新聞紙"), String::from("段ボール")],
        }
    }

    #[tokio::test]
    async fn test_create_sends_date_array_body() {
        let router = Router::new().route(
            "/admin/categories",
            post(|Json(body): Json<Value>| async move {
                // The wire field is `date`, always an array.
                if body["date"] != json!(["Monday", "Thursday"])
                    || body["category"] != json!("資源ゴミ")
                    || body["garbage_types"] != json!(["新聞紙", "段ボール"])
                {
                    return Json(json!({"success": false, "error": "bad body"}));
                }
                Json(json!({
                    "success": true,
                    "data": {
                        "id": 5,
                        "category": "資源ゴミ",
                        "date": ["Monday", "Thursday"],
                        "garbage_types_count": 2,
                        "created_at": "2026-08-30 09:00:00",
                        "updated_at": "2026-08-30 09:00:00"
                    }
                }))
            }),
        );
        let base_url = serve(router).await;

        let response = client_for(base_url).create_category(&sample_form()).await;
        assert!(response.success, "{:?}", response.error);
        let created = response.data.unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(created.days, vec![Weekday::Monday, Weekday::Thursday]);
        assert_eq!(created.garbage_types_count, 2);
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = CategoryPatch {
            notion: Some(String::from("祝日は回収なし")),
            ..CategoryPatch::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"notion": "祝日は回収なし"}));

        let patch = CategoryPatch {
            days: Some(vec![Weekday::Friday]),
            ..CategoryPatch::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"date": ["Friday"]}));
    }

    #[tokio::test]
    async fn test_update_and_delete_roundtrip() {
        let router = Router::new().route(
            "/admin/categories/{id}",
            put(|Json(body): Json<Value>| async move {
                if body != json!({"method": "袋に入れて出す"}) {
                    return Json(json!({"success": false, "error": "bad body"}));
                }
                Json(json!({
                    "success": true,
                    "data": {"id": 3, "category": "粗大ゴミ", "date": "Friday"}
                }))
            })
            .delete(|| async { Json(json!({"success": true, "message": "deleted"})) }),
        );
        let base_url = serve(router).await;
        let admin = client_for(base_url);

        let patch = CategoryPatch {
            method: Some(String::from("袋に入れて出す")),
            ..CategoryPatch::default()
        };
        let updated = admin.update_category(3, &patch).await;
        assert!(updated.success, "{:?}", updated.error);
        // Legacy single-string `date` still normalizes to a day list.
        assert_eq!(updated.data.unwrap().days, vec![Weekday::Friday]);

        let deleted = admin.delete_category(3).await;
        assert!(deleted.success);
        assert_eq!(deleted.message.as_deref(), Some("deleted"));
    }

    #[tokio::test]
    async fn test_import_body_shape() {
        let router = Router::new().route(
            "/admin/import",
            post(|Json(body): Json<Value>| async move {
                if body["clear_existing"] != json!(true) || !body["data"].is_object() {
                    return Json(json!({"success": false, "error": "bad body"}));
                }
                Json(json!({"success": true, "message": "imported"}))
            }),
        );
        let base_url = serve(router).await;

        let payload = json!({"categories": [], "garbage_types": []});
        let response = client_for(base_url).import_data(payload, true).await;
        assert!(response.success, "{:?}", response.error);
    }

    #[tokio::test]
    async fn test_non_2xx_prefers_body_error() {
        let router = Router::new().route(
            "/admin/reset",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"success": false, "error": "reset is disabled"})),
                )
            }),
        );
        let base_url = serve(router).await;

        let response = client_for(base_url).reset_database().await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("reset is disabled"));
    }

    #[tokio::test]
    async fn test_non_2xx_without_body_reports_status() {
        let router = Router::new().route(
            "/admin/export",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream broke") }),
        );
        let base_url = serve(router).await;

        let response = client_for(base_url).export_data().await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("HTTP 502"));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_failure_value() {
        let router = Router::new().route(
            "/admin/categories",
            get(|| async { "definitely not json" }),
        );
        let base_url = serve(router).await;

        let response = client_for(base_url).categories().await;
        assert!(!response.success);
        assert!(!response.error.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_failure_value() {
        let admin = client_for(String::from("http://127.0.0.1:9"));
        let response = admin.delete_category(1).await;
        assert!(!response.success);
        assert!(!response.error.unwrap_or_default().is_empty());
    }
}
