use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::header::{HeaderName, AUTHORIZATION, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use crate::shared::remote::ApiClient;

/// Canned answer for one `(method, path)` pair.
#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct FakeState {
    routes: Vec<(String, String, Reply)>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local stand-in for the portfolio API and the image host. Unknown routes
/// answer 404.
pub struct FakeApi {
    base_url: String,
    handle: ServerHandle,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeApi {
    pub async fn start(routes: Vec<(&str, &str, Reply)>) -> Self {
        let routes: Vec<(String, String, Reply)> = routes
            .into_iter()
            .map(|(method, path, reply)| (method.to_string(), path.to_string(), reply))
            .collect();
        let recorded = Arc::new(Mutex::new(Vec::new()));

        let shared = Arc::new(FakeState {
            routes,
            recorded: Arc::clone(&recorded),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(Arc::clone(&shared)))
                .default_service(web::to(respond))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake api");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{}", addr),
            handle,
            recorded,
        }
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn respond(req: HttpRequest, body: web::Bytes, state: web::Data<FakeState>) -> HttpResponse {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.recorded.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let matched = state
        .routes
        .iter()
        .find(|(method, path, _)| method == req.method().as_str() && path == req.path());

    match matched {
        Some((_, _, reply)) => HttpResponse::build(
            StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .content_type(reply.content_type)
        .body(reply.body.clone()),
        None => HttpResponse::NotFound().json(json!({"status": false, "message": "Not found"})),
    }
}
