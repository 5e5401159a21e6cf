use actix_cors::Cors;
use actix_web::{error::InternalError, web, App, HttpResponse, HttpServer, Result as ActixResult};
use findit_core::{Error, MatchEngine};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

pub const SERVICE_NAME: &str = "matching-api";
pub const SERVICE_VERSION: &str = "2.0";

const NO_JSON: &str = "No JSON data provided";

#[derive(Deserialize)]
struct MatchRequest {
    #[serde(default)]
    lost_desc: Option<String>,
    #[serde(default)]
    found_desc: Option<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<MatchEngine>, host: String, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .app_data(json_config())
                .configure(configure)
        })
        .bind((host, port))?
        .run()
        .await
    }
}

/// Register the matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::post().to(match_descriptions))
        .route("/health", web::get().to(health_check));
}

/// Malformed or missing JSON bodies are reported as 400
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("Rejected request body: {}", err);
        InternalError::from_response(err, no_json()).into()
    })
}

/// `null`, `{}`, `[]`, `""`, `0` and `false` bodies carry no request
fn is_blank_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn no_json() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": NO_JSON
    }))
}

async fn match_descriptions(
    engine: web::Data<Arc<MatchEngine>>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let start = Instant::now();
    let body = body.into_inner();
    if is_blank_body(&body) {
        return Ok(no_json());
    }

    let req: MatchRequest = match serde_json::from_value(body) {
        Ok(req) => req,
        Err(e) => {
            debug!("Rejected request body: {}", e);
            return Ok(no_json());
        }
    };
    let lost = req.lost_desc.unwrap_or_default();
    let found = req.found_desc.unwrap_or_default();

    debug!("Received descriptions: lost={:?} found={:?}", lost, found);

    if lost.is_empty() || found.is_empty() {
        return Ok(bad_request(&Error::MissingDescription));
    }

    let engine = engine.get_ref().clone();
    let result = web::block(move || engine.match_pair(&lost, &found)).await;

    match result {
        Ok(Ok(outcome)) => Ok(HttpResponse::Ok().json(outcome)),
        Ok(Err(e @ Error::MissingDescription)) => Ok(bad_request(&e)),
        Ok(Err(e)) => Ok(internal_error(&e.to_string(), e.kind(), start)),
        Err(e) => Ok(internal_error(&e.to_string(), "panic", start)),
    }
}

fn bad_request(e: &Error) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": e.to_string()
    }))
}

/// Full detail goes to the log; the client only sees the message and category
fn internal_error(message: &str, kind: &str, start: Instant) -> HttpResponse {
    error!("Unexpected error in match endpoint ({}): {}", kind, message);
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": message,
        "traceback": kind,
        "similarity_score": 0.0,
        "processing_time_ms": start.elapsed().as_millis() as u64,
    }))
}

async fn health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
    })))
}
