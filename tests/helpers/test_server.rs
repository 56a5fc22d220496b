// Fake backend spawned with actix-test.
//
// Speaks the same envelope as the real API so the reqwest client can be
// exercised end to end over a socket.

use actix_web::{web, App, HttpRequest, HttpResponse};
use serde_json::{json, Value};

pub use actix_test::TestServer;

use super::test_data::sample_assessment_json;

/// Assessment id the fake backend answers with 404
pub const MISSING_ASSESSMENT_ID: i64 = 404;

/// Receipt number the fake backend reports as already used
pub const DUPLICATE_RECEIPT: &str = "OR-DUP";

pub fn spawn_fake_backend() -> TestServer {
    actix_test::start(|| App::new().configure(configure_fake_routes))
}

/// Base URL of the fake backend's API prefix
pub fn api_base_url(srv: &TestServer) -> String {
    format!("http://{}/api", srv.addr())
}

fn configure_fake_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/assessments/{id}", web::get().to(get_assessment))
            .route(
                "/enrollments/{id}/assessment",
                web::post().to(create_assessment),
            )
            .route(
                "/installments/{id}/payments",
                web::post().to(create_payment),
            )
            .route(
                "/enrollments/{id}/subjects/{subject}",
                web::delete().to(drop_subject),
            )
            .route("/echo-request", web::get().to(echo_request))
            .route("/garbled", web::get().to(garbled)),
    );
}

fn envelope(message: &str, data: Value) -> Value {
    json!({ "success": true, "message": message, "data": data })
}

async fn get_assessment(req: HttpRequest, path: web::Path<i64>) -> HttpResponse {
    if req.headers().get("Authorization").is_none() {
        return HttpResponse::Unauthorized().json(json!({ "message": "Unauthenticated." }));
    }

    let id = path.into_inner();
    if id == MISSING_ASSESSMENT_ID {
        return HttpResponse::NotFound()
            .json(json!({ "success": false, "message": "Assessment not found", "data": null }));
    }

    HttpResponse::Ok().json(envelope("Assessment retrieved", sample_assessment_json(id)))
}

async fn create_assessment(_path: web::Path<i64>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": false,
        "message": "An assessment already exists for this enrollment.",
        "data": null
    }))
}

async fn create_payment(path: web::Path<i64>, body: web::Json<Value>) -> HttpResponse {
    let body = body.into_inner();

    if body["receipt_number"] == DUPLICATE_RECEIPT {
        return HttpResponse::UnprocessableEntity().json(json!({
            "message": "The given data was invalid.",
            "errors": { "receipt_number": ["The receipt number has already been taken."] }
        }));
    }

    HttpResponse::Created().json(envelope(
        "Payment recorded",
        json!({
            "id": 501,
            "installment_id": path.into_inner(),
            "amount": body["amount"],
            "paid_at": body["paid_at"],
            "receipt_number": body["receipt_number"]
        }),
    ))
}

async fn drop_subject(_path: web::Path<(i64, i64)>) -> HttpResponse {
    HttpResponse::Ok().json(envelope("Subject dropped", json!({})))
}

async fn echo_request(req: HttpRequest) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    HttpResponse::Ok().json(envelope(
        "OK",
        json!({
            "request_id": header("X-Request-ID"),
            "authorization": header("Authorization"),
            "accept": header("Accept")
        }),
    ))
}

async fn garbled() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("definitely not json")
}
