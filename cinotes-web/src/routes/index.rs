use actix_web::{get, web, HttpResponse};

pub const GREETING: &str = "Hello, CI/CD Pipeline! Your app is running 🚀";

#[get("/")]
#[instrument]
async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(GREETING)
}

#[get("/health_check")]
#[instrument]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(hello).service(health_check);
}
