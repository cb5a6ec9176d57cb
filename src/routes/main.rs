use actix_web::{Responder, get};
use chrono::Utc;
use serde::Serialize;

use crate::routes::rpc_ok;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

#[get("/healthcheck")]
pub async fn healthcheck() -> impl Responder {
    rpc_ok(Health {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}
