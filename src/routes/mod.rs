//! RPC surface: every procedure lives under `/trpc`, queries as `GET` and
//! mutations as `POST` with a JSON body.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod achievements;
pub mod categories;
pub mod code_examples;
pub mod courses;
pub mod landing_page;
pub mod main;

#[derive(Serialize)]
struct RpcData<T> {
    data: T,
}

#[derive(Serialize)]
struct RpcSuccess<T> {
    result: RpcData<T>,
}

#[derive(Serialize)]
struct RpcErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

#[derive(Serialize)]
struct RpcFailure<'a> {
    error: RpcErrorBody<'a>,
}

/// Wrap a procedure result in the `{"result": {"data": ...}}` envelope.
pub fn rpc_ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(RpcSuccess {
        result: RpcData { data },
    })
}

impl ServiceError {
    /// Machine-readable error code sent to RPC clients.
    pub fn rpc_code(&self) -> &'static str {
        match self {
            ServiceError::Form(_) | ServiceError::TypeConstraint(_) => "BAD_REQUEST",
            ServiceError::MissingReference { .. } => "UNPROCESSABLE_CONTENT",
            ServiceError::DuplicateSlug { .. } => "CONFLICT",
            ServiceError::NotFound { .. } => "NOT_FOUND",
            ServiceError::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Form(_) | ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
            ServiceError::MissingReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::DuplicateSlug { .. } => StatusCode::CONFLICT,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        HttpResponse::build(self.status_code()).json(RpcFailure {
            error: RpcErrorBody {
                code: self.rpc_code(),
                message: &message,
            },
        })
    }
}

/// JSON extractor settings: malformed bodies become `BAD_REQUEST`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected malformed request body: {err}");
        ServiceError::Form(err.to_string()).into()
    })
}

/// Register every procedure under the `/trpc` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/trpc")
            .app_data(json_config())
            .service(main::healthcheck)
            .service(landing_page::get_landing_page_data)
            .service(landing_page::update_landing_page_content)
            .service(categories::get_categories)
            .service(categories::create_category)
            .service(courses::get_featured_courses)
            .service(courses::create_course)
            .service(code_examples::get_demo_code_examples)
            .service(code_examples::create_code_example)
            .service(achievements::get_achievements)
            .service(achievements::create_achievement),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Form("bad".to_string()), 400, "BAD_REQUEST"),
            (
                ServiceError::MissingReference {
                    entity: "category",
                    id: 1,
                },
                422,
                "UNPROCESSABLE_CONTENT",
            ),
            (
                ServiceError::DuplicateSlug {
                    entity: "category",
                    slug: "x".to_string(),
                },
                409,
                "CONFLICT",
            ),
            (
                ServiceError::NotFound {
                    entity: "landing page content",
                    id: 1,
                },
                404,
                "NOT_FOUND",
            ),
            (ServiceError::Internal, 500, "INTERNAL_SERVER_ERROR"),
        ];
        for (error, status, code) in cases {
            assert_eq!(error.status_code().as_u16(), status);
            assert_eq!(error.rpc_code(), code);
        }
    }
}
