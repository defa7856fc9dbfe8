//! JSON endpoints. Every response is wrapped in [`ApiResponse`].

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod amenities;
pub mod bookings;
pub mod cars;
pub mod categories;
pub mod customers;
pub mod price_types;

const VALIDATION_FAILED: &str = "Validation failed";

/// Envelope without a payload, used for failures and plain confirmations.
pub type MessageResponse = ApiResponse<()>;

/// Envelope shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::data(data)
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            errors: if errors.is_empty() { None } else { Some(errors) },
        }
    }
}

/// `200 OK` with `data`.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::data(data))
}

/// `201 Created` with `data` and a confirmation message.
pub fn created<T: Serialize>(data: T, message: &str) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse::with_message(data, message))
}

/// `200 OK` carrying only a confirmation message.
pub fn ok_message(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::message(message))
}

/// Map a service failure to its HTTP status and envelope.
///
/// `action` describes the failed operation in the server log.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(MessageResponse::failure("Not found", Vec::new()))
        }
        ServiceError::Form(message) => HttpResponse::UnprocessableEntity()
            .json(MessageResponse::failure(VALIDATION_FAILED, vec![message])),
        ServiceError::Conflict(message) => HttpResponse::Conflict()
            .json(MessageResponse::failure("Conflict", vec![message])),
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError()
                .json(MessageResponse::failure("Internal server error", Vec::new()))
        }
    }
}

fn validation_error(message: String) -> actix_web::Error {
    let response = HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY)
        .json(MessageResponse::failure(VALIDATION_FAILED, vec![message.clone()]));
    InternalError::from_response(message, response).into()
}

/// Extractor configuration turning malformed JSON bodies into `422` envelopes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| validation_error(err.to_string()))
}

/// Extractor configuration turning malformed query strings into `422` envelopes.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        validation_error(err.to_string())
    })
}

/// Register every endpoint on `cfg`.
///
/// Literal paths are registered before their `{id}` siblings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(cars::list_cars)
        .service(categories::list_categories)
        .service(categories::add_category)
        .service(categories::delete_category)
        .service(cars::add_car)
        .service(cars::update_car)
        .service(cars::show_car)
        .service(cars::delete_car)
        .service(price_types::list_price_types)
        .service(price_types::add_price_type)
        .service(amenities::list_amenities)
        .service(amenities::add_amenity)
        .service(customers::add_customer)
        .service(customers::list_customers)
        .service(customers::show_customer)
        .service(bookings::add_booking)
        .service(bookings::list_bookings)
        .service(bookings::show_booking);
}
