use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::Json,
    Json as RequestJson,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::OrderError;
use crate::logic::OrderService;
use crate::model::{CreateOrderRequest, Id, Order, OrderUpdate};
use crate::store::traits::OrderStore;

pub type AppState<S> = Arc<OrderService<S>>;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub fn error_response(err: OrderError) -> ApiError {
    let status = match &err {
        OrderError::NotFound(_) => StatusCode::NOT_FOUND,
        OrderError::InvalidCombination { .. } | OrderError::ValidationFailure(_) => {
            StatusCode::BAD_REQUEST
        }
        OrderError::Store(e) => {
            log::error!("Order store failure: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(&err.to_string())))
}

fn body_rejection(rejection: JsonRejection) -> ApiError {
    log::warn!("Rejected request body: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(&rejection.body_text())),
    )
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub orders: usize,
}

pub async fn health_check<S: OrderStore>(
    State(service): State<AppState<S>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let orders = service.count().await.map_err(error_response)?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        orders,
    }))
}

// Order handlers
pub async fn list_orders<S: OrderStore>(
    State(service): State<AppState<S>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    service.list().await.map(Json).map_err(error_response)
}

pub async fn get_order<S: OrderStore>(
    State(service): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<Order>, ApiError> {
    service.get(&id).await.map(Json).map_err(error_response)
}

pub async fn create_order<S: OrderStore>(
    State(service): State<AppState<S>>,
    payload: Result<RequestJson<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Order>), ApiError> {
    let RequestJson(request) = payload.map_err(body_rejection)?;
    let order = service.create(request).await.map_err(error_response)?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, order.location())],
        Json(order),
    ))
}

pub async fn update_order<S: OrderStore>(
    State(service): State<AppState<S>>,
    Path(id): Path<Id>,
    payload: Result<RequestJson<OrderUpdate>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let RequestJson(update) = payload.map_err(body_rejection)?;
    service.update(&id, update).await.map(Json).map_err(error_response)
}

pub async fn delete_order<S: OrderStore>(
    State(service): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<StatusCode, ApiError> {
    service.delete(&id).await.map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

// Catalog lookups
pub async fn list_makes<S: OrderStore>(State(service): State<AppState<S>>) -> Json<Vec<String>> {
    Json(service.makes())
}

pub async fn list_models<S: OrderStore>(
    State(service): State<AppState<S>>,
    Path(make): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    service.models_for(&make).map(Json).map_err(error_response)
}

pub async fn list_colors<S: OrderStore>(State(service): State<AppState<S>>) -> Json<Vec<String>> {
    Json(service.colors())
}

pub async fn get_openapi_spec() -> Json<serde_json::Value> {
    let not_found = serde_json::json!({
        "description": "Not found",
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorResponse"}}}
    });
    let bad_request = serde_json::json!({
        "description": "Car not available or invalid body",
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorResponse"}}}
    });
    let order = serde_json::json!({
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/CarOrder"}}}
    });
    let strings = serde_json::json!({
        "description": "Names",
        "content": {"application/json": {"schema": {"type": "array", "items": {"type": "string"}}}}
    });
    let id_param = serde_json::json!([{
        "name": "id", "in": "path", "required": true, "schema": {"type": "string", "format": "uuid"}
    }]);

    Json(serde_json::json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Car Ordering API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "tags": [{"name": "Cars", "description": "Car order management and inventory lookups"}],
        "paths": {
            "/api/cars": {
                "get": {
                    "tags": ["Cars"],
                    "operationId": "GetAllCarOrders",
                    "responses": {"200": {
                        "description": "All car orders",
                        "content": {"application/json": {"schema": {
                            "type": "array", "items": {"$ref": "#/components/schemas/CarOrder"}
                        }}}
                    }}
                },
                "post": {
                    "tags": ["Cars"],
                    "operationId": "CreateCarOrder",
                    "requestBody": {"required": true, "content": {"application/json": {"schema": {
                        "$ref": "#/components/schemas/CreateCarOrderRequest"
                    }}}},
                    "responses": {
                        "201": {"description": "Order created", "content": order["content"]},
                        "400": bad_request
                    }
                }
            },
            "/api/cars/{id}": {
                "get": {
                    "tags": ["Cars"],
                    "operationId": "GetCarOrderById",
                    "parameters": id_param,
                    "responses": {"200": {"description": "Car order", "content": order["content"]}, "404": not_found}
                },
                "put": {
                    "tags": ["Cars"],
                    "operationId": "UpdateCarOrder",
                    "parameters": id_param,
                    "requestBody": {"required": true, "content": {"application/json": {"schema": {
                        "$ref": "#/components/schemas/UpdateCarOrderRequest"
                    }}}},
                    "responses": {
                        "200": {"description": "Updated order", "content": order["content"]},
                        "400": bad_request,
                        "404": not_found
                    }
                },
                "delete": {
                    "tags": ["Cars"],
                    "operationId": "DeleteCarOrder",
                    "parameters": id_param,
                    "responses": {"204": {"description": "Order deleted"}, "404": not_found}
                }
            },
            "/api/cars/makes": {
                "get": {"tags": ["Cars"], "operationId": "GetAvailableMakes", "responses": {"200": strings}}
            },
            "/api/cars/models/{make}": {
                "get": {
                    "tags": ["Cars"],
                    "operationId": "GetModelsForMake",
                    "parameters": [{"name": "make", "in": "path", "required": true, "schema": {"type": "string"}}],
                    "responses": {"200": strings, "404": not_found}
                }
            },
            "/api/cars/colors": {
                "get": {"tags": ["Cars"], "operationId": "GetAvailableColors", "responses": {"200": strings}}
            }
        },
        "components": {
            "schemas": {
                "CarOrder": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "string", "format": "uuid"},
                        "make": {"type": "string"},
                        "model": {"type": "string"},
                        "color": {"type": "string"},
                        "orderDate": {"type": "string", "format": "date-time"},
                        "expectedDeliveryDate": {"type": "string", "format": "date-time"},
                        "status": {"type": "string", "example": "Pending"}
                    }
                },
                "CreateCarOrderRequest": {
                    "type": "object",
                    "required": ["make", "model", "color"],
                    "properties": {
                        "make": {"type": "string"},
                        "model": {"type": "string"},
                        "color": {"type": "string"}
                    }
                },
                "UpdateCarOrderRequest": {
                    "type": "object",
                    "properties": {
                        "make": {"type": "string"},
                        "model": {"type": "string"},
                        "color": {"type": "string"},
                        "status": {"type": "string"}
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {"error": {"type": "string"}}
                }
            }
        }
    }))
}
