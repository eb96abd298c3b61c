use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

use super::user_models::{AddUserRequest, AddUserResponse, ErrorResponse, UserListResponse};
use crate::error::{ServiceError, StorageError};
use crate::models::user::NewUser;
use crate::services::user_service::UserService;

pub async fn add_user(
    service: web::Data<UserService>,
    req: web::Json<AddUserRequest>,
) -> impl Responder {
    // Presence check happens before any I/O.
    if req.has_missing_fields() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            message: "All fields are required".into(),
        });
    }
    let req = req.into_inner();
    let user = NewUser {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    info!("Received request to add user: {}", user.email);
    match service.add_user(user).await {
        Ok(user_id) => HttpResponse::Created().json(AddUserResponse {
            message: "User created successfully".into(),
            user_id,
        }),
        Err(ServiceError::Storage(StorageError::ConstraintViolation { constraint })) => {
            info!("Rejected duplicate email (constraint: {})", constraint);
            HttpResponse::BadRequest().json(ErrorResponse {
                message: "Email already exists".into(),
            })
        }
        Err(e) => {
            // Detail stays in the server log; the client gets a fixed message.
            error!("Failed to add user: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                message: "Server error".into(),
            })
        }
    }
}

pub async fn get_users(service: web::Data<UserService>) -> impl Responder {
    info!("Received request to list users");
    match service.list_users().await {
        Ok(users) => HttpResponse::Ok().json(UserListResponse { data: users }),
        Err(e) => {
            error!("Failed to fetch users: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                message: "Failed to fetch users".into(),
            })
        }
    }
}
