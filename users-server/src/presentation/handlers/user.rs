use crate::application::user_service::UserService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreateUserRequest, GetUserResponse, ListUsersResponse};
use crate::presentation::middleware::RequestId;
use actix_web::error::JsonPayloadError;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Scope, get, post, web};
use tracing::info;

pub fn scope() -> Scope {
    web::scope("/users")
        .app_data(json_config())
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .default_service(web::to(not_found))
}

/// A body that is empty or not declared as JSON carries no email; anything
/// else that fails to parse is a 400 with the usual `{ "error": ... }` shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| payload_error(err).into())
}

fn payload_error(err: JsonPayloadError) -> DomainError {
    match err {
        JsonPayloadError::ContentType => CreateUserRequest::missing_email(),
        JsonPayloadError::Deserialize(e) if e.is_eof() && e.line() == 1 && e.column() == 0 => {
            CreateUserRequest::missing_email()
        }
        other => DomainError::BadRequest(other.to_string()),
    }
}

async fn not_found() -> Result<HttpResponse, DomainError> {
    Err(DomainError::NotFound)
}

#[get("/{id}")]
async fn get_user(
    req: HttpRequest,
    users: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    let user = users.find_by_id(&id).await.ok_or(DomainError::NotFound)?;

    info!(request_id = %request_id(&req), user_id = %user.id, "user retrieved");

    Ok(HttpResponse::Ok().json(GetUserResponse { user }))
}

#[get("")]
async fn list_users(
    req: HttpRequest,
    users: web::Data<UserService>,
) -> Result<HttpResponse, DomainError> {
    let users = users.all().await?;

    info!(request_id = %request_id(&req), count = users.len(), "users retrieved");

    Ok(HttpResponse::Ok().json(ListUsersResponse { users }))
}

#[post("")]
async fn create_user(
    req: HttpRequest,
    users: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, DomainError> {
    let new_user = payload.into_inner().validate()?;
    let user = users.create(new_user).await?;

    info!(request_id = %request_id(&req), user_id = %user.id, "user created");

    Ok(HttpResponse::Ok().json(user))
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
