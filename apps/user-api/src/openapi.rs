use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "User API",
        version = "0.1.0",
        description = "Minimal user management service backed by PostgreSQL"
    ),
    paths(crate::api::health::healthcheck),
    nest(
        (path = "/user", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
