use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use gradebook_core::Role;
use gradebook_models::{CreateGradeDto, CreateUserDto, Grade, LoginForm, TokenResponse, User};

use crate::modules::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_for_access_token,
        crate::modules::users::controller::create_user,
        crate::modules::grades::controller::read_my_grades,
        crate::modules::grades::controller::read_professor_grades,
        crate::modules::grades::controller::create_or_update_grade,
    ),
    components(
        schemas(
            User,
            Role,
            CreateUserDto,
            LoginForm,
            TokenResponse,
            Grade,
            CreateGradeDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "User registration"),
        (name = "Grades", description = "Grade recording and lookup")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "Role-based grade management: professors record grades, students read their own.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
