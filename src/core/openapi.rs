use utoipa::{Modify, OpenApi};

use crate::features::appeals::{dtos as appeals_dtos, handlers as appeals_handlers, models};
use crate::shared::types::{ApiResponse, ErrorDetail, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Appeals (public)
        appeals_handlers::create_appeal,
    ),
    components(
        schemas(
            // Shared
            Meta,
            ErrorDetail,
            // Appeals
            models::IssueReason,
            models::Appeal,
            appeals_dtos::CreateAppealDto,
            appeals_dtos::AppealCreatedDto,
            ApiResponse<appeals_dtos::AppealCreatedDto>,
        )
    ),
    tags(
        (name = "appeals", description = "Subscriber service appeals (public)"),
    ),
    info(
        title = "Сервис обращений абонентов",
        version = "0.1.0",
        description = "Приём и проверка обращений абонентов",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_appeal_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/appeals"));

        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("CreateAppealDto"));
        assert!(schemas.contains_key("IssueReason"));
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Appeals".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Appeals");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("desc"));
    }
}
