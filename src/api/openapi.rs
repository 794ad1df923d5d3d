use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::health,
        crate::api::routes::ready,
        crate::api::routes::schools::add_school,
        crate::api::routes::schools::list_schools,
    ),
    components(
        schemas(
            crate::api::dtos::AddSchoolRequest,
            crate::api::dtos::AddSchoolResponse,
            crate::api::dtos::SchoolResponse,
            crate::api::dtos::SchoolDistanceResponse,
            crate::api::dtos::MessageResponse,
            crate::api::dtos::ErrorResponse,
        )
    ),
    tags(
        (name = "schools", description = "Add schools and list them by distance"),
        (name = "health", description = "Liveness and readiness checks"),
    ),
    info(
        title = "School Management API",
        version = "0.1.0",
        description = "Stores schools and ranks them by great-circle distance from a caller",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn document_lists_public_routes() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths.keys().cloned().collect::<Vec<_>>();

        for expected in ["/", "/ready", "/addSchool", "/listSchools"] {
            assert!(
                paths.iter().any(|path| path == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }

    #[test]
    fn list_route_documents_caller_coordinates() {
        let json = serde_json::to_value(ApiDoc::openapi()).expect("document should serialize");
        let params = json["paths"]["/listSchools"]["get"]["parameters"]
            .as_array()
            .expect("list route should declare parameters");
        let names = params
            .iter()
            .filter_map(|param| param["name"].as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["userLat", "userLon"]);
    }
}
