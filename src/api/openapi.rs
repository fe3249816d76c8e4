//! OpenAPI document for the daycare API.

use utoipa::OpenApi;

use crate::api::dto::{HealthResponse, PenguinDto};
use crate::api::handlers::{penguins, stats, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Aggregated OpenAPI description of every endpoint.
///
/// Served at `/api-docs/openapi.json` (with Swagger UI at `/swagger-ui`)
/// when the `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Penguin Daycare API",
        description = "Backend of the Penguin Daycare Simulator: penguin roster and stat counters."
    ),
    paths(
        system::root_handler,
        system::health_handler,
        penguins::list_penguins,
        penguins::update_handler,
        stats::visit_handler,
        stats::fish_handler,
        stats::bellyrub_handler,
    ),
    components(schemas(PenguinDto, HealthResponse, ErrorResponse, ErrorBody)),
    tags(
        (name = "System", description = "Greeting and health"),
        (name = "Penguins", description = "Cached penguin roster"),
        (name = "Stats", description = "Counter increment events"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/",
            "/health",
            "/penguins",
            "/update",
            "/stat/visit",
            "/stat/fish",
            "/stat/bellyrub",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn penguins_documents_only_success() {
        let doc = ApiDoc::openapi();
        let Some(op) = doc.paths.paths.get("/penguins").and_then(|item| item.get.as_ref()) else {
            panic!("GET /penguins not documented");
        };
        let codes: Vec<&str> = op.responses.responses.keys().map(String::as_str).collect();
        assert_eq!(codes, ["200"]);
    }

    #[test]
    fn stat_endpoints_document_id_parameter() {
        let doc = ApiDoc::openapi();
        for path in ["/stat/visit", "/stat/fish", "/stat/bellyrub"] {
            let Some(op) = doc.paths.paths.get(path).and_then(|item| item.get.as_ref()) else {
                panic!("GET {path} not documented");
            };
            let names: Vec<&str> = op
                .parameters
                .iter()
                .flatten()
                .map(|p| p.name.as_str())
                .collect();
            assert_eq!(names, ["id"], "{path}");
        }
    }
}
