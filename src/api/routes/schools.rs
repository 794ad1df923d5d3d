use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};

use crate::api::dtos::{AddSchoolRequest, AddSchoolResponse, ListSchoolsQuery};
use crate::api::routes::AppState;
use crate::error::{AppError, AppResult};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/addSchool", web::post().to(add_school))
        .route("/listSchools", web::get().to(list_schools));
}

/// A body sent without a JSON content type is read as an empty object, so
/// the caller gets the first missing-field error instead of a parse error.
#[utoipa::path(
    post,
    path = "/addSchool",
    request_body = AddSchoolRequest,
    responses(
        (status = 201, description = "School stored", body = AddSchoolResponse),
        (status = 400, description = "A field failed validation", body = crate::api::dtos::ErrorResponse),
        (status = 500, description = "The store rejected the write", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "schools"
)]
pub async fn add_school(
    state: web::Data<AppState>,
    request: HttpRequest,
    payload: Result<web::Json<AddSchoolRequest>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let body = match payload {
        Ok(payload) => payload.into_inner(),
        Err(_) if !is_json_content_type(&request) => AddSchoolRequest::default(),
        Err(error) => return Err(error),
    };

    let new_school = body.into_new_school().map_err(AppError::from)?;
    let school = state.school_service.add(new_school).await?;
    state.metrics.record_school_added();
    Ok(HttpResponse::Created().json(AddSchoolResponse::created(school)))
}

#[utoipa::path(
    get,
    path = "/listSchools",
    params(ListSchoolsQuery),
    responses(
        (status = 200, description = "Schools ordered by distance, nearest first", body = [crate::api::dtos::SchoolDistanceResponse]),
        (status = 400, description = "Caller coordinate failed validation", body = crate::api::dtos::ErrorResponse),
        (status = 500, description = "The store could not be read", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "schools"
)]
pub async fn list_schools(
    state: web::Data<AppState>,
    query: web::Query<ListSchoolsQuery>,
) -> AppResult<HttpResponse> {
    let origin = query.into_inner().into_user_location()?;
    let schools = state.school_service.list_by_distance(origin).await?;
    state.metrics.record_distance_query();
    Ok(HttpResponse::Ok().json(schools))
}

fn is_json_content_type(request: &HttpRequest) -> bool {
    let content_type = request.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}
