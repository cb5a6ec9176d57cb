use actix_web::{HttpResponse, get, post, web};

use crate::forms::courses::{CreateCourseForm, CreateCourseFormPayload};
use crate::repository::DieselRepository;
use crate::routes::rpc_ok;
use crate::services::ServiceError;
use crate::services::courses::{
    create_course as create_course_service,
    list_featured_courses as list_featured_courses_service,
};

#[get("/getFeaturedCourses")]
pub async fn get_featured_courses(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let courses = list_featured_courses_service(repo.get_ref())?;
    Ok(rpc_ok(courses))
}

#[post("/createCourse")]
pub async fn create_course(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCourseForm>,
) -> Result<HttpResponse, ServiceError> {
    let payload: CreateCourseFormPayload = form.try_into()?;
    let course = create_course_service(payload, repo.get_ref())?;
    Ok(rpc_ok(course))
}
