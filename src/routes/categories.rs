use actix_web::{HttpResponse, get, post, web};

use crate::forms::categories::{CreateCategoryForm, CreateCategoryFormPayload};
use crate::repository::DieselRepository;
use crate::routes::rpc_ok;
use crate::services::ServiceError;
use crate::services::categories::{
    create_category as create_category_service, list_categories as list_categories_service,
};

#[get("/getCategories")]
pub async fn get_categories(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let categories = list_categories_service(repo.get_ref())?;
    Ok(rpc_ok(categories))
}

#[post("/createCategory")]
pub async fn create_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCategoryForm>,
) -> Result<HttpResponse, ServiceError> {
    let payload: CreateCategoryFormPayload = form.try_into()?;
    let category = create_category_service(payload, repo.get_ref())?;
    Ok(rpc_ok(category))
}
