use actix_web::{HttpResponse, get, post, web};

use crate::forms::landing_page::{
    UpdateLandingPageContentForm, UpdateLandingPageContentFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::rpc_ok;
use crate::services::ServiceError;
use crate::services::landing_page::{
    get_landing_page_data as get_landing_page_data_service,
    update_landing_page_content as update_landing_page_content_service,
};

#[get("/getLandingPageData")]
pub async fn get_landing_page_data(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let data = get_landing_page_data_service(repo.get_ref())?;
    Ok(rpc_ok(data))
}

#[post("/updateLandingPageContent")]
pub async fn update_landing_page_content(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateLandingPageContentForm>,
) -> Result<HttpResponse, ServiceError> {
    let payload: UpdateLandingPageContentFormPayload = form.try_into()?;
    let content = update_landing_page_content_service(payload, repo.get_ref())?;
    Ok(rpc_ok(content))
}
