use actix_web::{HttpResponse, get, post, web};

use crate::forms::code_examples::{CreateCodeExampleForm, CreateCodeExampleFormPayload};
use crate::repository::DieselRepository;
use crate::routes::rpc_ok;
use crate::services::ServiceError;
use crate::services::code_examples::{
    create_code_example as create_code_example_service,
    list_demo_code_examples as list_demo_code_examples_service,
};

#[get("/getDemoCodeExamples")]
pub async fn get_demo_code_examples(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let examples = list_demo_code_examples_service(repo.get_ref())?;
    Ok(rpc_ok(examples))
}

#[post("/createCodeExample")]
pub async fn create_code_example(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCodeExampleForm>,
) -> Result<HttpResponse, ServiceError> {
    let payload: CreateCodeExampleFormPayload = form.try_into()?;
    let example = create_code_example_service(payload, repo.get_ref())?;
    Ok(rpc_ok(example))
}
