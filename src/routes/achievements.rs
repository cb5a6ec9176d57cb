use actix_web::{HttpResponse, get, post, web};

use crate::forms::achievements::{CreateAchievementForm, CreateAchievementFormPayload};
use crate::repository::DieselRepository;
use crate::routes::rpc_ok;
use crate::services::ServiceError;
use crate::services::achievements::{
    create_achievement as create_achievement_service,
    list_active_achievements as list_active_achievements_service,
};

#[get("/getAchievements")]
pub async fn get_achievements(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let achievements = list_active_achievements_service(repo.get_ref())?;
    Ok(rpc_ok(achievements))
}

#[post("/createAchievement")]
pub async fn create_achievement(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateAchievementForm>,
) -> Result<HttpResponse, ServiceError> {
    let payload: CreateAchievementFormPayload = form.try_into()?;
    let achievement = create_achievement_service(payload, repo.get_ref())?;
    Ok(rpc_ok(achievement))
}
