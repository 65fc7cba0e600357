use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, JoinType, QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::{Deserialize, Serialize};

use crate::entities::{caregiver, job, job_application, user};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NewJobApplication {
    pub caregiver_user_id: i32,
    pub job_id: i32,
    pub date_applied: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobApplicationChanges {
    pub date_applied: Option<NaiveDate>,
}

/// Application joined with the applying caregiver and the job applied to.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct ApplicationRow {
    pub application_id: i32,
    pub caregiver_user_id: i32,
    pub given_name: String,
    pub surname: String,
    pub job_id: i32,
    pub required_caregiving_type: String,
    pub date_applied: NaiveDate,
}

pub async fn create_application(
    db: &DatabaseConnection,
    input: NewJobApplication,
) -> AppResult<job_application::Model> {
    let now = Utc::now().naive_utc();
    let model = job_application::ActiveModel {
        application_id: NotSet,
        caregiver_user_id: Set(input.caregiver_user_id),
        job_id: Set(input.job_id),
        date_applied: Set(input.date_applied),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(model.insert(db).await?)
}

pub async fn list_applications(db: &DatabaseConnection) -> AppResult<Vec<ApplicationRow>> {
    Ok(job_application::Entity::find()
        .join(JoinType::InnerJoin, job_application::Relation::Caregiver.def())
        .join(JoinType::InnerJoin, caregiver::Relation::User.def())
        .join(JoinType::InnerJoin, job_application::Relation::Job.def())
        .select_only()
        .column(job_application::Column::ApplicationId)
        .column(job_application::Column::CaregiverUserId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(job_application::Column::JobId)
        .column(job::Column::RequiredCaregivingType)
        .column(job_application::Column::DateApplied)
        .order_by_asc(job_application::Column::ApplicationId)
        .into_model::<ApplicationRow>()
        .all(db)
        .await?)
}

pub async fn get_application(
    db: &DatabaseConnection,
    application_id: i32,
) -> AppResult<Option<job_application::Model>> {
    Ok(job_application::Entity::find_by_id(application_id)
        .one(db)
        .await?)
}

pub async fn update_application(
    db: &DatabaseConnection,
    application_id: i32,
    changes: JobApplicationChanges,
) -> AppResult<job_application::Model> {
    let mut model = job_application::Entity::find_by_id(application_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("application"))?
        .into_active_model();

    if let Some(date_applied) = changes.date_applied {
        model.date_applied = Set(date_applied);
    }
    model.updated_at = Set(Utc::now().naive_utc());

    Ok(model.update(db).await?)
}

pub async fn delete_application(db: &DatabaseConnection, application_id: i32) -> AppResult<()> {
    let result = job_application::Entity::delete_by_id(application_id)
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("application"));
    }

    Ok(())
}
