use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::entities::{job, job_application, member, user};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub member_user_id: i32,
    pub required_caregiving_type: String,
    #[serde(default)]
    pub other_requirements: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobChanges {
    pub required_caregiving_type: Option<String>,
    pub other_requirements: Option<String>,
}

/// Job joined with the posting member's user profile.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct JobRow {
    pub job_id: i32,
    pub member_user_id: i32,
    pub given_name: String,
    pub surname: String,
    pub required_caregiving_type: String,
    pub other_requirements: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

pub async fn create_job(db: &DatabaseConnection, input: NewJob) -> AppResult<job::Model> {
    let now = Utc::now().naive_utc();
    let model = job::ActiveModel {
        job_id: NotSet,
        member_user_id: Set(input.member_user_id),
        required_caregiving_type: Set(input.required_caregiving_type),
        other_requirements: Set(input.other_requirements),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(model.insert(db).await?)
}

pub async fn list_jobs(db: &DatabaseConnection) -> AppResult<Vec<job::Model>> {
    Ok(job::Entity::find()
        .order_by_asc(job::Column::JobId)
        .all(db)
        .await?)
}

pub async fn list_jobs_with_poster(db: &DatabaseConnection) -> AppResult<Vec<JobRow>> {
    Ok(job::Entity::find()
        .join(JoinType::InnerJoin, job::Relation::Member.def())
        .join(JoinType::InnerJoin, member::Relation::User.def())
        .select_only()
        .column(job::Column::JobId)
        .column(job::Column::MemberUserId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(job::Column::RequiredCaregivingType)
        .column(job::Column::OtherRequirements)
        .column(job::Column::CreatedAt)
        .order_by_asc(job::Column::JobId)
        .into_model::<JobRow>()
        .all(db)
        .await?)
}

pub async fn get_job(db: &DatabaseConnection, job_id: i32) -> AppResult<Option<job::Model>> {
    Ok(job::Entity::find_by_id(job_id).one(db).await?)
}

pub async fn update_job(
    db: &DatabaseConnection,
    job_id: i32,
    changes: JobChanges,
) -> AppResult<job::Model> {
    let mut model = job::Entity::find_by_id(job_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("job"))?
        .into_active_model();

    if let Some(required_caregiving_type) = changes.required_caregiving_type {
        model.required_caregiving_type = Set(required_caregiving_type);
    }
    if let Some(other_requirements) = changes.other_requirements {
        model.other_requirements = Set(Some(other_requirements));
    }
    model.updated_at = Set(Utc::now().naive_utc());

    Ok(model.update(db).await?)
}

/// Remove a job and its applications.
pub async fn delete_job(db: &DatabaseConnection, job_id: i32) -> AppResult<()> {
    if job::Entity::find_by_id(job_id).one(db).await?.is_none() {
        return Err(AppError::not_found("job"));
    }

    let txn = db.begin().await?;

    job_application::Entity::delete_many()
        .filter(job_application::Column::JobId.eq(job_id))
        .exec(&txn)
        .await?;
    job::Entity::delete_by_id(job_id).exec(&txn).await?;

    txn.commit().await?;

    Ok(())
}
