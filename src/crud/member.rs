use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::entities::{address, appointment, job, job_application, member, user};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NewMember {
    pub member_user_id: i32,
    #[serde(default)]
    pub house_rules: Option<String>,
    #[serde(default)]
    pub dependent_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberChanges {
    pub house_rules: Option<String>,
    pub dependent_description: Option<String>,
}

/// Member joined with the user profile it extends.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct MemberRow {
    pub member_user_id: i32,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub house_rules: Option<String>,
    pub dependent_description: Option<String>,
}

pub async fn create_member(db: &DatabaseConnection, input: NewMember) -> AppResult<member::Model> {
    let now = Utc::now().naive_utc();
    let model = member::ActiveModel {
        member_user_id: Set(input.member_user_id),
        house_rules: Set(input.house_rules),
        dependent_description: Set(input.dependent_description),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(model.insert(db).await?)
}

pub async fn list_members(db: &DatabaseConnection) -> AppResult<Vec<member::Model>> {
    Ok(member::Entity::find()
        .order_by_asc(member::Column::MemberUserId)
        .all(db)
        .await?)
}

pub async fn list_members_with_profile(db: &DatabaseConnection) -> AppResult<Vec<MemberRow>> {
    Ok(member::Entity::find()
        .join(JoinType::InnerJoin, member::Relation::User.def())
        .select_only()
        .column(member::Column::MemberUserId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(user::Column::City)
        .column(member::Column::HouseRules)
        .column(member::Column::DependentDescription)
        .order_by_asc(member::Column::MemberUserId)
        .into_model::<MemberRow>()
        .all(db)
        .await?)
}

pub async fn get_member(
    db: &DatabaseConnection,
    member_user_id: i32,
) -> AppResult<Option<member::Model>> {
    Ok(member::Entity::find_by_id(member_user_id).one(db).await?)
}

pub async fn update_member(
    db: &DatabaseConnection,
    member_user_id: i32,
    changes: MemberChanges,
) -> AppResult<member::Model> {
    let mut model = member::Entity::find_by_id(member_user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("member"))?
        .into_active_model();

    if let Some(house_rules) = changes.house_rules {
        model.house_rules = Set(Some(house_rules));
    }
    if let Some(dependent_description) = changes.dependent_description {
        model.dependent_description = Set(Some(dependent_description));
    }
    model.updated_at = Set(Utc::now().naive_utc());

    Ok(model.update(db).await?)
}

/// Remove a member along with its appointments, posted jobs (and those
/// jobs' applications) and address.
pub async fn delete_member(db: &DatabaseConnection, member_user_id: i32) -> AppResult<()> {
    if member::Entity::find_by_id(member_user_id)
        .one(db)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("member"));
    }

    let txn = db.begin().await?;

    appointment::Entity::delete_many()
        .filter(appointment::Column::MemberUserId.eq(member_user_id))
        .exec(&txn)
        .await?;

    let job_ids: Vec<i32> = job::Entity::find()
        .filter(job::Column::MemberUserId.eq(member_user_id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|j| j.job_id)
        .collect();
    if !job_ids.is_empty() {
        job_application::Entity::delete_many()
            .filter(job_application::Column::JobId.is_in(job_ids))
            .exec(&txn)
            .await?;
    }
    job::Entity::delete_many()
        .filter(job::Column::MemberUserId.eq(member_user_id))
        .exec(&txn)
        .await?;

    address::Entity::delete_many()
        .filter(address::Column::MemberUserId.eq(member_user_id))
        .exec(&txn)
        .await?;
    member::Entity::delete_by_id(member_user_id)
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(())
}
