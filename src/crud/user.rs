use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;

use crate::entities::{address, appointment, caregiver, job, job_application, member, user};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub phone_number: String,
    #[serde(default)]
    pub profile_description: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserChanges {
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub profile_description: Option<String>,
}

pub async fn create_user(db: &DatabaseConnection, input: NewUser) -> AppResult<user::Model> {
    let now = Utc::now().naive_utc();
    let model = user::ActiveModel {
        user_id: NotSet,
        email: Set(input.email),
        given_name: Set(input.given_name),
        surname: Set(input.surname),
        city: Set(input.city),
        phone_number: Set(input.phone_number),
        profile_description: Set(input.profile_description),
        password: Set(input.password),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(model.insert(db).await?)
}

pub async fn list_users(db: &DatabaseConnection) -> AppResult<Vec<user::Model>> {
    Ok(user::Entity::find()
        .order_by_asc(user::Column::UserId)
        .all(db)
        .await?)
}

pub async fn get_user(db: &DatabaseConnection, user_id: i32) -> AppResult<Option<user::Model>> {
    Ok(user::Entity::find_by_id(user_id).one(db).await?)
}

pub async fn update_user(
    db: &DatabaseConnection,
    user_id: i32,
    changes: UserChanges,
) -> AppResult<user::Model> {
    let mut model = user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("user"))?
        .into_active_model();

    if let Some(email) = changes.email {
        model.email = Set(email);
    }
    if let Some(given_name) = changes.given_name {
        model.given_name = Set(given_name);
    }
    if let Some(surname) = changes.surname {
        model.surname = Set(surname);
    }
    if let Some(city) = changes.city {
        model.city = Set(city);
    }
    if let Some(phone_number) = changes.phone_number {
        model.phone_number = Set(phone_number);
    }
    if let Some(profile_description) = changes.profile_description {
        model.profile_description = Set(Some(profile_description));
    }
    model.updated_at = Set(Utc::now().naive_utc());

    Ok(model.update(db).await?)
}

/// Remove a user together with both of its role extensions and everything
/// hanging off them. Rolls back as a whole if any step fails.
pub async fn delete_user(db: &DatabaseConnection, user_id: i32) -> AppResult<()> {
    if user::Entity::find_by_id(user_id).one(db).await?.is_none() {
        return Err(AppError::not_found("user"));
    }

    let txn = db.begin().await?;

    // Caregiver side: applications and appointments reference the profile.
    if caregiver::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .is_some()
    {
        job_application::Entity::delete_many()
            .filter(job_application::Column::CaregiverUserId.eq(user_id))
            .exec(&txn)
            .await?;
        appointment::Entity::delete_many()
            .filter(appointment::Column::CaregiverUserId.eq(user_id))
            .exec(&txn)
            .await?;
        caregiver::Entity::delete_by_id(user_id).exec(&txn).await?;
    }

    // Member side: appointments, posted jobs (and their applications), and
    // the address all reference the profile.
    if member::Entity::find_by_id(user_id)
        .one(&txn)
        .await?
        .is_some()
    {
        appointment::Entity::delete_many()
            .filter(appointment::Column::MemberUserId.eq(user_id))
            .exec(&txn)
            .await?;

        let job_ids: Vec<i32> = job::Entity::find()
            .filter(job::Column::MemberUserId.eq(user_id))
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
            .filter(job::Column::MemberUserId.eq(user_id))
            .exec(&txn)
            .await?;

        address::Entity::delete_many()
            .filter(address::Column::MemberUserId.eq(user_id))
            .exec(&txn)
            .await?;
        member::Entity::delete_by_id(user_id).exec(&txn).await?;
    }

    user::Entity::delete_by_id(user_id).exec(&txn).await?;
    txn.commit().await?;

    Ok(())
}
