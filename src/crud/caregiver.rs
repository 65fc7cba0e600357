use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::entities::{appointment, caregiver, job_application, user};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NewCaregiver {
    pub caregiver_user_id: i32,
    #[serde(default)]
    pub photo: Option<String>,
    pub gender: String,
    pub caregiving_type: String,
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaregiverChanges {
    pub photo: Option<String>,
    pub gender: Option<String>,
    pub caregiving_type: Option<String>,
    pub hourly_rate: Option<f64>,
}

/// Caregiver joined with the user profile it extends, as shown in the
/// directory listing.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct CaregiverDirectoryRow {
    pub caregiver_user_id: i32,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub gender: String,
    pub caregiving_type: String,
    pub hourly_rate: f64,
    pub photo: Option<String>,
}

pub async fn create_caregiver(
    db: &DatabaseConnection,
    input: NewCaregiver,
) -> AppResult<caregiver::Model> {
    let now = Utc::now().naive_utc();
    let model = caregiver::ActiveModel {
        caregiver_user_id: Set(input.caregiver_user_id),
        photo: Set(input.photo),
        gender: Set(input.gender),
        caregiving_type: Set(input.caregiving_type),
        hourly_rate: Set(input.hourly_rate),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(model.insert(db).await?)
}

pub async fn list_caregivers(db: &DatabaseConnection) -> AppResult<Vec<caregiver::Model>> {
    Ok(caregiver::Entity::find()
        .order_by_asc(caregiver::Column::CaregiverUserId)
        .all(db)
        .await?)
}

pub async fn get_caregiver(
    db: &DatabaseConnection,
    caregiver_user_id: i32,
) -> AppResult<Option<caregiver::Model>> {
    Ok(caregiver::Entity::find_by_id(caregiver_user_id)
        .one(db)
        .await?)
}

/// Directory of caregivers with their user profile, optionally narrowed by
/// caregiving type and/or the caregiver's city.
pub async fn search_caregivers(
    db: &DatabaseConnection,
    caregiving_type: Option<&str>,
    city: Option<&str>,
) -> AppResult<Vec<CaregiverDirectoryRow>> {
    let mut query = caregiver::Entity::find()
        .join(JoinType::InnerJoin, caregiver::Relation::User.def())
        .select_only()
        .column(caregiver::Column::CaregiverUserId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(user::Column::City)
        .column(caregiver::Column::Gender)
        .column(caregiver::Column::CaregivingType)
        .column(caregiver::Column::HourlyRate)
        .column(caregiver::Column::Photo)
        .order_by_asc(caregiver::Column::CaregiverUserId);

    if let Some(kind) = caregiving_type {
        query = query.filter(caregiver::Column::CaregivingType.eq(kind));
    }
    if let Some(city) = city {
        query = query.filter(user::Column::City.eq(city));
    }

    Ok(query.into_model::<CaregiverDirectoryRow>().all(db).await?)
}

pub async fn update_caregiver(
    db: &DatabaseConnection,
    caregiver_user_id: i32,
    changes: CaregiverChanges,
) -> AppResult<caregiver::Model> {
    let mut model = caregiver::Entity::find_by_id(caregiver_user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("caregiver"))?
        .into_active_model();

    if let Some(photo) = changes.photo {
        model.photo = Set(Some(photo));
    }
    if let Some(gender) = changes.gender {
        model.gender = Set(gender);
    }
    if let Some(caregiving_type) = changes.caregiving_type {
        model.caregiving_type = Set(caregiving_type);
    }
    if let Some(hourly_rate) = changes.hourly_rate {
        model.hourly_rate = Set(hourly_rate);
    }
    model.updated_at = Set(Utc::now().naive_utc());

    Ok(model.update(db).await?)
}

/// Remove a caregiver along with its job applications and appointments.
pub async fn delete_caregiver(db: &DatabaseConnection, caregiver_user_id: i32) -> AppResult<()> {
    if caregiver::Entity::find_by_id(caregiver_user_id)
        .one(db)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("caregiver"));
    }

    let txn = db.begin().await?;

    job_application::Entity::delete_many()
        .filter(job_application::Column::CaregiverUserId.eq(caregiver_user_id))
        .exec(&txn)
        .await?;
    appointment::Entity::delete_many()
        .filter(appointment::Column::CaregiverUserId.eq(caregiver_user_id))
        .exec(&txn)
        .await?;
    caregiver::Entity::delete_by_id(caregiver_user_id)
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(())
}

/// Bulk rate adjustment: rates under 10 gain a flat 0.30, everything else
/// is scaled by 1.10. Returns the number of caregivers touched.
pub async fn apply_rate_commission(db: &DatabaseConnection) -> AppResult<u64> {
    let txn = db.begin().await?;

    let caregivers = caregiver::Entity::find().all(&txn).await?;
    let touched = caregivers.len() as u64;

    for row in caregivers {
        let new_rate = if row.hourly_rate < 10.0 {
            row.hourly_rate + 0.30
        } else {
            row.hourly_rate * 1.10
        };
        let mut model = row.into_active_model();
        model.hourly_rate = Set(new_rate);
        model.updated_at = Set(Utc::now().naive_utc());
        model.update(&txn).await?;
    }

    txn.commit().await?;

    Ok(touched)
}
