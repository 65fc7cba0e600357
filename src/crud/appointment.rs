use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, IntoActiveModel, QueryOrder, Set, Statement,
};
use serde::{Deserialize, Serialize};

use crate::entities::appointment::{self, AppointmentStatus};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NewAppointment {
    pub caregiver_user_id: i32,
    pub member_user_id: i32,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub work_hours: f64,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentChanges {
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<String>,
    pub work_hours: Option<f64>,
    pub status: Option<AppointmentStatus>,
}

/// Appointment with both parties resolved to full names. The `users` table
/// enters the join twice, so this one drops to SQL.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct AppointmentRow {
    pub appointment_id: i32,
    pub caregiver_name: String,
    pub member_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub work_hours: f64,
    pub status: String,
}

pub async fn create_appointment(
    db: &DatabaseConnection,
    input: NewAppointment,
) -> AppResult<appointment::Model> {
    let now = Utc::now().naive_utc();
    let model = appointment::ActiveModel {
        appointment_id: NotSet,
        caregiver_user_id: Set(input.caregiver_user_id),
        member_user_id: Set(input.member_user_id),
        appointment_date: Set(input.appointment_date),
        appointment_time: Set(input.appointment_time),
        work_hours: Set(input.work_hours),
        status: Set(input.status),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(model.insert(db).await?)
}

pub async fn list_appointments(db: &DatabaseConnection) -> AppResult<Vec<appointment::Model>> {
    Ok(appointment::Entity::find()
        .order_by_asc(appointment::Column::AppointmentId)
        .all(db)
        .await?)
}

pub async fn list_appointments_with_names(
    db: &DatabaseConnection,
) -> AppResult<Vec<AppointmentRow>> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r#"
        SELECT a.appointment_id,
               uc.given_name || ' ' || uc.surname AS caregiver_name,
               um.given_name || ' ' || um.surname AS member_name,
               a.appointment_date, a.appointment_time, a.work_hours, a.status
        FROM appointments a
        JOIN caregivers c ON a.caregiver_user_id = c.caregiver_user_id
        JOIN users uc ON c.caregiver_user_id = uc.user_id
        JOIN members m ON a.member_user_id = m.member_user_id
        JOIN users um ON m.member_user_id = um.user_id
        ORDER BY a.appointment_id
        "#,
        [],
    );

    Ok(AppointmentRow::find_by_statement(stmt).all(db).await?)
}

pub async fn get_appointment(
    db: &DatabaseConnection,
    appointment_id: i32,
) -> AppResult<Option<appointment::Model>> {
    Ok(appointment::Entity::find_by_id(appointment_id)
        .one(db)
        .await?)
}

pub async fn update_appointment(
    db: &DatabaseConnection,
    appointment_id: i32,
    changes: AppointmentChanges,
) -> AppResult<appointment::Model> {
    let mut model = appointment::Entity::find_by_id(appointment_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("appointment"))?
        .into_active_model();

    if let Some(appointment_date) = changes.appointment_date {
        model.appointment_date = Set(appointment_date);
    }
    if let Some(appointment_time) = changes.appointment_time {
        model.appointment_time = Set(appointment_time);
    }
    if let Some(work_hours) = changes.work_hours {
        model.work_hours = Set(work_hours);
    }
    if let Some(status) = changes.status {
        model.status = Set(status);
    }
    model.updated_at = Set(Utc::now().naive_utc());

    Ok(model.update(db).await?)
}

pub async fn delete_appointment(db: &DatabaseConnection, appointment_id: i32) -> AppResult<()> {
    let result = appointment::Entity::delete_by_id(appointment_id)
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("appointment"));
    }

    Ok(())
}
