use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};

/// Lifecycle states of an appointment. Confirmed and completed
/// appointments count as accepted for reporting purposes.
#[derive(
    Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "declined")]
    Declined,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl AppointmentStatus {
    pub const ACCEPTED: [AppointmentStatus; 2] = [Self::Confirmed, Self::Completed];
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Declined => write!(f, "declined"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub appointment_id: i32,
    pub caregiver_user_id: i32,
    pub member_user_id: i32,
    pub appointment_date: Date,
    pub appointment_time: String,
    pub work_hours: f64,
    pub status: AppointmentStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::caregiver::Entity",
        from = "Column::CaregiverUserId",
        to = "super::caregiver::Column::CaregiverUserId",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Caregiver,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberUserId",
        to = "super::member::Column::MemberUserId",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Member,
}

impl Related<super::caregiver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Caregiver.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
