use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Caregiver profile, keyed by the user it extends.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "caregivers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub caregiver_user_id: i32,
    pub photo: Option<String>,
    pub gender: String,
    pub caregiving_type: String,
    pub hourly_rate: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CaregiverUserId",
        to = "super::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(has_many = "super::job_application::Entity")]
    JobApplication,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::job_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobApplication.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
