/// Shared helpers for integration tests. Every test gets its own
/// in-memory sqlite database with the real migrations applied; the pool is
/// pinned to a single connection so the database outlives checkouts.
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use carelink_rs::crud;
use carelink_rs::entities::appointment::AppointmentStatus;

pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory sqlite");
    Migrator::up(&db, None).await.expect("Migrations failed");
    db
}

pub async fn seed_user(
    db: &DatabaseConnection,
    email: &str,
    given_name: &str,
    surname: &str,
    city: &str,
) -> i32 {
    crud::user::create_user(
        db,
        crud::user::NewUser {
            email: email.to_string(),
            given_name: given_name.to_string(),
            surname: surname.to_string(),
            city: city.to_string(),
            phone_number: "+77001112233".to_string(),
            profile_description: None,
            password: "secret".to_string(),
        },
    )
    .await
    .expect("Failed to create user")
    .user_id
}

pub async fn seed_caregiver(
    db: &DatabaseConnection,
    user_id: i32,
    caregiving_type: &str,
    hourly_rate: f64,
) -> i32 {
    crud::caregiver::create_caregiver(
        db,
        crud::caregiver::NewCaregiver {
            caregiver_user_id: user_id,
            photo: None,
            gender: "female".to_string(),
            caregiving_type: caregiving_type.to_string(),
            hourly_rate,
        },
    )
    .await
    .expect("Failed to create caregiver")
    .caregiver_user_id
}

pub async fn seed_member(db: &DatabaseConnection, user_id: i32, house_rules: Option<&str>) -> i32 {
    crud::member::create_member(
        db,
        crud::member::NewMember {
            member_user_id: user_id,
            house_rules: house_rules.map(str::to_string),
            dependent_description: None,
        },
    )
    .await
    .expect("Failed to create member")
    .member_user_id
}

pub async fn seed_address(db: &DatabaseConnection, member_user_id: i32, street: &str, town: &str) {
    crud::address::create_address(
        db,
        crud::address::NewAddress {
            member_user_id,
            house_number: "12".to_string(),
            street: street.to_string(),
            town: town.to_string(),
        },
    )
    .await
    .expect("Failed to create address");
}

pub async fn seed_job(
    db: &DatabaseConnection,
    member_user_id: i32,
    required_caregiving_type: &str,
    other_requirements: Option<&str>,
) -> i32 {
    crud::job::create_job(
        db,
        crud::job::NewJob {
            member_user_id,
            required_caregiving_type: required_caregiving_type.to_string(),
            other_requirements: other_requirements.map(str::to_string),
        },
    )
    .await
    .expect("Failed to create job")
    .job_id
}

pub async fn seed_application(db: &DatabaseConnection, caregiver_user_id: i32, job_id: i32) -> i32 {
    crud::job_application::create_application(
        db,
        crud::job_application::NewJobApplication {
            caregiver_user_id,
            job_id,
            date_applied: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        },
    )
    .await
    .expect("Failed to create application")
    .application_id
}

pub async fn seed_appointment(
    db: &DatabaseConnection,
    caregiver_user_id: i32,
    member_user_id: i32,
    work_hours: f64,
    status: AppointmentStatus,
) -> i32 {
    crud::appointment::create_appointment(
        db,
        crud::appointment::NewAppointment {
            caregiver_user_id,
            member_user_id,
            appointment_date: NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            appointment_time: "09:00".to_string(),
            work_hours,
            status,
        },
    )
    .await
    .expect("Failed to create appointment")
    .appointment_id
}
