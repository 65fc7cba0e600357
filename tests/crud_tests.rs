mod common;

use carelink_rs::crud;
use carelink_rs::entities::appointment::AppointmentStatus;
use carelink_rs::entities::prelude::{Address, Appointment, Job, JobApplication};
use carelink_rs::error::AppError;
use sea_orm::EntityTrait;

use common::*;

#[tokio::test]
async fn user_create_then_read_returns_same_fields() {
    let db = setup_db().await;

    let created = crud::user::create_user(
        &db,
        crud::user::NewUser {
            email: "arman@example.com".to_string(),
            given_name: "Arman".to_string(),
            surname: "Armanov".to_string(),
            city: "Astana".to_string(),
            phone_number: "+77771234567".to_string(),
            profile_description: Some("Experienced parent".to_string()),
            password: "secret".to_string(),
        },
    )
    .await
    .unwrap();

    let fetched = crud::user::get_user(&db, created.user_id)
        .await
        .unwrap()
        .expect("user should exist");

    assert_eq!(fetched.email, "arman@example.com");
    assert_eq!(fetched.given_name, "Arman");
    assert_eq!(fetched.surname, "Armanov");
    assert_eq!(fetched.city, "Astana");
    assert_eq!(
        fetched.profile_description.as_deref(),
        Some("Experienced parent")
    );
}

#[tokio::test]
async fn user_partial_update_leaves_other_fields_untouched() {
    let db = setup_db().await;
    let user_id = seed_user(&db, "amina@example.com", "Amina", "Aminova", "Almaty").await;

    let updated = crud::user::update_user(
        &db,
        user_id,
        crud::user::UserChanges {
            phone_number: Some("+77773414141".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.phone_number, "+77773414141");
    assert_eq!(updated.email, "amina@example.com");
    assert_eq!(updated.given_name, "Amina");
    assert_eq!(updated.city, "Almaty");
}

#[tokio::test]
async fn updating_missing_user_reports_not_found() {
    let db = setup_db().await;

    let err = crud::user::update_user(&db, 4040, crud::user::UserChanges::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn deleted_user_is_gone() {
    let db = setup_db().await;
    let user_id = seed_user(&db, "gone@example.com", "Gone", "Soon", "Astana").await;

    crud::user::delete_user(&db, user_id).await.unwrap();

    assert!(crud::user::get_user(&db, user_id).await.unwrap().is_none());
    assert!(matches!(
        crud::user::delete_user(&db, user_id).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[tokio::test]
async fn deleting_caregiver_removes_applications_and_appointments() {
    let db = setup_db().await;

    let cg_user = seed_user(&db, "cg@example.com", "Aisha", "Bekova", "Astana").await;
    let caregiver = seed_caregiver(&db, cg_user, "babysitter", 12.0).await;

    let m_user = seed_user(&db, "m@example.com", "Dana", "Serikova", "Astana").await;
    let member = seed_member(&db, m_user, None).await;

    let job = seed_job(&db, member, "babysitter", None).await;
    seed_application(&db, caregiver, job).await;
    seed_appointment(&db, caregiver, member, 4.0, AppointmentStatus::Confirmed).await;

    crud::caregiver::delete_caregiver(&db, caregiver).await.unwrap();

    assert!(crud::caregiver::get_caregiver(&db, caregiver)
        .await
        .unwrap()
        .is_none());
    assert_eq!(JobApplication::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(Appointment::find().all(&db).await.unwrap().len(), 0);
    // The job and both users survive.
    assert!(crud::job::get_job(&db, job).await.unwrap().is_some());
    assert!(crud::user::get_user(&db, cg_user).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_member_removes_jobs_applications_and_address() {
    let db = setup_db().await;

    let cg_user = seed_user(&db, "cg2@example.com", "Aigerim", "Dauletova", "Astana").await;
    let caregiver = seed_caregiver(&db, cg_user, "elderly_care", 9.0).await;

    let m_user = seed_user(&db, "m2@example.com", "Bolat", "Bolatov", "Astana").await;
    let member = seed_member(&db, m_user, Some("No pets")).await;
    seed_address(&db, member, "Kabanbay Batyr", "Astana").await;

    let job = seed_job(&db, member, "elderly_care", None).await;
    seed_application(&db, caregiver, job).await;
    seed_appointment(&db, caregiver, member, 3.0, AppointmentStatus::Pending).await;

    crud::member::delete_member(&db, member).await.unwrap();

    assert!(crud::member::get_member(&db, member).await.unwrap().is_none());
    assert_eq!(Job::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(JobApplication::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(Address::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(Appointment::find().all(&db).await.unwrap().len(), 0);
    // The caregiver side is untouched.
    assert!(crud::caregiver::get_caregiver(&db, caregiver)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn deleting_job_removes_its_applications_only() {
    let db = setup_db().await;

    let cg_user = seed_user(&db, "cg3@example.com", "Saule", "Omarova", "Almaty").await;
    let caregiver = seed_caregiver(&db, cg_user, "babysitter", 11.0).await;

    let m_user = seed_user(&db, "m3@example.com", "Nurlan", "Nurlanov", "Almaty").await;
    let member = seed_member(&db, m_user, None).await;

    let job_a = seed_job(&db, member, "babysitter", None).await;
    let job_b = seed_job(&db, member, "playmate_for_children", None).await;
    seed_application(&db, caregiver, job_a).await;
    let kept = seed_application(&db, caregiver, job_b).await;

    crud::job::delete_job(&db, job_a).await.unwrap();

    assert!(crud::job::get_job(&db, job_a).await.unwrap().is_none());
    let remaining = JobApplication::find().all(&db).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].application_id, kept);
}

#[tokio::test]
async fn deleting_user_cascades_through_both_role_extensions() {
    let db = setup_db().await;

    // One person acting as caregiver, another as member.
    let cg_user = seed_user(&db, "cg4@example.com", "Madina", "Akhmetova", "Astana").await;
    let caregiver = seed_caregiver(&db, cg_user, "elderly_care", 15.0).await;

    let m_user = seed_user(&db, "m4@example.com", "Erlan", "Erlanov", "Astana").await;
    let member = seed_member(&db, m_user, Some("Quiet hours after 22:00")).await;
    seed_address(&db, member, "Turan Avenue", "Astana").await;

    let job = seed_job(&db, member, "elderly_care", None).await;
    seed_application(&db, caregiver, job).await;
    seed_appointment(&db, caregiver, member, 6.0, AppointmentStatus::Completed).await;

    // Deleting the member-side user takes the member profile, its job (and
    // the caregiver's application to it), address and appointments along.
    crud::user::delete_user(&db, m_user).await.unwrap();

    assert!(crud::user::get_user(&db, m_user).await.unwrap().is_none());
    assert!(crud::member::get_member(&db, member).await.unwrap().is_none());
    assert_eq!(Job::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(JobApplication::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(Address::find().all(&db).await.unwrap().len(), 0);
    assert_eq!(Appointment::find().all(&db).await.unwrap().len(), 0);

    // Deleting the caregiver-side user then takes the caregiver profile.
    crud::user::delete_user(&db, cg_user).await.unwrap();
    assert!(crud::caregiver::get_caregiver(&db, caregiver)
        .await
        .unwrap()
        .is_none());
    assert_eq!(crud::user::list_users(&db).await.unwrap().len(), 0);
}

#[tokio::test]
async fn appointment_status_update_roundtrip() {
    let db = setup_db().await;

    let cg_user = seed_user(&db, "cg5@example.com", "Zarina", "Kairatova", "Astana").await;
    let caregiver = seed_caregiver(&db, cg_user, "babysitter", 10.0).await;
    let m_user = seed_user(&db, "m5@example.com", "Asel", "Aselova", "Astana").await;
    let member = seed_member(&db, m_user, None).await;

    let id = seed_appointment(&db, caregiver, member, 2.5, AppointmentStatus::Pending).await;

    let updated = crud::appointment::update_appointment(
        &db,
        id,
        crud::appointment::AppointmentChanges {
            status: Some(AppointmentStatus::Confirmed),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.status, AppointmentStatus::Confirmed);
    assert_eq!(updated.work_hours, 2.5);

    let fetched = crud::appointment::get_appointment(&db, id)
        .await
        .unwrap()
        .expect("appointment should exist");
    assert_eq!(fetched.status, AppointmentStatus::Confirmed);
}

#[tokio::test]
async fn commission_adds_flat_amount_below_ten_and_scales_above() {
    let db = setup_db().await;

    let cheap_user = seed_user(&db, "cheap@example.com", "Aliya", "Tleuova", "Astana").await;
    let cheap = seed_caregiver(&db, cheap_user, "babysitter", 8.0).await;

    let pricey_user = seed_user(&db, "pricey@example.com", "Gulnara", "Sadykova", "Astana").await;
    let pricey = seed_caregiver(&db, pricey_user, "elderly_care", 20.0).await;

    let touched = crud::caregiver::apply_rate_commission(&db).await.unwrap();
    assert_eq!(touched, 2);

    let cheap_rate = crud::caregiver::get_caregiver(&db, cheap)
        .await
        .unwrap()
        .unwrap()
        .hourly_rate;
    let pricey_rate = crud::caregiver::get_caregiver(&db, pricey)
        .await
        .unwrap()
        .unwrap()
        .hourly_rate;

    assert!((cheap_rate - 8.3).abs() < 1e-9);
    assert!((pricey_rate - 22.0).abs() < 1e-9);
}
