mod common;

use carelink_rs::entities::appointment::AppointmentStatus;
use carelink_rs::reports;
use sea_orm::DatabaseConnection;

use common::*;

struct Scenario {
    alice: i32,
    bob: i32,
    carol: i32,
    job_elderly: i32,
    job_babysitter: i32,
}

/// Two caregivers, two members, two jobs, two applications and three
/// appointments (one pending, so excluded from accepted-only reports).
async fn seed_scenario(db: &DatabaseConnection) -> Scenario {
    let alice_user = seed_user(db, "alice@example.com", "Alice", "Smith", "Astana").await;
    let alice = seed_caregiver(db, alice_user, "babysitter", 20.0).await;

    let bob_user = seed_user(db, "bob@example.com", "Bob", "Jones", "Almaty").await;
    let bob = seed_caregiver(db, bob_user, "elderly_care", 8.0).await;

    let carol_user = seed_user(db, "carol@example.com", "Carol", "White", "Astana").await;
    let carol = seed_member(db, carol_user, Some("No pets in the house")).await;

    let dave_user = seed_user(db, "dave@example.com", "Dave", "Black", "Almaty").await;
    let dave = seed_member(db, dave_user, None).await;

    let job_elderly = seed_job(
        db,
        carol,
        "elderly_care",
        Some("Must be soft-spoken and patient"),
    )
    .await;
    let job_babysitter = seed_job(db, dave, "babysitter", None).await;

    seed_application(db, alice, job_elderly).await;
    seed_application(db, bob, job_elderly).await;

    seed_appointment(db, alice, carol, 10.0, AppointmentStatus::Completed).await;
    seed_appointment(db, alice, carol, 5.0, AppointmentStatus::Pending).await;
    seed_appointment(db, bob, dave, 2.0, AppointmentStatus::Confirmed).await;

    Scenario {
        alice,
        bob,
        carol: carol_user,
        job_elderly,
        job_babysitter,
    }
}

#[tokio::test]
async fn accepted_appointments_excludes_pending() {
    let db = setup_db().await;
    seed_scenario(&db).await;

    let accepted = reports::accepted_appointments(&db).await.unwrap();

    assert_eq!(accepted.len(), 2);
    assert_eq!(accepted[0].caregiver_name, "Alice Smith");
    assert_eq!(accepted[0].member_name, "Carol White");
    assert_eq!(accepted[0].status, "completed");
    assert_eq!(accepted[1].caregiver_name, "Bob Jones");
    assert_eq!(accepted[1].status, "confirmed");
}

#[tokio::test]
async fn keyword_search_finds_matching_job_requirements() {
    let db = setup_db().await;
    let scenario = seed_scenario(&db).await;

    let jobs = reports::jobs_matching_requirements(&db, "soft-spoken")
        .await
        .unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_id, scenario.job_elderly);

    let none = reports::jobs_matching_requirements(&db, "night shifts")
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn members_seeking_care_matches_city_type_and_rules() {
    let db = setup_db().await;
    let scenario = seed_scenario(&db).await;

    let seeking = reports::members_seeking_care(&db, "Astana", "elderly_care", "No pets")
        .await
        .unwrap();

    assert_eq!(seeking.len(), 1);
    assert_eq!(seeking[0].user_id, scenario.carol);
    assert_eq!(seeking[0].given_name, "Carol");

    // A different city yields nothing.
    let elsewhere = reports::members_seeking_care(&db, "Karaganda", "elderly_care", "No pets")
        .await
        .unwrap();
    assert!(elsewhere.is_empty());
}

#[tokio::test]
async fn applicants_are_counted_per_job_including_zero() {
    let db = setup_db().await;
    let scenario = seed_scenario(&db).await;

    let rows = reports::applicants_per_job(&db).await.unwrap();

    assert_eq!(rows.len(), 2);
    // Busiest job first.
    assert_eq!(rows[0].job_id, scenario.job_elderly);
    assert_eq!(rows[0].applicants, 2);
    assert_eq!(rows[1].job_id, scenario.job_babysitter);
    assert_eq!(rows[1].applicants, 0);
}

#[tokio::test]
async fn accepted_hours_are_summed_per_caregiver() {
    let db = setup_db().await;
    let scenario = seed_scenario(&db).await;

    let rows = reports::caregiver_hours(&db).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].caregiver_user_id, scenario.alice);
    assert!((rows[0].total_hours - 10.0).abs() < 1e-9);
    assert_eq!(rows[1].caregiver_user_id, scenario.bob);
    assert!((rows[1].total_hours - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn average_pay_is_rate_times_hours_over_accepted_appointments() {
    let db = setup_db().await;
    let scenario = seed_scenario(&db).await;

    let rows = reports::caregiver_average_pay(&db).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].caregiver_user_id, scenario.alice);
    assert!((rows[0].avg_pay - 200.0).abs() < 1e-9);
    assert_eq!(rows[1].caregiver_user_id, scenario.bob);
    assert!((rows[1].avg_pay - 16.0).abs() < 1e-9);
}

#[tokio::test]
async fn only_above_average_earners_are_reported() {
    let db = setup_db().await;
    let scenario = seed_scenario(&db).await;

    // Overall average per accepted appointment is (200 + 16) / 2 = 108;
    // Alice's 200 clears it, Bob's 16 does not.
    let rows = reports::caregivers_above_average_earnings(&db).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].caregiver_user_id, scenario.alice);
    assert_eq!(rows[0].name, "Alice Smith");
    assert!((rows[0].total_earnings - 200.0).abs() < 1e-9);
}

#[tokio::test]
async fn appointment_costs_derive_rate_times_hours() {
    let db = setup_db().await;
    seed_scenario(&db).await;

    let costs = reports::appointment_costs(&db).await.unwrap();

    assert_eq!(costs.len(), 2);
    assert!((costs[0].total_cost - 200.0).abs() < 1e-9);
    assert!((costs[1].total_cost - 16.0).abs() < 1e-9);

    let grand_total: f64 = costs.iter().map(|c| c.total_cost).sum();
    assert!((grand_total - 216.0).abs() < 1e-9);
}

#[tokio::test]
async fn application_overview_joins_poster_and_applicant() {
    let db = setup_db().await;
    let scenario = seed_scenario(&db).await;

    let overview = reports::job_application_overview(&db).await.unwrap();

    assert_eq!(overview.len(), 2);
    assert!(overview.iter().all(|row| row.job_id == scenario.job_elderly));
    assert!(overview.iter().all(|row| row.posted_by == "Carol White"));

    let applicants: Vec<&str> = overview.iter().map(|row| row.applicant.as_str()).collect();
    assert!(applicants.contains(&"Alice Smith"));
    assert!(applicants.contains(&"Bob Jones"));
    assert_eq!(overview[0].caregiver_user_id, scenario.alice);
    assert_eq!(overview[1].caregiver_user_id, scenario.bob);
}
