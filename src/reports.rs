//! Fixed analytical queries behind the reports page. Single-path joins use
//! the query builder; the two shapes it does not express well (the `users`
//! table joined twice, a scalar subquery inside HAVING) drop to SQL.

use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Statement,
};
use serde::Serialize;

use crate::entities::appointment::AppointmentStatus;
use crate::entities::{appointment, caregiver, job, job_application, member, user};
use crate::error::AppResult;

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct AcceptedAppointment {
    pub appointment_id: i32,
    pub caregiver_name: String,
    pub member_name: String,
    pub status: String,
    pub appointment_date: NaiveDate,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct MemberSeekingCare {
    pub user_id: i32,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub house_rules: Option<String>,
    pub required_caregiving_type: String,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct ApplicantsPerJob {
    pub job_id: i32,
    pub given_name: String,
    pub surname: String,
    pub required_caregiving_type: String,
    pub applicants: i64,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct CaregiverHours {
    pub caregiver_user_id: i32,
    pub given_name: String,
    pub surname: String,
    pub caregiving_type: String,
    pub total_hours: f64,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct CaregiverAveragePay {
    pub caregiver_user_id: i32,
    pub given_name: String,
    pub surname: String,
    pub hourly_rate: f64,
    pub avg_pay: f64,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct AboveAverageEarner {
    pub caregiver_user_id: i32,
    pub name: String,
    pub hourly_rate: f64,
    pub total_earnings: f64,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct AppointmentCost {
    pub appointment_id: i32,
    pub given_name: String,
    pub surname: String,
    pub hourly_rate: f64,
    pub work_hours: f64,
    pub total_cost: f64,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct ApplicationOverview {
    pub application_id: i32,
    pub job_id: i32,
    pub required_caregiving_type: String,
    pub posted_by: String,
    pub caregiver_user_id: i32,
    pub applicant: String,
    pub caregiving_type: String,
    pub hourly_rate: f64,
    pub date_applied: NaiveDate,
}

/// Confirmed and completed appointments with both parties named.
pub async fn accepted_appointments(
    db: &DatabaseConnection,
) -> AppResult<Vec<AcceptedAppointment>> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r#"
        SELECT a.appointment_id,
               uc.given_name || ' ' || uc.surname AS caregiver_name,
               um.given_name || ' ' || um.surname AS member_name,
               a.status, a.appointment_date
        FROM appointments a
        JOIN caregivers c ON a.caregiver_user_id = c.caregiver_user_id
        JOIN users uc ON c.caregiver_user_id = uc.user_id
        JOIN members m ON a.member_user_id = m.member_user_id
        JOIN users um ON m.member_user_id = um.user_id
        WHERE a.status IN ('confirmed', 'completed')
        ORDER BY a.appointment_id
        "#,
        [],
    );

    Ok(AcceptedAppointment::find_by_statement(stmt).all(db).await?)
}

/// Jobs whose free-text requirements mention the given keyword.
pub async fn jobs_matching_requirements(
    db: &DatabaseConnection,
    keyword: &str,
) -> AppResult<Vec<job::Model>> {
    Ok(job::Entity::find()
        .filter(job::Column::OtherRequirements.contains(keyword))
        .order_by_asc(job::Column::JobId)
        .all(db)
        .await?)
}

/// Members in a city posting jobs of a given type whose house rules
/// mention a phrase.
pub async fn members_seeking_care(
    db: &DatabaseConnection,
    city: &str,
    caregiving_type: &str,
    rules_keyword: &str,
) -> AppResult<Vec<MemberSeekingCare>> {
    Ok(user::Entity::find()
        .join(JoinType::InnerJoin, user::Relation::Member.def())
        .join(JoinType::InnerJoin, member::Relation::Job.def())
        .filter(user::Column::City.eq(city))
        .filter(job::Column::RequiredCaregivingType.eq(caregiving_type))
        .filter(member::Column::HouseRules.contains(rules_keyword))
        .select_only()
        .column(user::Column::UserId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(user::Column::City)
        .column(member::Column::HouseRules)
        .column(job::Column::RequiredCaregivingType)
        .distinct()
        .into_model::<MemberSeekingCare>()
        .all(db)
        .await?)
}

/// Application counts per job, busiest first. Jobs without applicants
/// still appear with a count of zero.
pub async fn applicants_per_job(db: &DatabaseConnection) -> AppResult<Vec<ApplicantsPerJob>> {
    let applicant_count = Expr::col((
        job_application::Entity,
        job_application::Column::ApplicationId,
    ))
    .count();

    Ok(job::Entity::find()
        .join(JoinType::InnerJoin, job::Relation::Member.def())
        .join(JoinType::InnerJoin, member::Relation::User.def())
        .join(JoinType::LeftJoin, job::Relation::JobApplication.def())
        .select_only()
        .column(job::Column::JobId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(job::Column::RequiredCaregivingType)
        .column_as(applicant_count.clone(), "applicants")
        .group_by(job::Column::JobId)
        .group_by(user::Column::GivenName)
        .group_by(user::Column::Surname)
        .group_by(job::Column::RequiredCaregivingType)
        .order_by_desc(applicant_count)
        .into_model::<ApplicantsPerJob>()
        .all(db)
        .await?)
}

/// Total accepted work hours per caregiver, busiest first.
pub async fn caregiver_hours(db: &DatabaseConnection) -> AppResult<Vec<CaregiverHours>> {
    let hours_sum =
        Expr::col((appointment::Entity, appointment::Column::WorkHours)).sum();

    Ok(caregiver::Entity::find()
        .join(JoinType::InnerJoin, caregiver::Relation::User.def())
        .join(JoinType::InnerJoin, caregiver::Relation::Appointment.def())
        .filter(appointment::Column::Status.is_in(AppointmentStatus::ACCEPTED))
        .select_only()
        .column(caregiver::Column::CaregiverUserId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(caregiver::Column::CaregivingType)
        .column_as(hours_sum.clone(), "total_hours")
        .group_by(caregiver::Column::CaregiverUserId)
        .group_by(user::Column::GivenName)
        .group_by(user::Column::Surname)
        .group_by(caregiver::Column::CaregivingType)
        .order_by_desc(hours_sum)
        .into_model::<CaregiverHours>()
        .all(db)
        .await?)
}

/// Average pay per accepted appointment (rate x hours) per caregiver.
pub async fn caregiver_average_pay(
    db: &DatabaseConnection,
) -> AppResult<Vec<CaregiverAveragePay>> {
    let pay = Expr::col((caregiver::Entity, caregiver::Column::HourlyRate)).mul(Expr::col((
        appointment::Entity,
        appointment::Column::WorkHours,
    )));
    let avg_pay = SimpleExpr::from(Func::avg(pay));

    Ok(caregiver::Entity::find()
        .join(JoinType::InnerJoin, caregiver::Relation::User.def())
        .join(JoinType::InnerJoin, caregiver::Relation::Appointment.def())
        .filter(appointment::Column::Status.is_in(AppointmentStatus::ACCEPTED))
        .select_only()
        .column(caregiver::Column::CaregiverUserId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(caregiver::Column::HourlyRate)
        .column_as(avg_pay.clone(), "avg_pay")
        .group_by(caregiver::Column::CaregiverUserId)
        .group_by(user::Column::GivenName)
        .group_by(user::Column::Surname)
        .group_by(caregiver::Column::HourlyRate)
        .order_by_desc(avg_pay)
        .into_model::<CaregiverAveragePay>()
        .all(db)
        .await?)
}

/// Caregivers whose total accepted earnings exceed the overall average
/// per-appointment pay.
pub async fn caregivers_above_average_earnings(
    db: &DatabaseConnection,
) -> AppResult<Vec<AboveAverageEarner>> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r#"
        SELECT c.caregiver_user_id,
               u.given_name || ' ' || u.surname AS name,
               c.hourly_rate,
               SUM(c.hourly_rate * a.work_hours) AS total_earnings
        FROM caregivers c
        JOIN users u ON c.caregiver_user_id = u.user_id
        JOIN appointments a ON c.caregiver_user_id = a.caregiver_user_id
        WHERE a.status IN ('confirmed', 'completed')
        GROUP BY c.caregiver_user_id, u.given_name, u.surname, c.hourly_rate
        HAVING SUM(c.hourly_rate * a.work_hours) > (
            SELECT AVG(c2.hourly_rate * a2.work_hours)
            FROM caregivers c2
            JOIN appointments a2 ON c2.caregiver_user_id = a2.caregiver_user_id
            WHERE a2.status IN ('confirmed', 'completed')
        )
        ORDER BY total_earnings DESC
        "#,
        [],
    );

    Ok(AboveAverageEarner::find_by_statement(stmt).all(db).await?)
}

/// Derived total cost (rate x hours) per accepted appointment.
pub async fn appointment_costs(db: &DatabaseConnection) -> AppResult<Vec<AppointmentCost>> {
    let cost = Expr::col((caregiver::Entity, caregiver::Column::HourlyRate)).mul(Expr::col((
        appointment::Entity,
        appointment::Column::WorkHours,
    )));

    Ok(appointment::Entity::find()
        .join(JoinType::InnerJoin, appointment::Relation::Caregiver.def())
        .join(JoinType::InnerJoin, caregiver::Relation::User.def())
        .filter(appointment::Column::Status.is_in(AppointmentStatus::ACCEPTED))
        .select_only()
        .column(appointment::Column::AppointmentId)
        .column(user::Column::GivenName)
        .column(user::Column::Surname)
        .column(caregiver::Column::HourlyRate)
        .column(appointment::Column::WorkHours)
        .column_as(cost, "total_cost")
        .column(appointment::Column::Status)
        .order_by_asc(appointment::Column::AppointmentId)
        .into_model::<AppointmentCost>()
        .all(db)
        .await?)
}

/// Every application joined with the job, its poster and the applicant --
/// the application ledger view.
pub async fn job_application_overview(
    db: &DatabaseConnection,
) -> AppResult<Vec<ApplicationOverview>> {
    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r#"
        SELECT ja.application_id, ja.job_id, j.required_caregiving_type,
               um.given_name || ' ' || um.surname AS posted_by,
               ja.caregiver_user_id,
               uc.given_name || ' ' || uc.surname AS applicant,
               c.caregiving_type, c.hourly_rate, ja.date_applied
        FROM job_applications ja
        JOIN jobs j ON ja.job_id = j.job_id
        JOIN members m ON j.member_user_id = m.member_user_id
        JOIN users um ON m.member_user_id = um.user_id
        JOIN caregivers c ON ja.caregiver_user_id = c.caregiver_user_id
        JOIN users uc ON c.caregiver_user_id = uc.user_id
        ORDER BY ja.job_id, ja.date_applied, ja.application_id
        "#,
        [],
    );

    Ok(ApplicationOverview::find_by_statement(stmt).all(db).await?)
}
