use sea_orm_migration::prelude::*;

// Define table names
#[derive(DeriveIden)]
pub enum Users {
    Table,
    UserId,
    Email,
    GivenName,
    Surname,
    City,
    PhoneNumber,
    ProfileDescription,
    Password,
}

#[derive(DeriveIden)]
pub enum Caregivers {
    Table,
    CaregiverUserId,
    Photo,
    Gender,
    CaregivingType,
    HourlyRate,
}

#[derive(DeriveIden)]
pub enum Members {
    Table,
    MemberUserId,
    HouseRules,
    DependentDescription,
}

#[derive(DeriveIden)]
pub enum Addresses {
    Table,
    MemberUserId,
    HouseNumber,
    Street,
    Town,
}

#[derive(DeriveIden)]
pub enum Jobs {
    Table,
    JobId,
    MemberUserId,
    RequiredCaregivingType,
    OtherRequirements,
}

#[derive(DeriveIden)]
pub enum JobApplications {
    Table,
    ApplicationId,
    CaregiverUserId,
    JobId,
    DateApplied,
}

#[derive(DeriveIden)]
pub enum Appointments {
    Table,
    AppointmentId,
    CaregiverUserId,
    MemberUserId,
    AppointmentDate,
    AppointmentTime,
    WorkHours,
    Status,
}
