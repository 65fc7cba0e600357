use sea_orm_migration::{prelude::*, schema::*};

use crate::iden::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Users Table
        let table = table_auto(Users::Table)
            .col(pk_auto(Users::UserId))
            .col(string_uniq(Users::Email))
            .col(string(Users::GivenName))
            .col(string(Users::Surname))
            .col(string(Users::City))
            .col(string(Users::PhoneNumber))
            .col(text_null(Users::ProfileDescription))
            .col(string(Users::Password))
            .to_owned();
        manager.create_table(table).await?;

        // Create Caregivers Table, keyed by the user it extends.
        // Deletes never cascade at the schema level; the data-access layer
        // removes dependents explicitly.
        let table = table_auto(Caregivers::Table)
            .col(integer(Caregivers::CaregiverUserId).primary_key())
            .col(string_null(Caregivers::Photo))
            .col(string(Caregivers::Gender))
            .col(string(Caregivers::CaregivingType))
            .col(double(Caregivers::HourlyRate))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_caregiver_user")
                    .from(Caregivers::Table, Caregivers::CaregiverUserId)
                    .to(Users::Table, Users::UserId)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Create Members Table
        let table = table_auto(Members::Table)
            .col(integer(Members::MemberUserId).primary_key())
            .col(text_null(Members::HouseRules))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_member_user")
                    .from(Members::Table, Members::MemberUserId)
                    .to(Users::Table, Users::UserId)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Create Addresses Table (one per member)
        let table = table_auto(Addresses::Table)
            .col(integer(Addresses::MemberUserId).primary_key())
            .col(string(Addresses::HouseNumber))
            .col(string(Addresses::Street))
            .col(string(Addresses::Town))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_address_member")
                    .from(Addresses::Table, Addresses::MemberUserId)
                    .to(Members::Table, Members::MemberUserId)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Create Jobs Table
        let table = table_auto(Jobs::Table)
            .col(pk_auto(Jobs::JobId))
            .col(integer(Jobs::MemberUserId))
            .col(string(Jobs::RequiredCaregivingType))
            .col(text_null(Jobs::OtherRequirements))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_job_member")
                    .from(Jobs::Table, Jobs::MemberUserId)
                    .to(Members::Table, Members::MemberUserId)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Create JobApplications Table
        let table = table_auto(JobApplications::Table)
            .col(pk_auto(JobApplications::ApplicationId))
            .col(integer(JobApplications::CaregiverUserId))
            .col(integer(JobApplications::JobId))
            .col(date(JobApplications::DateApplied))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_application_caregiver")
                    .from(JobApplications::Table, JobApplications::CaregiverUserId)
                    .to(Caregivers::Table, Caregivers::CaregiverUserId)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_application_job")
                    .from(JobApplications::Table, JobApplications::JobId)
                    .to(Jobs::Table, Jobs::JobId)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Create Appointments Table
        let table = table_auto(Appointments::Table)
            .col(pk_auto(Appointments::AppointmentId))
            .col(integer(Appointments::CaregiverUserId))
            .col(integer(Appointments::MemberUserId))
            .col(date(Appointments::AppointmentDate))
            .col(string_len(Appointments::AppointmentTime, 10))
            .col(double(Appointments::WorkHours))
            .col(string_len(Appointments::Status, 20))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_appointment_caregiver")
                    .from(Appointments::Table, Appointments::CaregiverUserId)
                    .to(Caregivers::Table, Caregivers::CaregiverUserId)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_appointment_member")
                    .from(Appointments::Table, Appointments::MemberUserId)
                    .to(Members::Table, Members::MemberUserId)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned();
        manager.create_table(table).await?;

        // Create indices for common lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_job_member")
                    .table(Jobs::Table)
                    .col(Jobs::MemberUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_application_job")
                    .table(JobApplications::Table)
                    .col(JobApplications::JobId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_application_caregiver")
                    .table(JobApplications::Table)
                    .col(JobApplications::CaregiverUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_caregiver")
                    .table(Appointments::Table)
                    .col(Appointments::CaregiverUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_member")
                    .table(Appointments::Table)
                    .col(Appointments::MemberUserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop all tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(JobApplications::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Caregivers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
