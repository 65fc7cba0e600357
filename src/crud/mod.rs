//! Data-access layer: one module per entity with a uniform
//! create/list/get/update/delete contract. Deletes cascade dependent rows
//! inside a transaction because the schema keeps its foreign keys RESTRICT.

pub mod address;
pub mod appointment;
pub mod caregiver;
pub mod job;
pub mod job_application;
pub mod member;
pub mod user;
