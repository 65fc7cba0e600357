pub use super::address::Entity as Address;
pub use super::appointment::Entity as Appointment;
pub use super::caregiver::Entity as Caregiver;
pub use super::job::Entity as Job;
pub use super::job_application::Entity as JobApplication;
pub use super::member::Entity as Member;
pub use super::user::Entity as User;
