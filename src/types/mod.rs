pub mod application;
pub mod submission;

pub use application::{
    AdditionalInfo, Address, ApplicationRecord, Education, EducationLevel, EducationSlot,
    PersonalInfo, WorkExperience,
};
pub use submission::{Subscriber, WholesaleInquiry};
