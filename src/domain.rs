mod company_name;
mod contact_email;
mod contact_name;
mod intake_record;
mod project_message;
mod service_interest;
mod submission_state;

pub use company_name::CompanyName;
pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use intake_record::{IntakeForm, IntakeRecord};
pub use project_message::ProjectMessage;
pub use service_interest::ServiceInterest;
pub use submission_state::{SubmissionState, TransitionError, View};
