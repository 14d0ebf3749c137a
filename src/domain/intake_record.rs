use serde::{Deserialize, Deserializer};

use super::{CompanyName, ContactEmail, ContactName, ProjectMessage, ServiceInterest};

/// Raw field values as posted by the contact form or `/api/contact`.
/// Missing fields are empty so they fail validation instead of
/// deserialization.
#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct IntakeForm {
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    pub service: String,
    pub message: String,
}

impl IntakeForm {
    /// The part after the last `@`, safe to log; empty without one.
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or_default()
    }
}

/// JSON clients may send `"company": null` for an omitted company.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One validated submission attempt. Never stored.
#[derive(Debug)]
pub struct IntakeRecord {
    pub name: ContactName,
    pub email: ContactEmail,
    pub company: CompanyName,
    pub service: ServiceInterest,
    pub message: ProjectMessage,
}

impl TryFrom<&IntakeForm> for IntakeRecord {
    type Error = String;

    fn try_from(form: &IntakeForm) -> Result<Self, Self::Error> {
        let name = ContactName::parse(&form.name)?;
        let email = ContactEmail::parse(&form.email)?;
        let company = CompanyName::parse(&form.company)?;
        let service = ServiceInterest::parse(&form.service)?;
        let message = ProjectMessage::parse(&form.message)?;

        Ok(Self {
            name,
            email,
            company,
            service,
            message,
        })
    }
}
