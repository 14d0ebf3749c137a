use validator::ValidateEmail;

/// A plausible address; deliverability is never checked.
#[derive(Debug)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: &str) -> Result<ContactEmail, String> {
        if s.validate_email() {
            Ok(Self(s.into()))
        } else {
            tracing::warn!("rejected an invalid contact email.");
            Err("Please enter a valid email address.".into())
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
