use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct ProjectMessage(String);

impl ProjectMessage {
    pub const MAX_GRAPHEMES: usize = 5000;

    pub fn parse(s: &str) -> Result<ProjectMessage, String> {
        if s.is_empty() {
            return Err("Please tell us about your project.".into());
        }
        if s.graphemes(true).count() > Self::MAX_GRAPHEMES {
            return Err(format!(
                "Message must be at most {} characters.",
                Self::MAX_GRAPHEMES
            ));
        }
        Ok(Self(s.into()))
    }
}

impl AsRef<str> for ProjectMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
