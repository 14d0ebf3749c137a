use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct ContactName(String);

impl ContactName {
    pub const MAX_GRAPHEMES: usize = 256;

    /// Keeps the value exactly as typed; only empty input is rejected.
    /// Whitespace counts as input, as it does for the browser's `required`.
    pub fn parse(s: &str) -> Result<ContactName, String> {
        if s.is_empty() {
            return Err("Please tell us your name.".into());
        }
        if s.graphemes(true).count() > Self::MAX_GRAPHEMES {
            return Err(format!(
                "Name must be at most {} characters.",
                Self::MAX_GRAPHEMES
            ));
        }
        Ok(Self(s.into()))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
