use unicode_segmentation::UnicodeSegmentation;

/// Optional on the form; an omitted company is the empty string.
#[derive(Debug, Default)]
pub struct CompanyName(String);

impl CompanyName {
    pub const MAX_GRAPHEMES: usize = 256;

    pub fn parse(s: &str) -> Result<CompanyName, String> {
        if s.graphemes(true).count() > Self::MAX_GRAPHEMES {
            return Err(format!(
                "Company must be at most {} characters.",
                Self::MAX_GRAPHEMES
            ));
        }
        Ok(Self(s.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
