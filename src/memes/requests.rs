use serde::Deserialize;

/// Template used when the request path names none.
pub const DEFAULT_IMAGE_ID: &str = "16191858";

/// The slash command form. Chat platforms send a dozen more fields (`token`, `team_id`,
/// `user_name`, ...) which are ignored.
#[derive(Debug, Deserialize)]
pub struct SlashCommandForm {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImagePath {
    pub image_id: String,
}

/// First non-empty `/`-separated segment of `path`, or [`DEFAULT_IMAGE_ID`].
pub fn parse_image_id(path: &str) -> &str {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(DEFAULT_IMAGE_ID)
}

#[derive(Debug, PartialEq)]
pub struct CaptionPair<'a> {
    pub text0: &'a str,
    pub text1: &'a str,
}

impl<'a> CaptionPair<'a> {
    /// Splits `top:bottom` into its two captions. Anything past a second colon is dropped.
    pub fn split(text: &'a str) -> Self {
        let mut parts = text.split(':');
        Self {
            text0: parts.next().unwrap_or_default(),
            text1: parts.next().unwrap_or_default(),
        }
    }
}
