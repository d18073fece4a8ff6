/// Box drawing characters used by the chrome widgets
///
/// Terminals without good unicode support can switch to the ascii set through
/// the `display.use_unicode` config option or `--ascii` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxChars {
    pub horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub top_junction: String,
    pub bottom_junction: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            top_junction: "┬".to_string(),
            bottom_junction: "┴".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            top_junction: "+".to_string(),
            bottom_junction: "+".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}
