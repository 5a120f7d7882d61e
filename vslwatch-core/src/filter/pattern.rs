use regex::Regex;

/// A regular expression plus the sense it is applied in.
///
/// Built once from option text: a leading `!` is stripped and flips the
/// sense, so `!/health` passes exactly when `/health` would not.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    negate: bool,
}

impl Pattern {
    /// `Ok(None)` for an empty option, which means "no filter".
    pub fn parse(text: &str) -> Result<Option<Self>, regex::Error> {
        if text.is_empty() {
            return Ok(None);
        }

        let (negate, source) = match text.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        Ok(Some(Self {
            regex: Regex::new(source)?,
            negate,
        }))
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn passes(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack) != self.negate
    }
}
