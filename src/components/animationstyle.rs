use std::fmt;
use std::str::FromStr;

/// How the letters of a label advance through their clips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimationStyle {
    /// No animation playing. Every letter shows its first frame.
    None,
    /// All letters share one clock driven by the label's sync speed.
    ///
    /// A letter whose clip is shorter than the longest one holds its last
    /// frame until the others finish. One index computation serves the whole
    /// label, so this is the cheapest mode for large blocks of text.
    #[default]
    Synchronized,
    /// Every letter plays at its clip's own speed and loops on its own.
    ///
    /// Letters with different clip lengths drift apart. Costs one clock per
    /// letter.
    PerLetterLoop,
}

impl AnimationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationStyle::None => "none",
            AnimationStyle::Synchronized => "synchronized",
            AnimationStyle::PerLetterLoop => "per_letter_loop",
        }
    }
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "static" => Ok(AnimationStyle::None),
            "synchronized" | "sync" => Ok(AnimationStyle::Synchronized),
            "per_letter_loop" | "per-letter-loop" | "instant_loop" | "loop" => {
                Ok(AnimationStyle::PerLetterLoop)
            }
            other => Err(format!("Unknown animation style '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_synchronized() {
        assert_eq!(AnimationStyle::default(), AnimationStyle::Synchronized);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("none".parse(), Ok(AnimationStyle::None));
        assert_eq!(" Sync ".parse(), Ok(AnimationStyle::Synchronized));
        assert_eq!("instant_loop".parse(), Ok(AnimationStyle::PerLetterLoop));
        assert_eq!(
            AnimationStyle::PerLetterLoop.to_string().parse(),
            Ok(AnimationStyle::PerLetterLoop)
        );
        assert!("bouncy".parse::<AnimationStyle>().is_err());
    }
}
