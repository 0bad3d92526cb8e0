//! Course catalog as a closed enumeration.
//!
//! The course id path segment is a closed set. Modeling it as an enum with
//! exhaustive matching means a new course cannot silently fall into the
//! invalid-id branch without a compiler-visible decision.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of purchasable courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Course {
    /// Natural Language Processing.
    Nlp,
    /// Deep Learning.
    Dl,
    /// Machine Learning.
    Ml,
}

impl Course {
    /// Returns the purchase confirmation line for this course.
    #[must_use]
    pub fn purchase_message(self) -> &'static str {
        match self {
            Self::Nlp => "You bought Natural Language Processing Course",
            Self::Dl => "You bought Deep Learning Course",
            Self::Ml => "You bought Machine Learning Course",
        }
    }
}

/// Unknown course id; the lookup handler maps this to a generic invalid-id
/// body rather than an error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCourse;

impl FromStr for Course {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nlp" => Ok(Self::Nlp),
            "dl" => Ok(Self::Dl),
            "ml" => Ok(Self::Ml),
            _ => Err(UnknownCourse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_parse() {
        assert_eq!("nlp".parse::<Course>(), Ok(Course::Nlp));
        assert_eq!("dl".parse::<Course>(), Ok(Course::Dl));
        assert_eq!("ml".parse::<Course>(), Ok(Course::Ml));
    }

    #[test]
    fn test_unknown_id_is_distinct_outcome() {
        assert_eq!("xyz".parse::<Course>(), Err(UnknownCourse));
        // Case-sensitive, matching the literal declared members.
        assert_eq!("ML".parse::<Course>(), Err(UnknownCourse));
    }

    #[test]
    fn test_purchase_messages() {
        assert_eq!(
            Course::Ml.purchase_message(),
            "You bought Machine Learning Course"
        );
        assert_eq!(
            Course::Nlp.purchase_message(),
            "You bought Natural Language Processing Course"
        );
    }
}
