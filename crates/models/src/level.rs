use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{AsRefStr, Display as StrumDisplay};

/// Academic level encoded in a classification code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, StrumDisplay, AsRefStr)]
pub enum AcademicLevel {
    Undergraduate,
    Graduate,
    #[strum(serialize = "NYUAD")]
    #[serde(rename = "NYUAD")]
    Nyuad,
}

/// Error for classification codes that cannot carry a level marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ClassificationCodeError {
    /// The code has fewer than two characters
    CodeTooShort(String),
}

impl Display for ClassificationCodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::CodeTooShort(code) => {
                write!(f, "Classification code '{code}' is shorter than 2 characters")
            }
        }
    }
}

impl AcademicLevel {
    /// Infers the level from the second-to-last character of a classification code
    ///
    /// # Returns
    /// `Ok(None)` when the marker character is not a known level
    pub fn from_code(code: &str) -> Result<Option<Self>, ClassificationCodeError> {
        let marker = code
            .chars()
            .rev()
            .nth(1)
            .ok_or_else(|| ClassificationCodeError::CodeTooShort(code.to_owned()))?;

        Ok(match marker {
            'U' => Some(Self::Undergraduate),
            'G' | 'D' => Some(Self::Graduate),
            'A' => Some(Self::Nyuad),
            _ => None,
        })
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod test {
    use crate::level::{AcademicLevel, ClassificationCodeError};

    #[test]
    fn test_level_from_code() {
        assert_eq!(
            AcademicLevel::from_code("ANTH-UA"),
            Ok(Some(AcademicLevel::Undergraduate))
        );
        assert_eq!(
            AcademicLevel::from_code("10U1"),
            Ok(Some(AcademicLevel::Undergraduate))
        );
        assert_eq!(
            AcademicLevel::from_code("20G1"),
            Ok(Some(AcademicLevel::Graduate))
        );
        assert_eq!(
            AcademicLevel::from_code("CSDX"),
            Ok(Some(AcademicLevel::Graduate))
        );
        assert_eq!(
            AcademicLevel::from_code("30A5"),
            Ok(Some(AcademicLevel::Nyuad))
        );
        assert_eq!(AcademicLevel::from_code("099X"), Ok(None));
    }

    #[test]
    fn test_level_marker_is_second_to_last() {
        // a trailing marker is not read
        assert_eq!(AcademicLevel::from_code("101U"), Ok(None));
        assert_eq!(AcademicLevel::from_code("201G"), Ok(None));
        assert_eq!(AcademicLevel::from_code("UA"), Ok(Some(AcademicLevel::Undergraduate)));
    }

    #[test]
    fn test_level_from_short_code() {
        assert_eq!(
            AcademicLevel::from_code("U"),
            Err(ClassificationCodeError::CodeTooShort("U".to_string()))
        );
        assert!(AcademicLevel::from_code("").is_err());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(AcademicLevel::Undergraduate.to_string(), "Undergraduate");
        assert_eq!(AcademicLevel::Nyuad.as_str(), "NYUAD");
    }
}
