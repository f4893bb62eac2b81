/// Route of a session's home page
pub const SESSION_ROUTE: &str = "/sessions/{session_slug}";

/// Route of a course detail page; `slugs` may span several path segments
pub const COURSE_ROUTE: &str = "/sessions/{session_slug}/courses/{*slugs}";

/// Path of a session's home page
pub fn session_path(session_slug: &str) -> String {
    format!("/sessions/{session_slug}")
}

/// Builds the composite `slugs` segment identifying a course within a session
///
/// The segment is the classification slug, the course slug, and
/// `{code}-{number}`, with empty parts skipped.
pub fn course_slugs(
    classification_slug: &str,
    course_slug: &str,
    classification_code: &str,
    number: &str,
) -> String {
    let code_number = [classification_code, number].join("-");

    [classification_slug, course_slug, code_number.as_str()]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Path of a course detail page
pub fn course_path(session_slug: &str, slugs: &str) -> String {
    format!("{}/courses/{slugs}", session_path(session_slug))
}

/// Identifies a course from the last segment of its `slugs` path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseLocator<'a> {
    pub classification_code: &'a str,
    pub number: &'a str,
}

/// Parses a `slugs` path back into the classification code and course number
///
/// # Returns
/// `None` if the last segment has no `{code}-{number}` form
pub fn parse_course_slugs(slugs: &str) -> Option<CourseLocator<'_>> {
    let last = slugs.trim_end_matches('/').rsplit('/').next()?;
    let (classification_code, number) = last.rsplit_once('-')?;

    if number.is_empty() {
        return None;
    }

    Some(CourseLocator {
        classification_code,
        number,
    })
}

#[cfg(test)]
mod test {
    use crate::urls::{CourseLocator, course_path, course_slugs, parse_course_slugs, session_path};

    #[test]
    fn test_session_path() {
        assert_eq!(session_path("fall-2012"), "/sessions/fall-2012");
    }

    #[test]
    fn test_course_slugs() {
        assert_eq!(
            course_slugs("anthropology", "animals-society", "ANTH-UA", "101"),
            "anthropology/animals-society/ANTH-UA-101"
        );
    }

    #[test]
    fn test_course_slugs_skips_empty_segments() {
        assert_eq!(course_slugs("", "animals-society", "ANTH", "101"), "animals-society/ANTH-101");
        assert_eq!(course_slugs("", "", "", "101"), "-101");
    }

    #[test]
    fn test_course_path() {
        let slugs = course_slugs("anthropology", "animals-society", "ANTH", "101");
        assert_eq!(
            course_path("fall-2012", &slugs),
            "/sessions/fall-2012/courses/anthropology/animals-society/ANTH-101"
        );
    }

    #[test]
    fn test_parse_course_slugs() {
        assert_eq!(
            parse_course_slugs("anthropology/animals-society/ANTH-UA-101"),
            Some(CourseLocator {
                classification_code: "ANTH-UA",
                number: "101"
            })
        );
        assert_eq!(
            parse_course_slugs("-101/"),
            Some(CourseLocator {
                classification_code: "",
                number: "101"
            })
        );
        assert_eq!(parse_course_slugs("anthropology/animals"), None);
        assert_eq!(parse_course_slugs("ANTH-"), None);
    }
}
