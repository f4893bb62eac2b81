use std::collections::BTreeSet;

/// Joins section instructor fields into a course's searchable `profs` value
pub fn join_profs<'a>(profs: impl IntoIterator<Item = &'a str>) -> String {
    profs.into_iter().collect::<Vec<_>>().join(" ")
}

/// Effective description of a course
///
/// Schools sometimes put what is really the course description in the
/// sections' notes. When the course has no description of its own and every
/// section carries the same note, that note is used instead.
///
/// # Arguments
/// * `description` - The course's own description
/// * `section_notes` - The notes of every section of the course
pub fn smart_description<'a>(
    description: &'a str,
    section_notes: impl IntoIterator<Item = &'a str>,
) -> &'a str {
    if !description.is_empty() {
        return description;
    }

    let mut distinct: BTreeSet<&str> = section_notes.into_iter().collect();
    if distinct.len() == 1
        && let Some(note) = distinct.pop_first()
    {
        return note;
    }

    description
}

/// Section notes to display, suppressed when already shown as the course description
pub fn smart_notes<'a>(notes: &'a str, course_smart_description: &str) -> &'a str {
    if notes == course_smart_description {
        return "";
    }

    notes
}

#[cfg(test)]
mod test {
    use crate::catalog::{join_profs, smart_description, smart_notes};

    #[test]
    fn test_join_profs() {
        assert_eq!(join_profs(["Smith", "Jones, Lee"]), "Smith Jones, Lee");
        assert_eq!(join_profs(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_smart_description_promotes_shared_note() {
        let notes = ["Bring calculator"; 3];
        assert_eq!(smart_description("", notes), "Bring calculator");
    }

    #[test]
    fn test_smart_description_with_distinct_notes() {
        assert_eq!(smart_description("", ["A", "B"]), "");
    }

    #[test]
    fn test_smart_description_prefers_own_description() {
        assert_eq!(
            smart_description("Survey of animal cognition", ["Bring calculator"]),
            "Survey of animal cognition"
        );
    }

    #[test]
    fn test_smart_description_without_sections() {
        assert_eq!(smart_description("", []), "");
    }

    #[test]
    fn test_smart_notes() {
        let description = smart_description("", ["Bring calculator", "Bring calculator"]);

        assert_eq!(smart_notes("Bring calculator", description), "");
        assert_eq!(smart_notes("Meets in lab", description), "Meets in lab");
    }
}
