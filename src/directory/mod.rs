//! Derived view state for the student directory: the search/filter
//! predicate and the option lists the filter widgets are built from.
//!
//! Everything here is a pure function of the student set, recomputed on
//! change; nothing mutates shared view state.

use crate::model::{Gender, Student};

/// Filter state for the directory table. `None` selectors mean "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryFilter {
    /// Case-insensitive substring match over name, email and id.
    pub search: String,
    pub department: Option<String>,
    pub gender: Option<Gender>,
    pub class_name: Option<String>,
}

impl DirectoryFilter {
    /// Whether a single student passes every active criterion.
    pub fn matches(&self, student: &Student) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || student.name.to_lowercase().contains(&needle)
            || student.email.to_lowercase().contains(&needle)
            || student.id.to_lowercase().contains(&needle);

        let matches_department = self
            .department
            .as_ref()
            .map_or(true, |d| &student.department == d);
        let matches_gender = self.gender.map_or(true, |g| student.gender == g);
        let matches_class = self
            .class_name
            .as_ref()
            .map_or(true, |c| student.class_name.as_ref() == Some(c));

        matches_search && matches_department && matches_gender && matches_class
    }

    /// Filter the directory, preserving input order.
    pub fn apply<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        students.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Unique department names in first-seen order.
pub fn departments(students: &[Student]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for s in students {
        if !out.contains(&s.department) {
            out.push(s.department.clone());
        }
    }
    out
}

/// Unique class names in first-seen order, skipping unassigned students.
pub fn class_names(students: &[Student]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for s in students {
        if let Some(class) = &s.class_name {
            if !out.contains(class) {
                out.push(class.clone());
            }
        }
    }
    out
}

/// Avatar fallback: first letter of each name part, uppercased.
/// "John Smith" becomes "JS"; an empty name becomes an empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_students;

    #[test]
    fn empty_filter_passes_everything() {
        let students = seed_students();
        let filter = DirectoryFilter::default();
        assert_eq!(filter.apply(&students).len(), students.len());
    }

    #[test]
    fn search_matches_name_email_and_id_case_insensitively() {
        let students = seed_students();
        let mut filter = DirectoryFilter::default();

        filter.search = "ALICE".into();
        assert_eq!(filter.apply(&students).len(), 1);

        filter.search = "robert.brown@".into();
        assert_eq!(filter.apply(&students).len(), 1);

        filter.search = "2".into();
        assert!(!filter.apply(&students).is_empty());
    }

    #[test]
    fn filters_compose_with_and() {
        let students = seed_students();
        let filter = DirectoryFilter {
            search: "j".into(),
            department: Some("Science".into()),
            gender: Some(Gender::Male),
            class_name: None,
        };
        let hits = filter.apply(&students);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "John Smith");
    }

    #[test]
    fn option_lists_are_unique_in_first_seen_order() {
        let students = seed_students();
        assert_eq!(
            departments(&students),
            ["Science", "Arts", "Physical Education"]
        );
        assert_eq!(class_names(&students), ["12A", "12B", "12C"]);
    }

    #[test]
    fn initials_take_first_letter_of_each_part() {
        assert_eq!(initials("John Smith"), "JS");
        assert_eq!(initials("Carol"), "C");
        assert_eq!(initials(""), "");
    }
}
