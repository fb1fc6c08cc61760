use super::*;

fn full_profile() -> Profile {
    Profile {
        name: "Mina".to_owned(),
        department: Some("Physics".to_owned()),
        year: Some(3),
        semester: Some(5),
        course: Some("B.Sc".to_owned()),
        registered_events: Some(4),
        created_events: Some(2),
    }
}

#[test]
fn student_rows_include_academic_fields() {
    let labels: Vec<_> = profile_rows(Role::Student, &full_profile()).into_iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec!["Name", "Department", "Course", "Year", "Semester", "Registered events"]);
}

#[test]
fn organizer_rows_include_created_count_only() {
    let rows = profile_rows(Role::Organizer, &full_profile());
    assert_eq!(
        rows,
        vec![
            ("Name", "Mina".to_owned()),
            ("Department", "Physics".to_owned()),
            ("Created events", "2".to_owned()),
        ]
    );
}

#[test]
fn absent_fields_are_skipped() {
    let profile = Profile { name: "Ari".to_owned(), ..Profile::default() };
    assert_eq!(profile_rows(Role::Student, &profile), vec![("Name", "Ari".to_owned())]);
    assert_eq!(profile_rows(Role::Admin, &profile), vec![("Name", "Ari".to_owned())]);
}
