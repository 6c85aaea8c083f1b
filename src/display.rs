use crate::model::{Course, Registry};
use std::io::{self, Write};

/// Course header, then either the "will not take place" warning or the
/// roster in registration order.
pub fn display_participants(out: &mut impl Write, course: &Course) -> io::Result<()> {
    writeln!(out, "Course: {}, Lecturer: {}", course.name(), course.lecturer())?;
    if course.has_few_participants() {
        writeln!(
            out,
            "Course will not take place due to insufficient participants."
        )?;
    } else {
        writeln!(out, "Participants:")?;
        for participant in course.participants() {
            writeln!(out, "{participant}")?;
        }
    }
    Ok(())
}

pub fn display_available_seats(out: &mut impl Write, course: &Course) -> io::Result<()> {
    writeln!(out, "Course: {}, Lecturer: {}", course.name(), course.lecturer())?;
    writeln!(out, "Available seats: {}", course.available_seats())
}

pub fn display_courses(out: &mut impl Write, registry: &Registry) -> io::Result<()> {
    for course in registry.courses() {
        display_participants(out, course)?;
    }
    Ok(())
}

pub fn display_open_courses(out: &mut impl Write, registry: &Registry) -> io::Result<()> {
    for course in registry.open_courses() {
        display_available_seats(out, course)?;
    }
    Ok(())
}

/// End-of-run pass: every participant of a course below the minimum has to
/// be told that the course will not run.
pub fn display_notifications(out: &mut impl Write, registry: &Registry) -> io::Result<()> {
    writeln!(
        out,
        "Notifying participants of courses that will not take place:"
    )?;
    for course in registry.courses_below_minimum() {
        for participant in course.participants() {
            writeln!(out, "{participant}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Lecturer, Student, Title};

    fn databases() -> Course {
        Course::new(
            "Databases",
            Lecturer::new("Jobs", "Steve", "steve.jobs@apple.com", Title::Doctor),
        )
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_course_warns_instead_of_listing() {
        let c = databases();
        let text = render(|out| display_participants(out, &c));
        assert_eq!(
            text,
            "Course: Databases, Lecturer: Dr. Steve Jobs, Email: steve.jobs@apple.com\n\
             Course will not take place due to insufficient participants.\n"
        );
    }

    #[test]
    fn viable_course_lists_roster_in_order() {
        let mut c = databases();
        for n in 1..=3 {
            c.register(Student::new(
                "Doe",
                "Jane",
                &format!("jane{n}@example.com"),
                n,
                "Our University",
            ))
            .unwrap();
        }
        let text = render(|out| display_participants(out, &c));
        assert!(text.contains("Participants:\n"));
        let first = text.find("jane1@example.com").unwrap();
        let second = text.find("jane2@example.com").unwrap();
        let third = text.find("jane3@example.com").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn seats_line_counts_down_from_maximum() {
        let c = databases();
        let text = render(|out| display_available_seats(out, &c));
        assert!(text.ends_with("Available seats: 10\n"));
    }
}
