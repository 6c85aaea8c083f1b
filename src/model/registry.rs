use super::{Course, RegistrationError, Student};
use tracing::{info, warn};

/// Owner of the course list and of the aggregate of all accepted
/// registrations. Courses are created once at startup and never removed;
/// their creation order is the display order everywhere.
#[derive(Debug)]
pub struct Registry {
    home_university: String,
    courses: Vec<Course>,
    students: Vec<Student>,
}

impl Registry {
    pub fn new(home_university: &str, courses: Vec<Course>) -> Self {
        Self {
            home_university: home_university.to_owned(),
            courses,
            students: Vec::new(),
        }
    }

    pub fn home_university(&self) -> &str {
        &self.home_university
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All accepted registrations, across courses, in acceptance order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn open_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|c| !c.is_fully_booked())
    }

    /// Courses that will not take place; their participants are the
    /// end-of-run notification list.
    pub fn courses_below_minimum(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|c| c.has_few_participants())
    }

    fn is_enrolled_anywhere(&self, email: &str) -> bool {
        self.courses
            .iter()
            .any(|c| c.participants().iter().any(|p| p.email() == email))
    }

    /// Register a student into the course at `index` (0-based, must be in
    /// range). A student from another university is limited to one course
    /// across the whole system; course-level capacity and duplicate checks
    /// come after that policy, as in the menu flow.
    pub fn register(&mut self, index: usize, student: Student) -> Result<(), RegistrationError> {
        if student.university() != self.home_university && self.is_enrolled_anywhere(student.email())
        {
            warn!(
                email = student.email(),
                university = student.university(),
                "external student already enrolled in a course"
            );
            return Err(RegistrationError::ExternalAlreadyEnrolled);
        }
        self.courses[index].register(student.clone())?;
        info!(
            email = student.email(),
            course = self.courses[index].name(),
            "registration accepted"
        );
        self.students.push(student);
        Ok(())
    }
}
