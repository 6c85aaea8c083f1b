use super::{Lecturer, Student};
use thiserror::Error;

pub const MAX_PARTICIPANTS: usize = 10;
pub const MIN_PARTICIPANTS: usize = 3;

/// Why a registration attempt was turned down. The `Display` strings are the
/// diagnostics shown to the user verbatim.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum RegistrationError {
    #[error("Course is already fully booked.")]
    FullyBooked,
    #[error("A student with this email is already registered in this course.")]
    DuplicateEmail,
    #[error("Students from other universities may only take one course.")]
    ExternalAlreadyEnrolled,
}

/// A course bound to one lecturer at creation time, with its roster kept in
/// registration order.
#[derive(Clone, Debug)]
pub struct Course {
    name: String,
    lecturer: Lecturer,
    participants: Vec<Student>,
}

impl Course {
    pub fn new(name: &str, lecturer: Lecturer) -> Self {
        Self {
            name: name.to_owned(),
            lecturer,
            participants: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lecturer(&self) -> &Lecturer {
        &self.lecturer
    }

    pub fn participants(&self) -> &[Student] {
        &self.participants
    }

    pub fn is_fully_booked(&self) -> bool {
        self.participants.len() >= MAX_PARTICIPANTS
    }

    /// A course below this bound will not take place and its participants
    /// must be notified.
    pub fn has_few_participants(&self) -> bool {
        self.participants.len() < MIN_PARTICIPANTS
    }

    pub fn available_seats(&self) -> usize {
        MAX_PARTICIPANTS - self.participants.len()
    }

    /// Append the student to the roster unless the course is full or the
    /// email (case-sensitive) is already registered. Rejection leaves the
    /// roster untouched.
    pub fn register(&mut self, student: Student) -> Result<(), RegistrationError> {
        if self.is_fully_booked() {
            return Err(RegistrationError::FullyBooked);
        }
        if self
            .participants
            .iter()
            .any(|p| p.email() == student.email())
        {
            return Err(RegistrationError::DuplicateEmail);
        }
        self.participants.push(student);
        Ok(())
    }
}
