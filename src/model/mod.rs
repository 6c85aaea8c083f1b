pub use self::course::{Course, MAX_PARTICIPANTS, MIN_PARTICIPANTS, RegistrationError};
pub use self::person::{Lecturer, Person, Student, Title};
pub use self::registry::Registry;

mod course;
mod person;
mod registry;
