use serde::Deserialize;
use std::fmt;

/// Common identity shared by lecturers and students. The email is the
/// identity key used for duplicate detection; no field changes after
/// construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    surname: String,
    first_name: String,
    email: String,
}

impl Person {
    pub fn new(surname: &str, first_name: &str, email: &str) -> Self {
        Self {
            surname: surname.to_owned(),
            first_name: first_name.to_owned(),
            email: email.to_owned(),
        }
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} {}, Email: {}",
            self.first_name, self.surname, self.email
        )
    }
}

/// Academic title of a lecturer.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Title {
    Doctor,
    AssistantProfessor,
    AssociateProfessor,
    Professor,
}

impl Title {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Doctor => "Dr.",
            Self::AssistantProfessor => "Assistant Professor",
            Self::AssociateProfessor => "Associate Professor",
            Self::Professor => "Professor",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lecturer {
    person: Person,
    title: Title,
}

impl Lecturer {
    pub fn new(surname: &str, first_name: &str, email: &str, title: Title) -> Self {
        Self {
            person: Person::new(surname, first_name, email),
            title,
        }
    }

    pub fn title(&self) -> Title {
        self.title
    }

    pub fn email(&self) -> &str {
        self.person.email()
    }
}

impl fmt::Display for Lecturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}, Email: {}",
            self.title,
            self.person.first_name(),
            self.person.surname(),
            self.person.email()
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Student {
    person: Person,
    matriculation_number: u32,
    university: String,
}

impl Student {
    pub fn new(
        surname: &str,
        first_name: &str,
        email: &str,
        matriculation_number: u32,
        university: &str,
    ) -> Self {
        Self {
            person: Person::new(surname, first_name, email),
            matriculation_number,
            university: university.to_owned(),
        }
    }

    pub fn email(&self) -> &str {
        self.person.email()
    }

    pub fn university(&self) -> &str {
        &self.university
    }

    pub fn matriculation_number(&self) -> u32 {
        self.matriculation_number
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nUniversity: {}, Matriculation Number: {}",
            self.person, self.university, self.matriculation_number
        )
    }
}

#[test]
fn test_person_display() {
    let p = Person::new("Doe", "John", "john.doe@example.com");
    assert_eq!(p.to_string(), "Name: John Doe, Email: john.doe@example.com");
}

#[test]
fn test_lecturer_display_uses_title_string() {
    let l = Lecturer::new("Jobs", "Steve", "steve.jobs@apple.com", Title::Doctor);
    assert_eq!(
        l.to_string(),
        "Dr. Steve Jobs, Email: steve.jobs@apple.com"
    );
    let l = Lecturer::new("Musk", "Elon", "elon.musk@tesla.com", Title::Professor);
    assert_eq!(
        l.to_string(),
        "Professor Elon Musk, Email: elon.musk@tesla.com"
    );
    assert_eq!(Title::AssistantProfessor.as_str(), "Assistant Professor");
    assert_eq!(Title::AssociateProfessor.as_str(), "Associate Professor");
}

#[test]
fn test_student_display_continuation_line() {
    let s = Student::new("Curie", "Marie", "marie@sorbonne.fr", 7, "Sorbonne");
    assert_eq!(
        s.to_string(),
        "Name: Marie Curie, Email: marie@sorbonne.fr\nUniversity: Sorbonne, Matriculation Number: 7"
    );
}
