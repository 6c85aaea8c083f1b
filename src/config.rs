use crate::model::{Course, Lecturer, Registry, Title};
use eyre::{Error, WrapErr, ensure};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_HOME_UNIVERSITY: &str = "Our University";

/// Course catalog loaded at startup. The catalog fixes each course's
/// lecturer for good; nothing here changes while the program runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_home_university")]
    pub home_university: String,
    #[serde(rename = "course")]
    pub courses: Vec<CourseConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CourseConfig {
    pub name: String,
    pub lecturer: LecturerConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LecturerConfig {
    pub surname: String,
    pub first_name: String,
    pub email: String,
    pub title: Title,
}

fn default_home_university() -> String {
    DEFAULT_HOME_UNIVERSITY.to_owned()
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Error> {
        let text = fs::read_to_string(file_name).context("cannot load catalog file")?;
        let config: Config = toml::from_str(&text).context("cannot parse catalog file")?;
        ensure!(!config.courses.is_empty(), "catalog contains no courses");
        Ok(config)
    }

    /// The three-course catalog the program ships with.
    pub fn builtin() -> Config {
        let course = |name: &str, cfg: LecturerConfig| CourseConfig {
            name: name.to_owned(),
            lecturer: cfg,
        };
        let lecturer = |surname: &str, first_name: &str, email: &str, title| LecturerConfig {
            surname: surname.to_owned(),
            first_name: first_name.to_owned(),
            email: email.to_owned(),
            title,
        };
        Config {
            home_university: default_home_university(),
            courses: vec![
                course(
                    "Programming",
                    lecturer("Musk", "Elon", "elon.musk@tesla.com", Title::Professor),
                ),
                course(
                    "Databases",
                    lecturer("Jobs", "Steve", "steve.jobs@apple.com", Title::Doctor),
                ),
                course(
                    "Software Engineering",
                    lecturer("Gates", "Bill", "bill.gates@microsoft.com", Title::Professor),
                ),
            ],
        }
    }

    pub fn into_registry(self) -> Registry {
        let courses = self
            .courses
            .into_iter()
            .map(|c| {
                Course::new(
                    &c.name,
                    Lecturer::new(
                        &c.lecturer.surname,
                        &c.lecturer.first_name,
                        &c.lecturer.email,
                        c.lecturer.title,
                    ),
                )
            })
            .collect();
        Registry::new(&self.home_university, courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_three_courses() {
        let registry = Config::builtin().into_registry();
        let names: Vec<_> = registry.courses().iter().map(Course::name).collect();
        assert_eq!(names, ["Programming", "Databases", "Software Engineering"]);
        assert_eq!(registry.home_university(), "Our University");
    }

    #[test]
    fn catalog_parses_from_toml() {
        let config: Config = toml::from_str(
            r#"
            home-university = "TU Graz"

            [[course]]
            name = "Databases"

            [course.lecturer]
            surname = "Jobs"
            first-name = "Steve"
            email = "steve.jobs@apple.com"
            title = "doctor"
            "#,
        )
        .unwrap();
        assert_eq!(config.home_university, "TU Graz");
        assert_eq!(config.courses.len(), 1);
        assert_eq!(config.courses[0].lecturer.title, Title::Doctor);
        let registry = config.into_registry();
        assert_eq!(
            registry.courses()[0].lecturer().to_string(),
            "Dr. Steve Jobs, Email: steve.jobs@apple.com"
        );
    }

    #[test]
    fn home_university_defaults_when_absent() {
        let config: Config = toml::from_str(
            r#"
            [[course]]
            name = "Programming"
            lecturer = { surname = "Musk", first-name = "Elon", email = "elon.musk@tesla.com", title = "professor" }
            "#,
        )
        .unwrap();
        assert_eq!(config.home_university, DEFAULT_HOME_UNIVERSITY);
    }
}
