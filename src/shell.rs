use crate::display;
use crate::model::{Registry, Student};
use eyre::Error;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "\nMenu:\n\
                    1. Register for a course\n\
                    2. Display course details\n\
                    3. Display courses with available seats\n\
                    4. End program\n\
                    Enter your choice: ";

/// Drive the four-option menu until the user ends the program or the input
/// stream runs dry. All state lives in the registry; nothing survives the
/// loop.
pub fn run(
    input: &mut impl BufRead,
    output: &mut impl Write,
    registry: &mut Registry,
) -> Result<(), Error> {
    loop {
        let Some(choice) = prompt_line(input, output, MENU)? else {
            return Ok(());
        };
        match choice.parse::<u32>() {
            Ok(1) => register_student(input, output, registry)?,
            Ok(2) => display::display_courses(output, registry)?,
            Ok(3) => display::display_open_courses(output, registry)?,
            Ok(4) => {
                display::display_notifications(output, registry)?;
                writeln!(output, "Program ended.")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice! Please try again.")?,
        }
    }
}

/// Choice 1: query the student's data, offer the catalog, and attempt the
/// registration. Every rejection is a diagnostic and a return to the menu.
fn register_student(
    input: &mut impl BufRead,
    output: &mut impl Write,
    registry: &mut Registry,
) -> Result<(), Error> {
    let Some(first_name) = prompt_line(input, output, "Enter student's first name: ")? else {
        return Ok(());
    };
    let Some(surname) = prompt_line(input, output, "Enter student's surname: ")? else {
        return Ok(());
    };
    let Some(email) = prompt_line(input, output, "Enter student's email: ")? else {
        return Ok(());
    };
    let Some(university) = prompt_line(input, output, "Enter student's university: ")? else {
        return Ok(());
    };
    let Some(number) = prompt_line(input, output, "Enter student's matriculation number: ")?
    else {
        return Ok(());
    };
    let Ok(matriculation_number) = number.parse::<u32>() else {
        writeln!(output, "Invalid matriculation number!")?;
        return Ok(());
    };
    let student = Student::new(&surname, &first_name, &email, matriculation_number, &university);

    writeln!(output, "Available courses:")?;
    for (i, course) in registry.courses().iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, course.name())?;
    }
    let Some(selection) = prompt_line(input, output, "Select a course: ")? else {
        return Ok(());
    };
    let index = match selection.parse::<usize>() {
        Ok(i) if (1..=registry.courses().len()).contains(&i) => i - 1,
        _ => {
            writeln!(output, "Invalid course selection!")?;
            return Ok(());
        }
    };
    debug!(email = student.email(), course = index, "registration attempt");
    match registry.register(index, student) {
        Ok(()) => writeln!(output, "Registration successful!")?,
        Err(reason) => writeln!(output, "{reason}")?,
    }
    Ok(())
}

/// Print the prompt, read one line, and hand back its trimmed content.
/// `None` means the input stream is exhausted.
fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>, Error> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
