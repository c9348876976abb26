//! Command handlers.
//!
//! Each handler checks its argument count, calls into the directory and
//! returns the success message. Failures are returned as typed errors and
//! turned into user-facing text by [`super::Assistant`].

use crate::directory::Directory;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;

/// Output for `birthdays` when the window is empty.
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays in the next week.";

/// Output for `all` on an empty directory.
pub const NO_CONTACTS: &str = "No contacts found.";

fn expect_args<'a, const N: usize>(
    args: &'a [String],
    usage: &'static str,
) -> BookResult<[&'a str; N]> {
    if args.len() != N {
        return Err(BookError::InvalidArguments(usage));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// `add <name> <phone>`: create a contact with one phone.
pub fn add_contact(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name, phone] = expect_args::<2>(args, "Please provide name and phone number.")?;

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    directory.add_record(record);

    Ok(format!("Contact {name} added."))
}

/// `change <name> <phone>`: replace the contact's first phone.
pub fn change_contact(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name, phone] = expect_args::<2>(args, "Please provide name and new phone number.")?;

    let record = directory
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_first_phone(phone).map_err(|e| match e {
        BookError::EmptyPhoneList(_) => BookError::EmptyPhoneList(name.to_string()),
        other => other,
    })?;

    Ok(format!("Phone number updated for {name}."))
}

/// `remove <name>`: delete the contact and any case variants.
pub fn remove_contact(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name] = expect_args::<1>(args, "Please provide a single name.")?;
    directory.delete(name);
    Ok(format!("Contact {name} removed."))
}

/// `phone <name>`: list the contact's phones.
pub fn show_phone(args: &[String], directory: &Directory) -> BookResult<String> {
    let [name] = expect_args::<1>(args, "Please provide a single name.")?;

    let record = directory
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    if record.phones().is_empty() {
        return Err(BookError::EmptyPhoneList(name.to_string()));
    }

    Ok(format!(
        "Phone number for {}: {}",
        record.name(),
        record.phone_list()
    ))
}

/// `delete-phone <name>`: drop every phone of the contact.
pub fn delete_phone(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name] = expect_args::<1>(args, "Please provide a name to remove all phone numbers.")?;

    let record = directory
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    if record.clear_phones() == 0 {
        return Err(BookError::EmptyPhoneList(name.to_string()));
    }

    Ok(format!("Phone number for {name} has been removed."))
}

/// `all`: one line per contact. Extra arguments are ignored.
pub fn list_all(directory: &Directory) -> String {
    if directory.is_empty() {
        return NO_CONTACTS.to_string();
    }
    directory
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace the birthday.
pub fn add_birthday(args: &[String], directory: &mut Directory) -> BookResult<String> {
    let [name, birthday] = expect_args::<2>(
        args,
        "Please provide name and birthday in the format DD.MM.YYYY.",
    )?;

    let record = directory
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.set_birthday(birthday)?;

    Ok(format!("Birthday added for {name}."))
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[String], directory: &Directory) -> BookResult<String> {
    let [name] = expect_args::<1>(args, "Please provide a single name.")?;

    let record = directory
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(match record.birthday() {
        Some(birthday) => format!("Birthday for {name}: {birthday}"),
        None => format!("No birthday set for {name}."),
    })
}

/// `birthdays`: contacts to congratulate in the week after `today`.
pub fn upcoming_birthdays(directory: &Directory, today: NaiveDate) -> String {
    let lines: Vec<String> = directory
        .birthdays_in_window(today)
        .map(|(name, date)| format!("{}: {}", name, date.format("%d.%m.%Y")))
        .collect();

    if lines.is_empty() {
        return NO_UPCOMING_BIRTHDAYS.to_string();
    }
    format!("Upcoming birthdays in the next week:\n{}", lines.join("\n"))
}
