//! `deskkit contacts`: menu loop over contacts.json.

use anyhow::Result;
use deskkit_core::{Contact, ContactForm, RecordStore, StoreError, paths::CONTACTS_FILE};

use crate::config::Config;
use crate::prompt::{
    clear_screen, confirm, pause, prompt, prompt_keep, prompt_number, store_error_message,
};

pub fn run(cfg: &Config) -> Result<()> {
    let (mut store, err) = RecordStore::<Contact>::open(CONTACTS_FILE);
    if let Some(e) = err {
        println!("Error decoding contacts file: {e}\n");
    }

    // Search results replace the listing until the next "view all".
    let mut filter: Option<String> = None;

    loop {
        clear_screen(cfg.display.clear_screen)?;
        match &filter {
            Some(q) => display_contacts(&store.search(q), Some(q)),
            None => display_contacts(&store.records().iter().collect::<Vec<_>>(), None),
        }

        println!("Available actions:");
        println!("1. Add contact");
        println!("2. View all");
        println!("3. Search contact");
        println!("4. Show details");
        println!("5. Update contact");
        println!("6. Delete contact");
        println!("7. Save contacts");
        println!("8. Exit");

        match prompt_number("Enter your choice")? {
            Some(1) => add_contact(&mut store)?,
            Some(2) => filter = None,
            Some(3) => {
                filter = Some(prompt("Search by Name or Phone")?);
                continue;
            }
            Some(4) => show_details(&store)?,
            Some(5) => update_contact(&mut store)?,
            Some(6) => delete_contact(&mut store)?,
            Some(7) => save_contacts(&store),
            Some(8) => break,
            _ => println!("Invalid choice. Please enter a number from the menu.\n"),
        }

        pause()?;
    }

    Ok(())
}

fn display_contacts(contacts: &[&Contact], query: Option<&String>) {
    if let Some(q) = query {
        println!("\nSearch results for '{q}' ({} found)", contacts.len());
    }
    if contacts.is_empty() {
        println!("\nNo contacts to show.\n");
        return;
    }

    let width = contacts
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    println!("\n{:<width$}  {}", "Name", "Phone Number");
    println!("{}  {}", "-".repeat(width), "-".repeat(12));
    for c in contacts {
        println!("{:<width$}  {}", c.name, c.phone);
    }
    println!();
}

fn details(c: &Contact) -> String {
    format!(
        "Name:    {}\nPhone:   {}\nEmail:   {}\nAddress: {}",
        c.name, c.phone, c.email, c.address
    )
}

/// Resolve a typed name to a position; first match wins.
fn select_by_name(store: &RecordStore<Contact>, action: &str) -> Result<Option<usize>> {
    let name = prompt(&format!("Name of the contact to {action}"))?;
    if name.is_empty() {
        println!("Please select a contact to {action}.\n");
        return Ok(None);
    }
    match store.position_of(&name) {
        Ok(position) => Ok(Some(position)),
        Err(e) => {
            println!("Selected contact not found in data. ({e})\n");
            Ok(None)
        }
    }
}

fn add_contact(store: &mut RecordStore<Contact>) -> Result<()> {
    let form = ContactForm {
        name: prompt("Name")?,
        phone: prompt("Phone")?,
        email: prompt("Email")?,
        address: prompt("Address")?,
    };
    match form.build().and_then(|c| store.add(c)) {
        Ok(_) => println!("Contact added.\n"),
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
    Ok(())
}

fn show_details(store: &RecordStore<Contact>) -> Result<()> {
    if let Some(position) = select_by_name(store, "show")? {
        println!("\n{}\n", details(&store.records()[position]));
    }
    Ok(())
}

fn update_contact(store: &mut RecordStore<Contact>) -> Result<()> {
    let Some(position) = select_by_name(store, "update")? else {
        return Ok(());
    };
    let current = ContactForm::from_contact(&store.records()[position]);
    let edited = ContactForm {
        name: prompt_keep("Name", &current.name)?,
        phone: prompt_keep("Phone", &current.phone)?,
        email: prompt_keep("Email", &current.email)?,
        address: prompt_keep("Address", &current.address)?,
    };
    match apply_update(store, position, &edited) {
        Ok(()) => println!("\n{}\n", details(&store.records()[position])),
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
    Ok(())
}

fn apply_update(
    store: &mut RecordStore<Contact>,
    position: usize,
    form: &ContactForm,
) -> Result<(), StoreError> {
    let contact = form.build()?;
    store.update(position, contact).map(|_| ())
}

fn delete_contact(store: &mut RecordStore<Contact>) -> Result<()> {
    let Some(position) = select_by_name(store, "delete")? else {
        return Ok(());
    };
    let name = store.records()[position].name.clone();
    if !confirm(&format!("Are you sure you want to delete '{name}'?"))? {
        println!("Deletion cancelled.\n");
        return Ok(());
    }
    match store.remove(position) {
        Ok(_) => println!("Deleted '{name}'.\n"),
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
    Ok(())
}

fn save_contacts(store: &RecordStore<Contact>) {
    match store.save() {
        Ok(()) => println!("Contacts saved successfully!\n"),
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_by_name_overwrites_first_match() {
        let mut store = RecordStore::new("unused.json");
        store.add(Contact::new("Ann", "1")).unwrap();
        store.add(Contact::new("Ann", "2")).unwrap();

        let position = store.position_of("Ann").unwrap();
        let form = ContactForm {
            name: "Ann B".into(),
            phone: "9".into(),
            email: String::new(),
            address: String::new(),
        };
        apply_update(&mut store, position, &form).unwrap();

        assert_eq!(store.records()[0], Contact::new("Ann B", "9"));
        assert_eq!(store.records()[1], Contact::new("Ann", "2"));
    }

    #[test]
    fn update_with_blank_phone_is_rejected() {
        let mut store = RecordStore::new("unused.json");
        store.add(Contact::new("Ann", "1")).unwrap();
        let form = ContactForm {
            name: "Ann".into(),
            phone: " ".into(),
            ..Default::default()
        };
        assert!(apply_update(&mut store, 0, &form).is_err());
        assert_eq!(store.records()[0].phone, "1");
    }

    #[test]
    fn details_lists_every_field() {
        let c = Contact::new("Ann", "1")
            .with_email("a@example.com")
            .with_address("Main St");
        let text = details(&c);
        assert!(text.contains("Email:   a@example.com"));
        assert!(text.contains("Address: Main St"));
    }
}
