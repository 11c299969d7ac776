//! `deskkit todo`: numbered menu loop over todo.json.
//!
//! Bad priority or due date input is reported and dropped rather than
//! failing the whole add.

use anyhow::Result;
use deskkit_core::{
    FieldPolicy, Priority, RecordStore, StoreError, Task, TaskForm, TaskSummary, parse_due_date,
    paths::TODO_FILE,
};

use crate::config::Config;
use crate::prompt::{
    clear_screen, confirm, pause, prompt, prompt_keep, prompt_number, store_error_message,
};

/// Typed at an edit prompt to clear an optional field.
const CLEAR: &str = "-";

pub fn run(cfg: &Config) -> Result<()> {
    let (mut store, err) = RecordStore::<Task>::open(TODO_FILE);
    match err {
        Some(e) => println!("{e}\nStarting with an empty list.\n"),
        None if !store.path().exists() => {
            println!("No existing to-do list found. Starting with an empty list.\n")
        }
        None => {}
    }

    loop {
        clear_screen(cfg.display.clear_screen)?;
        display_tasks(&store);

        println!("Available actions:");
        println!("1. Add task");
        println!("2. View tasks");
        println!("3. Mark as complete");
        println!("4. Delete task");
        println!("5. Edit task");
        println!("6. Save tasks");
        println!("7. Exit");

        match prompt_number("Enter your choice")? {
            Some(1) => add_task(&mut store)?,
            Some(2) => {}
            Some(3) => mark_complete(&mut store)?,
            Some(4) => delete_task(&mut store)?,
            Some(5) => edit_task(&mut store)?,
            Some(6) => save_tasks(&store),
            Some(7) => {
                println!("Exiting the to-do list application. Goodbye!\n");
                break;
            }
            _ => println!("Invalid choice. Please enter a number from the menu.\n"),
        }

        pause()?;
    }

    Ok(())
}

pub fn task_line(position: usize, task: &Task) -> String {
    let mut line = format!(
        "{}. {} {}",
        position + 1,
        task.status_marker(),
        task.description
    );
    if let Some(p) = task.priority {
        line.push_str(&format!(" (Priority: {p})"));
    }
    if let Some(d) = &task.due_date {
        line.push_str(&format!(" (Due: {d})"));
    }
    if !task.tags.is_empty() {
        line.push_str(&format!(" (Tags: {})", task.tags.join(", ")));
    }
    line
}

fn summary_line(summary: TaskSummary) -> String {
    format!(
        "Total tasks: {}, Completed: {}, Pending: {}",
        summary.total,
        summary.completed,
        summary.pending()
    )
}

fn display_tasks(store: &RecordStore<Task>) {
    if store.is_empty() {
        println!("\nYour to-do list is empty!\n");
        return;
    }

    println!("\n--- Your To-Do List ---");
    println!("{}", summary_line(store.summary()));
    for (i, task) in store.records().iter().enumerate() {
        println!("{}", task_line(i, task));
    }
    println!("-----------------------\n");
}

/// Ask for a 1-based task number; None (with a message) if it isn't one.
fn pick_task(store: &RecordStore<Task>, action: &str) -> Result<Option<usize>> {
    display_tasks(store);
    if store.is_empty() {
        return Ok(None);
    }
    let position = prompt_number(&format!("Enter the number of the task to {action}"))?
        .and_then(|n| n.checked_sub(1))
        .filter(|&p| p < store.len());
    if position.is_none() {
        println!("Invalid task number. Please enter a number from the list.\n");
    }
    Ok(position)
}

fn report_invalid_optionals(form: &TaskForm) {
    let priority = form.priority.trim();
    if !priority.is_empty() && Priority::parse(priority).is_none() {
        println!("Invalid priority level.\n");
    }
    let due = form.due_date.trim();
    if !due.is_empty() && parse_due_date(due).is_none() {
        println!("Invalid date format. Please use YYYY-MM-DD.\n");
    }
}

fn add_task(store: &mut RecordStore<Task>) -> Result<()> {
    let description = prompt("Enter the task description")?;
    if description.is_empty() {
        println!("Task description cannot be empty.\n");
        return Ok(());
    }

    let form = TaskForm {
        description,
        priority: prompt("Enter priority (High, Medium, Low, or leave blank)")?,
        due_date: prompt("Enter due date (YYYY-MM-DD or leave blank)")?,
        tags: prompt("Enter tags (comma-separated, or leave blank)")?,
        completed: false,
    };
    report_invalid_optionals(&form);

    match form
        .build(FieldPolicy::Discard)
        .and_then(|task| store.add(task))
    {
        Ok(position) => {
            let added = &store.records()[position];
            println!("Task '{}' added successfully!\n", added.description);
        }
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
    Ok(())
}

fn mark_complete(store: &mut RecordStore<Task>) -> Result<()> {
    let Some(position) = pick_task(store, "mark as complete")? else {
        return Ok(());
    };
    match store.mark_complete(position) {
        Ok(()) => println!(
            "Task '{}' marked as complete!\n",
            store.records()[position].description
        ),
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
    Ok(())
}

fn delete_task(store: &mut RecordStore<Task>) -> Result<()> {
    let Some(position) = pick_task(store, "delete")? else {
        return Ok(());
    };
    let description = store.records()[position].description.clone();
    if !confirm(&format!(
        "Are you sure you want to delete task '{description}'?"
    ))? {
        println!("Deletion cancelled.\n");
        return Ok(());
    }
    match store.remove(position) {
        Ok(removed) => println!("Task '{}' deleted successfully!\n", removed.description),
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
    Ok(())
}

fn edit_task(store: &mut RecordStore<Task>) -> Result<()> {
    let Some(position) = pick_task(store, "edit")? else {
        return Ok(());
    };
    let current = TaskForm::from_task(&store.records()[position]);
    println!("\nEditing task: {}", current.description);
    println!("(enter '{CLEAR}' to clear priority, due date or tags)");

    let edited = TaskForm {
        description: prompt_keep("Enter new description", &current.description)?,
        priority: keep_or_clear(prompt_keep(
            "Enter new priority (High, Medium, Low)",
            &current.priority,
        )?),
        due_date: keep_or_clear(prompt_keep(
            "Enter new due date (YYYY-MM-DD)",
            &current.due_date,
        )?),
        tags: keep_or_clear(prompt_keep(
            "Enter new tags (comma-separated)",
            &current.tags,
        )?),
        completed: current.completed,
    };

    let merged = merge_edit(&current, edited);
    match apply_edit(store, position, &merged) {
        Ok(()) => println!("Task updated successfully!\n"),
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
    Ok(())
}

fn keep_or_clear(answer: String) -> String {
    if answer.trim() == CLEAR {
        String::new()
    } else {
        answer
    }
}

/// An invalid new priority or due date is reported and the old value kept.
fn merge_edit(current: &TaskForm, mut edited: TaskForm) -> TaskForm {
    report_invalid_optionals(&edited);
    let priority = edited.priority.trim();
    if !priority.is_empty() && Priority::parse(priority).is_none() {
        edited.priority = current.priority.clone();
    }
    let due = edited.due_date.trim();
    if !due.is_empty() && parse_due_date(due).is_none() {
        edited.due_date = current.due_date.clone();
    }
    edited
}

fn apply_edit(
    store: &mut RecordStore<Task>,
    position: usize,
    form: &TaskForm,
) -> Result<(), StoreError> {
    let task = form.build(FieldPolicy::Discard)?;
    store.update(position, task).map(|_| ())
}

fn save_tasks(store: &RecordStore<Task>) {
    match store.save() {
        Ok(()) => println!("Tasks saved to {}\n", store.path().display()),
        Err(e) => println!("{}\n", store_error_message(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_line_shows_optional_parts() {
        let t = Task::new("Buy milk")
            .with_priority(Priority::High)
            .with_due_date("2024-01-01")
            .with_tags(["errand", "shop"]);
        assert_eq!(
            task_line(0, &t),
            "1. [ ] Buy milk (Priority: High) (Due: 2024-01-01) (Tags: errand, shop)"
        );
        assert_eq!(task_line(4, &Task::new("x").completed(true)), "5. [X] x");
    }

    #[test]
    fn edit_keeps_old_value_for_invalid_input() {
        let current = TaskForm::from_task(
            &Task::new("a")
                .with_priority(Priority::Low)
                .with_due_date("2024-05-05"),
        );
        let edited = TaskForm {
            priority: "asap".into(),
            due_date: "soon".into(),
            ..current.clone()
        };
        let merged = merge_edit(&current, edited);
        assert_eq!(merged.priority, "Low");
        assert_eq!(merged.due_date, "2024-05-05");
    }

    #[test]
    fn edit_replaces_whole_task() {
        let mut store = RecordStore::new("unused.json");
        store
            .add(Task::new("a").with_tags(["old"]).completed(true))
            .unwrap();
        let form = TaskForm {
            description: "b".into(),
            priority: "medium".into(),
            due_date: String::new(),
            tags: String::new(),
            completed: true,
        };
        apply_edit(&mut store, 0, &form).unwrap();
        assert_eq!(
            store.records(),
            &[Task::new("b").with_priority(Priority::Medium).completed(true)]
        );
    }

    #[test]
    fn clear_marker_empties_field() {
        assert_eq!(keep_or_clear(" - ".into()), "");
        assert_eq!(keep_or_clear("High".into()), "High");
    }

    #[test]
    fn summary_line_counts_pending() {
        let tasks = [Task::new("a").completed(true), Task::new("b"), Task::new("c")];
        assert_eq!(
            summary_line(TaskSummary::of(&tasks)),
            "Total tasks: 3, Completed: 1, Pending: 2"
        );
    }
}
