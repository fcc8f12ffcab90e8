use std::io::{self, BufRead, Write};
use ticklist_core::{Clock, ListFilter, TaskStore};

use crate::actions;

const BANNER: &str = "
    ==========================================
                  Ticklist
    ==========================================
    Organize your tasks with ease and efficiency.
";

const MENU: &str = "\n=== Task Manager Menu ===
1. Add Task
2. Mark Task Completed
3. Delete Task
4. View All Tasks
5. View Incomplete Tasks
6. Exit";

/// Print `label`, read one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

/// Run the interactive loop until "Exit" or end of input.
pub fn run_menu<C, R, W>(store: &mut TaskStore<C>, input: &mut R, out: &mut W) -> io::Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{BANNER}")?;

    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "Select an option (1-6): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(description) = prompt(input, out, "Enter task description: ")? else {
                    break;
                };
                if description.is_empty() {
                    writeln!(out, "Error: Task description cannot be empty.")?;
                    continue;
                }
                let Some(category) = prompt(
                    input,
                    out,
                    "Enter category (e.g., Work, Personal, or press Enter for General): ",
                )?
                else {
                    break;
                };
                let Some(due) = prompt(
                    input,
                    out,
                    "Enter due date (YYYY-MM-DD, or press Enter to skip): ",
                )?
                else {
                    break;
                };
                actions::add(store, out, &description, &category, &due)?;
            }
            "2" | "3" => {
                let label = if choice == "2" {
                    "Enter task ID to mark as completed: "
                } else {
                    "Enter task ID to delete: "
                };
                let Some(raw) = prompt(input, out, label)? else {
                    break;
                };
                let Some(id) = actions::parse_id(&raw) else {
                    writeln!(out, "Error: Please enter a valid numeric ID.")?;
                    continue;
                };
                if choice == "2" {
                    actions::complete(store, out, id)?;
                } else {
                    actions::delete(store, out, id)?;
                }
            }
            "4" => actions::list(store, out, ListFilter::All)?,
            "5" => actions::list(store, out, ListFilter::Incomplete)?,
            "6" => {
                writeln!(out, "Thank you for using Ticklist.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid option. Please select 1-6.")?,
        }
    }

    writeln!(out)?;
    Ok(())
}
