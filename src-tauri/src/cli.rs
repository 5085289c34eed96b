// Celebrity List CLI binary

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use celebrity_list_lib::celebrities::age;
use celebrity_list_lib::celebrities::view::{ListView, RowView};
use celebrity_list_lib::celebrities::{
    CelebrityList, EditableField, FileSource, LoadState, Prompt, Toggle,
};
use celebrity_list_lib::constants::GENDER_OPTIONS;
use celebrity_list_lib::settings;

#[derive(Parser)]
#[command(name = "celebs")]
#[command(about = "Celebrity List - browse, search and edit celebrity profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Celebrity JSON document (defaults to settings, then ./celebrities.json)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List celebrities
    List {
        /// Only names containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one celebrity's details
    Show {
        /// Celebrity ID
        id: i64,
    },

    /// Interactive session: search, expand, edit and delete
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let data_path = settings::load_settings().resolve_data_path(cli.data.as_deref());

    match cli.command {
        Commands::List { search } => cmd_list(&data_path, search),
        Commands::Show { id } => cmd_show(&data_path, id),
        Commands::Shell => cmd_shell(&data_path),
    }
}

fn cmd_list(data_path: &Path, search: Option<String>) -> Result<()> {
    let mut list = open_list(data_path)?;
    if let Some(query) = search {
        list.set_search(&query);
    }

    let visible = list.visible();
    if visible.is_empty() {
        println!("No celebrities match.");
        return Ok(());
    }

    println!("{:>5}  {:>4}  {:<28}  {:<16}  {}", "ID", "Age", "Name", "Gender", "Country");
    println!("{}", "-".repeat(72));

    let today = list.clock().today();
    for celeb in &visible {
        let age = age::age_on(&celeb.dob, today)
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "-".to_string());

        println!("{:>5}  {:>4}  {:<28}  {:<16}  {}",
            celeb.id,
            age,
            truncate(&celeb.full_name(), 28),
            truncate(&celeb.gender, 16),
            celeb.country
        );
    }

    if visible.len() < list.records().len() {
        println!();
        println!("Showing {} of {} celebrities.", visible.len(), list.records().len());
    }

    Ok(())
}

fn cmd_show(data_path: &Path, id: i64) -> Result<()> {
    let mut list = open_list(data_path)?;
    list.toggle_details(id)?;

    let view = list.view();
    let row = view.rows.iter()
        .find(|r| r.id == id)
        .ok_or_else(|| anyhow::anyhow!("Celebrity {} not found", id))?;

    print_row(row);
    Ok(())
}

fn cmd_shell(data_path: &Path) -> Result<()> {
    let mut list = CelebrityList::new();
    list.load(&FileSource::new(data_path));
    if let LoadState::Failed(reason) = list.load_state() {
        // Keep going with an empty list, the same as a page whose fetch failed
        eprintln!("Could not load {}: {}", data_path.display(), reason);
    }

    let prompt = TerminalPrompt;
    print_view(&list.view());
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match run_shell_line(&mut list, &prompt, line) {
            Ok(ShellStep::Quit) => break,
            Ok(ShellStep::Help) => print_help(),
            Ok(ShellStep::Redraw(notice)) => {
                if let Some(notice) = notice {
                    println!("{}", notice);
                }
                print_view(&list.view());
            }
            Ok(ShellStep::Notice(notice)) => println!("{}", notice),
            Err(e) => println!("Error: {}", e),
        }
    }

    Ok(())
}

/// What the shell does after one input line
#[derive(Debug, PartialEq)]
enum ShellStep {
    Quit,
    Help,
    /// Print the list again, after an optional message
    Redraw(Option<String>),
    /// Message only; the list is unchanged
    Notice(String),
}

/// Apply one shell line to the list
fn run_shell_line(list: &mut CelebrityList, prompt: &dyn Prompt, line: &str) -> Result<ShellStep> {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let step = match command {
        "quit" | "exit" => ShellStep::Quit,
        "help" => ShellStep::Help,
        "list" | "ls" => ShellStep::Redraw(None),
        "search" => {
            list.set_search(rest);
            ShellStep::Redraw(None)
        }
        "toggle" => {
            let id = parse_id(rest)?;
            match list.toggle_details(id)? {
                Toggle::Blocked => ShellStep::Redraw(Some(format!(
                    "Finish editing #{} first (save or cancel).",
                    list.editing_id().unwrap_or_default()
                ))),
                _ => ShellStep::Redraw(None),
            }
        }
        "edit" => {
            list.start_edit(parse_id(rest)?, prompt)?;
            ShellStep::Redraw(None)
        }
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            list.update_field(field.parse::<EditableField>()?, value.trim())?;
            ShellStep::Redraw(None)
        }
        "save" => {
            let saved = list.save_edit()?;
            ShellStep::Redraw(Some(format!("Saved #{} {}", saved.id, saved.full_name())))
        }
        "cancel" => {
            list.cancel_edit();
            ShellStep::Redraw(None)
        }
        "delete" => {
            let id = parse_id(rest)?;
            if list.confirm_delete(id, prompt)? {
                ShellStep::Redraw(None)
            } else {
                ShellStep::Redraw(Some(format!("Kept #{}.", id)))
            }
        }
        other => ShellStep::Notice(format!("Unknown command '{}'. Type 'help' for commands.", other)),
    };
    Ok(step)
}

/// Blocking prompts on the terminal
struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        println!("!! {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

// --- Helper Functions ---

/// Load the document or fail; one-shot commands have nothing to show without data
fn open_list(data_path: &Path) -> Result<CelebrityList> {
    let mut list = CelebrityList::new();
    if let LoadState::Failed(reason) = list.load(&FileSource::new(data_path)) {
        anyhow::bail!("Could not load {}: {}", data_path.display(), reason);
    }
    Ok(list)
}

fn parse_id(arg: &str) -> Result<i64> {
    arg.parse::<i64>()
        .map_err(|_| anyhow::anyhow!("Expected a celebrity ID, got '{}'", arg))
}

fn print_view(view: &ListView) {
    println!();
    if view.query.is_empty() {
        println!("{} celebrities", view.total);
    } else {
        println!("Search '{}': {} of {} celebrities", view.query, view.visible, view.total);
    }
    println!("{}", "-".repeat(60));

    for row in &view.rows {
        print_row(row);
    }
}

fn print_row(row: &RowView) {
    println!("{} #{:<5} {}", row.indicator, row.id, row.name);

    let Some(ref details) = row.details else {
        return;
    };

    if let Some(ref draft) = row.draft {
        let record = &draft.record;
        println!("    [editing{}]", if draft.dirty { ", unsaved changes" } else { "" });
        println!("    first:       {}", record.first);
        println!("    last:        {}", record.last);
        println!("    dob:         {}", record.dob);
        println!("    gender:      {}   ({})", record.gender, GENDER_OPTIONS.join(" / "));
        println!("    country:     {}", record.country);
        println!("    description: {}", record.description);
        println!("    -> set <field> <value> | save | cancel");
        return;
    }

    println!("    Age:     {}", details.age_label);
    println!("    Gender:  {}", details.gender);
    println!("    Country: {}", details.country);
    if !row.picture.is_empty() {
        println!("    Photo:   {}", row.picture);
    }
    println!("    Description:");
    println!("      {}", details.description);
    if details.can_edit {
        println!("    -> edit {} | delete {}", row.id, row.id);
    } else {
        println!("    -> delete {}", row.id);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list                  Show the list");
    println!("  search <text>         Filter by first/last name (empty clears)");
    println!("  toggle <id>           Expand or collapse a row");
    println!("  edit <id>             Edit a celebrity (adults only)");
    println!("  set <field> <value>   Change a draft field: first, last, dob, gender, country, description");
    println!("  save | cancel         Finish the edit");
    println!("  delete <id>           Delete a celebrity (asks first)");
    println!("  quit                  Leave");
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celebrity_list_lib::celebrities::{Celebrity, Clock, ScriptedPrompt, StaticSource};
    use chrono::NaiveDate;

    fn celeb(id: i64, first: &str, last: &str, dob: &str) -> Celebrity {
        Celebrity {
            id,
            first: first.to_string(),
            last: last.to_string(),
            dob: dob.to_string(),
            gender: "male".to_string(),
            email: String::new(),
            picture: String::new(),
            country: "Chile".to_string(),
            description: String::new(),
        }
    }

    fn shell_list() -> CelebrityList {
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let mut list = CelebrityList::with_clock(Clock::Fixed(today));
        list.load(&StaticSource(vec![
            celeb(1, "Aidan", "Wang", "1973-10-16"),
            celeb(2, "Tilly", "Young", "2010-03-01"),
            celeb(3, "Dana", "Scott", "1988-12-02"),
        ]));
        list
    }

    #[test]
    fn test_shell_edit_session() {
        let mut list = shell_list();
        let prompt = ScriptedPrompt::new();

        assert_eq!(run_shell_line(&mut list, &prompt, "edit 1").unwrap(), ShellStep::Redraw(None));
        // value keeps its inner spaces
        run_shell_line(&mut list, &prompt, "set description  Actor and  producer ").unwrap();
        run_shell_line(&mut list, &prompt, "set gender FEMALE").unwrap();
        assert!(run_shell_line(&mut list, &prompt, "set email a@b.c").is_err());

        assert_eq!(
            run_shell_line(&mut list, &prompt, "toggle 3").unwrap(),
            ShellStep::Redraw(Some("Finish editing #1 first (save or cancel).".to_string()))
        );
        assert_eq!(
            run_shell_line(&mut list, &prompt, "save").unwrap(),
            ShellStep::Redraw(Some("Saved #1 Aidan Wang".to_string()))
        );

        let saved = list.get(1).unwrap();
        assert_eq!(saved.description, "Actor and  producer");
        assert_eq!(saved.gender, "Female");
        assert!(list.editing_id().is_none());
    }

    #[test]
    fn test_shell_refusals_and_delete() {
        let mut list = shell_list();
        let prompt = ScriptedPrompt::answering([false, true]);

        assert!(run_shell_line(&mut list, &prompt, "edit 2").is_err());
        assert_eq!(prompt.alerts().len(), 1);
        assert!(run_shell_line(&mut list, &prompt, "toggle two").is_err());

        assert_eq!(
            run_shell_line(&mut list, &prompt, "delete 3").unwrap(),
            ShellStep::Redraw(Some("Kept #3.".to_string()))
        );
        assert_eq!(run_shell_line(&mut list, &prompt, "delete 3").unwrap(), ShellStep::Redraw(None));
        assert!(list.get(3).is_none());
        assert_eq!(prompt.questions().len(), 2);
    }

    #[test]
    fn test_shell_search_and_control_words() {
        let mut list = shell_list();
        let prompt = ScriptedPrompt::new();

        run_shell_line(&mut list, &prompt, "search  wan").unwrap();
        assert_eq!(list.search(), "wan");
        assert_eq!(list.visible().len(), 1);

        assert_eq!(run_shell_line(&mut list, &prompt, "help").unwrap(), ShellStep::Help);
        assert_eq!(run_shell_line(&mut list, &prompt, "exit").unwrap(), ShellStep::Quit);
        assert!(matches!(
            run_shell_line(&mut list, &prompt, "frobnicate 1").unwrap(),
            ShellStep::Notice(_)
        ));
    }
}
