use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::{CmdMessage, MessageLevel, RoloApi};
use rolo::commands::count_label;
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::model::{Record, RecordDraft, RecordPatch};
use rolo::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RoloApi<FileStore>,
    config: RoloConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            email,
            phone,
            city,
        }) => handle_add(&mut ctx, name, email, phone, city),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Edit {
            id,
            name,
            email,
            phone,
            city,
        }) => handle_edit(&mut ctx, id, name, email, phone, city),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("ROLO_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "rolo", "rolo")
            .ok_or_else(|| RoloError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = RoloConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = if config.seed_sample_data {
        RoloApi::open(store)?
    } else {
        RoloApi::open_with(store, Vec::new())?
    };

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    email: String,
    phone: String,
    city: String,
) -> Result<()> {
    if name.is_empty() {
        return Err(RoloError::Api("Name cannot be empty".into()));
    }
    let draft = RecordDraft::new(name, email, phone, city);
    let result = ctx.api.create_record(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = if let Some(term) = search {
        ctx.api.search_records(&term)?
    } else {
        ctx.api.list_records()?
    };
    print_records(&result.listed_records);
    print_count(result.listed_records.len());
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.view_record(id)?;
    if !result.listed_records.is_empty() {
        print_records(&result.listed_records);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: u64,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    city: Option<String>,
) -> Result<()> {
    let existing = ctx.api.view_record(id)?;
    if existing.listed_records.is_empty() {
        print_messages(&existing.messages);
        return Ok(());
    }

    let patch = RecordPatch {
        name,
        email,
        phone,
        city,
    };
    if patch.is_empty() {
        println!("{}", "Nothing to update.".dimmed());
        return Ok(());
    }

    let result = ctx.api.update_record(id, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64, yes: bool) -> Result<()> {
    if !yes && !confirm("Are you sure you want to delete this user?")? {
        return Ok(());
    }
    let result = ctx.api.delete_record(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_records(&term)?;
    print_records(&result.listed_records);
    print_count(result.listed_records.len());
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_records(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file));
    let result = ctx.api.export_records(&target)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes
        && !confirm("Are you sure you want to clear all data? This action cannot be undone.")?
    {
        return Ok(());
    }
    let result = ctx.api.clear_records()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("export-file = {}", ctx.config.export_file);
            println!("seed-sample-data = {}", ctx.config.seed_sample_data);
        }
        (Some("export-file"), None) => {
            println!("export-file = {}", ctx.config.export_file);
        }
        (Some("export-file"), Some(v)) => {
            ctx.config.export_file = v;
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "Config updated.".green());
        }
        (Some("seed-sample-data"), None) => {
            println!("seed-sample-data = {}", ctx.config.seed_sample_data);
        }
        (Some("seed-sample-data"), Some(v)) => {
            ctx.config.seed_sample_data = v
                .parse()
                .map_err(|_| RoloError::Api(format!("Expected true or false, got: {}", v)))?;
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "Config updated.".green());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(RoloError::Io)?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).map_err(RoloError::Io)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const HEADERS: [&str; 5] = ["ID", "NAME", "EMAIL", "PHONE", "CITY"];

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("{}", "No users found".dimmed());
        return;
    }

    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.name.clone(),
                r.email.clone(),
                r.phone.clone(),
                r.city.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.width();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    println!("{}", format_row(&HEADERS.map(String::from), &widths).bold());
    for row in &rows {
        println!("{}", format_row(row, &widths));
    }
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        // Pad by display width, not char count
        let padding = widths[i].saturating_sub(cell.width()) + 2;
        if i < cells.len() - 1 {
            line.push_str(&" ".repeat(padding));
        }
    }
    line
}

fn print_count(count: usize) {
    println!("{}", count_label(count).dimmed());
}
