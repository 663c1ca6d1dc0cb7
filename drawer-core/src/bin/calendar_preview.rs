//! Text preview of the entry drawer.
//!
//! ```text
//! calendar_preview [--config drawer.yaml] [--month 2024-04] [--select 2024-04-10]
//!                  [--keys 12,5] [--json] [--save] [--write-config drawer.yaml]
//! ```
//!
//! Logging follows `RUST_LOG`, e.g. `RUST_LOG=debug calendar_preview`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use drawer_core::{today_local, DrawerConfig, EntryController, LoggingSink, YearMonth};
use log::info;
use std::path::PathBuf;

/// Render the entry drawer's calendar as text or JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML drawer config. Defaults are used if the file doesn't exist.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Month to page the calendar to, as YYYY-MM. Defaults to the month of
    /// `--select`, or the current month.
    #[arg(long)]
    month: Option<YearMonth>,

    /// Date to select, as YYYY-MM-DD.
    #[arg(long)]
    select: Option<NaiveDate>,

    /// Keys to type on the amount keypad before rendering.
    #[arg(long, default_value = "")]
    keys: String,

    /// Print the state and grid as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Save the entry to a logging sink after rendering.
    #[arg(long)]
    save: bool,

    /// Write the effective config to this YAML file.
    #[arg(long)]
    write_config: Option<PathBuf>,
}

/// Page the open calendar until it shows `target`
fn page_to(controller: &mut EntryController, target: YearMonth) {
    let current = controller.state().reference_month;
    let delta = (target.year() - current.year()) * 12 + target.month() as i32 - current.month() as i32;

    for _ in 0..delta.unsigned_abs() {
        if delta > 0 {
            controller.next_month();
        } else {
            controller.previous_month();
        }
    }
}

fn render_text(controller: &EntryController) -> String {
    let mut out = String::new();
    let grid = controller.calendar_grid();

    out.push_str(&format!("{:^28}\n", controller.month_title()));
    for label in controller.weekday_labels() {
        out.push_str(&format!("{:^4}", label));
    }
    out.push('\n');

    for week in &grid.rows {
        for cell in week {
            let day = cell.date.format("%d").to_string();
            let text = if cell.is_selected {
                format!("[{}]", day)
            } else if cell.is_today {
                format!("({})", day)
            } else if cell.in_current_month {
                format!(" {} ", day)
            } else {
                format!(" {}·", day)
            };
            out.push_str(&text);
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} | {} | sheet {}\n",
        controller.date_label(),
        controller.amount_display(),
        controller.snap_point()
    ));
    out
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config_path {
        Some(path) => DrawerConfig::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => DrawerConfig::default(),
    };

    let today = today_local();
    info!("Starting calendar preview for {}", today);
    let mut controller = EntryController::new_entry(today, config);

    for key in args.keys.chars() {
        controller.type_key(key);
    }
    if let Some(date) = args.select {
        controller.select_date(date);
    }

    controller.open_calendar();
    if let Some(month) = args.month.or(args.select.map(YearMonth::containing)) {
        page_to(&mut controller, month);
    }

    if args.json {
        let preview = serde_json::json!({
            "state": controller.snapshot(),
            "grid": controller.visible_grid(),
            "month_title": controller.month_title(),
            "weekdays": controller.weekday_labels(),
        });
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        print!("{}", render_text(&controller));
    }

    if let Some(path) = &args.write_config {
        controller
            .config()
            .save(path)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        info!("Wrote drawer config to {:?}", path);
    }

    if args.save {
        controller.close_to_keypad();
        let entry = controller.save(&mut LoggingSink);
        println!("saved {} on {}", entry.amount_text, entry.date);
    }

    Ok(())
}
