use chrono::{Datelike, Local, NaiveDate};
use colored::*;
use comfy_table::{ContentArrangement, Table, presets};
use libunipolmove::{ApiError, EnvConfig, LAST_YEAR, Movement, MovementQuery, UnipolMoveClient};
use std::path::PathBuf;

fn movements_table(movements: &[Movement]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_header(vec!["#", "Date", "From", "To", "EUR"]);
    for (i, movement) in movements.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            movement.resolved_date().unwrap_or("N/A").to_string(),
            movement.entry_point_display(),
            movement.exit_point_display(),
            movement.amount_display(),
        ]);
    }
    table
}

fn run(env: EnvConfig) -> Result<(), ApiError> {
    println!("{}", libunipolmove::build_info().to_string().bright_cyan());
    println!("  Contract: {}", env.contract_id);
    let mut client = UnipolMoveClient::new(env.contract_id.clone())?;

    println!("{}", "🔐 LOGIN".bright_green().bold());
    if !client.login(&env.username, &env.password)? {
        println!("  {}", "✗ Invalid credentials or missing cookies".red());
        return Ok(());
    }
    println!("  {}", "✓ Login successful!".green());

    println!("{}", "📥 MOVEMENTS".bright_blue().bold());
    let movements = client.fetch_all_movements(client.config().page_size, LAST_YEAR)?;
    println!("  Found {} movements", movements.len());
    if !movements.is_empty() {
        let shown = &movements[..movements.len().min(3)];
        println!("{}", movements_table(shown));
    }

    let today = Local::now().date_naive();
    let start_of_month =
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let filtered = client.filter_movements_by_date(&movements, start_of_month, today);
    println!(
        "  {} movements between {} and {}",
        filtered.len(),
        start_of_month,
        today
    );

    if filtered.is_empty() {
        println!("  {}", "No movements this month, skipping report".dimmed());
    } else {
        println!("{}", "🧾 REPORT".bright_magenta().bold());
        let path = PathBuf::from(format!("expense_report_{}.pdf", today.format("%Y%m%d")));
        let pdf = client.generate_pdf_report(&filtered, &env.recipient, Some(&path))?;
        println!("  {} {:?} ({} bytes)", "✓ Saved".green(), path, pdf.len());
    }

    println!("{}", "📄 SINGLE PAGE".bright_yellow().bold());
    let query = MovementQuery::builder(client.config())
        .offset(1)
        .limit(10)
        .interval(LAST_YEAR)
        .build();
    let page = client.fetch_movements(&query)?;
    println!("  Fetched {} movements", page.movements.len());
    Ok(())
}

fn main() {
    env_logger::init();
    let env = match EnvConfig::load() {
        Ok(env) => env,
        Err(e) => {
            eprintln!("{} {}", "Configuration error:".red().bold(), e);
            eprintln!("Set UNIPOL_CONTRACT_ID, UNIPOL_USERNAME, UNIPOL_PASSWORD and REPORT_RECIPIENT");
            std::process::exit(2);
        }
    };
    if let Err(e) = run(env) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
