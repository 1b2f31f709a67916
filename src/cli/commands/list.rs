use super::open_book;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::TotalScope;
use crate::errors::AppResult;
use crate::models::VehicleRecord;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, RESET, colorize_hours};
use crate::utils::format_hours;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

/// `list` and `total`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::List { vehicle } => {
            let book = open_book(cfg, None)?;

            let vehicles: Vec<&VehicleRecord> = match vehicle {
                Some(ident) => vec![book.find_vehicle(ident)?],
                None => book.vehicles().iter().collect(),
            };

            if vehicles.is_empty() {
                info("No vehicles recorded yet.");
                return Ok(());
            }

            println!("{}", render_vehicles(&vehicles, cfg.separator()));

            if vehicle.is_none() {
                print_current_total(book.current_total(), cfg.total_scope, &book.today());
            }
        }

        Commands::Total { vehicle } => {
            let book = open_book(cfg, None)?;

            match vehicle {
                Some(ident) => {
                    let v = book.find_vehicle(ident)?;
                    let total = book.total_hours_for(v.id)?;
                    println!("{}: {} h", v.identifier, format_hours(total));
                }
                None => {
                    print_current_total(book.current_total(), cfg.total_scope, &book.today());
                    if cfg.total_scope == TotalScope::Dated {
                        println!("Lifetime: {} h", format_hours(book.total_hours_all()));
                    }
                }
            }
        }

        _ => {}
    }

    Ok(())
}

/// One row per entry: identifier, entry number, date, hours, vehicle total.
pub fn render_vehicles(vehicles: &[&VehicleRecord], separator: char) -> String {
    let mut table = Table::new(vec![
        Column::left("Vehicle"),
        Column::right("#"),
        Column::left("Date"),
        Column::right("Hours"),
        Column::right("Vehicle total"),
    ])
    .with_separator(separator);

    for v in vehicles {
        let total = format_hours(v.total_hours());
        for (i, r) in v.records.iter().enumerate() {
            table.add_row(vec![
                v.identifier.to_string(),
                (i + 1).to_string(),
                r.date.clone(),
                format_hours(r.hours),
                total.clone(),
            ]);
        }
    }

    table.render()
}

fn print_current_total(total: f64, scope: TotalScope, today: &str) {
    let label = match scope {
        TotalScope::Lifetime => "Total hours".to_string(),
        TotalScope::Dated => format!("Total hours on {}", today),
    };
    let value = colorize_hours(total, &format_hours(total));
    println!("{}: {}{}{} h", bold(&label), GREEN, value, RESET);
}
