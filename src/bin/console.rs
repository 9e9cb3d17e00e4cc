// src/bin/console.rs
//! Interactive console for the trading simulator. All the business logic
//! lives in the library; this binary only reads lines, dispatches commands
//! and renders outcomes.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use rand::rngs::StdRng;

use stock_simulator::commands::{self, Command, Outcome};
use stock_simulator::display::{format_currency, number_to_words};
use stock_simulator::market::RngDeltas;
use stock_simulator::{Catalog, Portfolio, PriceMove, SimError, DEFAULT_SAVE_PATH};

const DEFAULT_CATALOG_PATH: &str = "stocks.txt";

fn main() {
    env_logger::init();

    let catalog_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());
    let catalog = match Catalog::from_path(Path::new(&catalog_path)) {
        Ok(catalog) => catalog,
        Err(SimError::CatalogSourceMissing) => {
            println!(
                "{}",
                format!("No catalog file at '{}'; starting with an empty market.", catalog_path)
                    .yellow()
            );
            Catalog::new()
        }
        Err(e) => {
            eprintln!("{}", format!("Could not read catalog: {}", e).red());
            std::process::exit(1);
        }
    };

    let mut portfolio = Portfolio::new(catalog);
    let mut deltas: RngDeltas<StdRng> = RngDeltas::from_entropy();
    let save_path = Path::new(DEFAULT_SAVE_PATH);

    clear_screen();
    println!("Welcome to the stock trading game!");
    print_status(&portfolio);

    let stdin = io::stdin();
    loop {
        print!("Enter a command (buy, sell, update, save, load, help, exit): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("{}", format!("input error: {}", e).red());
                break;
            }
        }

        let command = match Command::parse(line.trim()) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        match commands::execute(&mut portfolio, &command, &mut deltas, save_path) {
            Ok(Outcome::Exit) => {
                println!("Goodbye!");
                break;
            }
            Ok(outcome) => render(&portfolio, outcome),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

fn render(portfolio: &Portfolio, outcome: Outcome) {
    match outcome {
        Outcome::Bought(receipt) => {
            println!(
                "Bought {} {} share(s) at {} each ({} total).",
                receipt.quantity,
                receipt.display_name,
                format_currency(receipt.unit_price),
                format_currency(receipt.total)
            );
            println!("Balance: {}", format_currency(receipt.cash_after));
        }
        Outcome::Sold(receipt) => {
            println!(
                "Sold {} {} share(s) at {} each ({} total).",
                receipt.quantity,
                receipt.display_name,
                format_currency(receipt.unit_price),
                format_currency(receipt.total)
            );
            println!("Balance: {}", format_currency(receipt.cash_after));
        }
        Outcome::Updated(moves) => {
            println!("\nUpdate results:");
            for price_move in &moves {
                print_move(price_move);
            }
        }
        Outcome::Refreshed => {
            clear_screen();
            print_status(portfolio);
        }
        Outcome::Saved => println!("Game saved."),
        Outcome::Loaded => {
            println!("Game loaded.");
            print_status(portfolio);
        }
        Outcome::Help => print_help(),
        Outcome::Exit => unreachable!("handled by the caller"),
    }
}

fn print_status(portfolio: &Portfolio) {
    println!("\nBalance: {}", format_currency(portfolio.cash));
    if portfolio.cash >= 0 {
        println!("In words: {}", number_to_words(portfolio.cash as u128));
    }
    println!("\nMarket:");
    for inst in portfolio.catalog.iter() {
        let change = inst.percent_change();
        println!(
            "{} ({}): price {}, holding {} share(s), change {}",
            inst.display_name,
            inst.symbol,
            format_currency(inst.price),
            inst.held_shares,
            colorize_percent(change)
        );
    }
    println!();
}

fn print_move(price_move: &PriceMove) {
    println!(
        "{}: {} -> {} ({})",
        price_move.display_name,
        format_currency(price_move.old_price),
        format_currency(price_move.new_price),
        colorize_percent(price_move.percent_change())
    );
}

/// Gains red, losses blue, the way the ticker boards in Seoul do it.
fn colorize_percent(change: f64) -> String {
    let text = format!("{:+.2}%", change);
    if change > 0.0 {
        text.red().to_string()
    } else if change < 0.0 {
        text.blue().to_string()
    } else {
        text
    }
}

fn print_help() {
    println!("{}", "Help".cyan());
    println!(
        "{}: {}",
        "buy".cyan(),
        "buy <symbol> <quantity> buys shares at the current price".green()
    );
    println!(
        "{}: {}",
        "sell".cyan(),
        "sell <symbol> <quantity> sells shares you hold".green()
    );
    println!(
        "{}: {}",
        "update".cyan(),
        "update <count> runs that many market ticks and reports the move".green()
    );
    println!(
        "{}: {}",
        "save".cyan(),
        "save writes your balance, prices and holdings to save.txt".green()
    );
    println!(
        "{}: {}",
        "load".cyan(),
        "load restores a previously saved game".green()
    );
    println!("{}: {}", "exit".cyan(), "exit quits the game".green());
    println!("Anything else refreshes the market by one tick.");
}

fn clear_screen() {
    // ANSI clear + cursor home; good enough on every terminal we care about.
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}
