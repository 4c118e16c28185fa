//! Interactive project shell
//!
//! One line per command. Multi-word arguments of `add` and `dns` are
//! separated by `|`, e.g. `add Single pipe | 1 | 100 | 12 | 3`.

use std::io::{self, BufRead, Write};

use application::ProjectCalculator;
use thiserror::Error;
use tracing::debug;

use crate::render;

pub const HELP: &str = "\
Commands:
  company <text>                      set the company name
  name <text>                         set the project name
  location <text>                     set the project location
  budget <kg>                         set the CO2 budget (0 disables it)
  types                               list product types
  series <type>                       list series of a product type
  dns <type> | <series>               list DN values
  add <type> | <series> | <dn> | [length m] | <quantity>
                                      add a product; blank length uses the catalog default
  remove <n>                          remove line item n
  clear                               remove every line item
  list                                show the project
  help                                show this help
  quit                                leave the shell";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Empty,
    Help,
    List,
    Clear,
    Quit,
    Company(String),
    Name(String),
    Location(String),
    Budget(f64),
    Types,
    Series(String),
    Dimensions {
        product_type: String,
        series: String,
    },
    Add {
        product_type: String,
        series: String,
        dn: String,
        length_m: Option<f64>,
        quantity: u32,
    },
    /// 1-based position as shown by `list`
    Remove(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    #[error("Missing {0}")]
    MissingArgument(&'static str),

    #[error("Invalid {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Parse one input line
pub fn parse_line(line: &str) -> Result<ShellCommand, ParseError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    match word.to_lowercase().as_str() {
        "" => Ok(ShellCommand::Empty),
        "help" | "?" => Ok(ShellCommand::Help),
        "list" | "ls" => Ok(ShellCommand::List),
        "clear" => Ok(ShellCommand::Clear),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        "company" => Ok(ShellCommand::Company(rest.to_string())),
        "name" => Ok(ShellCommand::Name(rest.to_string())),
        "location" => Ok(ShellCommand::Location(rest.to_string())),
        "budget" => Ok(ShellCommand::Budget(number(required(rest, "budget")?, "budget")?)),
        "types" => Ok(ShellCommand::Types),
        "series" => Ok(ShellCommand::Series(required(rest, "product type")?.to_string())),
        "dns" => {
            let mut parts = fields(rest);
            Ok(ShellCommand::Dimensions {
                product_type: next_field(&mut parts, "product type")?,
                series: next_field(&mut parts, "series")?,
            })
        },
        "add" => parse_add(rest),
        "remove" | "rm" => {
            let value = required(rest, "line number")?;
            value
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(ShellCommand::Remove)
                .ok_or_else(|| ParseError::InvalidNumber {
                    field: "line number",
                    value: value.to_string(),
                })
        },
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_add(rest: &str) -> Result<ShellCommand, ParseError> {
    let mut parts = fields(rest);
    let product_type = next_field(&mut parts, "product type")?;
    let series = next_field(&mut parts, "series")?;
    let dn = next_field(&mut parts, "DN")?;

    let (length, quantity) = match (parts.next(), parts.next()) {
        (Some(length), Some(quantity)) => (length, quantity),
        (Some(quantity), None) => ("", quantity),
        _ => return Err(ParseError::MissingArgument("quantity")),
    };

    let length_m = if length.is_empty() {
        None
    } else {
        Some(number(length, "length")?)
    };
    let quantity = quantity
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumber {
            field: "quantity",
            value: quantity.to_string(),
        })?;

    Ok(ShellCommand::Add {
        product_type,
        series,
        dn,
        length_m,
        quantity,
    })
}

fn fields(rest: &str) -> impl Iterator<Item = &str> {
    rest.split('|').map(str::trim)
}

fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<String, ParseError> {
    parts
        .next()
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .ok_or(ParseError::MissingArgument(name))
}

fn required<'a>(rest: &'a str, name: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(name))
    } else {
        Ok(rest)
    }
}

fn number(value: &str, field: &'static str) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Apply a command; returns `false` when the shell should stop
pub fn execute<W: Write>(
    calc: &mut ProjectCalculator,
    command: ShellCommand,
    out: &mut W,
) -> io::Result<bool> {
    match command {
        ShellCommand::Empty => {},
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => return Ok(false),
        ShellCommand::List => writeln!(out, "{}", render::project(calc))?,
        ShellCommand::Clear => {
            calc.clear();
            writeln!(out, "Project cleared.")?;
        },
        ShellCommand::Company(company) => {
            let (name, location) = (calc.details().name.clone(), calc.details().location.clone());
            calc.set_details(&company, &name, &location);
        },
        ShellCommand::Name(name) => {
            let (company, location) =
                (calc.details().company.clone(), calc.details().location.clone());
            calc.set_details(&company, &name, &location);
        },
        ShellCommand::Location(location) => {
            let (company, name) = (calc.details().company.clone(), calc.details().name.clone());
            calc.set_details(&company, &name, &location);
        },
        ShellCommand::Budget(budget) => match calc.set_budget(budget) {
            Ok(()) => writeln!(out, "CO2 budget set to {budget:.0} kg CO2eq.")?,
            Err(e) => writeln!(out, "Error: {e}")?,
        },
        ShellCommand::Types => {
            let types = calc.catalog().product_types();
            writeln!(out, "{}", render::listing("Types", &types))?;
        },
        ShellCommand::Series(product_type) => {
            let series = calc.catalog().series_for_type(&product_type);
            writeln!(out, "{}", render::listing("Series", &series))?;
        },
        ShellCommand::Dimensions {
            product_type,
            series,
        } => {
            let dns = calc.catalog().dn_values(&product_type, &series);
            writeln!(out, "{}", render::listing("DN", &dns))?;
        },
        ShellCommand::Add {
            product_type,
            series,
            dn,
            length_m,
            quantity,
        } => {
            let length = match length_m {
                Some(length) => Ok(length),
                None => calc.default_length_m(&product_type, &series, &dn),
            };
            let added = length.and_then(|length| {
                calc.add_product(&product_type, &series, &dn, length, quantity)
                    .map(|item| item.format_line())
            });
            match added {
                Ok(line) => writeln!(out, "Product added to project: {line}")?,
                Err(e) => writeln!(out, "Error adding product: {e}")?,
            }
        },
        ShellCommand::Remove(position) => match calc.remove(position - 1) {
            Ok(item) => writeln!(out, "Removed: {}", item.format_line())?,
            Err(e) => writeln!(out, "Error: {e}")?,
        },
    }
    Ok(true)
}

/// Read commands until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    calc: &mut ProjectCalculator,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "epd> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        debug!(%line, "Shell input");
        let keep_going = match parse_line(&line) {
            Ok(command) => execute(calc, command, out)?,
            Err(e) => {
                writeln!(out, "{e}")?;
                true
            },
        };
        if !keep_going {
            break;
        }
        write!(out, "epd> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Arc};

    use domain::{CatalogGroup, ProductCatalog, value_objects::CellValue};

    use super::*;

    fn calculator() -> ProjectCalculator {
        let columns = ["Type", "Series", "DN", "Length (m)", "A1-A3 (kg CO2e)"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let rows = vec![
            vec![
                CellValue::from("Single pipe"),
                CellValue::Number(1.0),
                CellValue::Number(100.0),
                CellValue::Number(12.0),
                CellValue::Number(5.2),
            ],
            vec![
                CellValue::from("Single pipe"),
                CellValue::Number(1.0),
                CellValue::Number(150.0),
                CellValue::Number(12.0),
                CellValue::Number(7.0),
            ],
        ];
        ProjectCalculator::new(Arc::new(ProductCatalog::new(
            "project catalog",
            vec![CatalogGroup::new("Series 1", columns, rows)],
        )))
    }

    #[test]
    fn parses_add_with_and_without_length() {
        assert_eq!(
            parse_line("add Single pipe | 1 | 100 | 12.5 | 3").unwrap(),
            ShellCommand::Add {
                product_type: "Single pipe".to_string(),
                series: "1".to_string(),
                dn: "100".to_string(),
                length_m: Some(12.5),
                quantity: 3,
            }
        );
        assert_eq!(
            parse_line("ADD Single pipe | 1 | 100 | | 2").unwrap(),
            ShellCommand::Add {
                product_type: "Single pipe".to_string(),
                series: "1".to_string(),
                dn: "100".to_string(),
                length_m: None,
                quantity: 2,
            }
        );
        assert!(matches!(
            parse_line("add Single pipe | 1 | 100 | 4").unwrap(),
            ShellCommand::Add { length_m: None, quantity: 4, .. }
        ));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_line("add Single pipe | 1").unwrap_err(),
            ParseError::MissingArgument("DN")
        );
        assert_eq!(
            parse_line("add Single pipe | 1 | 100 | 1 | many").unwrap_err(),
            ParseError::InvalidNumber {
                field: "quantity",
                value: "many".to_string()
            }
        );
        assert!(matches!(
            parse_line("remove 0").unwrap_err(),
            ParseError::InvalidNumber { .. }
        ));
        assert_eq!(
            parse_line("frobnicate").unwrap_err(),
            ParseError::UnknownCommand("frobnicate".to_string())
        );
        assert_eq!(parse_line("budget").unwrap_err(), ParseError::MissingArgument("budget"));
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_line("   ").unwrap(), ShellCommand::Empty);
        assert_eq!(parse_line("budget 1500").unwrap(), ShellCommand::Budget(1500.0));
        assert_eq!(parse_line("remove 2").unwrap(), ShellCommand::Remove(2));
        assert_eq!(
            parse_line("company  Acme District Heating ").unwrap(),
            ShellCommand::Company("Acme District Heating".to_string())
        );
        assert_eq!(
            parse_line("dns Single pipe | 1").unwrap(),
            ShellCommand::Dimensions {
                product_type: "Single pipe".to_string(),
                series: "1".to_string()
            }
        );
    }

    #[test]
    fn session_adds_lists_and_removes() {
        let mut calc = calculator();
        let input = Cursor::new(
            "name Heating grid\nbudget 1000\nadd Single pipe | 1 | 100 | | 3\n\
             add Single pipe | 1 | 150 | 10 | 1\nlist\nremove 1\nquit\nlist\n",
        );
        let mut out = Vec::new();

        run(&mut calc, input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Product added to project: Single pipe | Series 1 | DN100 | 12 m x 3 | 187 kg CO2eq."));
        assert!(text.contains("  1. Single pipe | Series 1 | DN150 | 10 m x 1 | 70 kg CO2eq."));
        assert!(text.contains("Total Project CO2 (A1-A3): 257 kg CO2eq."));
        assert!(text.contains("Budget Remaining: 743 kg CO2eq."));
        assert!(text.contains("Removed: Single pipe | Series 1 | DN150"));
        assert_eq!(calc.items().len(), 1);
        assert_eq!(calc.details().name, "Heating grid");
        // Nothing after quit is executed
        assert_eq!(text.matches("Project: Heating grid").count(), 1);
    }

    #[test]
    fn failed_add_reports_and_keeps_project() {
        let mut calc = calculator();
        let mut out = Vec::new();
        let keep_going = execute(
            &mut calc,
            parse_line("add Twin pipe | 1 | 100 | 1 | 1").unwrap(),
            &mut out,
        )
        .unwrap();

        assert!(keep_going);
        assert!(calc.items().is_empty());
        assert!(String::from_utf8(out).unwrap().starts_with("Error adding product:"));
    }

    #[test]
    fn catalog_browsing_commands() {
        let mut calc = calculator();
        let mut out = Vec::new();
        execute(&mut calc, ShellCommand::Types, &mut out).unwrap();
        execute(
            &mut calc,
            ShellCommand::Dimensions {
                product_type: "Single pipe".to_string(),
                series: "1".to_string(),
            },
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Types:\n  Single pipe"));
        assert!(text.contains("DN:\n  100\n  150"));
    }
}
