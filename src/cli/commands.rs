//! Command handlers. Each one parses its arguments, calls the matching
//! model operation, and prints names back.

use serde::Serialize;
use uuid::Uuid;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::{Command, CommandRegistry};
use crate::core::{CategoryManager, PersonManager};
use crate::domain::{Account, Category, Colour, Displayable, Person, Transaction};

pub(crate) fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Command::new(
        "person",
        "person <add|remove|list> [name]",
        "Manage the people in the book.",
        person_command,
    ));
    registry.register(Command::new(
        "account",
        "account <add|list> <person> [name]",
        "Manage a person's accounts.",
        account_command,
    ));
    registry.register(Command::new(
        "category",
        "category <add|remove|list> [name] [r g b]",
        "Manage bill categories.",
        category_command,
    ));
    registry.register(Command::new(
        "income",
        "income <add|list> <person> <account> [name amount date]",
        "Record or list incomes on an account.",
        income_command,
    ));
    registry.register(Command::new(
        "bill",
        "bill <add|list> <person> <account> [name amount date category]",
        "Record or list bills on an account.",
        bill_command,
    ));
    registry.register(Command::new(
        "transfer",
        "transfer add <person> <from> <to> <name> <amount> <date> | transfer list <person> <account>",
        "Move money between two accounts.",
        transfer_command,
    ));
    registry.register(Command::new(
        "dump",
        "dump",
        "Print the whole book as JSON.",
        dump_command,
    ));
    registry.register(Command::new(
        "help",
        "help [command]",
        "Show available commands.",
        help_command,
    ));
    registry.register(Command::new(
        "exit",
        "exit",
        "Leave the shell.",
        exit_command,
    ));
    registry
}

fn person_command(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["add", name] => {
            context.people.add_person_by_name(*name);
            cli_io::print_success(format!("Added person `{name}`."));
            Ok(())
        }
        ["remove", name] => {
            let id = require_person(&context.people, name)?.id;
            if !context.confirm_removal(&format!("person `{name}`"))? {
                return Ok(());
            }
            let person = context.people.remove_person(id)?;
            cli_io::print_success(format!("Removed person `{}`.", person.name));
            Ok(())
        }
        ["list"] => {
            if context.people.people().is_empty() {
                cli_io::print_info("No people yet.");
                return Ok(());
            }
            for person in context.people.people() {
                cli_io::print_info(person.display_label());
            }
            Ok(())
        }
        _ => Err(usage("person <add|remove|list> [name]")),
    }
}

fn account_command(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["add", person_name, account_name] => {
            let person = require_person_mut(&mut context.people, person_name)?;
            person.create_account(*account_name);
            context.people.touch();
            cli_io::print_success(format!(
                "Created account `{account_name}` for `{person_name}`."
            ));
            Ok(())
        }
        ["list", person_name] => {
            let person = require_person(&context.people, person_name)?;
            if person.accounts().is_empty() {
                cli_io::print_info("No accounts yet.");
                return Ok(());
            }
            for name in person.account_names() {
                cli_io::print_info(name);
            }
            Ok(())
        }
        _ => Err(usage("account <add|list> <person> [name]")),
    }
}

fn category_command(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["add", name] => {
            context
                .categories
                .add_category_by_name(*name, Colour::default());
            cli_io::print_success(format!("Added category `{name}`."));
            Ok(())
        }
        ["add", name, r, g, b] => {
            let colour = parse_colour(r, g, b)?;
            context.categories.add_category_by_name(*name, colour);
            cli_io::print_success(format!("Added category `{name}` ({colour})."));
            Ok(())
        }
        ["remove", name] => {
            let id = require_category(&context.categories, name)?.id;
            if !context.confirm_removal(&format!("category `{name}`"))? {
                return Ok(());
            }
            let category = context.categories.remove_category(id)?;
            cli_io::print_success(format!("Removed category `{}`.", category.name));
            Ok(())
        }
        ["list"] => {
            if context.categories.categories().is_empty() {
                cli_io::print_info("No categories yet.");
                return Ok(());
            }
            for category in context.categories.categories() {
                cli_io::print_info(category.display_label());
            }
            Ok(())
        }
        _ => Err(usage("category <add|remove|list> [name] [r g b]")),
    }
}

fn income_command(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["add", person_name, account_name, name, amount, date] => {
            let amount = parse_amount(amount)?;
            let person = require_person_mut(&mut context.people, person_name)?;
            let account = require_account_mut(person, account_name)?;
            account.add_income(*name, amount, *date);
            context.people.touch();
            cli_io::print_success(format!("Recorded income `{name}` on `{account_name}`."));
            Ok(())
        }
        ["list", person_name, account_name] => {
            let person = require_person(&context.people, person_name)?;
            let account = require_account(person, account_name)?;
            print_transactions(account.incomes());
            Ok(())
        }
        _ => Err(usage("income <add|list> <person> <account> [name amount date]")),
    }
}

fn bill_command(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["add", person_name, account_name, name, amount, date, category_name] => {
            let amount = parse_amount(amount)?;
            let category_id = require_category(&context.categories, category_name)?.id;
            let person = require_person_mut(&mut context.people, person_name)?;
            let account = require_account_mut(person, account_name)?;
            account.add_bill(*name, amount, *date, category_id);
            context.people.touch();
            cli_io::print_success(format!("Recorded bill `{name}` on `{account_name}`."));
            Ok(())
        }
        ["list", person_name, account_name] => {
            let person = require_person(&context.people, person_name)?;
            let account = require_account(person, account_name)?;
            print_transactions(account.bills());
            Ok(())
        }
        _ => Err(usage(
            "bill <add|list> <person> <account> [name amount date category]",
        )),
    }
}

fn transfer_command(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["add", person_name, from_name, to_name, name, amount, date] => {
            let amount = parse_amount(amount)?;
            let person = require_person_mut(&mut context.people, person_name)?;
            let from_id = require_account(person, from_name)?.id;
            let to_id = require_account(person, to_name)?.id;

            // Record both sides so each account sees the transfer.
            person
                .account_mut(from_id)
                .expect("source account just resolved")
                .add_transfer_out(*name, amount, *date, to_id);
            person
                .account_mut(to_id)
                .expect("target account just resolved")
                .add_transfer_in(*name, amount, *date, from_id);
            context.people.touch();
            cli_io::print_success(format!(
                "Transferred `{name}` from `{from_name}` to `{to_name}`."
            ));
            Ok(())
        }
        ["list", person_name, account_name] => {
            let person = require_person(&context.people, person_name)?;
            let account = require_account(person, account_name)?;
            for txn in account.transfers_out() {
                let target = txn
                    .target_account_id()
                    .map(|id| account_label(&context.people, id))
                    .unwrap_or_default();
                cli_io::print_info(format!(
                    "{}  {:.2}  {}  -> {target}",
                    txn.name, txn.amount, txn.date
                ));
            }
            for txn in account.transfers_in() {
                let source = txn
                    .source_account_id()
                    .map(|id| account_label(&context.people, id))
                    .unwrap_or_default();
                cli_io::print_info(format!(
                    "{}  {:.2}  {}  <- {source}",
                    txn.name, txn.amount, txn.date
                ));
            }
            if account.transfers_out().is_empty() && account.transfers_in().is_empty() {
                cli_io::print_info("No transfers yet.");
            }
            Ok(())
        }
        _ => Err(usage(
            "transfer add <person> <from> <to> <name> <amount> <date> | transfer list <person> <account>",
        )),
    }
}

#[derive(Serialize)]
struct BookSnapshot<'a> {
    people: &'a PersonManager,
    categories: &'a CategoryManager,
}

fn dump_command(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage("dump"));
    }
    let snapshot = BookSnapshot {
        people: &context.people,
        categories: &context.categories,
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn help_command(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::section("Commands");
            for command in context.registry.commands() {
                cli_io::print_info(format!("{:<10} {}", command.name, command.summary));
            }
            Ok(())
        }
        [name] => {
            let command = context
                .registry
                .find(name)
                .ok_or_else(|| CommandError::InvalidArguments(format!("Unknown command `{name}`.")))?;
            cli_io::print_info(format!("Usage: {}", command.usage));
            cli_io::print_info(command.summary);
            Ok(())
        }
        _ => Err(usage("help [command]")),
    }
}

fn exit_command(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("Usage: {text}"))
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.parse::<f64>().map_err(|_| {
        CommandError::InvalidArguments(format!("invalid amount `{raw}` (expected a number)"))
    })
}

fn parse_colour(r: &str, g: &str, b: &str) -> Result<Colour, CommandError> {
    let channel = |raw: &str| {
        raw.parse::<u8>().map_err(|_| {
            CommandError::InvalidArguments(format!("invalid colour channel `{raw}` (expected 0-255)"))
        })
    };
    Ok(Colour::new(channel(r)?, channel(g)?, channel(b)?))
}

fn require_person<'a>(people: &'a PersonManager, name: &str) -> Result<&'a Person, CommandError> {
    people
        .person_by_name(name)
        .ok_or_else(|| CommandError::InvalidArguments(format!("No person named `{name}`.")))
}

fn require_person_mut<'a>(
    people: &'a mut PersonManager,
    name: &str,
) -> Result<&'a mut Person, CommandError> {
    people
        .person_by_name_mut(name)
        .ok_or_else(|| CommandError::InvalidArguments(format!("No person named `{name}`.")))
}

fn require_account<'a>(person: &'a Person, name: &str) -> Result<&'a Account, CommandError> {
    person.account_by_name(name).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "No account named `{name}` for `{}`.",
            person.name
        ))
    })
}

fn require_account_mut<'a>(
    person: &'a mut Person,
    name: &str,
) -> Result<&'a mut Account, CommandError> {
    let person_name = person.name.clone();
    person.account_by_name_mut(name).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "No account named `{name}` for `{person_name}`."
        ))
    })
}

fn require_category<'a>(
    categories: &'a CategoryManager,
    name: &str,
) -> Result<&'a Category, CommandError> {
    categories
        .category_by_name(name)
        .ok_or_else(|| CommandError::InvalidArguments(format!("No category named `{name}`.")))
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        cli_io::print_info("Nothing recorded yet.");
        return;
    }
    for txn in transactions {
        cli_io::print_info(format!("{}  {:.2}  {}", txn.name, txn.amount, txn.date));
    }
}

/// Resolves an account back-reference for display; falls back to the raw
/// id when the account has since been removed.
fn account_label(people: &PersonManager, id: Uuid) -> String {
    people
        .people()
        .iter()
        .flat_map(|person| person.accounts().iter())
        .find(|account| account.id == id)
        .map(|account| account.name.clone())
        .unwrap_or_else(|| short_id(id))
}

fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}
