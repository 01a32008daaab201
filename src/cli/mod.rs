use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::BankService;
use crate::config::BankConfig;
use crate::domain::format_cents;

/// Teller - an in-memory toy bank
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "An in-memory bank ledger driven from an interactive session")]
#[command(version)]
pub struct Cli {
    /// Config file path (JSON). Built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive banking session
    Session,

    /// Run session commands from a file (stdin if omitted)
    Script {
        /// Script file path
        file: Option<String>,
    },

    /// Print the account directory and exit
    Accounts,
}

impl Cli {
    fn load_config(&self) -> Result<BankConfig> {
        let config = match &self.config {
            Some(path) => BankConfig::load(path)?,
            None => BankConfig::default(),
        };
        if self.verbose {
            eprintln!(
                "[config] bank '{}', {} seed account(s), password {}",
                config.bank_name,
                config.accounts.len(),
                if config.password.is_some() {
                    "set"
                } else {
                    "unset"
                }
            );
        }
        Ok(config)
    }

    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let service =
            BankService::from_config(config).context("Invalid seed accounts in configuration")?;

        match self.command {
            Commands::Session => run_session(service),

            Commands::Script { file } => match file {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open script file: {path}"))?;
                    run_script(service, BufReader::new(file))
                }
                None => run_script(service, io::stdin().lock()),
            },

            Commands::Accounts => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                let symbol = service.config().currency_symbol.clone();
                print_accounts(&service, &symbol, &mut out)?;
                Ok(())
            }
        }
    }
}

/// One parsed line of the session command language. The same grammar serves
/// the interactive prompt and script mode; the only difference is that the
/// prompt asks for the login password on a separate line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login {
        account_id: String,
        password: Option<String>,
    },
    Open {
        account_id: String,
        holder_name: Option<String>,
    },
    Deposit {
        amount: String,
    },
    Withdraw {
        amount: String,
    },
    Balance,
    History,
    Account,
    Accounts,
    Logout,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a session line. Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_lowercase();
        let command = match keyword.as_str() {
            "login" => {
                let account_id = words
                    .next()
                    .ok_or("Usage: login <account-id> [password]")?
                    .to_string();
                let password = words.next().map(str::to_string);
                ShellCommand::Login {
                    account_id,
                    password,
                }
            }
            "open" => {
                let account_id = words
                    .next()
                    .ok_or("Usage: open <account-id> [holder name]")?
                    .to_string();
                let rest: Vec<&str> = words.collect();
                let holder_name = if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                };
                ShellCommand::Open {
                    account_id,
                    holder_name,
                }
            }
            "deposit" => ShellCommand::Deposit {
                amount: words.next().ok_or("Usage: deposit <amount>")?.to_string(),
            },
            "withdraw" => ShellCommand::Withdraw {
                amount: words.next().ok_or("Usage: withdraw <amount>")?.to_string(),
            },
            "balance" => ShellCommand::Balance,
            "history" => ShellCommand::History,
            "account" => ShellCommand::Account,
            "accounts" => ShellCommand::Accounts,
            "logout" => ShellCommand::Logout,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("Unknown command: {other} (try 'help')")),
        };
        Ok(Some(command))
    }
}

/// Whether the session loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// A banking session: the service plus the currently logged-in account.
/// Every command is handled to completion before the next one is read, and
/// every application error is rendered as a message rather than ending the
/// session.
pub struct Session {
    service: BankService,
    current: Option<String>,
}

impl Session {
    pub fn new(service: BankService) -> Self {
        Self {
            service,
            current: None,
        }
    }

    pub fn current_account(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn service(&self) -> &BankService {
        &self.service
    }

    /// Execute one command, writing any output to `out`.
    pub fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> io::Result<Step> {
        let symbol = self.service.config().currency_symbol.clone();

        match command {
            ShellCommand::Login {
                account_id,
                password,
            } => {
                let password = password.unwrap_or_default();
                match self.service.login(&account_id, &password) {
                    Ok(()) => {
                        self.current = Some(account_id);
                        writeln!(out, "Welcome to {}.", self.service.config().bank_name)?;
                    }
                    Err(err) => writeln!(out, "{err}")?,
                }
            }

            ShellCommand::Open {
                account_id,
                holder_name,
            } => match self.service.create_account(account_id, holder_name) {
                Ok(summary) => writeln!(out, "Opened account {}", summary.id)?,
                Err(err) => writeln!(out, "{err}")?,
            },

            ShellCommand::Deposit { amount } => {
                if let Some(id) = self.current.clone() {
                    match self.service.deposit(&id, &amount) {
                        Ok(receipt) => writeln!(
                            out,
                            "Deposited {symbol}{}",
                            format_cents(receipt.amount)
                        )?,
                        Err(err) => writeln!(out, "{err}")?,
                    }
                } else {
                    writeln!(out, "Please log in first.")?;
                }
            }

            ShellCommand::Withdraw { amount } => {
                if let Some(id) = self.current.clone() {
                    match self.service.withdraw(&id, &amount) {
                        Ok(receipt) => writeln!(
                            out,
                            "Withdrew {symbol}{}",
                            format_cents(receipt.amount)
                        )?,
                        Err(err) => writeln!(out, "{err}")?,
                    }
                } else {
                    writeln!(out, "Please log in first.")?;
                }
            }

            ShellCommand::Balance => {
                if let Some(id) = &self.current {
                    match self.service.balance_of(id) {
                        Ok(balance) => {
                            writeln!(out, "Current balance: {symbol}{}", format_cents(balance))?;
                        }
                        Err(err) => writeln!(out, "{err}")?,
                    }
                } else {
                    writeln!(out, "Please log in first.")?;
                }
            }

            ShellCommand::History => {
                if let Some(id) = &self.current {
                    match self.service.history_of(id) {
                        Ok(history) => {
                            writeln!(out, "Transaction history:")?;
                            for entry in history {
                                writeln!(out, "  {entry}")?;
                            }
                        }
                        Err(err) => writeln!(out, "{err}")?,
                    }
                } else {
                    writeln!(out, "Please log in first.")?;
                }
            }

            ShellCommand::Account => {
                if let Some(id) = &self.current {
                    match self.service.account_info(id) {
                        Ok(info) => {
                            writeln!(out, "Account number: {}", info.masked_id)?;
                            if let Some(holder) = &info.holder_name {
                                writeln!(out, "Holder: {holder}")?;
                            }
                            writeln!(out, "Opened: {}", info.created_at.format("%Y-%m-%d"))?;
                            writeln!(out, "Balance: {symbol}{}", format_cents(info.balance))?;
                        }
                        Err(err) => writeln!(out, "{err}")?,
                    }
                } else {
                    writeln!(out, "Please log in first.")?;
                }
            }

            ShellCommand::Accounts => print_accounts(&self.service, &symbol, out)?,

            ShellCommand::Logout => {
                if self.current.take().is_some() {
                    writeln!(out, "Logged out.")?;
                } else {
                    writeln!(out, "Not logged in.")?;
                }
            }

            ShellCommand::Help => print_help(out)?,

            ShellCommand::Quit => return Ok(Step::Quit),
        }

        Ok(Step::Continue)
    }
}

fn print_accounts(service: &BankService, symbol: &str, out: &mut impl Write) -> io::Result<()> {
    let accounts = service.list_accounts();
    if accounts.is_empty() {
        writeln!(out, "No accounts.")?;
        return Ok(());
    }
    for summary in accounts {
        let holder = summary.holder_name.as_deref().unwrap_or("-");
        writeln!(
            out,
            "{:<16} {:<24} {symbol}{}",
            summary.id,
            holder,
            format_cents(summary.balance)
        )?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  login <account-id> [password]  log into an account")?;
    writeln!(out, "  open <account-id> [holder]     open a new account")?;
    writeln!(out, "  deposit <amount>               deposit into the current account")?;
    writeln!(out, "  withdraw <amount>              withdraw from the current account")?;
    writeln!(out, "  balance                        show the current balance")?;
    writeln!(out, "  history                        show the transaction log")?;
    writeln!(out, "  account                        show account details")?;
    writeln!(out, "  accounts                       list all accounts")?;
    writeln!(out, "  logout                         log out")?;
    writeln!(out, "  quit                           end the session")
}

/// Interactive session: prompt, read, execute, repeat. A `login` without an
/// inline password asks for it on a separate line.
fn run_session(service: BankService) -> Result<()> {
    let bank_name = service.config().bank_name.clone();
    let mut session = Session::new(service);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{bank_name} - type 'help' for commands")?;

    let mut lines = stdin.lock().lines();
    loop {
        let prompt = match session.current_account() {
            Some(id) => format!("{id}> "),
            None => "> ".to_string(),
        };
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        // Ask for the password out of band so it never sits in the command line.
        let command = match command {
            ShellCommand::Login {
                account_id,
                password: None,
            } => {
                write!(out, "Password: ")?;
                out.flush()?;
                let Some(password) = lines.next() else {
                    break;
                };
                ShellCommand::Login {
                    account_id,
                    password: Some(password?),
                }
            }
            other => other,
        };

        if session.execute(command, &mut out)? == Step::Quit {
            break;
        }
    }

    writeln!(out, "Goodbye.")?;
    Ok(())
}

/// Non-interactive mode: run the same command language line by line.
/// Errors are printed and execution continues, matching the interactive loop.
fn run_script(service: BankService, reader: impl BufRead) -> Result<()> {
    let mut session = Session::new(service);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in reader.lines() {
        let line = line?;
        match ShellCommand::parse(&line) {
            Ok(Some(command)) => {
                if session.execute(command, &mut out)? == Step::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(out, "{message}")?,
        }
    }
    Ok(())
}
