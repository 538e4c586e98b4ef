use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oficiogen::{
    fill_template, format_date_long, login, validate_fields, DisabledLog, DraftServiceClient,
    DraftServiceConfig, NormalizedLetter, OficioRequest, RemoteSheet, Session, SheetConfig,
    StaticCredentials,
};

#[derive(Parser)]
#[command(name = "oficiogen")]
#[command(author, version, about = "Official letter (oficio) generation pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft, normalize, and save an oficio in one pass
    Generate {
        /// Citizen demand text (use --demand-file for longer texts)
        #[arg(short, long)]
        demand: Option<String>,

        /// File containing the citizen demand text
        #[arg(long, conflicts_with = "demand")]
        demand_file: Option<PathBuf>,

        /// Office letter number
        #[arg(short, long)]
        number: String,

        /// Office letter year (defaults to the current year)
        #[arg(short, long)]
        year: Option<String>,

        /// Send date, YYYY-MM-DD (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Letter template file with the {{...}} placeholder tokens
        #[arg(short, long, default_value = "layout_oficio.txt")]
        template: PathBuf,

        /// Directory the finished document is written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Print the normalized letter without writing the document
        #[arg(long)]
        skip_save: bool,

        #[command(flatten)]
        credentials: CredentialArgs,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Draft and normalize only, printing the letter for manual editing
    Draft {
        /// Citizen demand text (use --demand-file for longer texts)
        #[arg(short, long)]
        demand: Option<String>,

        /// File containing the citizen demand text
        #[arg(long, conflicts_with = "demand")]
        demand_file: Option<PathBuf>,

        #[command(flatten)]
        credentials: CredentialArgs,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Fill the template from already-edited paragraphs, no model call
    Fill {
        /// Letter subject
        #[arg(short, long)]
        subject: String,

        /// Files holding paragraphs 1, 2 and 3
        #[arg(long, num_args = 3)]
        paragraphs: Vec<PathBuf>,

        /// Office letter number
        #[arg(short, long)]
        number: String,

        /// Office letter year (defaults to the current year)
        #[arg(short, long)]
        year: Option<String>,

        /// Send date, YYYY-MM-DD (defaults to today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Letter template file with the {{...}} placeholder tokens
        #[arg(short, long, default_value = "layout_oficio.txt")]
        template: PathBuf,

        /// Directory the finished document is written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        #[command(flatten)]
        credentials: CredentialArgs,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(clap::Args)]
struct CredentialArgs {
    /// Username for the office account
    #[arg(short, long)]
    username: String,

    /// Password for the office account
    #[arg(short, long, env = "OFICIOGEN_PASSWORD")]
    password: String,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", s, e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            demand,
            demand_file,
            number,
            year,
            date,
            template,
            out_dir,
            skip_save,
            credentials,
            verbose,
        } => {
            setup_logging(verbose);
            authenticate(&credentials).await?;
            let demand = read_demand(demand, demand_file)?;
            generate_oficio(
                &demand, number, year, date, template, out_dir, skip_save, &credentials,
            )
            .await
        }
        Commands::Draft {
            demand,
            demand_file,
            credentials,
            verbose,
        } => {
            setup_logging(verbose);
            authenticate(&credentials).await?;
            let demand = read_demand(demand, demand_file)?;
            draft_oficio(&demand).await
        }
        Commands::Fill {
            subject,
            paragraphs,
            number,
            year,
            date,
            template,
            out_dir,
            credentials,
            verbose,
        } => {
            setup_logging(verbose);
            authenticate(&credentials).await?;
            fill_oficio(subject, paragraphs, number, year, date, template, out_dir)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Check credentials against the static table and log the access
/// best-effort.
async fn authenticate(credentials: &CredentialArgs) -> Result<()> {
    let verifier = StaticCredentials::builtin();

    match SheetConfig::from_env() {
        Ok(config) => {
            let sheet = RemoteSheet::new(config);
            login(&verifier, &sheet, &credentials.username, &credentials.password).await
        }
        Err(_) => {
            login(
                &verifier,
                &DisabledLog,
                &credentials.username,
                &credentials.password,
            )
            .await
        }
    }
}

fn read_demand(demand: Option<String>, demand_file: Option<PathBuf>) -> Result<String> {
    match (demand, demand_file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read demand file: {:?}", path)),
        (None, None) => Ok(String::new()),
    }
}

async fn generate_oficio(
    demand: &str,
    number: String,
    year: Option<String>,
    date: Option<NaiveDate>,
    template: PathBuf,
    out_dir: PathBuf,
    skip_save: bool,
    credentials: &CredentialArgs,
) -> Result<()> {
    let year = year.unwrap_or_else(|| Local::now().year().to_string());
    let send_date = date.unwrap_or_else(|| Local::now().date_naive());

    // Required-field check happens before any drafting call.
    validate_fields(demand, &number, &year)?;

    let request = OficioRequest {
        office_number: number,
        year,
        send_date,
    };
    let mut session = Session::new(&credentials.username, request);

    info!("Drafting letter for session {}", session.session_id);
    let letter = draft_and_normalize(demand).await?;
    print_letter(&letter);
    session.set_letter(letter);

    if skip_save {
        info!("Skipping save (--skip-save)");
        return Ok(());
    }

    let letter = session
        .take_letter()
        .context("No letter in session to save")?;
    let formatted_date = format_date_long(session.request.send_date);

    info!("Filling template {:?}", template);
    let out_path = fill_template(&template, &out_dir, &session.request, &letter, &formatted_date)?;

    info!("Document written to {:?}", out_path);
    println!("{}", out_path.display());

    Ok(())
}

async fn draft_oficio(demand: &str) -> Result<()> {
    if demand.trim().is_empty() {
        anyhow::bail!("demand text is empty");
    }

    let letter = draft_and_normalize(demand).await?;
    print_letter(&letter);

    Ok(())
}

fn fill_oficio(
    subject: String,
    paragraphs: Vec<PathBuf>,
    number: String,
    year: Option<String>,
    date: Option<NaiveDate>,
    template: PathBuf,
    out_dir: PathBuf,
) -> Result<()> {
    let year = year.unwrap_or_else(|| Local::now().year().to_string());
    let send_date = date.unwrap_or_else(|| Local::now().date_naive());

    if subject.trim().is_empty() {
        anyhow::bail!("subject is empty");
    }
    if number.trim().is_empty() {
        anyhow::bail!("office number is empty");
    }
    if paragraphs.len() != 3 {
        anyhow::bail!("expected exactly 3 paragraph files, got {}", paragraphs.len());
    }

    let mut texts = Vec::with_capacity(3);
    for path in &paragraphs {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read paragraph file: {:?}", path))?;
        texts.push(text.trim_end().to_string());
    }

    let letter = NormalizedLetter {
        subject,
        summary: String::new(),
        paragraph1: texts[0].clone(),
        paragraph2: texts[1].clone(),
        paragraph3: texts[2].clone(),
    };
    let request = OficioRequest {
        office_number: number,
        year,
        send_date,
    };
    let formatted_date = format_date_long(send_date);

    let out_path = fill_template(&template, &out_dir, &request, &letter, &formatted_date)?;

    info!("Document written to {:?}", out_path);
    println!("{}", out_path.display());

    Ok(())
}

/// One drafting call followed by the three-paragraph normalization.
async fn draft_and_normalize(demand: &str) -> Result<NormalizedLetter> {
    let config = DraftServiceConfig::from_env()?;
    let client = DraftServiceClient::new(config);

    let draft = client.draft(demand).await?;
    info!("Draft received, subject: {}", draft.subject);

    Ok(NormalizedLetter::from_draft(draft))
}

fn print_letter(letter: &NormalizedLetter) {
    println!("Assunto: {}", letter.subject);
    println!();
    println!("Resumo: {}", letter.summary);
    println!();
    println!("{}", letter.paragraph1);
    println!();
    println!("{}", letter.paragraph2);
    println!();
    println!("{}", letter.paragraph3);
}
