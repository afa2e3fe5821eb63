use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use hospital_board::resources::{
    CooperationHospitalFields, NewsFields, cooperation_hospital_store, news_store,
};
use hospital_board::store::Snapshot;
use hospital_board::validate::ValidationError;
use hospital_board::{ApiConfig, HttpTransport, ListQuery, Record, ResourceData, StoreError, Transport};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration: {0}")]
    Config(StoreError),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("{operation} failed [{code}]: {source}")]
    Request { operation: &'static str, code: &'static str, source: StoreError },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "hospital-board", about = "Hospital board REST client")]
struct Cli {
    /// Overrides `HOSPITAL_API_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// News articles.
    News(NewsCommand),
    /// Cooperating hospitals.
    Hospitals(HospitalCommand),
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long)]
    query: Option<String>,

    #[arg(long, default_value_t = 1)]
    page: u64,

    /// Defaults to `HOSPITAL_PAGE_ROWS`.
    #[arg(long)]
    rows: Option<u64>,
}

#[derive(Args, Debug)]
struct NewsCommand {
    #[command(subcommand)]
    command: NewsSubcommand,
}

#[derive(Args, Debug)]
struct NewsArgs {
    #[arg(long)]
    title: String,

    #[arg(long)]
    link: String,
}

#[derive(Subcommand, Debug)]
enum NewsSubcommand {
    List(ListArgs),
    Get { id: u64 },
    Create(NewsArgs),
    Update {
        id: u64,
        #[command(flatten)]
        fields: NewsArgs,
    },
    Delete { id: u64 },
}

#[derive(Args, Debug)]
struct HospitalCommand {
    #[command(subcommand)]
    command: HospitalSubcommand,
}

#[derive(Args, Debug)]
struct HospitalArgs {
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    area: String,

    #[arg(long, default_value = "")]
    introduction: String,

    #[arg(long, default_value = "")]
    address: String,

    #[arg(long, default_value = "")]
    tel: String,

    #[arg(long, default_value = "")]
    department: String,
}

#[derive(Subcommand, Debug)]
enum HospitalSubcommand {
    List(ListArgs),
    Get { id: u64 },
    Create(HospitalArgs),
    Update {
        id: u64,
        #[command(flatten)]
        fields: HospitalArgs,
    },
    Delete { id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env().map_err(CliError::Config)?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::from_config(&config).map_err(CliError::Config)?);
    tracing::debug!(base_url = %config.base_url, "transport ready");

    match cli.command {
        Command::News(news) => run_news(&config, transport, news.command).await,
        Command::Hospitals(hospitals) => run_hospitals(&config, transport, hospitals.command).await,
    }
}

async fn run_news(config: &ApiConfig, transport: Arc<dyn Transport>, command: NewsSubcommand) -> Result<(), CliError> {
    let store = news_store(config, transport);
    match command {
        NewsSubcommand::List(args) => report("news list", store.fetch_list(&list_query(config, args)).await),
        NewsSubcommand::Get { id } => report("news get", store.fetch_one(&id).await),
        NewsSubcommand::Create(args) => {
            let fields = news_fields(args);
            fields.validate()?;
            report("news create", store.create_item(&fields).await)
        }
        NewsSubcommand::Update { id, fields } => {
            let fields = news_fields(fields);
            fields.validate()?;
            report("news update", store.update_item(&id, &fields).await)
        }
        NewsSubcommand::Delete { id } => report("news delete", store.delete_item(&id).await),
    }
}

async fn run_hospitals(
    config: &ApiConfig,
    transport: Arc<dyn Transport>,
    command: HospitalSubcommand,
) -> Result<(), CliError> {
    let store = cooperation_hospital_store(config, transport);
    match command {
        HospitalSubcommand::List(args) => report("hospitals list", store.fetch_list(&list_query(config, args)).await),
        HospitalSubcommand::Get { id } => report("hospitals get", store.fetch_one(&id).await),
        HospitalSubcommand::Create(args) => {
            let fields = hospital_fields(args);
            fields.validate()?;
            report("hospitals create", store.create_item(&fields).await)
        }
        HospitalSubcommand::Update { id, fields } => {
            let fields = hospital_fields(fields);
            fields.validate()?;
            report("hospitals update", store.update_item(&id, &fields).await)
        }
        HospitalSubcommand::Delete { id } => report("hospitals delete", store.delete_item(&id).await),
    }
}

fn list_query(config: &ApiConfig, args: ListArgs) -> ListQuery {
    ListQuery::new(args.query, args.page, args.rows.unwrap_or(config.page_rows))
}

fn news_fields(args: NewsArgs) -> NewsFields {
    NewsFields { news_title: args.title, news_link: args.link }
}

fn hospital_fields(args: HospitalArgs) -> CooperationHospitalFields {
    CooperationHospitalFields {
        area: args.area,
        introduction: args.introduction,
        address: args.address,
        tel: args.tel,
        name: args.name,
        medical_department: args.department,
        reg_date: None,
        edit_date: None,
    }
}

/// Print the settled snapshot, or surface its error.
fn report<R: Record>(operation: &'static str, state: Snapshot<R>) -> Result<(), CliError> {
    if let Some(error) = &state.error {
        return Err(CliError::Request { operation, code: error.error_code(), source: error.clone() });
    }
    let data = match &state.data {
        ResourceData::Empty => Value::Null,
        ResourceData::List(records) => serde_json::to_value(records)?,
        ResourceData::Single(record) => serde_json::to_value(record)?,
    };
    let rendered = serde_json::to_string_pretty(&serde_json::json!({ "data": data, "paging": state.paging }))?;
    println!("{rendered}");
    Ok(())
}
