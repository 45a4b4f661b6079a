//! Command-line front end for the admin portal.
//!
//! Each invocation loads the session from the credentials file, runs one
//! command through [`AdminApi`] and prints the result on stdout. Logs go to
//! stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use lib_utils::{parse_date, today_utc, validate_email, validate_not_empty, DateRange};
use serde::Serialize;
use serde_json::json;
use shared::{
    EscrowFilters, EscrowStatus, GetUsersParams, OrderStatus, ProductFilters, ProductStatus,
    UpdateProductStatusRequest, UpdateUserRequest, UserRole,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::{ConfigError, PortalConfig};
use crate::core::{AdminApi, ApiError};
use crate::logging;
use crate::output::{self, OutputFormat};
use crate::services::api::ApiClient;
use crate::session::{FileCredentialStore, LoginRedirect};

#[derive(Debug, Parser)]
#[command(name = "portal", about = "Admin console for the EV marketplace", version)]
pub struct Cli {
    /// API base URL [env: PORTAL_API_URL]
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds [env: PORTAL_TIMEOUT_SECS]
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Session file [env: PORTAL_CREDENTIALS_FILE]
    #[arg(long, global = true)]
    pub credentials: Option<PathBuf>,

    #[arg(
        long = "output",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "Output format for list commands"
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login(LoginArgs),
    /// Revoke the session on the server and forget it locally
    Logout,
    /// Show the signed-in administrator
    Whoami,
    /// Overview statistics with order and revenue charts
    Dashboard(DashboardArgs),
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Products(ProductsCommand),
    #[command(subcommand)]
    Orders(OrdersCommand),
    #[command(subcommand)]
    Escrows(EscrowsCommand),
    #[command(subcommand)]
    Media(MediaCommand),
    #[command(subcommand)]
    Chats(ChatsCommand),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    /// Read from stdin when omitted
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// First day of the revenue window (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Last day of the revenue window (YYYY-MM-DD), defaults to today
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Ban {
        id: String,
    },
    Update {
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "type")]
        product_type: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    Show {
        id: String,
    },
    Approve {
        id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
    Status {
        id: String,
        status: String,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    Show {
        id: String,
    },
    Status {
        id: String,
        status: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum EscrowsCommand {
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        buyer: Option<String>,
        #[arg(long)]
        seller: Option<String>,
        #[arg(long)]
        order: Option<String>,
    },
    Show {
        id: String,
    },
    Release {
        id: String,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum MediaCommand {
    Show { id: String },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ChatsCommand {
    List,
    Show { id: String },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Config(_) | Self::Api(ApiError::Validation(_)) => 2,
            _ => 1,
        }
    }
}

/// Run a parsed command line. Returns the process exit code.
pub async fn run(cli: Cli) -> i32 {
    let config = match PortalConfig::from_env() {
        Ok(config) => config.with_overrides(cli.api_url.clone(), cli.timeout, cli.credentials.clone()),
        Err(e) => return report(CliError::from(e)),
    };
    if let Err(e) = config.validate() {
        return report(e.into());
    }
    let _log_guard = logging::init(&config.log_level, config.log_dir.as_deref());

    let navigator = Arc::new(LoginRedirect::new());
    let client = match build_client(&config, Arc::clone(&navigator)) {
        Ok(client) => client,
        Err(e) => return report(e),
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });
    let client = client.with_cancellation(cancel);

    let result = dispatch(&client, cli.command, cli.output).await;

    if navigator.redirect_count() > 0 {
        eprintln!("Session expired. Run `portal login` to sign in again.");
        if result.is_ok() {
            return 1;
        }
    }
    match result {
        Ok(()) => 0,
        Err(e) => report(e),
    }
}

fn report(error: CliError) -> i32 {
    tracing::debug!(error = ?error, "Command failed");
    eprintln!("error: {error}");
    error.exit_code()
}

fn build_client(config: &PortalConfig, navigator: Arc<LoginRedirect>) -> CliResult<ApiClient> {
    let store = FileCredentialStore::open(&config.credentials_file)?;
    let client = ApiClient::builder(Arc::new(store), navigator)
        .base_url(&config.api_base_url)
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}

/// Execute one command against any [`AdminApi`] implementation.
pub async fn dispatch(api: &dyn AdminApi, command: Command, format: OutputFormat) -> CliResult<()> {
    match command {
        Command::Login(args) => login(api, args).await,
        Command::Logout => {
            api.logout().await?;
            println!("Logged out");
            Ok(())
        }
        Command::Whoami => match api.current_user()? {
            Some(user) => print_json(&user),
            None => Err(CliError::Validation(
                "Not logged in. Run `portal login` first.".to_string(),
            )),
        },
        Command::Dashboard(args) => dashboard(api, args, format).await,
        Command::Users(command) => users(api, command, format).await,
        Command::Products(command) => products(api, command, format).await,
        Command::Orders(command) => orders(api, command, format).await,
        Command::Escrows(command) => escrows(api, command, format).await,
        Command::Media(command) => media(api, command, format).await,
        Command::Chats(command) => chats(api, command, format).await,
    }
}

async fn login(api: &dyn AdminApi, args: LoginArgs) -> CliResult<()> {
    let email = args.email.trim().to_string();
    validate_not_empty(&email, "Email").map_err(CliError::Validation)?;
    validate_email(&email).map_err(CliError::Validation)?;

    let password = match args.password {
        Some(password) => password,
        None => read_password()?,
    };
    validate_not_empty(&password, "Password").map_err(CliError::Validation)?;

    let response = api.login(email, password).await?;
    println!("Logged in as {} ({})", response.user.email, response.user.role);
    Ok(())
}

fn read_password() -> CliResult<String> {
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Parse `--from` / `--to` into a whole-day range; `--to` defaults to today.
pub fn revenue_range(from: Option<&str>, to: Option<&str>) -> CliResult<Option<DateRange>> {
    let Some(from) = from else {
        return Ok(None);
    };
    let start = parse_date(from).map_err(|e| CliError::Validation(e.to_string()))?;
    let end = match to {
        Some(to) => parse_date(to).map_err(|e| CliError::Validation(e.to_string()))?,
        None => today_utc(),
    };
    if end < start {
        return Err(CliError::Validation(
            "--to must not be earlier than --from".to_string(),
        ));
    }
    Ok(Some(DateRange::new(start, end)))
}

async fn dashboard(api: &dyn AdminApi, args: DashboardArgs, format: OutputFormat) -> CliResult<()> {
    let range = revenue_range(args.from.as_deref(), args.to.as_deref())?;

    let (overview, orders_chart, revenue_chart) = tokio::try_join!(
        api.get_overview(),
        api.get_orders_chart(),
        api.get_revenue_chart(range),
    )?;

    match format {
        OutputFormat::Table => {
            println!("{}", output::overview_table(&overview.data));
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "overview": overview.data,
            "ordersChart": orders_chart.data,
            "revenueChart": revenue_chart.data,
        })),
    }
}

async fn users(api: &dyn AdminApi, command: UsersCommand, format: OutputFormat) -> CliResult<()> {
    match command {
        UsersCommand::List {
            page,
            limit,
            role,
            active,
            search,
        } => {
            let params = GetUsersParams {
                page,
                limit,
                role: role.map(UserRole::from),
                is_active: active,
                search,
            };
            let page = api.get_users(&params).await?;
            render(format, &page, output::users_table)
        }
        UsersCommand::Show { id } => print_json(&api.get_user_by_id(&id).await?),
        UsersCommand::Ban { id } => print_json(&api.ban_user(&id).await?),
        UsersCommand::Update {
            id,
            email,
            full_name,
            display_name,
            phone,
            address,
            bio,
            role,
            active,
        } => {
            let update = UpdateUserRequest {
                email,
                full_name,
                display_name,
                phone,
                avatar_url: None,
                bio,
                address,
                role: role.map(UserRole::from),
                is_active: active,
            };
            if update == UpdateUserRequest::default() {
                return Err(CliError::Validation("Nothing to update".to_string()));
            }
            print_json(&api.update_user(&id, &update).await?)
        }
    }
}

async fn products(
    api: &dyn AdminApi,
    command: ProductsCommand,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        ProductsCommand::List {
            status,
            product_type,
            brand,
            location,
            page,
            page_size,
        } => {
            let filters = ProductFilters {
                product_type,
                brand,
                location,
                status: status.map(ProductStatus::from),
                page,
                page_size,
                ..Default::default()
            };
            let list = api.get_all_products(&filters).await?;
            render(format, &list, output::products_table)
        }
        ProductsCommand::Show { id } => print_json(&api.get_product_by_id(&id).await?),
        ProductsCommand::Approve { id, notes } => print_json(&api.approve_product(&id, notes).await?),
        ProductsCommand::Reject { id, reason } => print_json(&api.reject_product(&id, reason).await?),
        ProductsCommand::Status { id, status, reason } => {
            let update = UpdateProductStatusRequest {
                status: ProductStatus::from(status),
                reason,
            };
            print_json(&api.update_product_status(&id, &update).await?)
        }
    }
}

async fn orders(api: &dyn AdminApi, command: OrdersCommand, format: OutputFormat) -> CliResult<()> {
    match command {
        OrdersCommand::List { page, limit } => {
            let page = api.get_all_orders(page, limit).await?;
            render(format, &page, output::orders_table)
        }
        OrdersCommand::Show { id } => print_json(&api.get_order_by_id(&id).await?),
        OrdersCommand::Status { id, status } => {
            print_json(&api.update_order_status(&id, OrderStatus::from(status)).await?)
        }
    }
}

async fn escrows(api: &dyn AdminApi, command: EscrowsCommand, format: OutputFormat) -> CliResult<()> {
    match command {
        EscrowsCommand::List {
            status,
            buyer,
            seller,
            order,
        } => {
            let filters = EscrowFilters {
                status: status.map(EscrowStatus::from),
                buyer_id: buyer,
                seller_id: seller,
                order_id: order,
            };
            let list = api.get_all_escrows(&filters).await?;
            render(format, &list, output::escrows_table)
        }
        EscrowsCommand::Show { id } => print_json(&api.get_escrow_by_id(&id).await?),
        EscrowsCommand::Release { id, reason } => print_json(&api.release_escrow(&id, reason).await?),
    }
}

async fn media(api: &dyn AdminApi, command: MediaCommand, format: OutputFormat) -> CliResult<()> {
    match command {
        MediaCommand::Show { id } => {
            let media = api.get_media_by_id(&id).await?;
            render(format, &media, output::media_table)
        }
        MediaCommand::Delete { id } => {
            api.delete_media(&id).await?;
            println!("Deleted media {id}");
            Ok(())
        }
    }
}

async fn chats(api: &dyn AdminApi, command: ChatsCommand, format: OutputFormat) -> CliResult<()> {
    match command {
        ChatsCommand::List => {
            let list = api.get_all_chats().await?;
            render(format, &list, output::chats_table)
        }
        ChatsCommand::Show { id } => print_json(&api.get_chat_by_id(&id).await?),
    }
}

fn render<T: Serialize>(format: OutputFormat, value: &T, table: fn(&T) -> String) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => {
            println!("{}", table(value));
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    println!("{}", output::json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{CredentialStore, MemoryCredentialStore};
    use chrono::NaiveDate;
    use httpmock::prelude::*;

    #[test]
    fn parses_nested_subcommands_and_globals() {
        let cli = Cli::try_parse_from([
            "portal",
            "products",
            "reject",
            "p1",
            "--reason",
            "Blurry photos",
            "--api-url",
            "http://127.0.0.1:5000",
            "--output",
            "table",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:5000"));
        assert_eq!(cli.output, OutputFormat::Table);
        match cli.command {
            Command::Products(ProductsCommand::Reject { id, reason }) => {
                assert_eq!(id, "p1");
                assert_eq!(reason, "Blurry photos");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn dashboard_to_requires_from() {
        assert!(Cli::try_parse_from(["portal", "dashboard", "--to", "2025-10-07"]).is_err());
    }

    #[test]
    fn revenue_range_validates_dates() {
        assert!(revenue_range(None, None).unwrap().is_none());

        let range = revenue_range(Some("2025-10-01"), Some("2025-10-07")).unwrap().unwrap();
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(range.end(), NaiveDate::from_ymd_opt(2025, 10, 7).unwrap());

        let reversed = revenue_range(Some("2025-10-07"), Some("2025-10-01")).unwrap_err();
        assert_eq!(reversed.exit_code(), 2);
        assert!(revenue_range(Some("07/10/2025"), None).is_err());
    }

    #[test]
    fn exit_codes_separate_validation_from_failures() {
        assert_eq!(CliError::Validation("bad".into()).exit_code(), 2);
        assert_eq!(CliError::Api(ApiError::Validation("bad".into())).exit_code(), 2);
        assert_eq!(CliError::Api(ApiError::SessionExpired("gone".into())).exit_code(), 1);
        assert_eq!(CliError::Api(ApiError::Network("down".into())).exit_code(), 1);
    }

    #[tokio::test]
    async fn login_rejects_bad_email_before_any_request() {
        let server = MockServer::start_async().await;
        let login_mock = server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200);
        });
        let client = ApiClient::builder(
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(LoginRedirect::new()),
        )
        .base_url(server.base_url())
        .build()
        .unwrap();

        let command = Command::Login(LoginArgs {
            email: "not-an-email".to_string(),
            password: Some("secret123".to_string()),
        });
        let err = dispatch(&client, command, OutputFormat::Json).await.unwrap_err();

        assert_eq!(err.exit_code(), 2);
        login_mock.assert_hits(0);
    }

    #[tokio::test]
    async fn dashboard_fans_out_three_requests() {
        let server = MockServer::start_async().await;
        let store = Arc::new(MemoryCredentialStore::with_tokens("A1", "R1"));
        let client = ApiClient::builder(store.clone(), Arc::new(LoginRedirect::new()))
            .base_url(server.base_url())
            .build()
            .unwrap();

        let overview = server.mock(|when, then| {
            when.method(GET).path("/api/dashboard/overview");
            then.status(200).json_body(json!({ "success": true, "data": {} }));
        });
        let orders = server.mock(|when, then| {
            when.method(GET).path("/api/dashboard/orders-chart");
            then.status(200).json_body(json!({ "success": true, "data": {} }));
        });
        let revenue = server.mock(|when, then| {
            when.method(GET)
                .path("/api/dashboard/revenue-chart")
                .query_param("startDate", "2025-10-01T00:00:00.000Z");
            then.status(200).json_body(json!({ "success": true, "data": {} }));
        });

        let command = Command::Dashboard(DashboardArgs {
            from: Some("2025-10-01".to_string()),
            to: Some("2025-10-07".to_string()),
        });
        dispatch(&client, command, OutputFormat::Table).await.unwrap();

        overview.assert();
        orders.assert();
        revenue.assert();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("A1"));
    }
}
