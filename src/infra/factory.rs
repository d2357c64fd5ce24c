use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{CategoryRepository, ExpenseRepository, GoalRepository, IncomeRepository, UserRepository};
use crate::domain::services::{
    category_service::CategoryService, expense_service::ExpenseService, goal_service::GoalService,
    income_service::IncomeService, user_service::UserService,
};
use crate::infra::repositories::{
    postgres_category_repo::PostgresCategoryRepo, postgres_expense_repo::PostgresExpenseRepo,
    postgres_goal_repo::PostgresGoalRepo, postgres_income_repo::PostgresIncomeRepo,
    postgres_user_repo::PostgresUserRepo,
    sqlite_category_repo::SqliteCategoryRepo, sqlite_expense_repo::SqliteExpenseRepo,
    sqlite_goal_repo::SqliteGoalRepo, sqlite_income_repo::SqliteIncomeRepo,
    sqlite_user_repo::SqliteUserRepo,
};

/// Repository set for one storage backend.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub expenses: Arc<dyn ExpenseRepository>,
    pub incomes: Arc<dyn IncomeRepository>,
    pub goals: Arc<dyn GoalRepository>,
}

impl Repositories {
    pub fn sqlite(pool: SqlitePool) -> Self {
        Self {
            users: Arc::new(SqliteUserRepo::new(pool.clone())),
            categories: Arc::new(SqliteCategoryRepo::new(pool.clone())),
            expenses: Arc::new(SqliteExpenseRepo::new(pool.clone())),
            incomes: Arc::new(SqliteIncomeRepo::new(pool.clone())),
            goals: Arc::new(SqliteGoalRepo::new(pool)),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            categories: Arc::new(PostgresCategoryRepo::new(pool.clone())),
            expenses: Arc::new(PostgresExpenseRepo::new(pool.clone())),
            incomes: Arc::new(PostgresIncomeRepo::new(pool.clone())),
            goals: Arc::new(PostgresGoalRepo::new(pool)),
        }
    }
}

pub fn build_state(config: &Config, repos: Repositories) -> AppState {
    AppState {
        config: config.clone(),
        user_service: Arc::new(UserService::new(repos.users, repos.categories.clone())),
        category_service: Arc::new(CategoryService::new(repos.categories)),
        expense_service: Arc::new(ExpenseService::new(repos.expenses)),
        income_service: Arc::new(IncomeService::new(repos.incomes)),
        goal_service: Arc::new(GoalService::new(repos.goals)),
    }
}

pub async fn bootstrap_state(config: &Config) -> anyhow::Result<AppState> {
    let database_url = &config.database_url;

    if config.is_postgres() {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().context("Invalid Postgres URL")?;
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections.unwrap_or(10))
            .connect_with(opts)
            .await
            .context("Failed to connect to Postgres")?;

        run_postgres_migrations(&pool).await?;

        Ok(build_state(config, Repositories::postgres(pool)))
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .context("Invalid SQLite connection string")?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.unwrap_or(5))
            .connect_with(opts)
            .await
            .context("Failed to connect to SQLite")?;

        run_sqlite_migrations(&pool).await?;

        Ok(build_state(config, Repositories::sqlite(pool)))
    }
}

async fn run_postgres_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .context("Failed to run Postgres migrations")
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .context("Failed to run SQLite migrations")
}
