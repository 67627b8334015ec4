use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devhire::{
  adapters::http::{TemplateEngine, WebRouteDependencies, configure_web_routes},
  application::auth::{LogInUseCase, LogOutUseCase, SignUpUseCase},
  application::job::{
    ApplyToJobUseCase, BrowseJobsUseCase, CreateJobUseCase, JobApplicantsUseCase, ListJobsUseCase,
    UpdateJobUseCase,
  },
  domain::auth::services::{AuthService, AuthServiceConfig},
  domain::job::services::JobService,
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresAccountRepository, PostgresJobRepository, PostgresSessionRepository,
    },
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "devhire=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting DevHire application");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          config.database.url
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize template engine
  let templates = TemplateEngine::new().expect("Failed to initialize template engine");

  // Initialize repositories
  let account_repo = Arc::new(PostgresAccountRepository::new(db_pool.clone()));
  let session_repo = Arc::new(PostgresSessionRepository::new(db_pool.clone()));
  let job_repo = Arc::new(PostgresJobRepository::new(db_pool.clone()));

  // Initialize security services
  let password_hasher =
    Arc::new(Argon2PasswordHasher::new().expect("Failed to create password hasher"));

  // Initialize domain services
  let auth_config = AuthServiceConfig {
    session_ttl_seconds: config.security.session_ttl_seconds,
  };
  let auth_service = Arc::new(AuthService::new(
    account_repo,
    session_repo,
    password_hasher,
    auth_config,
  ));
  let job_service = Arc::new(JobService::new(job_repo));

  // Initialize use cases
  let sign_up = Arc::new(SignUpUseCase::new(auth_service.clone()));
  let log_in = Arc::new(LogInUseCase::new(auth_service.clone()));
  let log_out = Arc::new(LogOutUseCase::new(auth_service.clone()));
  let create_job = Arc::new(CreateJobUseCase::new(job_service.clone()));
  let list_jobs = Arc::new(ListJobsUseCase::new(job_service.clone()));
  let update_job = Arc::new(UpdateJobUseCase::new(job_service.clone()));
  let job_applicants = Arc::new(JobApplicantsUseCase::new(job_service.clone()));
  let browse_jobs = Arc::new(BrowseJobsUseCase::new(job_service.clone()));
  let apply_to_job = Arc::new(ApplyToJobUseCase::new(job_service));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add logging middleware
      .wrap(Logger::default())
      // Configure web UI routes
      .configure(|cfg| {
        configure_web_routes(
          cfg,
          WebRouteDependencies {
            templates: templates.clone(),
            auth_service: auth_service.clone(),
            sign_up: sign_up.clone(),
            log_in: log_in.clone(),
            log_out: log_out.clone(),
            create_job: create_job.clone(),
            list_jobs: list_jobs.clone(),
            update_job: update_job.clone(),
            job_applicants: job_applicants.clone(),
            browse_jobs: browse_jobs.clone(),
            apply_to_job: apply_to_job.clone(),
          },
        )
      })
      // Static files
      .service(fs::Files::new("/static", "./static"))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
