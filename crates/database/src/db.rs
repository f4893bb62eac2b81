use log::info;
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Reads `DATABASE_URL`, loading a `.env` file first if one exists
pub fn database_url() -> Result<String, DbErr> {
    dotenvy::dotenv().ok();

    std::env::var("DATABASE_URL").map_err(|_| DbErr::Custom("DATABASE_URL is not set".to_string()))
}

/// Creates a database connection to the given URL
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(url).await?;
    info!("Connected to database");

    Ok(db)
}

/// Creates a database connection from the environment
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    connect(&database_url()?).await
}
