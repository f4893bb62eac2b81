use clap::Parser;
use database::{
    db::create_connection,
    scope::NetworkScope,
    services::{import::ImportService, session::SessionService},
};
use log::info;
use models::import::CourseRecord;
use sea_orm::prelude::Uuid;
use std::{error::Error, fs::File, io::BufReader, path::PathBuf};

/// Imports a JSON catalog export into an existing session
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Slug of the session to import into
    session: String,

    /// JSON file holding an array of course records
    file: PathBuf,

    /// Network the session belongs to
    #[arg(long)]
    network: Option<Uuid>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let file = File::open(&args.file)?;
    let records: Vec<CourseRecord> = serde_json::from_reader(BufReader::new(file))?;
    info!("Read {} course records from {}", records.len(), args.file.display());

    let db = create_connection().await?;
    let scope = NetworkScope::new(args.network);
    let session = SessionService::get_session_by_slug(&db, scope, &args.session)
        .await?
        .ok_or_else(|| format!("Session '{}' not found", args.session))?;

    let course_ids = ImportService::import_courses(&db, &session, records).await?;
    info!("Imported {} courses into {session}", course_ids.len());

    Ok(())
}
