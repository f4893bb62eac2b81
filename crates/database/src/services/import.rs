use crate::entities::{classifications, courses, meetings, sections, sessions};
use chrono::Utc;
use futures::future::join_all;
use log::{error, info, warn};
use models::{
    days::DaySlot,
    import::{CourseRecord, SectionRecord},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, Iterable, QueryFilter, TransactionTrait,
    prelude::Uuid,
};
use std::{
    collections::{HashMap, HashSet},
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Postgres limit on bind parameters in a single statement
const MAX_BIND_PARAMS: usize = 65535;

/// An import that failed part way
///
/// Batches commit independently, so the courses of batches that succeeded
/// stay in the database.
#[derive(Debug)]
pub struct ImportError {
    /// Ids of the courses in committed batches
    pub committed: Vec<Uuid>,
    /// Zero-based indexes of the batches that were rolled back
    pub failed_batches: Vec<usize>,
    pub source: DbErr,
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "import failed in batches {:?} after committing {} courses: {}",
            self.failed_batches,
            self.committed.len(),
            self.source
        )
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

pub struct ImportService;

impl ImportService {
    /// The number of courses to import in a single transaction
    const BATCH_SIZE: usize = 200;

    /// Imports courses, with their sections and meetings, into a session
    ///
    /// Bulk inserts skip the entity save hooks, so slugs, instructor lists and
    /// timestamps are computed here for every row. Records holding a value
    /// wider than its column are skipped with a warning.
    ///
    /// # Returns
    /// The ids of the inserted courses, or an [`ImportError`] listing what was
    /// committed before a batch failed
    pub async fn import_courses(
        db: &DatabaseConnection,
        session: &sessions::Model,
        records: Vec<CourseRecord>,
    ) -> Result<Vec<Uuid>, ImportError> {
        let total_courses = records.len();
        let total_batches = total_courses.div_ceil(Self::BATCH_SIZE);
        info!(
            "Starting to import {} courses into {} in batches of {}",
            total_courses,
            session.slug,
            Self::BATCH_SIZE
        );

        let batch_futures = records
            .chunks(Self::BATCH_SIZE)
            .enumerate()
            .map(|(batch_idx, batch)| {
                let db = db.clone();
                let batch_vec = batch.to_vec();

                async move {
                    let batch_start = batch_idx * Self::BATCH_SIZE;
                    info!(
                        "Processing batch {}/{}: courses {}-{}",
                        batch_idx + 1,
                        total_batches,
                        batch_start + 1,
                        batch_start + batch_vec.len()
                    );

                    let result = Self::import_batch(&db, session, batch_vec).await;

                    match &result {
                        Ok(ids) => info!(
                            "Completed batch {}, {} courses imported",
                            batch_idx + 1,
                            ids.len()
                        ),
                        Err(e) => error!("Error in batch {}: {}", batch_idx + 1, e),
                    }

                    result
                }
            });

        // Every batch runs to completion so the committed ones are known
        let mut committed = Vec::new();
        let mut committed_batches = Vec::new();
        let mut failed_batches = Vec::new();
        let mut first_error = None;

        for (batch_idx, result) in join_all(batch_futures).await.into_iter().enumerate() {
            match result {
                Ok(ids) => {
                    committed.extend(ids);
                    committed_batches.push(batch_idx);
                }
                Err(err) => {
                    failed_batches.push(batch_idx);
                    first_error.get_or_insert(err);
                }
            }
        }

        if let Some(source) = first_error {
            error!(
                "Import into {} incomplete: batches {:?} committed ({} courses), batches {:?} rolled back",
                session.slug,
                committed_batches,
                committed.len(),
                failed_batches
            );
            return Err(ImportError {
                committed,
                failed_batches,
                source,
            });
        }

        info!(
            "Successfully imported {} of {total_courses} courses",
            committed.len()
        );
        Ok(committed)
    }

    async fn import_batch(
        db: &DatabaseConnection,
        session: &sessions::Model,
        records: Vec<CourseRecord>,
    ) -> Result<Vec<Uuid>, DbErr> {
        let txn = db.begin().await?;
        let classification_cache = Self::build_classification_cache(&txn, session, &records).await?;

        // Collect all data for bulk insertion
        let mut all_courses = Vec::new();
        let mut all_sections = Vec::new();
        let mut all_meetings = Vec::new();
        let mut course_ids = Vec::new();

        for record in records {
            if let Err(err) = record.validate() {
                warn!("Skipping course {}: {err}", record.number);
                continue;
            }

            let course_id = Uuid::new_v4();
            course_ids.push(course_id);

            let classification = record
                .classification
                .as_deref()
                .and_then(|code| classification_cache.get(code));

            if let Some(code) = record.classification.as_deref()
                && classification.is_none()
            {
                warn!(
                    "Unknown classification {code} for course {}, importing without one",
                    record.number
                );
            }

            let now = Utc::now().naive_utc();
            all_courses.push(courses::ActiveModel {
                id: Set(course_id),
                network_id: Set(Some(session.network_id)),
                institution_id: Set(classification.map(|c| c.institution_id)),
                college_id: Set(classification.and_then(|c| c.college_id)),
                classification_id: Set(classification.map(|c| c.id)),
                session_id: Set(session.id),
                level_id: Set(None),
                slug: Set(record.slug()),
                profs: Set(record.profs()),
                number: Set(record.number),
                description: Set(record.description),
                grading: Set(record.grading),
                name: Set(record.name),
                created_at: Set(now),
                updated_at: Set(now),
            });

            for section in record.sections {
                let section_id = Uuid::new_v4();
                let institution_id = classification.map(|c| c.institution_id);

                for meeting in &section.meetings {
                    if DaySlot::from_str(&meeting.day).is_err() {
                        warn!(
                            "Section {section_id} has a meeting on unknown day '{}'",
                            meeting.day
                        );
                    }
                }

                let (section_model, meeting_models) = Self::section_to_active_models(
                    section,
                    section_id,
                    course_id,
                    Some(session.network_id),
                    institution_id,
                );
                all_sections.push(section_model);
                all_meetings.extend(meeting_models);
            }
        }

        // Bulk insert, split to stay under the bind parameter limit
        Self::insert_chunked(&txn, all_courses).await?;
        Self::insert_chunked(&txn, all_sections).await?;
        Self::insert_chunked(&txn, all_meetings).await?;

        txn.commit().await?;
        Ok(course_ids)
    }

    /// The number of rows of `E` that fit in one insert statement
    fn rows_per_insert<E: EntityTrait>() -> usize {
        (MAX_BIND_PARAMS / E::Column::iter().count()).max(1)
    }

    async fn insert_chunked<C, A>(db: &C, models: Vec<A>) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait + Send,
    {
        let chunk_size = Self::rows_per_insert::<A::Entity>();
        let mut models = models.into_iter().peekable();

        while models.peek().is_some() {
            let chunk: Vec<A> = models.by_ref().take(chunk_size).collect();
            <A::Entity as EntityTrait>::insert_many(chunk)
                .exec(db)
                .await?;
        }

        Ok(())
    }

    /// Loads the classifications referenced by a batch, keyed by code
    async fn build_classification_cache(
        txn: &DatabaseTransaction,
        session: &sessions::Model,
        records: &[CourseRecord],
    ) -> Result<HashMap<String, classifications::Model>, DbErr> {
        let codes: HashSet<&str> = records
            .iter()
            .filter_map(|record| record.classification.as_deref())
            .collect();

        if codes.is_empty() {
            return Ok(HashMap::new());
        }

        let found = classifications::Entity::find()
            .filter(classifications::Column::NetworkId.eq(session.network_id))
            .filter(classifications::Column::Code.is_in(codes))
            .all(txn)
            .await?;

        Ok(found
            .into_iter()
            .map(|classification| (classification.code.clone(), classification))
            .collect())
    }

    fn section_to_active_models(
        section: SectionRecord,
        section_id: Uuid,
        course_id: Uuid,
        network_id: Option<Uuid>,
        institution_id: Option<Uuid>,
    ) -> (sections::ActiveModel, Vec<meetings::ActiveModel>) {
        let meetings = section
            .meetings
            .into_iter()
            .map(|meeting| meetings::ActiveModel {
                id: Set(Uuid::new_v4()),
                section_id: Set(section_id),
                day: Set(meeting.day),
                start: Set(meeting.start),
                end: Set(meeting.end),
                location: Set(meeting.location),
                room: Set(meeting.room),
            })
            .collect();

        let now = Utc::now().naive_utc();
        let section = sections::ActiveModel {
            id: Set(section_id),
            network_id: Set(network_id),
            institution_id: Set(institution_id),
            course_id: Set(course_id),
            status: Set(section.status),
            number: Set(section.number),
            name: Set(section.name),
            notes: Set(section.notes),
            prof: Set(section.prof),
            units: Set(section.units),
            component: Set(section.component),
            reference_code: Set(section.reference_code),
            seats_capacity: Set(section.seats_capacity),
            seats_taken: Set(section.seats_taken),
            seats_available: Set(section.seats_available),
            waitlist_capacity: Set(section.waitlist_capacity),
            waitlist_taken: Set(section.waitlist_taken),
            waitlist_available: Set(section.waitlist_available),
            location: Set(section.location),
            room: Set(section.room),
            created_at: Set(now),
            updated_at: Set(now),
        };

        (section, meetings)
    }
}
