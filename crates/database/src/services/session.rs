use crate::{
    entities::{classifications, colleges, levels, session_infos, sessions},
    scope::{NetworkScope, ScopedQuery},
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};

/// Everything linked to a session, for its home page
#[derive(Debug, Clone)]
pub struct SessionDetail {
    pub session: sessions::Model,
    pub infos: Vec<session_infos::Model>,
    pub colleges: Vec<colleges::Model>,
    pub classifications: Vec<classifications::Model>,
    pub levels: Vec<levels::Model>,
}

pub struct SessionService;

impl SessionService {
    /// Lists sessions newest first
    pub async fn list_sessions<C>(
        db: &C,
        scope: NetworkScope,
        active_only: bool,
    ) -> Result<Vec<sessions::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut query = sessions::Entity::find()
            .scoped(scope, sessions::Column::NetworkId)
            .order_by_desc(sessions::Column::StartDate);

        if active_only {
            query = query.filter(sessions::Column::Active.eq(true));
        }

        query.all(db).await
    }

    pub async fn get_session_by_slug<C>(
        db: &C,
        scope: NetworkScope,
        slug: &str,
    ) -> Result<Option<sessions::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        sessions::Entity::find()
            .scoped(scope, sessions::Column::NetworkId)
            .filter(sessions::Column::Slug.eq(slug))
            .one(db)
            .await
    }

    /// Loads a session's info rows and its linked colleges, classifications and levels
    pub async fn get_session_detail<C>(
        db: &C,
        scope: NetworkScope,
        session: sessions::Model,
    ) -> Result<SessionDetail, DbErr>
    where
        C: ConnectionTrait,
    {
        let infos = session.find_related(session_infos::Entity).all(db).await?;
        let colleges = session
            .find_related(colleges::Entity)
            .scoped(scope, colleges::Column::NetworkId)
            .order_by_asc(colleges::Column::Id)
            .all(db)
            .await?;
        let classifications = session
            .find_related(classifications::Entity)
            .scoped(scope, classifications::Column::NetworkId)
            .order_by_asc(classifications::Column::Name)
            .all(db)
            .await?;
        let levels = session
            .find_related(levels::Entity)
            .scoped(scope, levels::Column::NetworkId)
            .all(db)
            .await?;

        Ok(SessionDetail {
            session,
            infos,
            colleges,
            classifications,
            levels,
        })
    }
}
