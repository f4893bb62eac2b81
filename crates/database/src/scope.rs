use sea_orm::{ColumnTrait, QueryFilter, prelude::Uuid};

/// Restricts queries over network-scoped rows to a single network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NetworkScope {
    /// Rows of every network
    #[default]
    All,
    /// Rows belonging to one network
    Network(Uuid),
}

impl NetworkScope {
    pub fn new(network_id: Option<Uuid>) -> Self {
        network_id.map_or(Self::All, Self::Network)
    }

    pub fn network_id(self) -> Option<Uuid> {
        match self {
            Self::All => None,
            Self::Network(id) => Some(id),
        }
    }
}

/// Restricts a query by a [`NetworkScope`]
///
/// `NetworkScope::All` leaves the query untouched.
pub trait ScopedQuery: QueryFilter + Sized {
    fn scoped<C: ColumnTrait>(self, scope: NetworkScope, column: C) -> Self {
        match scope {
            NetworkScope::All => self,
            NetworkScope::Network(id) => self.filter(column.eq(id)),
        }
    }
}

impl<Q: QueryFilter> ScopedQuery for Q {}

#[cfg(test)]
mod test {
    use crate::{
        entities::{classifications, courses, sessions},
        scope::{NetworkScope, ScopedQuery},
    };
    use sea_orm::{DbBackend, EntityTrait, QueryTrait, prelude::Uuid};

    #[test]
    fn test_scope_from_network_id() {
        let id = Uuid::new_v4();

        assert_eq!(NetworkScope::new(None), NetworkScope::All);
        assert_eq!(NetworkScope::new(Some(id)), NetworkScope::Network(id));
        assert_eq!(NetworkScope::Network(id).network_id(), Some(id));
    }

    #[test]
    fn test_scoped_query() {
        let id = Uuid::nil();

        let unscoped = sessions::Entity::find()
            .scoped(NetworkScope::All, sessions::Column::NetworkId)
            .build(DbBackend::Postgres)
            .to_string();
        assert!(!unscoped.contains("WHERE"));
        assert!(!unscoped.contains("TRUE"));

        let scoped = sessions::Entity::find()
            .scoped(NetworkScope::Network(id), sessions::Column::NetworkId)
            .build(DbBackend::Postgres)
            .to_string();
        assert!(scoped.contains(r#"WHERE "sessions"."network_id" = "#));
    }

    #[test]
    fn test_scoped_joined_query() {
        let sql = courses::Entity::find()
            .find_also_related(classifications::Entity)
            .scoped(NetworkScope::Network(Uuid::nil()), courses::Column::NetworkId)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"WHERE "courses"."network_id" = "#));
        assert!(!sql.contains(r#""classifications"."network_id" ="#));
    }
}
