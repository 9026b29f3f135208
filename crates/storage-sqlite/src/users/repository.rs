use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use centime_core::errors::{DatabaseError, Error, Result};
use centime_core::users::{UserCurrencyPreference, UserPreferencesRepositoryTrait};

use super::model::UserCurrencyPreferenceDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_currency_preferences;

#[derive(Clone)]
pub struct UserPreferencesRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserPreferencesRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserPreferencesRepositoryTrait for UserPreferencesRepository {
    fn find_preference(&self, user_id: &str) -> Result<Option<UserCurrencyPreference>> {
        let mut conn = get_connection(&self.pool)?;

        let preference_db = user_currency_preferences::table
            .find(user_id)
            .first::<UserCurrencyPreferenceDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(preference_db.map(UserCurrencyPreference::from))
    }

    fn get_preference(&self, user_id: &str) -> Result<UserCurrencyPreference> {
        self.find_preference(user_id)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "No currency preference for user {}",
                user_id
            )))
        })
    }

    async fn upsert_preference(
        &self,
        preference: UserCurrencyPreference,
    ) -> Result<UserCurrencyPreference> {
        self.writer
            .exec(move |conn| {
                let preference_db = UserCurrencyPreferenceDB::from(preference);

                diesel::insert_into(user_currency_preferences::table)
                    .values(&preference_db)
                    .on_conflict(user_currency_preferences::user_id)
                    .do_update()
                    .set(&preference_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                user_currency_preferences::table
                    .find(&preference_db.user_id)
                    .first::<UserCurrencyPreferenceDB>(conn)
                    .map(UserCurrencyPreference::from)
                    .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}
