use async_trait::async_trait;
use std::sync::Mutex;
use time::OffsetDateTime;
use uuid::Uuid;

use super::user_repository::UserRepository;
use crate::models::user::User;

/// Arguments recorded for each `create_user` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCreate {
    pub github_id: i64,
    pub login: String,
    pub avatar_url: String,
    pub name: String,
}

#[derive(Default)]
#[allow(dead_code)]
pub struct MockDb {
    pub find_user_result: Option<User>,
    pub fail_on_find: bool,
    pub fail_on_create: bool,
    pub created: Mutex<Vec<RecordedCreate>>,
}

impl MockDb {
    pub fn with_existing_user(user: User) -> Self {
        MockDb {
            find_user_result: Some(user),
            ..Default::default()
        }
    }

    pub fn created_calls(&self) -> Vec<RecordedCreate> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MockDb {
    async fn find_user_by_github_id(&self, _github_id: i64) -> Result<Option<User>, sqlx::Error> {
        if self.fail_on_find {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        Ok(self.find_user_result.clone())
    }

    async fn create_user(
        &self,
        github_id: i64,
        login: &str,
        avatar_url: &str,
        name: &str,
    ) -> Result<User, sqlx::Error> {
        if self.fail_on_create {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        self.created.lock().unwrap().push(RecordedCreate {
            github_id,
            login: login.to_string(),
            avatar_url: avatar_url.to_string(),
            name: name.to_string(),
        });
        Ok(User {
            id: Uuid::new_v4(),
            github_id,
            login: login.to_string(),
            avatar_url: avatar_url.to_string(),
            name: name.to_string(),
            created_at: OffsetDateTime::now_utc(),
        })
    }

    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
        if self.fail_on_find {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        Ok(self
            .find_user_result
            .clone()
            .filter(|user| user.id == user_id))
    }
}
