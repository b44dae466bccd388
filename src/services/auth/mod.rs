pub mod login;
pub mod logout;
pub mod restore;

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::directory::SharedDirectory;
use crate::errors::Result;
use crate::models::auth::{LoginRequest, Session};
use crate::session::KeyValueStore;

pub struct AuthService {
    directory: SharedDirectory,
    store: Arc<dyn KeyValueStore>,
    login_delay: Duration,
}

impl AuthService {
    pub fn new(directory: SharedDirectory, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory,
            store,
            login_delay: AppConfig::get().login_delay(),
        }
    }

    /// 覆盖模拟的凭据校验延迟
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 登录验证
    pub async fn login(&self, request: LoginRequest) -> Result<Session> {
        login::handle_login(self, request).await
    }

    // 登出，清除会话快照
    pub async fn logout(&self) {
        logout::handle_logout(self).await
    }

    // 从快照恢复会话
    pub async fn restore(&self) -> Result<Option<Session>> {
        restore::handle_restore(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use crate::models::users::entities::UserRole;
    use crate::session::{KeyValueStore, MemoryKeyValueStore, StoreResult};

    fn service() -> (AuthService, Arc<MemoryKeyValueStore>) {
        let store = Arc::new(MemoryKeyValueStore::new());
        let service = AuthService::new(Directory::seeded().into_shared(), store.clone())
            .with_login_delay(Duration::ZERO);
        (service, store)
    }

    fn credentials(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_teacher_login_carries_assignments() {
        let (service, store) = service();
        let session = service
            .login(credentials("anjali@vidyaerp.com", "teacher123"))
            .await
            .unwrap();
        assert_eq!(session.role, UserRole::Teacher);
        assert_eq!(session.teacher_assignments.as_ref().map(Vec::len), Some(3));
        assert!(session.token.as_deref().unwrap().starts_with("mock-token-"));
        assert!(matches!(store.get_raw("erpUser").await, StoreResult::Found(_)));
        assert!(matches!(store.get_raw("erpToken").await, StoreResult::Found(_)));
    }

    #[tokio::test]
    async fn test_failed_logins_share_one_message() {
        let (service, store) = service();
        let wrong_password = service
            .login(credentials("anjali@vidyaerp.com", "nope"))
            .await
            .unwrap_err();
        let unknown_user = service
            .login(credentials("ghost@vidyaerp.com", "teacher123"))
            .await
            .unwrap_err();
        assert_eq!(wrong_password, unknown_user);
        assert_eq!(wrong_password.message(), "Invalid email or password");
        assert_eq!(wrong_password.code(), "E003");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_restore_and_logout() {
        let (service, store) = service();
        assert_eq!(service.restore().await.unwrap(), None);

        let session = service
            .login(credentials("amit@vidyaerp.com", "student123"))
            .await
            .unwrap();
        assert_eq!(service.restore().await.unwrap(), Some(session));

        service.logout().await;
        assert!(store.is_empty());
        assert_eq!(service.restore().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_cleared() {
        let (service, store) = service();
        store.insert_raw("erpUser".into(), "{\"user\":".into()).await;
        store.insert_raw("erpToken".into(), "mock-token-1".into()).await;

        assert_eq!(service.restore().await.unwrap(), None);
        assert!(store.is_empty());
    }
}
