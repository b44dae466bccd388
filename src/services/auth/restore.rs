use tracing::{debug, warn};

use crate::errors::Result;
use crate::models::auth::Session;
use crate::session::{StoreResult, get_json};

use super::AuthService;

/// 快照损坏或缺少令牌时清除两个键并视为未登录
pub async fn handle_restore(service: &AuthService) -> Result<Option<Session>> {
    let config = service.get_config();
    let store = service.store.as_ref();

    let session = match get_json::<Session>(store, &config.auth.user_key).await {
        Ok(Some(session)) => session,
        Ok(None) => return Ok(None),
        Err(e) => {
            warn!("Discarding corrupt session snapshot: {}", e);
            super::logout::handle_logout(service).await;
            return Ok(None);
        }
    };

    match store.get_raw(&config.auth.token_key).await {
        StoreResult::Found(token) => {
            debug!("Restored session for {}", session.user_id());
            Ok(Some(Session {
                token: Some(token),
                ..session
            }))
        }
        StoreResult::NotFound => {
            warn!("Session snapshot has no token, clearing it");
            super::logout::handle_logout(service).await;
            Ok(None)
        }
    }
}
