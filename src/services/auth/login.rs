use tracing::{info, warn};

use crate::errors::{ErpError, Result};
use crate::models::auth::{LoginRequest, Session};
use crate::session::insert_json;
use crate::utils::mock_token;

use super::AuthService;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn handle_login(service: &AuthService, login_request: LoginRequest) -> Result<Session> {
    let config = service.get_config();

    // 1. 模拟凭据校验耗时
    if !service.login_delay.is_zero() {
        tokio::time::sleep(service.login_delay).await;
    }

    // 2. 比对凭据并取完整资料；不区分用户不存在与密码错误
    let email = login_request.email.trim();
    let profile = {
        let directory = service.directory.read().await;
        directory
            .find_credential(email, &login_request.password)
            .and_then(|c| directory.profile(&c.user_id, c.role))
    };
    let Some(profile) = profile else {
        warn!("Failed login attempt for {}", email);
        return Err(ErpError::authentication(INVALID_CREDENTIALS));
    };

    // 3. 生成令牌并保存快照
    let token = mock_token(&config.auth.token_prefix);
    let session = Session::new(profile, Some(token.clone()));
    insert_json(service.store.as_ref(), &config.auth.user_key, &session).await?;
    service
        .store
        .insert_raw(config.auth.token_key.clone(), token)
        .await;

    info!("User {} logged in as {}", session.user_id(), session.role);
    Ok(session)
}
