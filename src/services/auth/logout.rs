use tracing::info;

use super::AuthService;

pub async fn handle_logout(service: &AuthService) {
    let config = service.get_config();
    service.store.remove(&config.auth.user_key).await;
    service.store.remove(&config.auth.token_key).await;
    info!("Session cleared");
}
