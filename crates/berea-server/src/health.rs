/// Handle `GET` on the configured health path
pub async fn health_handler() -> &'static str {
    "ok"
}
