#[cfg(test)]
pub mod tests {
    use reqwest::Client;
    use std::time::Duration;

    use cointap_app::store::Store;
    use cointap_web::{AppState, WebRouter};

    /// Spawns the full web app on the given port against a fresh in-memory
    /// store and returns an HTTP client plus a handle to that store.
    ///
    /// Each test uses its own port so the suites can run in parallel.
    pub async fn setup_web_app(port: u16) -> (Client, Store) {
        let store = Store::in_memory();
        let state = AppState::new(store.clone());
        tokio::spawn(WebRouter::serve(state, port, "../cointap_web/public"));

        // Give the listener a moment to bind before the test fires requests.
        tokio::time::sleep(Duration::from_millis(100)).await;

        (Client::new(), store)
    }

    pub fn base_url(port: u16) -> String {
        format!("http://localhost:{port}")
    }
}
