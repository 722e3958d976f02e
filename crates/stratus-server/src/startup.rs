//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r"
   _____ __             __
  / ___// /__________ _/ /___  _______
  \__ \/ __/ ___/ __ `/ __/ / / / ___/
 ___/ / /_/ /  / /_/ / /_/ /_/ (__  )
/____/\__/_/   \__,_/\__/\__,_/____/
    "
    );
}

/// Prints where the server can be reached.
pub fn print_startup_info(host: &str, port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}:{}/api/users", host, port);
    info!("Health:    http://{}:{}/health", host, port);
    info!("API Docs:  http://{}:{}/swagger-ui", host, port);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0", 5000);
    }
}
