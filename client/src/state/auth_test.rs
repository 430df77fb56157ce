use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::*;

struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _path: &str) {}
}

struct NoopTimer;

impl Timer for NoopTimer {
    fn sleep(&self, _duration: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
        Box::pin(std::future::pending())
    }
}

fn config(timeout_secs: u64) -> AppConfig {
    AppConfig {
        auth_url: "https://auth.example".to_owned(),
        anon_key: "anon".to_owned(),
        site_url: String::new(),
        timeout_secs,
    }
}

#[test]
fn hosted_services_use_default_destinations() {
    let services = AuthServices::hosted(config(10));
    assert_eq!(services.destinations, Destinations::default());
    assert_eq!(services.destinations.login, "/login");
    assert_eq!(services.destinations.landing, "/app");
}

#[test]
fn guard_inherits_timeout_and_destinations() {
    let mut services = AuthServices::hosted(config(3));
    services.destinations.login = "/sign-in".to_owned();

    let guard = services.guard_with(Arc::new(NoopNavigator), Arc::new(NoopTimer));
    assert_eq!(guard.timeout(), Duration::from_secs(3));
    assert_eq!(guard.destinations().login, "/sign-in");
}
