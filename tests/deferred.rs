use std::sync::Arc;
use std::time::Duration;

use receiver_binding::{Capture, Console, Person};

#[tokio::test]
async fn deferred_callback_logs_the_constructed_instance() {
    let console = Capture::new();
    let sink: Arc<dyn Console> = console.clone();

    let (you, handle) = Person::new("U", sink, Duration::from_millis(10));
    assert_eq!(you.record().name, "U");
    // Nothing fires before the synchronous body is done.
    assert!(console.lines().is_empty());

    handle.await.unwrap().unwrap();
    assert_eq!(console.lines(), vec![r#"{"name":"U"}"#.to_string()]);
}

#[tokio::test]
async fn embedded_behavior_resolves_the_instance() {
    let console = Capture::new();
    let sink: Arc<dyn Console> = console.clone();

    let (you, handle) = Person::new("U", sink, Duration::from_millis(1));
    assert_eq!(you.talk().render().unwrap(), r#"{"name":"U"}"#);
    handle.await.unwrap().unwrap();
}
