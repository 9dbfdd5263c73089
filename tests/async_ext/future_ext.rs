//! Tests for the async fluent lifts.

use std::sync::atomic::{AtomicBool, Ordering};

use step_rail::prelude::*;

async fn lookup(found: bool) -> Option<&'static str> {
    if found {
        Some("ada")
    } else {
        None
    }
}

async fn fetch(ok: bool) -> Result<i32, &'static str> {
    if ok {
        Ok(5)
    } else {
        Err("connection reset")
    }
}

async fn read_config(ok: bool) -> Result<&'static str, std::io::Error> {
    if ok {
        Ok("port = 8080")
    } else {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing"))
    }
}

#[tokio::test]
async fn future_option_or_fail_resolves_present_value() {
    let result = lookup(true).or_fail("unknown user").run().await;
    assert_eq!(result.unwrap(), "ada");
}

#[tokio::test]
async fn future_option_or_fail_converts_absence() {
    let result = lookup(false).or_fail("unknown user").run().await;
    assert_eq!(result.unwrap_err().user_message(), "unknown user");
}

#[tokio::test]
async fn future_result_or_fail_annotates_with_payload_display() {
    let result = fetch(false).or_fail("fetching order").run().await;
    assert_eq!(
        result.unwrap_err().messages(),
        vec!["fetching order", "fetching order", "connection reset"],
    );
}

#[tokio::test]
async fn future_result_or_fail_with_receives_the_payload() {
    let result = fetch(false)
        .or_fail_with(|payload| fail!("upstream: {}", payload))
        .run()
        .await;
    assert_eq!(result.unwrap_err().user_message(), "upstream: connection reset");
}

#[tokio::test]
async fn future_result_or_fail_root_keeps_the_error_as_root_cause() {
    let result = read_config(false).or_fail_root("loading config").run().await;

    let failure = result.unwrap_err();
    assert_eq!(failure.messages(), vec!["loading config", "loading config", "config.toml missing"]);
    let root = failure.root_cause().expect("io error kept as root");
    let io = root.downcast_ref::<std::io::Error>().expect("concrete type survives");
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}

#[tokio::test]
async fn producer_never_runs_on_the_success_path() {
    let produced = AtomicBool::new(false);

    let result = fetch(true)
        .or_fail_with(|_| {
            produced.store(true, Ordering::SeqCst);
            Failure::new("unused")
        })
        .run()
        .await;

    assert_eq!(result.unwrap(), 5);
    assert!(!produced.load(Ordering::SeqCst));
}

#[tokio::test]
async fn async_and_sync_lifts_sequence_together() {
    let step = lookup(true)
        .or_fail("unknown user")
        .and_then(|name| {
            (name == "ada")
                .or_fail("wrong user")
                .map(move |()| name)
        })
        .and_then(|name| fetch(true).or_fail("fetching order").map(move |n| (name, n)));

    let (name, order) = step.run().await.unwrap();
    assert_eq!(name, "ada");
    assert_eq!(order, 5);
}

#[tokio::test]
async fn first_failure_wins_across_async_steps() {
    let reached = AtomicBool::new(false);

    let result = fetch(false)
        .or_fail("first")
        .and_then(|_| {
            reached.store(true, Ordering::SeqCst);
            lookup(true).or_fail("second")
        })
        .run()
        .await;

    let failure = result.unwrap_err();
    assert_eq!(failure.message(), "first");
    assert!(!reached.load(Ordering::SeqCst));
}
