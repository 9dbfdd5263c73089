//! Tests for Step sequencing and terminal conversions.

use std::sync::atomic::{AtomicBool, Ordering};

use step_rail::{Failure, Step, Validation};

#[tokio::test]
async fn pure_resolves_to_value() {
    let result = Step::pure(42).run().await;
    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn fail_resolves_to_failure() {
    let result: Result<i32, _> = Step::fail(Failure::new("boom")).run().await;
    assert_eq!(result.unwrap_err().user_message(), "boom");
}

#[tokio::test]
async fn step_is_awaitable_directly() {
    let result = Step::pure("direct").await;
    assert_eq!(result.unwrap(), "direct");
}

#[tokio::test]
async fn and_then_chains_success() {
    let result = Step::pure(2)
        .and_then(|n| Step::pure(n + 1))
        .and_then(|n| Step::from_bool(n == 3, || Failure::new("bad sum")).map(move |()| n * 10))
        .run()
        .await;

    assert_eq!(result.unwrap(), 30);
}

#[tokio::test]
async fn and_then_short_circuits_on_failure() {
    let reached = AtomicBool::new(false);

    let result = Step::fail(Failure::new("first failure"))
        .and_then(|n: i32| {
            reached.store(true, Ordering::SeqCst);
            Step::pure(n + 1)
        })
        .run()
        .await;

    assert_eq!(result.unwrap_err().user_message(), "first failure");
    assert!(!reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn map_transforms_only_success() {
    let ok = Step::pure(5).map(|n| n * 2).run().await;
    assert_eq!(ok.unwrap(), 10);

    let err: Result<i32, _> = Step::fail(Failure::new("boom")).map(|n: i32| n * 2).run().await;
    assert_eq!(err.unwrap_err().user_message(), "boom");
}

#[tokio::test]
async fn context_annotates_only_failure() {
    let ok = Step::pure(1).context("loading").run().await;
    assert_eq!(ok.unwrap(), 1);

    let err: Result<i32, _> = Step::fail(Failure::new("boom")).context("loading").run().await;
    assert_eq!(err.unwrap_err().messages(), vec!["loading", "loading", "boom"]);
}

#[tokio::test]
async fn fold_merges_both_branches() {
    let ok = Step::pure(7).fold(|n| n + 1, |_| -1).await;
    assert_eq!(ok, 8);

    let err = Step::fail(Failure::new("boom")).fold(|n: i32| n + 1, |_| -1).await;
    assert_eq!(err, -1);
}

#[tokio::test]
async fn into_validation_splits_branches() {
    let valid = Step::pure("body").into_validation().await;
    assert_eq!(valid.into_value(), Some("body"));

    let invalid: Validation<Failure, &str> =
        Step::fail(Failure::new("boom")).into_validation().await;
    let errors = invalid.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].user_message(), "boom");
}

#[tokio::test]
async fn from_option_none_runs_the_producer() {
    let result: Result<u64, _> =
        Step::from_option(None, || Failure::new("missing id")).run().await;
    assert_eq!(result.unwrap_err().user_message(), "missing id");
}

#[tokio::test]
async fn from_option_some_skips_the_producer() {
    let produced = AtomicBool::new(false);

    let result = Step::from_option(Some(9), || {
        produced.store(true, Ordering::SeqCst);
        Failure::new("missing id")
    })
    .run()
    .await;

    assert_eq!(result.unwrap(), 9);
    assert!(!produced.load(Ordering::SeqCst));
}

#[tokio::test]
async fn from_result_hands_the_payload_to_the_producer() {
    let result: Result<i32, _> =
        Step::from_result(Err("row 7 not found"), |payload| Failure::new(payload))
            .run()
            .await;
    assert_eq!(result.unwrap_err().user_message(), "row 7 not found");
}

#[tokio::test]
async fn from_bool_guards() {
    assert!(Step::from_bool(true, || Failure::new("nope")).run().await.is_ok());

    let result = Step::from_bool(false, || Failure::new("nope")).run().await;
    assert_eq!(result.unwrap_err().user_message(), "nope");
}

#[tokio::test]
async fn attempt_lifts_an_eager_computation() {
    let ok = Step::attempt(|| "21".parse::<i32>(), |e| Failure::new("parsing").with_root(e))
        .run()
        .await;
    assert_eq!(ok.unwrap(), 21);

    let err = Step::attempt(|| "x".parse::<i32>(), |e| Failure::new("parsing").with_root(e))
        .run()
        .await;
    let failure = err.unwrap_err();
    assert!(failure.root_cause().is_some());
    assert_eq!(failure.message(), "parsing");
}

#[tokio::test]
async fn mixed_shapes_compose_in_one_chain() {
    async fn find_quantity(present: bool) -> Option<i64> {
        if present {
            Some(3)
        } else {
            None
        }
    }

    let step = Step::from_future_option(find_quantity(true), || Failure::new("no quantity"))
        .and_then(|quantity| {
            Step::from_bool(quantity > 0, || Failure::new("empty order")).map(move |()| quantity)
        })
        .and_then(|quantity| Step::from_result(Ok::<_, &str>(quantity * 5), Failure::new));

    assert_eq!(step.run().await.unwrap(), 15);
}
