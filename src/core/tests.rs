use std::time::{Duration, Instant};
use url::Url;

use crate::core::Dispatcher;
use crate::probers::{MockProbe, MockProber};

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[tokio::test]
async fn report_is_ordered_like_the_target_list() {
    // The first target is the slowest, so it completes last but must still
    // come back first in the report.
    let targets = vec![
        url("https://api-1.example.com/warmup"),
        url("https://api-2.example.com/warmup"),
        url("https://api-3.example.com/warmup"),
    ];
    let prober = MockProber::new(vec![
        (
            targets[0].clone(),
            MockProbe::status(200).with_delay(Duration::from_millis(100)),
        ),
        (targets[1].clone(), MockProbe::status(204)),
        (targets[2].clone(), MockProbe::status(503)),
    ]);

    let dispatcher = Dispatcher::new(Box::new(prober));
    let report = dispatcher.run(&targets).await;

    assert_eq!(report.len(), targets.len());
    for (outcome, target) in report.iter().zip(&targets) {
        assert_eq!(outcome.url(), target);
    }
    let statuses: Vec<_> = report.iter().map(|o| o.status()).collect();
    assert_eq!(statuses, vec![Some(200), Some(204), Some(503)]);
}

#[tokio::test]
async fn mixed_outcomes_keep_status_and_error_shapes_apart() {
    let targets = vec![
        url("https://up.example.com/"),
        url("https://busy.example.com/"),
        url("https://down.example.com/"),
    ];
    let prober = MockProber::new(vec![
        (targets[0].clone(), MockProbe::status(200)),
        (targets[1].clone(), MockProbe::status(503)),
        (targets[2].clone(), MockProbe::error("Connection refused")),
    ]);

    let dispatcher = Dispatcher::new(Box::new(prober));
    let report = dispatcher.run(&targets).await;

    let outcomes = report.outcomes();
    assert_eq!(outcomes[0].status(), Some(200));
    assert_eq!(outcomes[0].error(), None);
    assert_eq!(outcomes[1].status(), Some(503));
    assert_eq!(outcomes[2].status(), None);
    assert_eq!(
        outcomes[2].error(),
        Some("connection failed: Connection refused")
    );
}

#[tokio::test]
async fn a_failing_target_never_aborts_the_batch() {
    let targets = vec![
        url("https://a.example.com/"),
        url("https://b.example.com/"),
        url("https://c.example.com/"),
    ];
    let prober = MockProber::new(
        targets
            .iter()
            .map(|t| (t.clone(), MockProbe::error("no route to host")))
            .collect(),
    );

    let dispatcher = Dispatcher::new(Box::new(prober.clone()));
    let report = dispatcher.run(&targets).await;

    assert_eq!(report.len(), 3);
    assert!(report.iter().all(|o| o.error().is_some()));
    assert_eq!(prober.calls(), 3);
}

#[tokio::test]
async fn probes_run_concurrently_not_sequentially() {
    let targets: Vec<_> = (1..=4)
        .map(|i| url(&format!("https://api-{}.example.com/warmup", i)))
        .collect();
    let prober = MockProber::new(
        targets
            .iter()
            .map(|t| {
                (
                    t.clone(),
                    MockProbe::status(200).with_delay(Duration::from_millis(100)),
                )
            })
            .collect(),
    );

    let dispatcher = Dispatcher::new(Box::new(prober));
    let started = Instant::now();
    let report = dispatcher.run(&targets).await;
    let elapsed = started.elapsed();

    assert_eq!(report.len(), 4);
    // Four sequential 100ms probes would take 400ms; concurrent fan-out
    // should stay close to the slowest single probe.
    assert!(elapsed < Duration::from_millis(300), "took {:?}", elapsed);
}

#[tokio::test]
async fn empty_target_list_yields_empty_report() {
    let prober = MockProber::new(vec![]);
    let dispatcher = Dispatcher::new(Box::new(prober));
    let report = dispatcher.run(&[]).await;
    assert!(report.is_empty());
}

#[tokio::test]
async fn stats_reflect_dispatched_outcomes() {
    let targets = vec![
        url("https://up.example.com/"),
        url("https://down.example.com/"),
    ];
    let prober = MockProber::new(vec![
        (targets[0].clone(), MockProbe::status(200)),
        (targets[1].clone(), MockProbe::error("timed out")),
    ]);

    let dispatcher = Dispatcher::new(Box::new(prober));
    dispatcher.run(&targets).await;
    dispatcher.run(&targets).await;

    let stats = dispatcher.stats().snapshot();
    assert_eq!(stats.dispatches, 2);
    assert_eq!(stats.total_probes, 4);
    assert_eq!(stats.responses, 2);
    assert_eq!(stats.failures, 2);
    assert_eq!(stats.status_codes.get(&200), Some(&2));
}
