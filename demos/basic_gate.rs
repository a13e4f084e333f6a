//! Basic gate flow: analyze, score, decide, and print the verdict.

use anyhow::Result;

#[cfg(feature = "mock")]
#[tokio::main]
async fn main() -> Result<()> {
    use std::sync::Arc;

    use rankgate::{Config, CorrectionOutcome, CorrectionSession, Corrector, MockEventPublisher};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rankgate=info".into()),
        )
        .init();

    let html = r#"
        <title>Espresso at home</title>
        <h1>Espresso basics</h1>
        <p>A short draft about espresso.</p>
    "#;
    let keywords = vec!["espresso".to_string()];

    let publisher = Arc::new(MockEventPublisher::new());
    let corrector = Corrector::new(&Config::from_env()?, publisher.clone());

    let mut session = CorrectionSession::new("demo-article");
    loop {
        match corrector
            .evaluate_and_correct(&session, html, &keywords)
            .await
        {
            CorrectionOutcome::Approved { score } => {
                println!("approved at {}", score);
                break;
            }
            CorrectionOutcome::CorrectionRequested {
                score,
                attempt,
                issues,
                ..
            } => {
                println!("attempt {}: score {}, issues {:?}", attempt, score, issues);
                session = session.next();
            }
            outcome => {
                println!("{}", outcome.message());
                break;
            }
        }
    }

    println!("{} event(s) published", publisher.len());
    Ok(())
}

#[cfg(not(feature = "mock"))]
fn main() {
    eprintln!("Run with: cargo run --example basic_gate --features mock");
}
