use lazy_static::lazy_static;
use tenkey::{
    config::{self, CalculatorConfig},
    evaluator::EvaluatorRegistry,
    keys::Key,
    session::Session,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

const RUN_STRESS_TESTS: &str = "RUN_STRESS_TESTS";

lazy_static! {
    static ref STRESS_TESTS_ENABLED: bool = {
        match std::env::var(RUN_STRESS_TESTS) {
            Ok(_) => true,
            Err(_) => {
                println!("Skipping stress tests: RUN_STRESS_TESTS not set");
                false
            }
        }
    };
}

fn should_run_stress_tests() -> bool {
    *STRESS_TESTS_ENABLED
}

async fn registry(config: &CalculatorConfig) -> EvaluatorRegistry {
    let registry = EvaluatorRegistry::new(config.evaluator_configs.clone());
    registry.register_evaluators().await.unwrap();
    registry
}

async fn run_legend(legend: &str) -> String {
    let config = CalculatorConfig::default();
    let registry = registry(&config).await;
    let handle = Session::spawn(&config, &registry).await.unwrap();

    for c in legend.chars() {
        handle.keys.send(Key::try_from(c).unwrap()).await.unwrap();
    }
    drop(handle.keys);
    handle.task.await.unwrap().unwrap();

    let display = handle.display.borrow().clone();
    display
}

#[tokio::test]
async fn test_spawned_session_computes_a_sum() {
    assert_eq!(run_legend("3+4=").await, "7");
}

#[tokio::test]
async fn test_spawned_session_surfaces_evaluation_failure() {
    assert_eq!(run_legend("5/0=").await, "Error");
}

#[tokio::test]
async fn test_spawned_session_chains_operations() {
    assert_eq!(run_legend("2+3*4=").await, "20");
}

#[tokio::test]
async fn test_clear_recovers_a_spawned_session() {
    assert_eq!(run_legend("5/0=c9-2=").await, "7");
}

#[tokio::test]
async fn test_display_updates_are_observable_while_running() {
    let config = CalculatorConfig::default();
    let registry = registry(&config).await;
    let mut handle = Session::spawn(&config, &registry).await.unwrap();
    assert_eq!(*handle.display.borrow(), "0");

    handle.keys.send(Key::Digit('8')).await.unwrap();
    handle.display.changed().await.unwrap();
    assert_eq!(*handle.display.borrow_and_update(), "8");

    drop(handle.keys);
    handle.task.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_session_stops_when_all_watchers_are_dropped() {
    let config = CalculatorConfig::default();
    let registry = registry(&config).await;
    let handle = Session::spawn(&config, &registry).await.unwrap();

    drop(handle.display);
    handle.keys.send(Key::Digit('1')).await.unwrap();
    handle.task.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let config = CalculatorConfig::default();
    let registry = registry(&config).await;
    let a = Session::spawn(&config, &registry).await.unwrap();
    let b = Session::spawn(&config, &registry).await.unwrap();
    assert_ne!(a.id, b.id);

    for c in "1+2=".chars() {
        a.keys.send(Key::try_from(c).unwrap()).await.unwrap();
    }
    drop(a.keys);
    a.task.await.unwrap().unwrap();

    assert_eq!(*a.display.borrow(), "3");
    assert_eq!(*b.display.borrow(), "0");
}

#[tokio::test]
async fn test_session_wiring_from_json_config() {
    let config: CalculatorConfig = config::from_str(
        r#"{
            "key_buffer_size": 8,
            "evaluator_configs": {
                "evaluators": {
                    "arithmetic": { "evaluator_type": "Local", "name": "arithmetic" }
                },
                "primary_evaluator": "arithmetic"
            }
        }"#,
    )
    .unwrap();
    let registry = registry(&config).await;

    let mut session = Session::from_registry(&registry).await.unwrap();
    assert_eq!(session.handle_key(Key::Digit('6')).await, "6");
    assert_eq!(session.handle_key(Key::try_from('*').unwrap()).await, "0");
    assert_eq!(session.handle_key(Key::Digit('7')).await, "7");
    assert_eq!(session.handle_key(Key::Equals).await, "42");
}

#[tokio::test]
async fn test_long_addition_chain() {
    if !should_run_stress_tests() {
        return;
    }
    let config = CalculatorConfig::default();
    let registry = registry(&config).await;
    let mut session = Session::from_registry(&registry).await.unwrap();

    for _ in 0..1000 {
        session.handle_key(Key::Digit('1')).await;
        session.handle_key(Key::try_from('+').unwrap()).await;
    }
    session.handle_key(Key::Digit('0')).await;
    let display = session.handle_key(Key::Equals).await;
    assert_eq!(display, "1000");
}
