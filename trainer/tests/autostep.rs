use std::time::Duration;

use tokio::time::sleep;

use trainer::SessionHandle;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn toggling_twice_from_idle_ends_idle() {
    init_logs();
    let mut handle = SessionHandle::with_period(Duration::from_millis(20));

    assert!(!handle.is_running());
    assert!(handle.toggle_auto_step());
    assert!(handle.is_running());
    assert!(!handle.toggle_auto_step());
    assert!(!handle.is_running());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn running_scheduler_takes_steps() {
    init_logs();
    let mut handle = SessionHandle::with_period(Duration::from_millis(20));

    handle.toggle_auto_step();
    sleep(Duration::from_millis(200)).await;

    assert!(handle.steps() >= 2, "only {} steps after 10 periods", handle.steps());

    handle.toggle_auto_step();
    let after_stop = handle.steps();
    sleep(Duration::from_millis(100)).await;

    assert_eq!(handle.steps(), after_stop, "ticks fired after cancellation");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn first_tick_lands_a_full_period_after_enabling() {
    init_logs();
    let mut handle = SessionHandle::with_period(Duration::from_millis(300));

    handle.toggle_auto_step();
    sleep(Duration::from_millis(50)).await;

    assert_eq!(handle.steps(), 0);
    handle.toggle_auto_step();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn retoggling_never_stacks_timers() {
    init_logs();
    let mut handle = SessionHandle::with_period(Duration::from_millis(50));

    // Idle → Running → Idle → Running leaves exactly one active timer.
    handle.toggle_auto_step();
    handle.toggle_auto_step();
    handle.toggle_auto_step();
    assert!(handle.is_running());

    sleep(Duration::from_millis(300)).await;
    handle.toggle_auto_step();

    // One 50 ms timer fits at most 6 ticks in 300 ms; two stacked timers
    // would roughly double that.
    assert!(handle.steps() <= 8, "{} steps suggest duplicate timers", handle.steps());
    assert!(handle.steps() >= 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reset_stops_the_scheduler_first() {
    init_logs();
    let mut handle = SessionHandle::with_period(Duration::from_millis(20));
    handle.set_x(-4.0);

    handle.toggle_auto_step();
    sleep(Duration::from_millis(100)).await;
    handle.reset();

    assert!(!handle.is_running());
    let state = handle.state();
    assert_eq!((state.w, state.b), (0.5, 0.1));
    // The sample survives a reset.
    assert_eq!(handle.sample().x, -4.0);

    let steps = handle.steps();
    sleep(Duration::from_millis(100)).await;
    assert_eq!(handle.steps(), steps);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn randomize_leaves_the_scheduler_alone() {
    init_logs();
    let mut handle = SessionHandle::with_period(Duration::from_millis(20));

    handle.toggle_auto_step();
    handle.randomize();
    assert!(handle.is_running());

    handle.toggle_auto_step();
    handle.randomize();
    assert!(!handle.is_running());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn view_reports_the_running_flag() {
    init_logs();
    let mut handle = SessionHandle::with_period(Duration::from_millis(20));

    assert!(!handle.view().running);
    handle.toggle_auto_step();
    assert!(handle.view().running);

    let json = handle.view().to_json().unwrap();
    assert!(json.contains("\"running\":true"));

    handle.toggle_auto_step();
    assert!(!handle.view().running);
}
