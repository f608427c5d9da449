//! Scripted menu sessions, against both the real actor and a mock queue.

use counter_queue::config::CounterConfig;
use counter_queue::lifecycle::CounterSystem;
use counter_queue::model::{Order, OrderId, OrderTime};
use counter_queue::queue::{OrderPolicy, QueueError, SortMode};
use counter_queue::service::mock::MockQueue;
use counter_queue::service::{QueueClient, ServiceError};
use counter_queue::session::{OutputFormat, Session};

async fn run_script(client: QueueClient, script: &str, format: OutputFormat) -> String {
    let mut session = Session::new(client, OrderPolicy::default(), script.as_bytes(), Vec::new())
        .with_format(format);
    session.run().await.expect("session failed");
    String::from_utf8(session.into_output()).unwrap()
}

fn order(id: u32, item: &str, quantity: u32, time: u64) -> Order {
    Order {
        order_id: OrderId(id),
        item_name: item.to_string(),
        quantity,
        order_time: OrderTime(time),
    }
}

#[tokio::test]
async fn test_place_sort_serve_session() {
    let system = CounterSystem::new(CounterConfig::default());

    let script = "\
1\n5\nSoup\n2\n\
1\n3\nBread\n1\n\
1\n9\nTea\n3\n\
3\n\
5\n1\n\
2\n\
3\n\
7\n";
    let out = run_script(system.queue_client.clone(), script, OutputFormat::Table).await;

    assert_eq!(out.matches("✅ Order placed successfully.").count(), 3);
    assert!(out.contains("✅ Orders sorted successfully."));
    assert!(out.contains("✅ Served Order:"));
    assert!(out.ends_with("Exiting system... Goodbye!\n"));

    // Served order is the lowest id after sorting.
    let served = out.split("✅ Served Order:").nth(1).unwrap();
    let served_row = served.lines().nth(3).unwrap();
    assert!(served_row.starts_with("3         Bread"), "got {served_row:?}");

    let ids: Vec<u32> = system
        .queue_client
        .pending()
        .await
        .unwrap()
        .iter()
        .map(|o| o.order_id.0)
        .collect();
    assert_eq!(ids, vec![5, 9]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_id_is_reprompted_before_other_fields() {
    let system = CounterSystem::new(CounterConfig::default());

    let script = "1\n4\nSoup\n1\n1\n4\n8\nTea\n2\n7\n";
    let out = run_script(system.queue_client.clone(), script, OutputFormat::Table).await;

    assert_eq!(
        out.matches("Order ID already exists. Please enter a different ID.").count(),
        1
    );
    assert_eq!(out.matches("✅ Order placed successfully.").count(), 2);

    let tea = system.queue_client.search(OrderId(8)).await.unwrap().unwrap();
    assert_eq!(tea.order_time, OrderTime(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_input_is_reprompted() {
    let system = CounterSystem::new(CounterConfig::default());

    let script = "zero\n9\n1\n0\n12\n\nBagel\n500\n4\n7\n";
    let out = run_script(system.queue_client.clone(), script, OutputFormat::Table).await;

    assert!(out.contains("Invalid input. Please enter a number."));
    assert!(out.contains("Invalid range. Please enter between 1 and 7."));
    assert!(out.contains("Invalid range. Please enter between 1 and 1000000000."));
    assert!(out.contains("Input cannot be empty. Try again."));
    assert!(out.contains("Invalid range. Please enter between 1 and 100."));

    let bagel = system.queue_client.search(OrderId(12)).await.unwrap().unwrap();
    assert_eq!(bagel.quantity, 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_queue_actions_only_warn() {
    let mut mock = MockQueue::new();
    mock.expect_is_empty().return_ok(true);
    mock.expect_pending().return_ok(vec![]);
    mock.expect_is_empty().return_ok(true);
    mock.expect_is_empty().return_ok(true);
    mock.expect_is_empty().return_ok(true);

    let out = run_script(mock.client(), "2\n3\n4\n5\n6\n7\n", OutputFormat::Table).await;

    assert!(out.contains("⚠️ No pending orders to serve."));
    assert!(out.contains("⚠️ No pending orders.\n"));
    assert!(out.contains("⚠️ No pending orders to search."));
    assert!(out.contains("⚠️ No pending orders to sort."));
    assert!(out.contains("⚠️ No pending orders to cancel."));
    mock.verify();
}

#[tokio::test]
async fn test_lost_race_on_id_is_reported() {
    let mut mock = MockQueue::new();
    mock.expect_contains(OrderId(6)).return_ok(false);
    mock.expect_place()
        .return_err(ServiceError::Queue(QueueError::DuplicateId(OrderId(6))));

    let out = run_script(mock.client(), "1\n6\nPie\n1\n7\n", OutputFormat::Table).await;

    assert!(out.contains("❌ Order not placed: Order ID already exists: 6"));
    assert!(!out.contains("✅ Order placed successfully."));
    mock.verify();
}

#[tokio::test]
async fn test_search_sort_and_cancel_with_mock() {
    let mut mock = MockQueue::new();
    mock.expect_is_empty().return_ok(false);
    mock.expect_search(OrderId(2)).return_ok(None);
    mock.expect_is_empty().return_ok(false);
    mock.expect_sort(SortMode::ByTime)
        .return_ok(vec![order(5, "Soup", 2, 1), order(3, "Bread", 1, 2)]);
    mock.expect_is_empty().return_ok(false);
    mock.expect_cancel(OrderId(5)).return_ok(Some(order(5, "Soup", 2, 1)));

    let out = run_script(mock.client(), "4\n2\n5\n2\n6\n5\n7\n", OutputFormat::Table).await;

    assert!(out.contains("❌ Order ID not found."));
    assert!(out.contains("Sorted result:"));
    assert!(out.contains("✅ Cancelled Order:"));
    mock.verify();
}

#[tokio::test]
async fn test_json_output() {
    let mut mock = MockQueue::new();
    mock.expect_pending().return_ok(vec![order(5, "Soup", 2, 1)]);

    let out = run_script(mock.client(), "3\n7\n", OutputFormat::Json).await;

    let start = out.find('[').unwrap();
    let end = out.rfind(']').unwrap();
    let value: serde_json::Value = serde_json::from_str(&out[start..=end]).unwrap();
    assert_eq!(value[0]["order_id"], 5);
    assert_eq!(value[0]["order_time"], 1);
    mock.verify();
}

#[tokio::test]
async fn test_end_of_input_exits_quietly() {
    let mut mock = MockQueue::new();
    mock.expect_contains(OrderId(5)).return_ok(false);

    let out = run_script(mock.client(), "1\n5\n", OutputFormat::Table).await;
    assert!(out.contains("Enter Item Name: "));
    assert!(!out.contains("Goodbye"));
    mock.verify();
}

#[tokio::test]
async fn test_non_utf8_item_name_is_placed_lossily() {
    let system = CounterSystem::new(CounterConfig::default());

    let script: &[u8] = b"1\n5\nCaf\xe9\n2\n7\n";
    let mut session = Session::new(
        system.queue_client.clone(),
        OrderPolicy::default(),
        script,
        Vec::new(),
    );
    session.run().await.unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();
    assert!(out.contains("✅ Order placed successfully."));
    assert!(out.ends_with("Exiting system... Goodbye!\n"));

    let pending = system.queue_client.pending().await.unwrap();
    assert_eq!(pending, vec![order(5, "Caf\u{FFFD}", 2, 1)]);

    system.shutdown().await.unwrap();
}
