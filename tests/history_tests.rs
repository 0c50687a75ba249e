//! Conversation history store tests

use agribot::domain::model::{Exchange, LanguageCode};
use agribot::domain::traits::ConversationStore;
use agribot::infrastructure::storage::history::MemoryHistory;

fn exchange(n: usize) -> Exchange {
    Exchange::new(format!("question {n}"), format!("answer {n}"), LanguageCode::En)
}

#[tokio::test]
async fn test_history_is_per_user() {
    let store = MemoryHistory::new(10, 100);
    store.append("ravi", exchange(1)).await.unwrap();
    store.append("asha", exchange(2)).await.unwrap();
    store.append("ravi", exchange(3)).await.unwrap();

    let ravi = store.list("ravi").await.unwrap();
    assert_eq!(ravi.len(), 2);
    assert_eq!(ravi[0].user_query, "question 1");
    assert_eq!(ravi[1].user_query, "question 3");
    assert_eq!(store.list("asha").await.unwrap().len(), 1);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_history_keeps_newest_entries() {
    let store = MemoryHistory::new(3, 100);
    for n in 0..5 {
        store.append("ravi", exchange(n)).await.unwrap();
    }

    let queries: Vec<String> = store
        .list("ravi")
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.user_query)
        .collect();
    assert_eq!(queries, vec!["question 2", "question 3", "question 4"]);
}

#[tokio::test]
async fn test_clear_reports_removed_count() {
    let store = MemoryHistory::new(10, 100);
    store.append("ravi", exchange(1)).await.unwrap();
    store.append("ravi", exchange(2)).await.unwrap();

    assert_eq!(store.clear("ravi").await.unwrap(), 2);
    assert_eq!(store.clear("ravi").await.unwrap(), 0);
    assert!(store.list("ravi").await.unwrap().is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_least_recently_written_user_is_evicted() {
    let store = MemoryHistory::new(10, 2);
    store.append("ravi", exchange(1)).await.unwrap();
    store.append("asha", exchange(2)).await.unwrap();
    store.append("ravi", exchange(3)).await.unwrap();
    store.append("meena", exchange(4)).await.unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.list("asha").await.unwrap().is_empty());
    assert_eq!(store.list("ravi").await.unwrap().len(), 2);
    assert_eq!(store.list("meena").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_count_stays_bounded() {
    let store = MemoryHistory::new(1, 50);
    for n in 0..1000 {
        store.append(&format!("user-{n}"), exchange(n)).await.unwrap();
    }

    assert_eq!(store.len(), 50);
    assert_eq!(store.list("user-999").await.unwrap().len(), 1);
    assert!(store.list("user-0").await.unwrap().is_empty());
}
