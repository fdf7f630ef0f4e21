use std::sync::Arc;

use mockall::{Sequence, predicate::eq};

use super::*;
use crate::{
    collection::MockCollection, error::CollectionError, url_builder::PathSegmentUrlBuilder,
};

const BASE_URL: &str = "/catalog/all/";

fn numbered(total: u32) -> Vec<u32> {
    (1..=total).collect()
}

fn pair(number: usize) -> (usize, String) {
    (number, format!("{BASE_URL}?page={number}"))
}

#[test]
fn test_new_rejects_non_positive_per_page() {
    // Arrange
    let items = numbered(3);

    // Act
    let result = PaginationContext::new(BASE_URL, 1, 0, &items);

    // Assert
    assert!(matches!(result, Err(ConfigurationError::NonPositivePerPage(0))));
}

#[test]
fn test_context_middle_page() {
    // Arrange
    let items = numbered(42);
    let pagination = PaginationContext::new(BASE_URL, 3, 10, &items).unwrap();

    // Act
    let context = pagination.context().unwrap();

    // Assert
    assert_eq!(context.page.number(), 3);
    assert_eq!(context.page.items(), (21..=30).collect::<Vec<_>>());
    assert_eq!(context.page.total_pages(), 5);
    assert_eq!(context.showed_count, 30);
    assert_eq!(context.total_count, 42);
    assert_eq!(context.prev_pairs, vec![pair(1), pair(2)]);
    assert_eq!(context.next_pairs, vec![pair(4), pair(5)]);
}

#[test]
fn test_context_clamps_requested_page() {
    // Arrange
    let items = numbered(42);
    let pagination = PaginationContext::new(BASE_URL, 99, 10, &items).unwrap();

    // Act
    let context = pagination.context().unwrap();

    // Assert
    assert_eq!(context.page.number(), 5);
    assert_eq!(context.page.items(), &[41, 42]);
    assert_eq!(context.showed_count, 42);
    assert!(context.next_pairs.is_empty());
    assert_eq!(context.prev_pairs, vec![pair(1), pair(2), pair(3), pair(4)]);
}

#[test]
fn test_context_below_range_uses_first_page_for_showed_count() {
    // Arrange
    let items = numbered(42);
    let pagination = PaginationContext::new(BASE_URL, -4, 10, &items).unwrap();

    // Act
    let context = pagination.context().unwrap();

    // Assert
    assert_eq!(context.page.number(), 1);
    assert_eq!(context.showed_count, 10);
    assert!(context.prev_pairs.is_empty());
}

#[test]
fn test_context_empty_collection() {
    // Arrange
    let items: Vec<u32> = Vec::new();
    let pagination = PaginationContext::new(BASE_URL, 1, 10, &items).unwrap();

    // Act
    let context = pagination.context().unwrap();

    // Assert
    assert_eq!(context.page.total_pages(), 1);
    assert!(context.page.is_empty());
    assert_eq!(context.showed_count, 0);
    assert_eq!(context.total_count, 0);
    assert!(context.prev_pairs.is_empty());
    assert!(context.next_pairs.is_empty());
}

#[test]
fn test_context_neighbor_windows() {
    // Arrange
    let items = numbered(100);
    let pagination = PaginationContext::new(BASE_URL, 6, 10, &items).unwrap();

    // Act
    let context = pagination.context().unwrap();

    // Assert
    let prev: Vec<usize> = context.prev_pairs.iter().map(|(n, _)| *n).collect();
    let next: Vec<usize> = context.next_pairs.iter().map(|(n, _)| *n).collect();
    assert_eq!(prev, vec![1, 2, 3, 4, 5]);
    assert_eq!(next, vec![7, 8, 9, 10]);
}

#[test]
fn test_context_with_custom_window_and_url_builder() {
    // Arrange
    let items = numbered(100);
    let pagination = PaginationContext::new(BASE_URL, 6, 10, &items)
        .unwrap()
        .with_window(1)
        .unwrap()
        .with_url_builder(Arc::new(PathSegmentUrlBuilder::default()));

    // Act
    let context = pagination.context().unwrap();

    // Assert
    assert_eq!(context.prev_pairs, vec![(5, "/catalog/all/page/5/".to_string())]);
    assert_eq!(context.next_pairs, vec![(7, "/catalog/all/page/7/".to_string())]);
}

#[test]
fn test_with_zero_window_is_rejected() {
    // Arrange
    let items = numbered(10);
    let pagination = PaginationContext::new(BASE_URL, 1, 10, &items).unwrap();

    // Act
    let result = pagination.with_window(0);

    // Assert
    assert!(matches!(result, Err(ConfigurationError::ZeroNeighborWindow)));
}

#[test]
fn test_from_config() {
    // Arrange
    let items = numbered(50);
    let config = Config { per_page: 5, neighbor_window: 2, page_param: "p".to_string() };
    let pagination = PaginationContext::from_config(&config, BASE_URL, 4, &items).unwrap();

    // Act
    let context = pagination.context().unwrap();

    // Assert
    assert_eq!(context.page.items(), (16..=20).collect::<Vec<_>>());
    assert_eq!(context.showed_count, 20);
    assert_eq!(
        context.prev_pairs,
        vec![(2, "/catalog/all/?p=2".to_string()), (3, "/catalog/all/?p=3".to_string())]
    );
    assert_eq!(context.next_pairs.len(), 2);
}

#[test]
fn test_showed_count_invariant() {
    // Arrange
    let items = numbered(37);

    for per_page in 1..=8 {
        for requested in -1..=12 {
            // Act
            let context = PaginationContext::new(BASE_URL, requested, per_page, &items)
                .unwrap()
                .context()
                .unwrap();

            // Assert
            let page = &context.page;
            let expected = (page.number() - 1) * page.per_page() + page.len();
            assert_eq!(context.showed_count, expected);
            assert_eq!(context.showed_count, page.end_index());
        }
    }
}

#[test]
fn test_context_is_idempotent() {
    // Arrange
    let items = numbered(64);
    let pagination = PaginationContext::new(BASE_URL, 4, 7, &items).unwrap();

    // Act
    let first = pagination.context().unwrap();
    let second = pagination.context().unwrap();

    // Assert
    assert_eq!(first, second);
}

#[test]
fn test_context_counts_collection_twice() {
    // Arrange
    let mut collection = MockCollection::new();
    collection.expect_count().times(2).returning(|| Ok(42));
    collection
        .expect_slice()
        .with(eq(20), eq(10))
        .times(1)
        .returning(|_, _| Ok((21..=30).collect()));
    let pagination = PaginationContext::new(BASE_URL, 3, 10, &collection).unwrap();

    // Act
    let context = pagination.context().unwrap();

    // Assert
    assert_eq!(context.showed_count, 30);
    assert_eq!(context.total_count, 42);
}

#[test]
fn test_total_count_comes_from_second_count() {
    // Arrange: the collection grows between the two counts.
    let mut seq = Sequence::new();
    let mut collection = MockCollection::new();
    collection.expect_count().times(1).in_sequence(&mut seq).returning(|| Ok(42));
    collection.expect_slice().times(1).in_sequence(&mut seq).returning(|_, _| Ok(vec![41, 42]));
    collection.expect_count().times(1).in_sequence(&mut seq).returning(|| Ok(45));
    let pagination = PaginationContext::new(BASE_URL, 5, 10, &collection).unwrap();

    // Act
    let context = pagination.context().unwrap();

    // Assert
    assert_eq!(context.page.total_pages(), 5);
    assert_eq!(context.showed_count, 42);
    assert_eq!(context.total_count, 45);
}

#[test]
fn test_collection_error_is_propagated() {
    // Arrange
    let mut collection = MockCollection::new();
    collection.expect_count().times(1).returning(|| Ok(42));
    collection
        .expect_slice()
        .returning(|_, _| Err(CollectionError::Unavailable("timeout".to_string())));
    let pagination = PaginationContext::new(BASE_URL, 1, 10, &collection).unwrap();

    // Act
    let result = pagination.context();

    // Assert
    assert!(matches!(result, Err(CollectionError::Unavailable(msg)) if msg == "timeout"));
}

#[test]
fn test_second_count_error_is_propagated() {
    // Arrange
    let mut seq = Sequence::new();
    let mut collection = MockCollection::new();
    collection.expect_count().times(1).in_sequence(&mut seq).returning(|| Ok(3));
    collection.expect_slice().times(1).in_sequence(&mut seq).returning(|_, _| Ok(vec![1, 2, 3]));
    collection
        .expect_count()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(CollectionError::Unavailable("gone".to_string())));
    let pagination = PaginationContext::new(BASE_URL, 1, 10, &collection).unwrap();

    // Act
    let result = pagination.context();

    // Assert
    assert!(matches!(result, Err(CollectionError::Unavailable(_))));
}

#[test]
fn test_context_serializes_to_json() {
    // Arrange
    let items = numbered(12);
    let context = PaginationContext::new(BASE_URL, 2, 5, &items).unwrap().context().unwrap();

    // Act
    let json = serde_json::to_value(&context).unwrap();

    // Assert
    assert_eq!(json["page"]["number"], 2);
    assert_eq!(json["page"]["items"], serde_json::json!([6, 7, 8, 9, 10]));
    assert_eq!(json["showed_count"], 10);
    assert_eq!(json["total_count"], 12);
    assert_eq!(json["prev_pairs"], serde_json::json!([[1, "/catalog/all/?page=1"]]));
    assert_eq!(json["next_pairs"], serde_json::json!([[3, "/catalog/all/?page=3"]]));
}
