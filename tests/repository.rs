use chrono::{Duration, TimeZone, Utc};
use instantproof::domain::mention::Mention;
use instantproof::domain::review::{NewReview, bundled_reviews};
use instantproof::domain::types::{MentionSource, Rating};
use instantproof::repository::{
    MentionWriter, ReviewReader, ReviewWriter, WidgetReader, WidgetWriter,
};
use instantproof::services::seed::seed_demo_data;
use instantproof::services::widget::DEFAULT_WIDGET_ID;

mod common;

fn mention(link: &str) -> Mention {
    let created_at = Utc.with_ymd_and_hms(2024, 10, 12, 0, 0, 0).unwrap();
    Mention {
        source: MentionSource::HackerNews,
        author: "hn-user".to_string(),
        title: "Launch thread".to_string(),
        text: "We shipped it".to_string(),
        link: Some(link.to_string()),
        created_at,
        date: "Oct 12, 2024".to_string(),
    }
}

fn new_review(author: &str, rating: i32, age_days: i64) -> NewReview {
    NewReview {
        source: "Google".to_string(),
        author: author.to_string(),
        rating: Rating::new(rating).expect("valid rating"),
        text: format!("Review by {author}"),
        created_at: Utc::now() - Duration::days(age_days),
    }
}

#[test]
fn store_mentions_skips_duplicate_source_and_link() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let first = repo
        .store_mentions(&[mention("https://news.ycombinator.com/item?id=1")])
        .expect("should store mention");
    assert_eq!(first, 1);

    // Same (source, link) pair collides with the unique index and is skipped.
    let second = repo
        .store_mentions(&[
            mention("https://news.ycombinator.com/item?id=1"),
            mention("https://news.ycombinator.com/item?id=2"),
        ])
        .expect("should store mentions");
    assert_eq!(second, 1);
}

#[test]
fn list_reviews_orders_by_recency_and_honors_limit() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    repo.create_reviews(&[
        new_review("Oldest", 3, 30),
        new_review("Newest", 5, 1),
        new_review("Middle", 4, 10),
    ])
    .expect("should create reviews");

    let reviews = repo.list_reviews(2).expect("should list reviews");
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].author, "Newest");
    assert_eq!(reviews[1].author, "Middle");
}

#[test]
fn review_totals_reports_count_and_average() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let (count, avg) = repo.review_totals().expect("should read empty totals");
    assert_eq!(count, 0);
    assert_eq!(avg, 0.0);

    repo.create_reviews(&[new_review("A", 4, 1), new_review("B", 5, 2)])
        .expect("should create reviews");

    let (count, avg) = repo.review_totals().expect("should read totals");
    assert_eq!(count, 2);
    assert!((avg - 4.5).abs() < f64::EPSILON);
}

#[test]
fn first_widget_id_returns_earliest_created_widget() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    assert_eq!(repo.first_widget_id().expect("should read widgets"), None);

    repo.create_widget("w-first", Some("First"))
        .expect("should create widget");
    repo.create_widget("w-second", None)
        .expect("should create widget");

    assert_eq!(
        repo.first_widget_id().expect("should read widgets"),
        Some("w-first".to_string())
    );
}

#[test]
fn seed_demo_data_populates_an_empty_database_once() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    seed_demo_data(&repo).expect("should seed demo data");

    let (count, _) = repo.review_totals().expect("should read totals");
    assert_eq!(count, bundled_reviews().len() as i64);
    assert_eq!(
        repo.first_widget_id().expect("should read widgets"),
        Some(DEFAULT_WIDGET_ID.to_string())
    );

    // Seeding again leaves the store untouched.
    seed_demo_data(&repo).expect("should seed demo data");
    let (count, _) = repo.review_totals().expect("should read totals");
    assert_eq!(count, bundled_reviews().len() as i64);
}
