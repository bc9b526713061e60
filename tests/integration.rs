// SPDX-License-Identifier: MPL-2.0
//! Cross-module flows exercised over the public API: the embedded catalog
//! feeding the filter, map, quiz, and QR state machines.

use regalbuto_heritage::content::{Catalog, Category};
use regalbuto_heritage::domain::filter::{CategoryFilter, FilterState};
use regalbuto_heritage::domain::map::MapViewState;
use regalbuto_heritage::domain::qr::{CloseOutcome, QrPayload, QrSession, SessionState};
use regalbuto_heritage::domain::quiz::{QuizStage, QuizState, QUESTION_COUNT};
use std::time::Instant;

#[test]
fn catalog_feeds_a_consistent_filter_and_map() {
    let catalog = Catalog::load().expect("embedded content");
    let mut filter = FilterState::new();
    let mut map = MapViewState::new();
    map.ensure_initialized(&catalog.locations);

    // All monuments and all markers visible by default.
    assert_eq!(
        filter.visible_count(&catalog.monuments),
        catalog.monuments.len()
    );
    assert_eq!(map.attached_count(), catalog.locations.len());

    // A shared category selection narrows both projections.
    filter.set_category(CategoryFilter::Only(Category::Natura));
    map.apply_category_filter(filter.active_category());

    for monument in filter.visible_monuments(&catalog.monuments) {
        assert_eq!(monument.category, Category::Natura);
    }
    for marker in map.attached_markers() {
        assert_eq!(marker.category, Category::Natura);
    }
}

#[test]
fn filter_application_is_idempotent_over_real_content() {
    let catalog = Catalog::load().expect("embedded content");
    let mut filter = FilterState::new();

    filter.set_search_text("chiesa");
    filter.set_category(CategoryFilter::Only(Category::Religioso));
    let once = filter.visible_count(&catalog.monuments);

    filter.set_search_text("chiesa");
    filter.set_category(CategoryFilter::Only(Category::Religioso));
    let twice = filter.visible_count(&catalog.monuments);

    assert_eq!(once, twice);
    assert!(once > 0);
}

#[test]
fn religioso_has_monuments_but_no_markers() {
    // The category exists in the directory yet matches zero map locations,
    // which must not disturb the viewport (no bounds of an empty set).
    let catalog = Catalog::load().expect("embedded content");
    let mut filter = FilterState::new();
    let mut map = MapViewState::new();
    map.ensure_initialized(&catalog.locations);

    let center = map.center();
    filter.set_category(CategoryFilter::Only(Category::Religioso));
    map.apply_category_filter(filter.active_category());

    assert!(filter.visible_count(&catalog.monuments) > 0);
    assert_eq!(map.attached_count(), 0);
    assert_eq!(map.center(), center);
}

#[test]
fn qr_payloads_route_like_the_payload_contract_says() {
    assert_eq!(
        QrPayload::classify("monument:san-basilio"),
        QrPayload::Monument("san-basilio".to_string())
    );
    assert!(matches!(
        QrPayload::classify("https://example.com"),
        QrPayload::Url(_)
    ));
    assert!(matches!(
        QrPayload::classify("hello world"),
        QrPayload::Raw(_)
    ));

    // Deep-linked monument ids resolve against the real catalog.
    let catalog = Catalog::load().expect("embedded content");
    if let QrPayload::Monument(id) = QrPayload::classify("monument:san-basilio") {
        assert!(catalog.monument(&id).is_some());
    }
}

#[test]
fn rapid_double_close_is_a_single_effective_close() {
    let now = Instant::now();
    let mut session = QrSession::new();
    session.open();
    session.capture_started();

    assert_eq!(session.close(now), CloseOutcome::Begun);
    assert_eq!(session.close(now), CloseOutcome::InFlight);
    session.finish_close(now);

    assert_eq!(session.state(), SessionState::Idle);
    assert!(!session.is_open());
    assert!(session.result().is_none());
}

#[test]
fn quiz_scores_the_answer_key_at_ten_over_real_content() {
    let catalog = Catalog::load().expect("embedded content");
    let mut quiz = QuizState::new();
    quiz.start();

    for question in 1..=QUESTION_COUNT {
        let correct = catalog.answer_key.correct(question).expect("key entry");
        quiz.select(question, correct);
        if question < QUESTION_COUNT {
            quiz.next().expect("answered");
        }
    }

    let score = quiz.submit(&catalog.answer_key).expect("final answered");
    assert_eq!(score, 10);
    assert_eq!(quiz.stage(), QuizStage::Complete { score: 10 });
}
