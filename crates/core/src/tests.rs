use super::*;

#[test]
fn entity_id_validation() {
    assert_eq!(QuestionId::try_new("").unwrap_err(), IdError::Empty);
    assert_eq!(
        QuestionId::try_new("A-000001").unwrap_err(),
        IdError::WrongPrefix { expected: "Q" }
    );
    assert_eq!(QuestionId::try_new("Q-").unwrap_err(), IdError::Empty);
    assert_eq!(
        UserId::try_new("U-12 3").unwrap_err(),
        IdError::InvalidChar { ch: ' ', index: 4 }
    );
    assert_eq!(
        QuestionId::try_new(" Q-000007 ").unwrap().as_str(),
        "Q-000007"
    );
    assert_eq!(AnswerId::from_seq(42).as_str(), "A-000042");
    assert_eq!(TagId::from_seq(1_234_567).as_str(), "T-1234567");
}

#[test]
fn vote_toggle_is_its_own_inverse() {
    let first = VoteState::None.apply(VoteDirection::Up);
    assert_eq!(first.next, VoteState::Up);
    assert_eq!(first.kind, VoteTransitionKind::ToggleOn);

    let second = first.next.apply(VoteDirection::Up);
    assert_eq!(second.next, VoteState::None);
    assert_eq!(second.kind, VoteTransitionKind::ToggleOff);

    assert_eq!(first.reputation_delta(2) + second.reputation_delta(2), 0);
}

#[test]
fn vote_switch_applies_a_single_positive_delta() {
    let switch = VoteState::Down.apply(VoteDirection::Up);
    assert_eq!(switch.next, VoteState::Up);
    assert_eq!(switch.kind, VoteTransitionKind::Switch);
    assert_eq!(switch.reputation_delta(2), 2);

    let mirror = VoteState::Up.apply(VoteDirection::Down);
    assert_eq!(mirror.next, VoteState::Down);
    assert_eq!(mirror.reputation_delta(10), 10);

    let off = VoteState::Down.apply(VoteDirection::Down);
    assert_eq!(off.next, VoteState::None);
    assert_eq!(off.reputation_delta(10), -10);
}

#[test]
fn vote_state_flags_round_trip() {
    assert_eq!(VoteState::from_flags(false, false), VoteState::None);
    assert_eq!(VoteState::from_flags(true, false), VoteState::Up);
    assert_eq!(VoteState::from_flags(false, true), VoteState::Down);
    assert!(VoteState::Up.has_upvoted());
    assert!(!VoteState::Up.has_downvoted());
    assert_eq!(VoteDirection::from_str("down"), Some(VoteDirection::Down));
    assert_eq!(VoteDirection::from_str("sideways"), None);
}

#[test]
fn reputation_policy_defaults() {
    let policy = ReputationPolicy::default();
    let on = VoteState::None.apply(VoteDirection::Up);

    let answer = policy.vote_deltas(VoteTarget::Answer, &on);
    assert_eq!(answer, ReputationDeltas { voter: 2, author: 10 });

    let question = policy.vote_deltas(VoteTarget::Question, &on);
    assert_eq!(question, ReputationDeltas { voter: 2, author: 0 });

    let off = VoteState::Up.apply(VoteDirection::Up);
    let answer_off = policy.vote_deltas(VoteTarget::Answer, &off);
    assert_eq!(answer_off, ReputationDeltas { voter: -2, author: -10 });
}

#[test]
fn sort_keys_are_closed() {
    assert_eq!(QuestionSort::parse("newest"), Ok(QuestionSort::Newest));
    assert_eq!(QuestionSort::parse(" unanswered "), Ok(QuestionSort::Unanswered));
    assert_eq!(QuestionSort::parse_optional(None), Ok(None));
    assert_eq!(QuestionSort::parse_optional(Some("  ")), Ok(None));

    let err = QuestionSort::parse("recommended").unwrap_err();
    assert_eq!(err.key, "recommended");
    assert!(err.message().contains("newest|frequent|unanswered"));

    assert_eq!(AnswerSort::parse("highestUpvotes"), Ok(AnswerSort::HighestUpvotes));
    assert_eq!(AnswerSort::parse("old"), Ok(AnswerSort::Old));
    assert!(AnswerSort::parse("newest").is_err());
}

#[test]
fn paging_math() {
    let first = PageRequest::try_new(Some(1), Some(20), DEFAULT_QUESTION_PAGE_SIZE).unwrap();
    assert_eq!(first.skip(), 0);
    assert!(first.has_next(25, 20));

    let second = PageRequest::try_new(Some(2), Some(20), DEFAULT_QUESTION_PAGE_SIZE).unwrap();
    assert_eq!(second.skip(), 20);
    assert!(!second.has_next(25, 5));

    let page = Page::new(&second, vec![1, 2, 3, 4, 5], 25);
    assert!(!page.has_next);
    assert_eq!(page.total, 25);
}

#[test]
fn paging_clamps_and_validates() {
    let clamped = PageRequest::try_new(Some(0), None, DEFAULT_ANSWER_PAGE_SIZE).unwrap();
    assert_eq!(clamped.page(), 1);
    assert_eq!(clamped.page_size(), DEFAULT_ANSWER_PAGE_SIZE);

    let negative = PageRequest::try_new(Some(-4), Some(5), DEFAULT_ANSWER_PAGE_SIZE).unwrap();
    assert_eq!(negative.page(), 1);

    let capped = PageRequest::try_new(None, Some(10_000), DEFAULT_ANSWER_PAGE_SIZE).unwrap();
    assert_eq!(capped.page_size(), MAX_PAGE_SIZE);

    assert_eq!(
        PageRequest::try_new(Some(1), Some(0), DEFAULT_ANSWER_PAGE_SIZE).unwrap_err(),
        PageError::NonPositivePageSize(0)
    );
}

#[test]
fn tag_names_fold_case_insensitively() {
    let upper = TagName::try_new(" Java ").unwrap();
    let lower = TagName::try_new("java").unwrap();
    assert_eq!(upper.display(), "Java");
    assert_eq!(upper.key(), lower.key());

    let unicode = TagName::try_new("ÜBER").unwrap();
    assert_eq!(unicode.key(), "über");

    assert_eq!(TagName::try_new("  ").unwrap_err(), TagNameError::Empty);
    assert_eq!(
        TagName::try_new("bad\u{0007}").unwrap_err(),
        TagNameError::ContainsControl
    );
}

#[test]
fn long_tag_names_are_accepted() {
    let long = "x".repeat(200);
    let tag = TagName::try_new(&long).unwrap();
    assert_eq!(tag.display(), long);
}

#[test]
fn interaction_actions_round_trip() {
    for action in [
        InteractionAction::AskQuestion,
        InteractionAction::Answer,
        InteractionAction::View,
    ] {
        assert_eq!(InteractionAction::from_str(action.as_str()), Some(action));
    }
}
