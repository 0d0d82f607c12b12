//! Property-based tests for the overlay store and form rules

use crate::tests::sample_users;
use crate::{FormField, FormSchema, ListView, OverlayStore, Rule, UserId};

use std::collections::HashSet;

use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Archive(u64),
    Unarchive(u64),
    Hide(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..=8).prop_map(Op::Archive),
        (1u64..=8).prop_map(Op::Unarchive),
        (1u64..=8).prop_map(Op::Hide),
    ]
}

proptest! {
    #[test]
    fn prop_list_groups_are_disjoint_and_exclude_hidden(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let users = sample_users(8);
        let mut store = OverlayStore::new();
        for op in &ops {
            match op {
                Op::Archive(id) => store.archive_user(UserId(*id)),
                Op::Unarchive(id) => store.unarchive_user(UserId(*id)),
                Op::Hide(id) => store.hide_user(UserId(*id)),
            }
        }
        let state = store.snapshot();

        let view = ListView::project(&users, &state, 6);

        let active: HashSet<UserId> = view.active.iter().map(|u| u.id).collect();
        let archived: HashSet<UserId> = view.archived.iter().map(|u| u.id).collect();
        prop_assert!(active.is_disjoint(&archived));
        prop_assert!(active.len() + archived.len() <= 6);
        for id in active.iter().chain(archived.iter()) {
            prop_assert!(!state.is_hidden(*id));
            prop_assert!(id.get() <= 6);
        }
        for id in &archived {
            prop_assert!(state.is_archived(*id));
        }
    }

    #[test]
    fn prop_every_mutation_notifies_once(ops in prop::collection::vec(op_strategy(), 0..30)) {
        use std::sync::{Arc, Mutex};

        let mut store = OverlayStore::new();
        let calls = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| *counter.lock().unwrap() += 1);

        for op in &ops {
            match op {
                Op::Archive(id) => store.archive_user(UserId(*id)),
                Op::Unarchive(id) => store.unarchive_user(UserId(*id)),
                Op::Hide(id) => store.hide_user(UserId(*id)),
            }
        }

        prop_assert_eq!(*calls.lock().unwrap(), ops.len());
    }

    #[test]
    fn prop_length_rules_agree_with_char_count(value in "\\PC{0,80}") {
        let count = value.chars().count();
        let schema = FormSchema::default();

        let message = schema.validate_field(FormField::City, &value);

        prop_assert_eq!(message.is_none(), (2..=64).contains(&count));
    }

    #[test]
    fn prop_phone_accepts_any_text_with_a_digit(prefix in "[a-z() -]{0,10}", digit in 0u8..10, suffix in "[a-z() -]{0,10}") {
        let value = format!("{prefix}{digit}{suffix}");

        prop_assert!(Rule::DigitsOnly.check(&value));
    }

    #[test]
    fn prop_email_without_at_is_rejected(value in "[A-Za-z0-9._+-]{0,40}") {
        prop_assert!(!Rule::Email.check(&value));
    }
}
