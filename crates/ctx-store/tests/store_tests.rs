//! Namespace, global namespace, and request scope behavior.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ctx_protocol::{Attributes, ContextError, User};
use ctx_store::{Namespace, RequestScope, global};

/// The global namespace is process-wide; tests touching it take turns.
static GLOBAL_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

// ─────────────────────────────────────────────────────────────────────────────
// Namespace
// ─────────────────────────────────────────────────────────────────────────────

mod namespace {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut ns = Namespace::new();
        assert!(ns.set(Attributes::USER, User::new("John")).is_none());
        assert_eq!(ns.get::<User>(Attributes::USER).unwrap().name, "John");
        assert!(ns.contains(Attributes::USER));
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn set_returns_previous_value_of_same_type() {
        let mut ns = Namespace::new();
        ns.set("count", 1u32);
        assert_eq!(ns.set("count", 2u32), Some(1));
        // A different type replaces the value but cannot be handed back.
        assert_eq!(ns.set("count", "two"), None);
        assert_eq!(*ns.get::<&str>("count").unwrap(), "two");
    }

    #[test]
    fn get_missing_attribute() {
        let ns = Namespace::new();
        assert_eq!(
            ns.get::<User>("user").unwrap_err(),
            ContextError::missing("user"),
        );
    }

    #[test]
    fn get_with_wrong_type() {
        let mut ns = Namespace::new();
        ns.set("user", "not a user");
        let err = ns.get::<User>("user").unwrap_err();
        assert!(matches!(err, ContextError::TypeMismatch { ref name, .. } if name == "user"));
    }

    #[test]
    fn delete_reports_presence() {
        let mut ns = Namespace::new();
        ns.set("user", User::new("John"));
        assert!(ns.delete("user"));
        assert!(!ns.delete("user"));
        assert!(ns.is_empty());
    }

    #[test]
    fn get_or_insert_with_runs_init_once() {
        let mut ns = Namespace::new();
        let calls = AtomicUsize::new(0);
        let init = || {
            calls.fetch_add(1, Ordering::SeqCst);
            User::new("John")
        };

        assert_eq!(ns.get_or_insert_with("user", init).unwrap().name, "John");
        assert_eq!(
            ns.get_or_insert_with("user", || User::new("Other")).unwrap().name,
            "John",
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn get_or_insert_with_keeps_value_of_other_type() {
        let mut ns = Namespace::new();
        ns.set("user", 7i64);
        assert!(ns.get_or_insert_with("user", || User::new("John")).is_err());
        assert_eq!(*ns.get::<i64>("user").unwrap(), 7);
    }

    #[test]
    fn debug_lists_sorted_keys() {
        let mut ns = Namespace::new();
        ns.set("b", 1u8);
        ns.set("a", 2u8);
        assert_eq!(format!("{ns:?}"), r#"Namespace { attrs: ["a", "b"] }"#);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Global namespace
// ─────────────────────────────────────────────────────────────────────────────

mod global_namespace {
    use super::*;

    #[test]
    fn set_get_delete() {
        let _guard = GLOBAL_LOCK.lock();
        global::clear();

        global::set(Attributes::USER, User::new("Tony"));
        assert_eq!(global::get_cloned::<User>(Attributes::USER).unwrap().name, "Tony");
        assert_eq!(global::keys(), vec!["user".to_string()]);
        assert!(global::delete(Attributes::USER));
        assert!(!global::contains(Attributes::USER));
    }

    #[test]
    fn visible_across_threads() {
        let _guard = GLOBAL_LOCK.lock();
        global::clear();

        std::thread::spawn(|| {
            global::set(Attributes::USER, User::new("FromThread"));
        })
        .join()
        .unwrap();

        assert_eq!(
            global::get_cloned::<User>(Attributes::USER).unwrap().name,
            "FromThread",
        );
        global::clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RequestScope
// ─────────────────────────────────────────────────────────────────────────────

mod request_scope {
    use super::*;

    #[test]
    fn clones_share_attributes() {
        let scope = RequestScope::new();
        let handle = scope.clone();
        handle.set(Attributes::USER, User::new("John"));
        assert_eq!(scope.get_cloned::<User>(Attributes::USER).unwrap().name, "John");
        assert_eq!(scope.id(), handle.id());
    }

    #[test]
    fn scopes_are_isolated() {
        let first = RequestScope::new();
        let second = RequestScope::new();
        first.set(Attributes::USER, User::new("John"));

        assert!(!second.contains(Attributes::USER));
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn memoized_arc_is_identical() {
        let scope = RequestScope::with_id("req-1");
        let a = scope
            .get_or_insert_with(Attributes::USER, || Arc::new(User::new("John")))
            .unwrap();
        let b = scope
            .get_or_insert_with(Attributes::USER, || Arc::new(User::new("Other")))
            .unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(scope.id(), "req-1");
    }

    #[test]
    fn init_may_read_the_same_scope() {
        let scope = RequestScope::new();
        scope.set("tenant", "acme".to_string());

        let user = scope
            .get_or_insert_with(Attributes::USER, || {
                let tenant: String = scope.get_cloned("tenant").unwrap();
                let _ = format!("{scope:?}");
                Arc::new(User::new(format!("John@{tenant}")))
            })
            .unwrap();
        assert_eq!(user.name, "John@acme");
    }

    #[test]
    fn value_stored_by_init_wins() {
        let scope = RequestScope::new();
        let user = scope
            .get_or_insert_with(Attributes::USER, || {
                scope.set(Attributes::USER, Arc::new(User::new("inner")));
                Arc::new(User::new("outer"))
            })
            .unwrap();
        assert_eq!(user.name, "inner");
        assert_eq!(
            scope.get_cloned::<Arc<User>>(Attributes::USER).unwrap().name,
            "inner",
        );
    }

    #[test]
    fn with_exposes_namespace() {
        let scope = RequestScope::new();
        scope.set("a", 1u8);
        scope.set("b", 2u8);
        let len = scope.with(|ns| {
            ns.delete("a");
            ns.len()
        });
        assert_eq!(len, 1);
        assert!(scope.delete("b"));
        assert!(!scope.delete("b"));
    }
}
