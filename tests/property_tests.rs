//! Property-based tests for slot_logger using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use slot_logger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn any_option() -> impl Strategy<Value = FormatOption> {
    prop_oneof![
        Just(FormatOption::Timestamp),
        Just(FormatOption::Level),
        Just(FormatOption::Location),
        Just(FormatOption::Function),
    ]
}

fn counting(counter: &Arc<AtomicUsize>) -> impl Appender + 'static {
    let counter = Arc::clone(counter);
    FnAppender::new(move |_: &str, _: Option<&UserContext>| {
        counter.fetch_add(1, Ordering::SeqCst);
        true
    })
}

fn render_one(options: FormatOptions) -> String {
    let logger = Logger::new();
    let store = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&store);
    let id = logger
        .register_appender(
            FnAppender::new(move |entry: &str, _: Option<&UserContext>| {
                sink.lock().push_str(entry);
                true
            }),
            None,
        )
        .unwrap();
    logger.set_format_options(id, options).unwrap();
    slot_logger::info!(logger, "payload");
    let rendered = store.lock().clone();
    rendered
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering matches rank ordering
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.rank() <= b.rank());
        prop_assert_eq!(a < b, a.rank() < b.rank());
    }

    /// Raw ranks outside the enum are argument errors
    #[test]
    fn test_raw_rank_validation(rank in any::<u8>()) {
        let result = LogLevel::try_from(rank);
        if rank <= 5 {
            prop_assert_eq!(result.unwrap().rank(), rank);
        } else {
            prop_assert!(
                matches!(result, Err(LoggerError::InvalidArgument { .. })),
                "rank {} should be rejected",
                rank
            );
        }
    }
}

// ============================================================================
// Slot Table Tests
// ============================================================================

proptest! {
    /// The (N+1)-th registration fails for any capacity N
    #[test]
    fn test_capacity_invariant(capacity in 1usize..32) {
        let logger = Logger::builder().capacity(capacity).build().unwrap();
        let counter = Arc::new(AtomicUsize::new(0));
        for expected in 0..capacity {
            let id = logger.register_appender(counting(&counter), None).unwrap();
            prop_assert_eq!(id.index(), expected);
        }
        let result = logger.register_appender(counting(&counter), None);
        prop_assert!(
            matches!(result, Err(LoggerError::MaxAppendersReached { .. })),
            "expected MaxAppendersReached"
        );
        prop_assert_eq!(logger.appender_count(), capacity);
    }

    /// Registration always takes the lowest free handle
    #[test]
    fn test_lowest_free_handle_reused(
        capacity in 2usize..16,
        removals in prop::collection::vec(any::<prop::sample::Index>(), 1..8),
    ) {
        let logger = Logger::builder().capacity(capacity).build().unwrap();
        let counter = Arc::new(AtomicUsize::new(0));
        for _ in 0..capacity {
            logger.register_appender(counting(&counter), None).unwrap();
        }

        let mut freed: Vec<usize> = removals.iter().map(|ix| ix.index(capacity)).collect();
        freed.sort_unstable();
        freed.dedup();
        for &index in &freed {
            logger.unregister_appender(AppenderId::new(index)).unwrap();
        }
        prop_assert_eq!(logger.appender_count(), capacity - freed.len());

        for &index in &freed {
            let id = logger.register_appender(counting(&counter), None).unwrap();
            prop_assert_eq!(id.index(), index);
        }
    }

    /// Handles that were freed are invalid until reused
    #[test]
    fn test_freed_handle_is_invalid(index in 0usize..16) {
        let logger = Logger::new();
        let counter = Arc::new(AtomicUsize::new(0));
        for _ in 0..16 {
            logger.register_appender(counting(&counter), None).unwrap();
        }
        let id = AppenderId::new(index);
        logger.unregister_appender(id).unwrap();
        prop_assert!(
            matches!(logger.disable_appender(id), Err(LoggerError::InvalidHandle { .. })),
            "disable on freed handle {} should fail",
            index
        );
        prop_assert!(
            matches!(
                logger.set_appender_level(id, LogLevel::Error),
                Err(LoggerError::InvalidHandle { .. })
            ),
            "set level on freed handle {} should fail",
            index
        );
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    /// An appender at threshold T sees a message at L iff L >= T
    #[test]
    fn test_level_filtering(threshold in any_level(), level in any_level()) {
        let logger = Logger::new();
        logger.set_level(LogLevel::Trace);
        let counter = Arc::new(AtomicUsize::new(0));
        logger.register_appender_with_level(counting(&counter), None, threshold).unwrap();

        logger.log(level, "x");
        let expected = if level >= threshold { 1 } else { 0 };
        prop_assert_eq!(counter.load(Ordering::SeqCst), expected);
    }

    /// The global threshold is applied on top of per-appender thresholds
    #[test]
    fn test_global_threshold_prefilter(global in any_level(), level in any_level()) {
        let logger = Logger::new();
        logger.set_level(global);
        let counter = Arc::new(AtomicUsize::new(0));
        logger.register_appender_with_level(counting(&counter), None, LogLevel::Trace).unwrap();

        logger.log(level, "x");
        prop_assert_eq!(counter.load(Ordering::SeqCst), usize::from(level >= global));
    }

    /// Disabling some appenders never changes delivery to the rest
    #[test]
    fn test_disabled_appender_isolation(disabled in prop::collection::vec(any::<bool>(), 1..8)) {
        let logger = Logger::new();
        let counters: Vec<Arc<AtomicUsize>> =
            disabled.iter().map(|_| Arc::new(AtomicUsize::new(0))).collect();
        for (counter, &off) in counters.iter().zip(&disabled) {
            let id = logger.register_appender(counting(counter), None).unwrap();
            if off {
                logger.disable_appender(id).unwrap();
            }
        }

        logger.error("x");
        for (counter, &off) in counters.iter().zip(&disabled) {
            prop_assert_eq!(counter.load(Ordering::SeqCst), usize::from(!off));
        }
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

proptest! {
    /// Toggling one flag changes exactly its own segment
    #[test]
    fn test_formatting_composition(
        timestamp in any::<bool>(),
        level in any::<bool>(),
        location in any::<bool>(),
        function in any::<bool>(),
        toggled in any_option(),
    ) {
        let base = FormatOptions::new()
            .with_timestamp(timestamp)
            .with_level(level)
            .with_location(location)
            .with_function(function)
            .with_time_format("%Y");
        let mut flipped = base.clone();
        flipped.set(toggled, !base.get(toggled));

        let (with, without) = if base.get(toggled) {
            (render_one(base), render_one(flipped))
        } else {
            (render_one(flipped), render_one(base))
        };

        let segment_start = match toggled {
            FormatOption::Timestamp => "[2",
            FormatOption::Level => "[INFO ]",
            FormatOption::Location => "[tests/property_tests.rs:",
            FormatOption::Function => "[render_one]",
            FormatOption::Color => unreachable!(),
        };
        prop_assert!(with.contains(segment_start));
        prop_assert!(!without.contains(segment_start));

        // removing the segment (and its trailing space) yields the other entry
        let start = with.find(segment_start).unwrap();
        let end = start + with[start..].find("] ").unwrap() + 2;
        let mut stripped = with.clone();
        stripped.replace_range(start..end, "");
        prop_assert_eq!(stripped, without);
    }

    /// Entries never exceed the configured size and stay newline-terminated
    #[test]
    fn test_entries_are_bounded(message in ".{0,300}", max_entry in 40usize..200) {
        let logger = Logger::builder()
            .max_message_len(32)
            .max_entry_len(max_entry)
            .build()
            .unwrap();
        let store = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&store);
        let id = logger
            .register_appender(
                FnAppender::new(move |entry: &str, _: Option<&UserContext>| {
                    sink.lock().push(entry.to_string());
                    true
                }),
                None,
            )
            .unwrap();
        logger
            .set_format_options(id, FormatOptions::new().with_timestamp(true).with_function(true))
            .unwrap();

        slot_logger::info!(logger, "{}", message);

        let entries = store.lock();
        prop_assert_eq!(entries.len(), 1);
        prop_assert!(entries[0].len() <= max_entry);
        prop_assert!(entries[0].ends_with('\n'));
    }

    /// Truncated colored entries still reset every color they open
    #[test]
    fn test_colored_entries_keep_resets(
        message in "[a-z0-9 ]{0,80}",
        level in any_level(),
        max_entry in 2usize..80,
    ) {
        let logger = Logger::builder()
            .min_level(LogLevel::Trace)
            .max_message_len(1)
            .max_entry_len(max_entry)
            .build()
            .unwrap();
        let store = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&store);
        let id = logger
            .register_appender_with_level(
                FnAppender::new(move |entry: &str, _: Option<&UserContext>| {
                    sink.lock().push(entry.to_string());
                    true
                }),
                None,
                LogLevel::Trace,
            )
            .unwrap();
        logger
            .set_format_options(
                id,
                FormatOptions::new().with_location(true).with_function(true).with_color(true),
            )
            .unwrap();

        slot_logger::log!(logger, level, "{}", message);

        let entries = store.lock();
        let entry = &entries[0];
        prop_assert!(entry.len() <= max_entry);
        prop_assert!(entry.ends_with('\n'));
        let escapes = entry.matches("\x1b[").count();
        let resets = entry.matches("\x1b[0m").count();
        prop_assert_eq!(escapes, resets * 2, "unbalanced color in {:?}", entry);
    }
}
