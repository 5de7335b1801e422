//! Main logger implementation

use super::{
    appender::{Appender, UserContext},
    bounded::BoundedString,
    config::LoggerConfig,
    error::{LoggerError, Result},
    formatter::{render_entry, FormatOption, FormatOptions},
    lock_hook::{HookGuard, LockHook},
    log_entry::{LogEntry, SourceLocation},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    slot_table::{AppenderId, SlotTable},
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// An independent logger: global state plus a fixed-capacity appender table
///
/// Every operation takes `&self`; share a logger across threads with `Arc`.
/// When a [`LockHook`] is installed it brackets every dispatch and every
/// registry mutation.
pub struct Logger {
    config: LoggerConfig,
    enabled: AtomicBool,
    min_level: RwLock<LogLevel>,
    slots: Mutex<SlotTable>,
    lock_hook: RwLock<Option<Arc<dyn LockHook>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(LoggerConfig::default())
    }

    /// Create a logger from a configuration, validating it first
    pub fn with_config(config: LoggerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: LoggerConfig) -> Self {
        Self {
            enabled: AtomicBool::new(config.enabled),
            min_level: RwLock::new(config.level),
            slots: Mutex::new(SlotTable::new(config.capacity)),
            lock_hook: RwLock::new(None),
            metrics: LoggerMetrics::new(),
            config,
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use slot_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .capacity(8)
    ///     .min_level(LogLevel::Debug)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.capacity(), 8);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn hook_guard(&self) -> HookGuard {
        // the hook may block, so don't hold the read lock while acquiring it
        let hook = self.lock_hook.read().clone();
        HookGuard::acquire(hook)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Render one entry and hand it to every eligible appender
    ///
    /// Returns the number of appenders that received the entry. An entry
    /// below the global threshold, or one no appender accepts, yields
    /// `Ok(0)` without rendering anything. Appender failures do not stop
    /// delivery to the remaining appenders; they are reported together as
    /// [`LoggerError::AppenderFailed`].
    pub fn write(
        &self,
        level: LogLevel,
        location: Option<SourceLocation>,
        args: fmt::Arguments<'_>,
    ) -> Result<usize> {
        let _hook = self.hook_guard();

        if !self.is_enabled() {
            self.metrics.record_disabled_write();
            return Err(LoggerError::NotEnabled);
        }

        let mut slots = self.slots.lock();
        if level < *self.min_level.read() || !slots.iter().any(|(_, slot)| slot.accepts(level)) {
            self.metrics.record_filtered();
            return Ok(0);
        }

        let message = BoundedString::format(self.config.max_message_len, args);
        let mut entry = LogEntry::new(level, message.as_str());
        if let Some(location) = location {
            entry = entry.with_location(location);
        }

        let mut attempted = 0;
        let mut failed = 0;

        for (id, slot) in slots.iter_mut() {
            if !slot.accepts(level) {
                continue;
            }
            attempted += 1;

            let rendered = render_entry(
                &entry,
                &slot.format,
                &self.config.time_format,
                self.config.max_entry_len,
            );
            let context = slot.context.as_ref();
            let appender = &mut slot.appender;

            // Per-appender panic isolation: one bad sink must not starve the rest
            let append_result =
                catch_unwind(AssertUnwindSafe(|| appender.append(&rendered, context)));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        id,
                        appender.name(),
                        e
                    );
                    failed += 1;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} ({}) panicked: {}. \
                         Other appenders continue to function.",
                        id,
                        appender.name(),
                        panic_msg
                    );
                    failed += 1;
                }
            }
        }

        if failed < attempted {
            self.metrics.record_written();
        } else {
            self.metrics.record_dropped();
        }

        if failed > 0 {
            self.metrics.record_appender_failures(failed as u64);
            return Err(LoggerError::appender_failed(failed, attempted));
        }

        Ok(attempted)
    }

    /// Log a message without call-site information, ignoring the outcome
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        let _ = self.write(level, None, format_args!("{}", message));
    }

    #[inline]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(LogLevel::Fatal, message);
    }

    /// Flush every registered appender, stopping at the first error
    pub fn flush(&self) -> Result<()> {
        let _hook = self.hook_guard();
        let mut slots = self.slots.lock();
        for (_, slot) in slots.iter_mut() {
            slot.appender.flush()?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Global state
    // ------------------------------------------------------------------

    pub fn enable(&self) {
        let _hook = self.hook_guard();
        self.enabled.store(true, Ordering::SeqCst);
    }

    pub fn disable(&self) {
        let _hook = self.hook_guard();
        self.enabled.store(false, Ordering::SeqCst);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_level(&self, level: LogLevel) {
        let _hook = self.hook_guard();
        *self.min_level.write() = level;
    }

    /// Set the global threshold from a raw level rank
    pub fn set_level_raw(&self, rank: u8) -> Result<()> {
        let level = LogLevel::try_from(rank)?;
        self.set_level(level);
        Ok(())
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Install a hook bracketing every dispatch and registry mutation
    pub fn set_lock_hook(&self, hook: Arc<dyn LockHook>) {
        *self.lock_hook.write() = Some(hook);
    }

    pub fn clear_lock_hook(&self) {
        *self.lock_hook.write() = None;
    }

    pub fn has_lock_hook(&self) -> bool {
        self.lock_hook.read().is_some()
    }

    // ------------------------------------------------------------------
    // Appender registry
    // ------------------------------------------------------------------

    /// Register an appender at the configured default threshold
    pub fn register_appender<A: Appender + 'static>(
        &self,
        appender: A,
        context: Option<UserContext>,
    ) -> Result<AppenderId> {
        self.register_appender_with_level(appender, context, self.config.default_appender_level)
    }

    pub fn register_appender_with_level<A: Appender + 'static>(
        &self,
        appender: A,
        context: Option<UserContext>,
        level: LogLevel,
    ) -> Result<AppenderId> {
        self.register_boxed(Box::new(appender), context, level)
    }

    pub fn register_boxed(
        &self,
        appender: Box<dyn Appender>,
        context: Option<UserContext>,
        level: LogLevel,
    ) -> Result<AppenderId> {
        let _hook = self.hook_guard();
        self.slots.lock().register(appender, context, level)
    }

    /// Remove an appender, returning it to the caller
    pub fn unregister_appender(&self, id: AppenderId) -> Result<Box<dyn Appender>> {
        let _hook = self.hook_guard();
        self.slots.lock().unregister(id)
    }

    pub fn enable_appender(&self, id: AppenderId) -> Result<()> {
        let _hook = self.hook_guard();
        self.slots.lock().enable(id)
    }

    pub fn disable_appender(&self, id: AppenderId) -> Result<()> {
        let _hook = self.hook_guard();
        self.slots.lock().disable(id)
    }

    pub fn is_appender_enabled(&self, id: AppenderId) -> Result<bool> {
        self.slots.lock().is_enabled(id)
    }

    pub fn set_appender_level(&self, id: AppenderId, level: LogLevel) -> Result<()> {
        let _hook = self.hook_guard();
        self.slots.lock().set_threshold(id, level)
    }

    pub fn set_appender_level_raw(&self, id: AppenderId, rank: u8) -> Result<()> {
        let _hook = self.hook_guard();
        self.slots.lock().set_threshold_raw(id, rank)
    }

    pub fn appender_level(&self, id: AppenderId) -> Result<LogLevel> {
        self.slots.lock().threshold(id)
    }

    pub fn set_format_option(&self, id: AppenderId, option: FormatOption, on: bool) -> Result<()> {
        let _hook = self.hook_guard();
        self.slots.lock().set_format_option(id, option, on)
    }

    /// Toggle one formatting flag on every registered appender
    pub fn set_format_option_all(&self, option: FormatOption, on: bool) {
        let _hook = self.hook_guard();
        let mut slots = self.slots.lock();
        for (_, slot) in slots.iter_mut() {
            slot.format.set(option, on);
        }
    }

    pub fn set_format_options(&self, id: AppenderId, options: FormatOptions) -> Result<()> {
        let _hook = self.hook_guard();
        self.slots.lock().set_format_options(id, options)
    }

    pub fn format_options(&self, id: AppenderId) -> Result<FormatOptions> {
        self.slots.lock().format_options(id).cloned()
    }

    /// Set or clear an appender's strftime pattern
    pub fn set_time_format(&self, id: AppenderId, pattern: Option<&str>) -> Result<()> {
        let _hook = self.hook_guard();
        self.slots.lock().set_time_format(id, pattern)
    }

    pub fn set_appender_context(&self, id: AppenderId, context: Option<UserContext>) -> Result<()> {
        let _hook = self.hook_guard();
        self.slots.lock().set_context(id, context)
    }

    pub fn appender_context(&self, id: AppenderId) -> Result<Option<UserContext>> {
        self.slots.lock().context(id)
    }

    /// Number of registered appenders
    pub fn appender_count(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.is_enabled())
            .field("level", &self.level())
            .field("slots", &*self.slots.lock())
            .field("lock_hook", &self.has_lock_hook())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let mut slots = self.slots.lock();
        for (id, slot) in slots.iter_mut() {
            if let Err(e) = slot.appender.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush appender #{} during shutdown: {}", id, e);
            }
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use slot_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .time_format("%H:%M:%S")
///     .appender_with(
///         FnAppender::new(|entry, _| { print!("{}", entry); true }),
///         LogLevel::Warn,
///         FormatOptions::new().with_timestamp(true),
///     )
///     .build()
///     .unwrap();
/// assert_eq!(logger.appender_count(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appenders: Vec<PendingAppender>,
    lock_hook: Option<Arc<dyn LockHook>>,
}

struct PendingAppender {
    appender: Box<dyn Appender>,
    context: Option<UserContext>,
    level: Option<LogLevel>,
    format: FormatOptions,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appenders: Vec::new(),
            lock_hook: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of appender slots
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_message_len(mut self, len: usize) -> Self {
        self.config.max_message_len = len;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn max_entry_len(mut self, len: usize) -> Self {
        self.config.max_entry_len = len;
        self
    }

    /// Set the global threshold
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Threshold for appenders added without an explicit level
    #[must_use = "builder methods return a new value"]
    pub fn default_appender_level(mut self, level: LogLevel) -> Self {
        self.config.default_appender_level = level;
        self
    }

    /// Default strftime pattern for timestamp segments
    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, pattern: &str) -> Self {
        self.config.time_format = pattern.to_string();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Add an appender with default threshold and formatting
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(PendingAppender {
            appender: Box::new(appender),
            context: None,
            level: None,
            format: FormatOptions::default(),
        });
        self
    }

    /// Add an appender with its own threshold and formatting
    #[must_use = "builder methods return a new value"]
    pub fn appender_with<A: Appender + 'static>(
        mut self,
        appender: A,
        level: LogLevel,
        format: FormatOptions,
    ) -> Self {
        self.appenders.push(PendingAppender {
            appender: Box::new(appender),
            context: None,
            level: Some(level),
            format,
        });
        self
    }

    /// Attach a user context to the most recently added appender
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: UserContext) -> Self {
        if let Some(last) = self.appenders.last_mut() {
            last.context = Some(context);
        }
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn lock_hook(mut self, hook: Arc<dyn LockHook>) -> Self {
        self.lock_hook = Some(hook);
        self
    }

    /// Build the Logger
    ///
    /// Fails if the configuration is invalid or more appenders were added
    /// than there are slots.
    pub fn build(self) -> Result<Logger> {
        let logger = Logger::with_config(self.config)?;

        for pending in self.appenders {
            let level = pending.level.unwrap_or(logger.config.default_appender_level);
            let id = logger.register_boxed(pending.appender, pending.context, level)?;
            logger.set_format_options(id, pending.format)?;
        }

        if let Some(hook) = self.lock_hook {
            logger.set_lock_hook(hook);
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
