//! Fixed-capacity appender registry
//!
//! Slots live in an arena sized once at construction. Free indices sit in a
//! min-heap so registration always takes the lowest free slot, which makes
//! handle reuse predictable: unregister handle 3 and the next registration
//! gets handle 3 back.

use super::appender::{Appender, UserContext};
use super::error::{LoggerError, Result};
use super::formatter::{FormatOption, FormatOptions};
use super::log_level::LogLevel;
use super::timestamp::MAX_TIME_FORMAT_LEN;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

/// Handle of a registered appender
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppenderId(usize);

impl AppenderId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for AppenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AppenderId> for usize {
    fn from(id: AppenderId) -> usize {
        id.0
    }
}

/// One occupied slot
pub struct Slot {
    pub(crate) appender: Box<dyn Appender>,
    pub(crate) context: Option<UserContext>,
    pub(crate) enabled: bool,
    pub(crate) threshold: LogLevel,
    pub(crate) format: FormatOptions,
}

impl Slot {
    /// Whether an entry at `level` should reach this slot
    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.enabled && level >= self.threshold
    }
}

pub struct SlotTable {
    slots: Vec<Option<Slot>>,
    free: BinaryHeap<Reverse<usize>>,
    len: usize,
}

impl SlotTable {
    /// Create a table with room for `capacity` appenders
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            free: (0..capacity).map(Reverse).collect(),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn register(
        &mut self,
        appender: Box<dyn Appender>,
        context: Option<UserContext>,
        threshold: LogLevel,
    ) -> Result<AppenderId> {
        if self.is_full() {
            return Err(LoggerError::max_appenders(self.capacity()));
        }

        let index = match self.free.pop() {
            Some(Reverse(index)) => index,
            None => {
                debug_assert!(false, "free list empty with {} of {} slots used", self.len, self.capacity());
                return Err(LoggerError::unknown(format!(
                    "free list empty with {} of {} slots occupied",
                    self.len,
                    self.capacity()
                )));
            }
        };

        let slot = &mut self.slots[index];
        if slot.is_some() {
            debug_assert!(false, "free list yielded occupied slot {}", index);
            return Err(LoggerError::unknown(format!(
                "free list yielded occupied slot {}",
                index
            )));
        }

        *slot = Some(Slot {
            appender,
            context,
            enabled: true,
            threshold,
            format: FormatOptions::default(),
        });
        self.len += 1;

        Ok(AppenderId(index))
    }

    /// Empty the slot and hand the appender back to the caller
    pub fn unregister(&mut self, id: AppenderId) -> Result<Box<dyn Appender>> {
        let slot = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or_else(|| LoggerError::invalid_handle(id.0))?;

        self.len -= 1;
        self.free.push(Reverse(id.0));
        Ok(slot.appender)
    }

    pub fn get(&self, id: AppenderId) -> Result<&Slot> {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or_else(|| LoggerError::invalid_handle(id.0))
    }

    pub fn get_mut(&mut self, id: AppenderId) -> Result<&mut Slot> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| LoggerError::invalid_handle(id.0))
    }

    pub fn contains(&self, id: AppenderId) -> bool {
        self.get(id).is_ok()
    }

    pub fn enable(&mut self, id: AppenderId) -> Result<()> {
        self.get_mut(id)?.enabled = true;
        Ok(())
    }

    pub fn disable(&mut self, id: AppenderId) -> Result<()> {
        self.get_mut(id)?.enabled = false;
        Ok(())
    }

    pub fn is_enabled(&self, id: AppenderId) -> Result<bool> {
        Ok(self.get(id)?.enabled)
    }

    pub fn set_threshold(&mut self, id: AppenderId, level: LogLevel) -> Result<()> {
        self.get_mut(id)?.threshold = level;
        Ok(())
    }

    /// Set the threshold from a raw level rank
    pub fn set_threshold_raw(&mut self, id: AppenderId, rank: u8) -> Result<()> {
        let slot = self.get_mut(id)?;
        slot.threshold = LogLevel::try_from(rank)?;
        Ok(())
    }

    pub fn threshold(&self, id: AppenderId) -> Result<LogLevel> {
        Ok(self.get(id)?.threshold)
    }

    pub fn set_format_options(&mut self, id: AppenderId, options: FormatOptions) -> Result<()> {
        if let Some(pattern) = options.time_format.as_deref() {
            check_time_format(pattern)?;
        }
        self.get_mut(id)?.format = options;
        Ok(())
    }

    pub fn set_format_option(&mut self, id: AppenderId, option: FormatOption, on: bool) -> Result<()> {
        self.get_mut(id)?.format.set(option, on);
        Ok(())
    }

    pub fn format_options(&self, id: AppenderId) -> Result<&FormatOptions> {
        Ok(&self.get(id)?.format)
    }

    /// Set or clear the per-appender strftime pattern
    pub fn set_time_format(&mut self, id: AppenderId, pattern: Option<&str>) -> Result<()> {
        let slot = self.get_mut(id)?;
        if let Some(pattern) = pattern {
            check_time_format(pattern)?;
        }
        slot.format.time_format = pattern.map(str::to_string);
        Ok(())
    }

    pub fn set_context(&mut self, id: AppenderId, context: Option<UserContext>) -> Result<()> {
        self.get_mut(id)?.context = context;
        Ok(())
    }

    pub fn context(&self, id: AppenderId) -> Result<Option<UserContext>> {
        Ok(self.get(id)?.context.clone())
    }

    /// Occupied slots in ascending handle order
    pub fn iter(&self) -> impl Iterator<Item = (AppenderId, &Slot)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (AppenderId(i), s)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AppenderId, &mut Slot)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|s| (AppenderId(i), s)))
    }
}

impl fmt::Debug for SlotTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .finish()
    }
}

fn check_time_format(pattern: &str) -> Result<()> {
    if pattern.len() > MAX_TIME_FORMAT_LEN {
        return Err(LoggerError::invalid_argument(
            "time_format",
            format!("{} bytes exceeds limit of {}", pattern.len(), MAX_TIME_FORMAT_LEN),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::appender::FnAppender;

    fn sink() -> Box<dyn Appender> {
        Box::new(FnAppender::new(|_: &str, _: Option<&UserContext>| true))
    }

    #[test]
    fn test_register_until_full() {
        let mut table = SlotTable::new(8);
        for expected in 0..8 {
            let id = table.register(sink(), None, LogLevel::Info).unwrap();
            assert_eq!(id.index(), expected);
        }
        assert!(table.is_full());
        assert!(matches!(
            table.register(sink(), None, LogLevel::Info),
            Err(LoggerError::MaxAppendersReached { capacity: 8 })
        ));
    }

    #[test]
    fn test_lowest_free_index_is_reused() {
        let mut table = SlotTable::new(8);
        for _ in 0..8 {
            table.register(sink(), None, LogLevel::Info).unwrap();
        }
        table.unregister(AppenderId::new(5)).unwrap();
        table.unregister(AppenderId::new(3)).unwrap();
        assert_eq!(table.len(), 6);

        assert_eq!(table.register(sink(), None, LogLevel::Info).unwrap().index(), 3);
        assert_eq!(table.register(sink(), None, LogLevel::Info).unwrap().index(), 5);
    }

    #[test]
    fn test_stale_and_out_of_range_handles() {
        let mut table = SlotTable::new(4);
        let id = table.register(sink(), None, LogLevel::Info).unwrap();
        table.unregister(id).unwrap();

        assert!(matches!(table.unregister(id), Err(LoggerError::InvalidHandle { id: 0 })));
        assert!(table.enable(id).is_err());
        assert!(table.disable(AppenderId::new(99)).is_err());
        assert!(table.set_threshold(id, LogLevel::Warn).is_err());
        assert!(table.set_format_option(id, FormatOption::Color, true).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn test_new_slot_defaults() {
        let mut table = SlotTable::new(2);
        let id = table.register(sink(), None, LogLevel::Debug).unwrap();
        assert!(table.is_enabled(id).unwrap());
        assert_eq!(table.threshold(id).unwrap(), LogLevel::Debug);
        assert_eq!(table.format_options(id).unwrap(), &FormatOptions::default());
    }

    #[test]
    fn test_toggles_are_idempotent() {
        let mut table = SlotTable::new(2);
        let id = table.register(sink(), None, LogLevel::Info).unwrap();
        table.enable(id).unwrap();
        table.enable(id).unwrap();
        assert!(table.is_enabled(id).unwrap());
        table.disable(id).unwrap();
        table.disable(id).unwrap();
        assert!(!table.is_enabled(id).unwrap());
    }

    #[test]
    fn test_raw_threshold_validation() {
        let mut table = SlotTable::new(1);
        let id = table.register(sink(), None, LogLevel::Info).unwrap();
        table.set_threshold_raw(id, 3).unwrap();
        assert_eq!(table.threshold(id).unwrap(), LogLevel::Warn);
        assert!(matches!(
            table.set_threshold_raw(id, 42),
            Err(LoggerError::InvalidArgument { .. })
        ));
        assert_eq!(table.threshold(id).unwrap(), LogLevel::Warn);
    }

    #[test]
    fn test_time_format_limits() {
        let mut table = SlotTable::new(1);
        let id = table.register(sink(), None, LogLevel::Info).unwrap();
        table.set_time_format(id, Some("%H:%M")).unwrap();
        assert_eq!(table.format_options(id).unwrap().time_format.as_deref(), Some("%H:%M"));

        let too_long = "%H".repeat(MAX_TIME_FORMAT_LEN);
        assert!(table.set_time_format(id, Some(&too_long)).is_err());
        table.set_time_format(id, None).unwrap();
        assert!(table.format_options(id).unwrap().time_format.is_none());
    }

    #[test]
    fn test_context_round_trip() {
        let mut table = SlotTable::new(1);
        let ctx: UserContext = std::sync::Arc::new(String::from("tag"));
        let id = table.register(sink(), Some(ctx), LogLevel::Info).unwrap();
        let stored = table.context(id).unwrap().expect("context stored");
        assert_eq!(stored.downcast_ref::<String>().map(String::as_str), Some("tag"));

        table.set_context(id, None).unwrap();
        assert!(table.context(id).unwrap().is_none());
    }

    #[test]
    fn test_iter_skips_empty_slots() {
        let mut table = SlotTable::new(4);
        for _ in 0..4 {
            table.register(sink(), None, LogLevel::Info).unwrap();
        }
        table.unregister(AppenderId::new(1)).unwrap();
        let ids: Vec<usize> = table.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 2, 3]);
    }

    #[test]
    fn test_zero_capacity_table() {
        let mut table = SlotTable::new(0);
        assert!(table.is_full());
        assert!(table.register(sink(), None, LogLevel::Info).is_err());
    }
}
