//! Channel appender implementation
//!
//! Hands each rendered entry to a crossbeam channel. The send never blocks:
//! a full or disconnected channel is reported as an appender failure and the
//! entry is not retried.

use crate::core::{Appender, LoggerError, Result, UserContext};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};

pub struct ChannelAppender {
    sender: Sender<String>,
}

impl ChannelAppender {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }

    /// Create an appender together with the receiving end of its channel
    ///
    /// `capacity` of `None` creates an unbounded channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_logger::appenders::ChannelAppender;
    /// use slot_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// let (appender, rx) = ChannelAppender::with_receiver(None);
    /// logger.register_appender(appender, None).unwrap();
    /// logger.info("queued");
    /// assert_eq!(rx.try_recv().unwrap(), "[INFO ] queued\n");
    /// ```
    pub fn with_receiver(capacity: Option<usize>) -> (Self, Receiver<String>) {
        let (sender, receiver) = match capacity {
            Some(cap) => bounded(cap),
            None => unbounded(),
        };
        (Self::new(sender), receiver)
    }
}

impl Appender for ChannelAppender {
    fn append(&mut self, entry: &str, _context: Option<&UserContext>) -> Result<()> {
        match self.sender.try_send(entry.to_string()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(LoggerError::writer("log channel full")),
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::ChannelSendError),
        }
    }

    fn name(&self) -> &str {
        "channel"
    }
}
