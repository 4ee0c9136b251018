use std::collections::VecDeque;

use super::types::Event;

/// Non-blocking source of events.
///
/// `poll` returns pending events one at a time and `None` once the current
/// batch is exhausted. The next `poll` after `None` starts a new batch.
pub trait EventSource {
    fn poll(&mut self) -> Option<Event>;

    /// Iterator over the current batch; ends at the first `None`.
    fn drain(&mut self) -> Drain<'_, Self>
    where
        Self: Sized,
    {
        Drain { source: self }
    }
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn poll(&mut self) -> Option<Event> {
        (**self).poll()
    }
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn poll(&mut self) -> Option<Event> {
        (**self).poll()
    }
}

/// Iterator returned by [`EventSource::drain`].
#[derive(Debug)]
pub struct Drain<'a, S: ?Sized> {
    source: &'a mut S,
}

impl<S: EventSource + ?Sized> Iterator for Drain<'_, S> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.source.poll()
    }
}

/// In-memory FIFO of events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl FromIterator<Event> for EventQueue {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl EventSource for EventQueue {
    fn poll(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}
