use super::Instant;
use std::collections::HashMap;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: SubTimersMap,
}

impl InnerTimer {
    fn reset(&mut self) {
        self.start = None;
        self.elapsed = Duration::ZERO;
        self.subtimers.clear();
    }

    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    fn suspend(&mut self) {
        //save current elapsed and suspend
        //subtimers if this timer appears active
        if let Some(instant) = self.start {
            self.elapsed += instant.elapsed();
            self.subtimers.suspend();
        }
    }

    fn resume(&mut self) {
        //resume if this timer appears active.
        //just refresh start time to now.
        if self.start.is_some() {
            self.start = Some(Instant::now());
            self.subtimers.resume();
        }
    }

    // includes time since the last start for running timers
    fn elapsed(&self) -> Duration {
        match self.start {
            Some(instant) => self.elapsed + instant.elapsed(),
            None => self.elapsed,
        }
    }
}

#[derive(Debug, Default)]
struct SubTimersMap(HashMap<&'static str, InnerTimer>);

impl Deref for SubTimersMap {
    type Target = HashMap<&'static str, InnerTimer>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for SubTimersMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl SubTimersMap {
    fn reset_subtimer(&mut self, key: &'static str) {
        let t = self.entry(key).or_default();
        t.reset();
    }

    fn start_subtimer(&mut self, key: &'static str) {
        let t = self.0.entry(key).or_default();
        t.start();
    }

    //this function suspends every timer in the
    //collection.   Used for notimeit!
    fn suspend(&mut self) {
        for t in self.values_mut() {
            t.suspend();
        }
    }

    fn resume(&mut self) {
        for t in self.values_mut() {
            t.resume();
        }
    }

    fn total_time(&self) -> Duration {
        self.values()
            .fold(Duration::ZERO, |acc, t| acc + t.elapsed())
    }

    fn print(&self, out: &mut dyn Write, depth: u8) -> std::io::Result<()> {
        // sorted so that output is reproducible
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort();
        for key in keys {
            let val = &self[key];
            let tabs = format!("{: <1$}", "", 4 * depth as usize);
            writeln!(out, "{}{:} : {:?}", tabs, *key, val.elapsed())?;
            val.subtimers.print(out, depth + 1)?;
        }
        Ok(())
    }
}

/// Collection of nested, named timers.
///
/// Timers are started and stopped in stack order through the
/// `timeit!` macro, which creates a child of the currently active
/// timer.  `notimeit!` suspends every running timer for the duration
/// of a block, e.g. while printing.

#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: SubTimersMap,
}

impl Timers {
    fn mut_active_timer(&mut self) -> Option<&mut InnerTimer> {
        let (first, rest) = self.stack.split_first()?;

        //first one gets special treatment since self is not
        //an InnerTimer and a common trait would be overkill
        let mut active_timer = self.subtimers.get_mut(first)?;

        for key in rest {
            active_timer = active_timer.subtimers.get_mut(key)?;
        }
        Some(active_timer)
    }

    pub fn reset_timer(&mut self, key: &'static str) {
        self.subtimers.reset_subtimer(key);
    }

    pub fn start_as_current(&mut self, key: &'static str) {
        //starts a timer with name "str" as the current timer

        let active_timer = self.mut_active_timer();

        if let Some(active) = active_timer {
            // child of current active timer
            active.subtimers.start_subtimer(key);
        } else {
            // nothing active, create one at root
            self.subtimers.start_subtimer(key);
        }

        //append to timer call stack
        self.stack.push(key);
    }

    pub fn stop_current(&mut self) {
        //stops the current timer, if there is one
        if let Some(active) = self.mut_active_timer() {
            active.stop();
        }

        //remove from timer call stack
        self.stack.pop();
    }

    //Suspend every timer in the collection.   Used for notimeit!
    pub fn suspend(&mut self) {
        self.subtimers.suspend();
    }

    //Resume every timer in the collection.   Used for notimeit!
    pub fn resume(&mut self) {
        self.subtimers.resume();
    }

    /// Total time of all root level timers, including any still running
    pub fn total_time(&self) -> Duration {
        self.subtimers.total_time()
    }

    /// Write the timer tree, one indented line per timer
    pub fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        self.subtimers.print(out, 0)
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {

        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;

#[test]
fn test_timers_nesting() {
    let mut timers = Timers::default();

    timeit! {timers => "outer"; {
        timeit! {timers => "inner"; {
            std::thread::sleep(Duration::from_millis(2));
        }}
        notimeit! {timers; {
            std::thread::sleep(Duration::from_millis(2));
        }}
    }}

    let total = timers.total_time();
    assert!(total >= Duration::from_millis(2));

    let mut buf = Vec::new();
    timers.print(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("outer : "));
    assert!(text.contains("\n    inner : "));

    timers.reset_timer("outer");
    assert_eq!(timers.total_time(), Duration::ZERO);
}
