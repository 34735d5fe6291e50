//! Host-side test harness for the CT1642 two-wire bus
//!
//! Records every level transition a driver makes on fake clock/data pins,
//! then decodes the trace the way the CT1642's shift register would: sample
//! the data line on each rising clock edge, eight bits per digit, MSB
//! first. No hardware involved.
//!
//! Replay assumes both lines start low; drivers park the bus at idle during
//! setup before the first frame, so a trace taken after setup always
//! matches that assumption.
//!
//! # Quick start
//!
//! ```
//! use ct1642_hal::OutputPin;
//! use ct1642_testing::{Line, SignalTrace};
//!
//! let trace = SignalTrace::new();
//! let mut clk = trace.pin(Line::Clock);
//! let mut data = trace.pin(Line::Data);
//!
//! // One clock pulse with the data line high
//! data.set_high();
//! clk.set_high();
//! clk.set_low();
//! data.set_low();
//!
//! assert_eq!(trace.clock_pulses(), 1);
//! assert_eq!(trace.sampled_bits(), vec![true]);
//! assert!(trace.is_idle_low());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ct1642_hal::{DelayUs, OutputPin};

/// Bus line identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clock,
    Data,
}

/// One recorded `set_level` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub line: Line,
    pub high: bool,
}

/// Trace decode failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    /// The sampled bit count is not a whole number of segment bytes
    PartialByte { bits: usize },
}

#[derive(Default)]
struct Recorder {
    transitions: Vec<Transition>,
}

/// Shared transition log for one simulated bus.
///
/// Hand out recording pins with [`SignalTrace::pin`], run the code under
/// test, then query the trace. Cloning shares the same log.
#[derive(Clone, Default)]
pub struct SignalTrace {
    recorder: Rc<RefCell<Recorder>>,
}

impl SignalTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fake pin recording onto this trace
    pub fn pin(&self, line: Line) -> TracePin {
        TracePin {
            line,
            recorder: Rc::clone(&self.recorder),
        }
    }

    /// All recorded transitions, in call order
    pub fn transitions(&self) -> Vec<Transition> {
        self.recorder.borrow().transitions.clone()
    }

    /// Forget everything recorded so far
    pub fn reset(&self) {
        self.recorder.borrow_mut().transitions.clear();
    }

    /// Number of rising clock edges in the trace
    pub fn clock_pulses(&self) -> usize {
        self.replay().samples.len()
    }

    /// Data-line level at each rising clock edge, in order
    pub fn sampled_bits(&self) -> Vec<bool> {
        self.replay().samples
    }

    /// Reassemble the sampled bits into segment bytes (digit 0 first,
    /// MSB first): exactly what the chip's shift register would hold.
    pub fn decode_frame(&self) -> Result<Vec<u8>, TraceError> {
        let samples = self.sampled_bits();
        if samples.len() % 8 != 0 {
            return Err(TraceError::PartialByte {
                bits: samples.len(),
            });
        }
        Ok(samples
            .chunks(8)
            .map(|bits| {
                bits.iter()
                    .fold(0u8, |byte, &bit| (byte << 1) | u8::from(bit))
            })
            .collect())
    }

    /// Final level of a line
    pub fn line_level(&self, line: Line) -> bool {
        let replay = self.replay();
        match line {
            Line::Clock => replay.clk,
            Line::Data => replay.data,
        }
    }

    /// Both lines parked low
    pub fn is_idle_low(&self) -> bool {
        !self.line_level(Line::Clock) && !self.line_level(Line::Data)
    }

    fn replay(&self) -> Replay {
        let mut replay = Replay::default();
        for transition in self.recorder.borrow().transitions.iter() {
            match transition.line {
                Line::Clock => {
                    // Only a low-to-high change is an edge; a redundant
                    // rewrite of the same level must not resample.
                    if transition.high && !replay.clk {
                        replay.samples.push(replay.data);
                    }
                    replay.clk = transition.high;
                }
                Line::Data => replay.data = transition.high,
            }
        }
        replay
    }
}

#[derive(Default)]
struct Replay {
    clk: bool,
    data: bool,
    samples: Vec<bool>,
}

/// Fake output pin writing into a [`SignalTrace`]
pub struct TracePin {
    line: Line,
    recorder: Rc<RefCell<Recorder>>,
}

impl OutputPin for TracePin {
    fn set_level(&mut self, high: bool) {
        self.recorder.borrow_mut().transitions.push(Transition {
            line: self.line,
            high,
        });
    }
}

/// Delay source that returns immediately but remembers the total time
/// requested, so tests can assert setup/hold delays were asked for.
#[derive(Clone, Default)]
pub struct CountingDelay {
    total_us: Rc<Cell<u64>>,
}

impl CountingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Microseconds of delay requested so far
    pub fn total_us(&self) -> u64 {
        self.total_us.get()
    }
}

impl DelayUs for CountingDelay {
    fn delay_us(&mut self, us: u32) {
        self.total_us.set(self.total_us.get() + u64::from(us));
    }
}
