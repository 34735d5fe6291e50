use ct1642_hal::{DelayUs, OutputPin};
use ct1642_testing::{CountingDelay, Line, SignalTrace, TraceError, Transition};

/// Clock one byte out by hand, MSB first
fn shift_byte(trace: &SignalTrace, byte: u8) {
    let mut clk = trace.pin(Line::Clock);
    let mut data = trace.pin(Line::Data);
    for bit in (0..8).rev() {
        data.set_level(byte & (1 << bit) != 0);
        clk.set_high();
        clk.set_low();
    }
    data.set_low();
}

#[test]
fn test_decodes_a_hand_clocked_byte() {
    let trace = SignalTrace::new();
    shift_byte(&trace, 0xA5);

    assert_eq!(trace.clock_pulses(), 8);
    assert_eq!(trace.decode_frame(), Ok(vec![0xA5]));
    assert!(trace.is_idle_low());
}

#[test]
fn test_decodes_multiple_bytes_in_order() {
    let trace = SignalTrace::new();
    shift_byte(&trace, 0x06);
    shift_byte(&trace, 0x5B);

    assert_eq!(trace.decode_frame(), Ok(vec![0x06, 0x5B]));
}

#[test]
fn test_redundant_clock_writes_are_not_edges() {
    let trace = SignalTrace::new();
    let mut clk = trace.pin(Line::Clock);
    let mut data = trace.pin(Line::Data);

    data.set_high();
    clk.set_high();
    clk.set_high(); // still one pulse
    clk.set_low();
    clk.set_low();
    clk.set_high(); // second pulse

    assert_eq!(trace.clock_pulses(), 2);
}

#[test]
fn test_partial_byte_is_an_error() {
    let trace = SignalTrace::new();
    let mut clk = trace.pin(Line::Clock);

    for _ in 0..3 {
        clk.set_high();
        clk.set_low();
    }

    assert_eq!(
        trace.decode_frame(),
        Err(TraceError::PartialByte { bits: 3 })
    );
}

#[test]
fn test_line_levels_track_the_last_write() {
    let trace = SignalTrace::new();
    let mut clk = trace.pin(Line::Clock);
    let mut data = trace.pin(Line::Data);

    assert!(trace.is_idle_low());

    data.set_high();
    assert!(trace.line_level(Line::Data));
    assert!(!trace.is_idle_low());

    clk.set_high();
    clk.set_low();
    data.set_low();
    assert!(trace.is_idle_low());
}

#[test]
fn test_reset_forgets_the_log() {
    let trace = SignalTrace::new();
    shift_byte(&trace, 0xFF);

    trace.reset();
    assert!(trace.transitions().is_empty());
    assert_eq!(trace.clock_pulses(), 0);
}

#[test]
fn test_transitions_are_recorded_in_call_order() {
    let trace = SignalTrace::new();
    let mut clk = trace.pin(Line::Clock);
    let mut data = trace.pin(Line::Data);

    data.set_high();
    clk.set_high();

    assert_eq!(
        trace.transitions(),
        vec![
            Transition {
                line: Line::Data,
                high: true
            },
            Transition {
                line: Line::Clock,
                high: true
            },
        ]
    );
}

#[test]
fn test_counting_delay_accumulates() {
    let delay = CountingDelay::new();
    let mut handle = delay.clone();

    handle.delay_us(2);
    handle.delay_us(5);

    assert_eq!(delay.total_us(), 7);
}
