//! Send loop behavior against the recording sink

use rp5ctl::commands::send::run_send;
use rp5ctl_core::{Error, SETTLE_DELAY};
use rp5ctl_dummy::{Action, DummySink};

fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn plain_command_sends_once_with_one_delay() {
    let mut sink = DummySink::new();
    run_send(&mut sink, &tokens(&["a"])).unwrap();

    assert_eq!(
        sink.actions(),
        &[Action::Send(0x0a), Action::Delay(SETTLE_DELAY)]
    );
}

#[test]
fn power_toggle_sends_twice_transmit_before_second_delay() {
    let mut sink = DummySink::new();
    run_send(&mut sink, &tokens(&["1"])).unwrap();

    assert_eq!(
        sink.actions(),
        &[
            Action::Send(0x01),
            Action::Delay(SETTLE_DELAY),
            Action::Send(0x01),
            Action::Delay(SETTLE_DELAY),
        ]
    );
}

#[test]
fn hex_spellings_of_the_toggle_code_all_double_send() {
    for spelling in ["1", "01", "0x1"] {
        let mut sink = DummySink::new();
        run_send(&mut sink, &tokens(&[spelling])).unwrap();
        assert_eq!(sink.sent_bytes(), vec![0x01, 0x01], "token {}", spelling);
        assert_eq!(sink.delay_count(), 2, "token {}", spelling);
    }
}

#[test]
fn invalid_token_is_skipped_but_still_delays() {
    let mut sink = DummySink::new();
    run_send(&mut sink, &tokens(&["zz"])).unwrap();

    assert_eq!(sink.actions(), &[Action::Delay(SETTLE_DELAY)]);
}

#[test]
fn stale_toggle_value_refires_after_parse_failure() {
    // "zz" fails to parse, so the retained 0x01 drives the toggle branch
    // a second time: bytes a, 1, 1, 1 and five delays in total.
    let mut sink = DummySink::new();
    run_send(&mut sink, &tokens(&["a", "1", "zz"])).unwrap();

    assert_eq!(sink.sent_bytes(), vec![0x0a, 0x01, 0x01, 0x01]);
    assert_eq!(sink.delay_count(), 5);
    assert_eq!(
        sink.actions(),
        &[
            Action::Send(0x0a),
            Action::Delay(SETTLE_DELAY),
            Action::Send(0x01),
            Action::Delay(SETTLE_DELAY),
            Action::Send(0x01),
            Action::Delay(SETTLE_DELAY),
            Action::Delay(SETTLE_DELAY),
            Action::Send(0x01),
            Action::Delay(SETTLE_DELAY),
        ]
    );
}

#[test]
fn stale_value_does_not_refire_for_non_toggle_commands() {
    let mut sink = DummySink::new();
    run_send(&mut sink, &tokens(&["a", "zz"])).unwrap();

    assert_eq!(sink.sent_bytes(), vec![0x0a]);
    assert_eq!(sink.delay_count(), 2);
}

#[test]
fn empty_token_list_does_nothing() {
    let mut sink = DummySink::new();
    run_send(&mut sink, &[]).unwrap();

    assert!(sink.actions().is_empty());
}

#[test]
fn runs_are_idempotent() {
    let toks = tokens(&["ff", "1", "zz", "0x20"]);

    let mut first = DummySink::new();
    run_send(&mut first, &toks).unwrap();
    let mut second = DummySink::new();
    run_send(&mut second, &toks).unwrap();

    assert_eq!(first.actions(), second.actions());
}

#[test]
fn transfer_fault_is_fatal() {
    let mut sink = DummySink::failing_after(1);
    let result = run_send(&mut sink, &tokens(&["a", "b", "c"]));

    assert_eq!(result, Err(Error::TransferFailed));
    // Only the transfer that succeeded before the fault is recorded
    assert_eq!(sink.sent_bytes(), vec![0x0a]);
}
