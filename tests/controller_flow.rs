mod common;

use common::{Mode, RecordingBackend};
use remote_calculator::client::controller::CalculatorController;
use remote_calculator::client::models::keys::parse_keys;
use remote_calculator::common::models::{Operator, ERROR_MARKER};

async fn type_keys(controller: &mut CalculatorController<RecordingBackend>, line: &str) {
    for key in parse_keys(line).unwrap() {
        controller.press(key).await;
    }
}

#[tokio::test]
async fn digits_concatenate_after_reset() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Arithmetic));
    type_keys(&mut calc, "9 AC 1 2 3").await;
    assert_eq!(calc.display(), "123");
}

#[tokio::test]
async fn only_one_decimal_point_per_number() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Arithmetic));
    type_keys(&mut calc, "1 . 2 . 3").await;
    assert_eq!(calc.display(), "1.23");
}

#[tokio::test]
async fn chained_operator_completes_previous_operation() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Arithmetic));
    type_keys(&mut calc, "5 +").await;
    assert!(calc.backend().calls().is_empty());
    assert_eq!(calc.state().pending_value(), Some(5.0));

    type_keys(&mut calc, "3 +").await;
    assert_eq!(calc.backend().calls(), vec![(5.0, 3.0, Operator::Add)]);
    assert_eq!(calc.display(), "8");
    assert_eq!(calc.state().pending_value(), Some(8.0));
    assert_eq!(calc.state().pending_operator(), Some(Operator::Add));
}

#[tokio::test]
async fn equals_uses_the_operator_path() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Arithmetic));
    type_keys(&mut calc, "5 + 3 =").await;
    assert_eq!(calc.backend().calls(), vec![(5.0, 3.0, Operator::Add)]);
    assert_eq!(calc.display(), "8");
    assert!(!calc.state().is_loading());
}

#[tokio::test]
async fn remote_failure_shows_error_marker() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Failing));
    type_keys(&mut calc, "5 + 3 =").await;
    assert_eq!(calc.display(), ERROR_MARKER);
    assert_eq!(calc.state().pending_value(), None);
}

#[tokio::test]
async fn empty_result_is_treated_like_failure() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Empty));
    type_keys(&mut calc, "5 + 3 =").await;
    assert_eq!(calc.display(), ERROR_MARKER);
    assert_eq!(calc.state().pending_value(), None);
    assert_eq!(calc.state().pending_operator(), Some(Operator::Equals));
}

#[tokio::test]
async fn division_by_zero_comes_back_as_error() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Arithmetic));
    type_keys(&mut calc, "7 / 0 =").await;
    assert_eq!(calc.display(), ERROR_MARKER);
}

#[tokio::test]
async fn typing_recovers_after_error() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Failing));
    type_keys(&mut calc, "5 + 3 =").await;
    calc.backend().set_mode(Mode::Arithmetic);

    type_keys(&mut calc, "2 * 4 =").await;
    assert_eq!(calc.display(), "8");
    assert_eq!(
        calc.backend().calls(),
        vec![(5.0, 3.0, Operator::Add), (2.0, 4.0, Operator::Multiply)]
    );
}

#[tokio::test]
async fn operator_after_error_sends_nan_operand() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Failing));
    type_keys(&mut calc, "5 + 3 =").await;
    assert_eq!(calc.display(), ERROR_MARKER);

    calc.backend().set_mode(Mode::Arithmetic);
    type_keys(&mut calc, "+ 2 =").await;
    let calls = calc.backend().calls();
    assert_eq!(calls.len(), 2);
    let (a, b, op) = calls[1];
    assert!(a.is_nan());
    assert_eq!((b, op), (2.0, Operator::Add));
    assert_eq!(calc.display(), "NaN");
}

#[tokio::test]
async fn clear_all_signals_the_service_once_per_press() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Arithmetic));
    calc.clear_all().await;
    assert_eq!(calc.backend().clears(), 1);

    type_keys(&mut calc, "4 + 4 AC").await;
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.state().pending_value(), None);
    assert_eq!(calc.state().pending_operator(), None);
    assert_eq!(calc.backend().clears(), 2);

    type_keys(&mut calc, "AC AC").await;
    assert_eq!(calc.backend().clears(), 4);
}

#[tokio::test]
async fn clear_entry_preserves_pending_computation() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Arithmetic));
    type_keys(&mut calc, "9 - 5").await;
    calc.clear_entry();
    assert_eq!(calc.display(), "0");

    calc.digit('2');
    calc.operator(Operator::Equals).await;
    assert_eq!(calc.backend().calls(), vec![(9.0, 2.0, Operator::Subtract)]);
    assert_eq!(calc.display(), "7");
    assert_eq!(calc.backend().clears(), 0);
}

#[tokio::test]
async fn decimal_operands_reach_the_service() {
    let mut calc = CalculatorController::new(RecordingBackend::new(Mode::Arithmetic));
    calc.digit('1');
    calc.decimal();
    calc.digit('5');
    calc.operator(Operator::Multiply).await;
    calc.decimal();
    calc.digit('5');
    calc.operator(Operator::Equals).await;
    assert_eq!(calc.backend().calls(), vec![(1.5, 0.5, Operator::Multiply)]);
    assert_eq!(calc.display(), "0.75");
}
