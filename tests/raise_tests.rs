use axum::http::StatusCode;
use guard_raise::raise::kinds::{InvalidArgument, InvalidOperation, NotSupported};
use guard_raise::{raise_if, raise_if_not, HttpError, Raise};

fn open_stream(format: &str) -> Result<&'static str, NotSupported> {
    Raise::<NotSupported>::unless(format == "json", Some("op X unsupported"))?;
    Ok("stream")
}

#[test]
fn test_not_supported_with_message() {
    let err = Raise::<NotSupported>::when(true, Some("op X unsupported")).unwrap_err();
    assert_eq!(err.message(), "op X unsupported");
    assert!(Raise::<NotSupported>::when(false, Some("op X unsupported")).is_ok());
}

#[test]
fn test_question_mark_propagation() {
    assert_eq!(open_stream("json"), Ok("stream"));
    assert_eq!(
        open_stream("xml").unwrap_err().to_string(),
        "op X unsupported"
    );
}

#[test]
fn test_default_instance_when_message_missing() {
    let err = raise_if::<InvalidOperation>(true, None).unwrap_err();
    assert_eq!(err, InvalidOperation::default());

    let err = raise_if_not::<InvalidArgument>(false, Some("")).unwrap_err();
    assert_eq!(err.message(), InvalidArgument::DEFAULT_MESSAGE);
}

#[test]
fn test_if_and_if_not_are_complements() {
    for condition in [true, false] {
        let raised = Raise::<InvalidArgument>::when(condition, Some("bad")).is_err();
        let raised_not = Raise::<InvalidArgument>::unless(condition, Some("bad")).is_err();
        assert_eq!(raised, condition);
        assert_eq!(raised_not, !condition);
    }
}

#[test]
fn test_raise_http_error() {
    let err = Raise::<HttpError>::when(true, Some("cache poisoned")).unwrap_err();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "cache poisoned");
    assert_eq!(err.payload().len(), 3);
}
