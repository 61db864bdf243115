mod common;

use common::*;
use w3c_validator::{
    ContentKind, RequestShape, TargetOutcome, ValidationError, ValidationResult, ValidationTarget,
};

#[tokio::test]
async fn test_retry_law_counts_second_result() {
    let transport = MockTransport::with_bodies(&["", CSS_TWO_ERRORS_ONE_WARNING]);
    let mut validator = capture_validator(transport, fast_settings());

    let outcome = validator
        .validate_with_retry(&ValidationTarget::new("http://example.com/site.css"))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        TargetOutcome::Validated(ValidationResult::Css {
            error_count: 2,
            warning_count: 1
        })
    );

    let transport = MockTransport::with_bodies(&["", CSS_TWO_ERRORS_ONE_WARNING]);
    let mut validator = capture_validator(transport, fast_settings());
    let tally = validator
        .run_all(&["http://example.com/site.css"])
        .await
        .unwrap();

    assert_eq!((tally.errors, tally.warnings), (2, 1));
    assert_eq!(tally.failed, 0);

    let output = captured_output(validator);
    assert_eq!(
        output,
        "validating: http://example.com/site.css ...\n\
         retrying: http://example.com/site.css ...\n\
         errors: 2\n\
         warnings: 1\n"
    );
}

#[tokio::test]
async fn test_exhaustion_law_counts_one_error() {
    let transport = MockTransport::with_bodies(&["not json", "", HTML_CLEAN]);
    let mut validator = capture_validator(transport, fast_settings());

    let tally = validator
        .run_all(&["http://example.com/down.html", "http://example.com/ok.html"])
        .await
        .unwrap();

    assert_eq!(tally.errors, 1);
    assert_eq!(tally.warnings, 0);
    assert_eq!(tally.failed, 1);
    assert_eq!(tally.targets, 2);
    assert_eq!(tally.exit_status(), 1);
    assert_eq!(validator.transport().request_count(), 3);

    let output = captured_output(validator);
    assert!(output.contains("failed: http://example.com/down.html\n"));
    assert!(output.contains("validating: http://example.com/ok.html ...\n"));
}

#[tokio::test]
async fn test_scenario_html_upload_with_error() {
    let documents = TestDocuments::new();
    let page = documents.html("a.html");

    let transport = MockTransport::with_bodies(&[HTML_ONE_ERROR]);
    let mut validator = capture_validator(transport, fast_settings());
    let tally = validator.run_all(&[page.as_str()]).await.unwrap();

    assert_eq!(tally.errors, 1);
    assert_eq!(tally.warnings, 0);
    assert_eq!(tally.exit_status(), 1);

    let requests = validator.transport().request_log();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].kind, ContentKind::Html);
    assert!(matches!(
        requests[0].shape,
        RequestShape::Upload {
            field: "uploaded_file",
            mime_type: "text/html",
            ..
        }
    ));

    let output = captured_output(validator);
    assert!(output.contains("error: line 10: bad tag\n"));
}

#[tokio::test]
async fn test_scenario_css_warnings_only() {
    let transport = MockTransport::with_bodies(&[CSS_THREE_WARNINGS]);
    let mut validator = capture_validator(transport, fast_settings());
    let tally = validator.run_all(&["b.css"]).await.unwrap();

    assert_eq!(tally.errors, 0);
    assert_eq!(tally.warnings, 3);
    assert!(tally.is_success());
    assert_eq!(tally.exit_status(), 0);

    let requests = validator.transport().request_log();
    assert_eq!(requests[0].kind, ContentKind::Css);
    assert_eq!(requests[0].param("warning"), Some("0"));

    let output = captured_output(validator);
    assert_eq!(output, "validating: b.css ...\nwarnings: 3\n");
}

#[tokio::test]
async fn test_scenario_remote_html_uses_query() {
    let transport = MockTransport::with_bodies(&[HTML_CLEAN]);
    let mut validator = capture_validator(transport, fast_settings());
    validator
        .run_all(&["http://example.com/c.html"])
        .await
        .unwrap();

    let requests = validator.transport().request_log();
    assert_eq!(requests[0].shape, RequestShape::Query);
    assert!(
        requests[0]
            .query_url()
            .as_str()
            .contains("uri=http%3A%2F%2Fexample.com%2Fc.html")
    );
    assert_eq!(requests[0].param("warning"), None);
}

#[tokio::test]
async fn test_html_messages_classified_in_order() {
    let body = r#"{"messages": [
        {"type": "info", "lastLine": 3, "message": "trailing slash"},
        {"type": "error", "message": "document is empty"},
        {"type": "non-document-error", "message": "io"}
    ]}"#;
    let transport = MockTransport::with_bodies(&[body]);
    let mut validator = capture_validator(transport, fast_settings());
    let tally = validator
        .run_all(&["http://example.com/"])
        .await
        .unwrap();

    assert_eq!(tally.errors, 1);
    assert_eq!(tally.warnings, 2);

    let output = captured_output(validator);
    assert_eq!(
        output,
        "validating: http://example.com/ ...\n\
         info: line 3: trailing slash\n\
         error: document is empty\n\
         non-document-error: io\n"
    );
}

#[tokio::test]
async fn test_identical_responses_give_identical_counts() {
    let transport = MockTransport::with_bodies(&[HTML_ONE_ERROR, HTML_ONE_ERROR]);
    let mut validator = capture_validator(transport, fast_settings());
    let target = ValidationTarget::new("http://example.com/a.html");

    let first = validator.validate(&target).await.unwrap();
    let second = validator.validate(&target).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.counts(), second.counts());
}

#[tokio::test]
async fn test_transport_failure_aborts_run() {
    let transport = MockTransport::new();
    transport.add_status(500);
    transport.add_body(HTML_CLEAN);
    let mut validator = capture_validator(transport, fast_settings());

    let result = validator
        .run_all(&["http://example.com/one.html", "http://example.com/two.html"])
        .await;

    assert!(matches!(
        result,
        Err(ValidationError::HttpStatus { status: 500, .. })
    ));
    assert_eq!(validator.transport().request_count(), 1);
}

#[tokio::test]
async fn test_empty_target_list() {
    let mut validator = capture_validator(MockTransport::new(), fast_settings());
    let tally = validator.run_all::<&str>(&[]).await.unwrap();

    assert_eq!(tally.targets, 0);
    assert_eq!(tally.exit_status(), 0);
    assert_eq!(validator.transport().request_count(), 0);
}
