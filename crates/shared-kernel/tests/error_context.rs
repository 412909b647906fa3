// crates/shared-kernel/tests/error_context.rs
use absence_days_shared_kernel::{AbsenceDaysError, ErrorContext, InfrastructureError};

fn boom() -> std::result::Result<(), InfrastructureError> {
    Err(InfrastructureError::SourceUnavailable {
        reason: "connection refused".to_string(),
    })
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(AbsenceDaysError::from)
        .context("fetching trip rows")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("fetching trip rows"));
    assert!(display.contains("Infrastructure error:"));
}

#[test]
fn missing_column_names_the_column() {
    let err = InfrastructureError::MissingColumn {
        column: "start_date".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "required column 'start_date' is missing from the source header"
    );
}

#[test]
fn date_parse_failure_echoes_the_value() {
    let err = InfrastructureError::DateParseFailure {
        value: "next tuesday".to_string(),
    };
    assert!(err.to_string().contains("next tuesday"));
    assert!(err.to_string().contains("DD/MM/YYYY"));
}
