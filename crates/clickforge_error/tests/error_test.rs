use clickforge_error::{
    ClickforgeError, ClickforgeErrorKind, ContractError, ContractErrorKind, GeminiError,
    GeminiErrorKind, InputError, InputErrorKind, JobError, JobErrorKind,
};

#[test]
fn invalid_api_key_is_configuration_class() {
    let err: ClickforgeError =
        GeminiError::new(GeminiErrorKind::InvalidApiKey("API_KEY_INVALID".into())).into();
    assert!(err.is_configuration());
}

#[test]
fn call_failures_are_not_configuration_class() {
    let http: ClickforgeError = GeminiError::new(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".into(),
    })
    .into();
    assert!(!http.is_configuration());

    let job: ClickforgeError =
        JobError::new(JobErrorKind::AnalysisFailed("timed out".into())).into();
    assert!(!job.is_configuration());
}

#[test]
fn user_message_omits_source_location() {
    let err: ClickforgeError = InputError::new(InputErrorKind::TooLarge {
        size: 5 * 1024 * 1024,
        limit: 4 * 1024 * 1024,
    })
    .into();
    let message = err.user_message();
    assert_eq!(message, "File size should not exceed 4MB.");
    assert!(!message.contains("line"));
}

#[test]
fn image_data_missing_names_prompt() {
    let err: ClickforgeError = JobError::new(JobErrorKind::ImageDataMissing {
        prompt: "a shocked chef holding a donut".into(),
    })
    .into();
    assert!(err.user_message().contains("a shocked chef holding a donut"));
}

#[test]
fn contract_errors_keep_their_kind() {
    let err: ClickforgeError =
        ContractError::new(ContractErrorKind::MissingField("weaknesses".into())).into();
    match err.kind() {
        ClickforgeErrorKind::Contract(e) => {
            assert_eq!(e.kind, ContractErrorKind::MissingField("weaknesses".into()))
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert!(err.user_message().starts_with("Malformed response"));
}
