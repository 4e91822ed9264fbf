use std::error::Error;
use todo_digest::errors::{
    ConfigError, PublishError, RemoteGenerationError, StoreError, SummarizeError,
};

#[test]
fn test_errors_implement_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    assert_error(&SummarizeError::Unconfigured);
    assert_error(&RemoteGenerationError::RateLimited);
    assert_error(&PublishError::Http("boom".to_string()));
    assert_error(&StoreError::EmptyText);
    assert_error(&ConfigError::InvalidValue {
        name: "OPENAI_TIMEOUT_SECS",
        value: "x".to_string(),
    });
}

#[test]
fn test_remote_generation_error_display() {
    assert_eq!(
        format!("{}", RemoteGenerationError::QuotaExceeded),
        "OpenAI quota exceeded. Please check your billing settings at https://platform.openai.com/account/billing"
    );
    assert_eq!(
        format!("{}", RemoteGenerationError::InvalidCredential),
        "Invalid OpenAI API key"
    );
    assert_eq!(
        format!("{}", RemoteGenerationError::RateLimited),
        "OpenAI rate limit exceeded. Please try again later"
    );
    assert_eq!(
        format!("{}", RemoteGenerationError::Other("status 500".to_string())),
        "Failed to generate AI summary: status 500"
    );
}

#[test]
fn test_summarize_error_is_transparent_over_remote_errors() {
    let err: SummarizeError = RemoteGenerationError::InvalidCredential.into();
    assert_eq!(err.to_string(), "Invalid OpenAI API key");
    assert!(matches!(
        err,
        SummarizeError::Remote(RemoteGenerationError::InvalidCredential)
    ));

    assert_eq!(
        SummarizeError::Unconfigured.to_string(),
        "OpenAI API key not configured"
    );
}

#[test]
fn test_publish_and_store_error_display() {
    let err = PublishError::Status {
        status: 404,
        body: "no_service".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Slack webhook rejected summary (status 404): no_service"
    );

    assert_eq!(StoreError::NotFound(7).to_string(), "Todo not found: 7");
    assert_eq!(StoreError::EmptyText.to_string(), "Todo text is required");
}

#[test]
fn test_reqwest_conversions_exist() {
    // Never called; only checks that the conversions compile.
    #[allow(unused)]
    fn _check_remote(err: reqwest::Error) -> RemoteGenerationError {
        RemoteGenerationError::from(err)
    }

    #[allow(unused)]
    fn _check_publish(err: reqwest::Error) -> PublishError {
        PublishError::from(err)
    }
}
