// src/infrastructure/content/s3_store.rs
use crate::config::ContentStoreConfig;
use crate::domain::article::{ArticleContent, ArticleId, ContentStore};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use aws_sdk_s3::{
    Client,
    config::{
        BehaviorVersion, Credentials, Region, RequestChecksumCalculation,
        ResponseChecksumValidation, retry::RetryConfig, timeout::TimeoutConfig,
    },
    error::{DisplayErrorContext, SdkError},
    operation::get_object::GetObjectError,
    primitives::ByteStream,
};

const CREDENTIALS_SOURCE: &str = "moderation-config";

/// Article bodies as plain-text objects under `articles/{id}.txt` in one
/// bucket of an S3-compatible store. Requests are SigV4-signed and use
/// path-style addressing so MinIO endpoints work unchanged.
#[derive(Clone)]
pub struct S3ContentStore {
    client: Client,
    bucket: String,
}

impl S3ContentStore {
    pub fn new(config: &ContentStoreConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            CREDENTIALS_SOURCE,
        );
        let sdk_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint_url.clone())
            .force_path_style(true)
            .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(config.timeout)
                    .build(),
            )
            // Plain bodies, no aws-chunked trailers.
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
            .build();

        Self::with_client(Client::from_conf(sdk_config), config.bucket.clone())
    }

    pub fn with_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

pub(crate) fn object_key(id: ArticleId) -> String {
    format!("articles/{id}.txt")
}

fn status_of<E>(err: &SdkError<E>) -> Option<u16> {
    err.raw_response().map(|response| response.status().as_u16())
}

/// Connection failures, timeouts, throttling and 5xx answers are transient.
/// Everything else the store says is a persistent failure.
fn map_sdk<E>(action: &str, id: ArticleId, err: &SdkError<E>) -> DomainError
where
    E: std::error::Error + 'static,
{
    let detail = format!("{action} {}: {}", object_key(id), DisplayErrorContext(err));
    match err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            DomainError::Unavailable(detail)
        }
        _ => match status_of(err) {
            Some(status) if status >= 500 || status == 429 => DomainError::Unavailable(detail),
            _ => DomainError::Persistence(detail),
        },
    }
}

fn is_missing(err: &SdkError<GetObjectError>) -> bool {
    err.as_service_error()
        .is_some_and(GetObjectError::is_no_such_key)
        || status_of(err) == Some(404)
}

#[async_trait]
impl ContentStore for S3ContentStore {
    async fn get(&self, id: ArticleId) -> DomainResult<Option<ArticleContent>> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(object_key(id))
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) if is_missing(&err) => return Ok(None),
            Err(err) => return Err(map_sdk("fetch", id, &err)),
        };

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|err| DomainError::Unavailable(format!("read {}: {err}", object_key(id))))?
            .into_bytes();
        let text = String::from_utf8(bytes.to_vec()).map_err(|err| {
            DomainError::Persistence(format!("{} is not valid UTF-8: {err}", object_key(id)))
        })?;
        Ok(Some(ArticleContent::from_stored(text)))
    }

    async fn put(&self, id: ArticleId, content: &ArticleContent) -> DomainResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key(id))
            .content_type("text/plain; charset=utf-8")
            .body(ByteStream::from(content.as_str().as_bytes().to_vec()))
            .send()
            .await
            .map_err(|err| map_sdk("store", id, &err))?;

        tracing::debug!(article_id = %id, bytes = content.as_str().len(), "content stored");
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        match self
            .client
            .delete_object()
            .bucket(&self.bucket)
            .key(object_key(id))
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) if status_of(&err) == Some(404) => Ok(()),
            Err(err) => Err(map_sdk("remove", id, &err)),
        }
    }
}
