use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use reqwest::header::CONTENT_TYPE;
use tracing::info;

use crate::cloudconvert::{CreateJobRequest, ExportFile, JobData, JobEnvelope, UploadForm};
use crate::convert::{ConvertedDocument, IConvertService};
use crate::models::{ConvertError, Direction};
use crate::util::mime::get_content_type;

pub struct CloudConvertSettings {
    pub api_key: String,
    pub api_base: String,
}

/// Client for the external conversion provider. One instance with one
/// `reqwest::Client` is built at startup and shared by all requests.
pub struct CloudConvertService {
    client: reqwest::Client,
    settings: CloudConvertSettings,
}

impl CloudConvertService {
    pub fn build(settings: CloudConvertSettings) -> Result<Self, &'static str> {
        let client = reqwest::Client::builder().build().map_err(|_| "could not build the http client")?;
        Ok(CloudConvertService { client, settings })
    }

    async fn create_job(&self, direction: Direction) -> Result<JobData, ConvertError> {
        let response = self
            .client
            .post(format!("{}/jobs", &self.settings.api_base))
            .bearer_auth(&self.settings.api_key)
            .json(&CreateJobRequest::for_direction(direction))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| ConvertError::Provider(err.to_string()))?;
        let envelope: JobEnvelope = response.json().await.map_err(|err| ConvertError::Provider(err.to_string()))?;
        Ok(envelope.data)
    }

    async fn upload_source(&self, form: &UploadForm, file_name: &str, content: Bytes) -> Result<(), ConvertError> {
        let mut multipart = reqwest::multipart::Form::new();
        for (key, value) in &form.parameters {
            multipart = multipart.text(key.clone(), value.clone());
        }
        // The file part has to come after the presigned parameters.
        let part = reqwest::multipart::Part::stream(reqwest::Body::from(content)).file_name(file_name.to_string());
        let multipart = multipart.part("file", part);
        self.client
            .post(&form.url)
            .multipart(multipart)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map(|_| ())
            .map_err(|err| ConvertError::Provider(err.to_string()))
    }

    /// Blocks until the job reaches a terminal state.
    async fn wait_for_job(&self, job_id: &str) -> Result<JobData, ConvertError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}/wait", &self.settings.api_base, job_id))
            .bearer_auth(&self.settings.api_key)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| ConvertError::Provider(err.to_string()))?;
        let envelope: JobEnvelope = response.json().await.map_err(|err| ConvertError::Provider(err.to_string()))?;
        Ok(envelope.data)
    }

    async fn fetch_output(&self, output: &ExportFile) -> Result<ConvertedDocument, ConvertError> {
        let response = self
            .client
            .get(&output.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| ConvertError::Provider(err.to_string()))?;
        let header = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let content_type = get_content_type(header.as_deref(), output.filename.as_deref().unwrap_or(""));
        let content = response
            .bytes_stream()
            .map_err(|err| ConvertError::Provider(err.to_string()))
            .boxed();
        Ok(ConvertedDocument { content_type, content })
    }
}

#[async_trait::async_trait]
impl IConvertService for CloudConvertService {
    #[tracing::instrument(skip(self, content))]
    async fn convert(&self, file_name: &str, content: Bytes, direction: Direction) -> Result<ConvertedDocument, ConvertError> {
        let job = self.create_job(direction).await?;
        info!("Created conversion job {}", &job.id);
        let form = job.import_form()?;
        self.upload_source(form, file_name, content).await?;
        let finished = self.wait_for_job(&job.id).await?;
        let output = finished.export_file()?;
        info!("Job {} finished, fetching the output", &finished.id);
        self.fetch_output(output).await
    }
}
