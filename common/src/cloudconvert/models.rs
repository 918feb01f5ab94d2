use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ConvertError, Direction};

pub static IMPORT_TASK: &str = "import-file";
pub static CONVERT_TASK: &str = "convert-file";
pub static EXPORT_TASK: &str = "export-file";

pub static IMPORT_OPERATION: &str = "import/upload";
pub static CONVERT_OPERATION: &str = "convert";
pub static EXPORT_OPERATION: &str = "export/url";

static STATUS_FINISHED: &str = "finished";
static STATUS_ERROR: &str = "error";

/// Job creation payload: the three-task graph import → convert → export.
#[derive(Debug, Serialize)]
pub struct CreateJobRequest {
    pub tasks: HashMap<String, TaskDefinition>,
}

#[derive(Debug, Serialize)]
pub struct TaskDefinition {
    pub operation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<&'static str>,
}

impl CreateJobRequest {
    pub fn for_direction(direction: Direction) -> Self {
        let mut tasks = HashMap::new();
        tasks.insert(IMPORT_TASK.to_string(), TaskDefinition {
            operation: IMPORT_OPERATION,
            input: None,
            output_format: None,
        });
        tasks.insert(CONVERT_TASK.to_string(), TaskDefinition {
            operation: CONVERT_OPERATION,
            input: Some(vec![IMPORT_TASK]),
            output_format: Some(direction.output_format()),
        });
        tasks.insert(EXPORT_TASK.to_string(), TaskDefinition {
            operation: EXPORT_OPERATION,
            input: Some(vec![CONVERT_TASK]),
            output_format: None,
        });
        CreateJobRequest { tasks }
    }
}

/// The provider wraps every job payload in a `data` envelope.
#[derive(Debug, Deserialize)]
pub struct JobEnvelope {
    pub data: JobData,
}

#[derive(Debug, Deserialize)]
pub struct JobData {
    pub id: String,
    pub status: Option<String>,
    pub tasks: Vec<TaskData>,
}

#[derive(Debug, Deserialize)]
pub struct TaskData {
    pub id: String,
    pub name: String,
    pub operation: String,
    pub status: Option<String>,
    pub message: Option<String>,
    pub result: Option<TaskResult>,
}

#[derive(Debug, Deserialize)]
pub struct TaskResult {
    pub form: Option<UploadForm>,
    pub files: Option<Vec<ExportFile>>,
}

/// Presigned form the import task expects the source bytes to be posted to.
#[derive(Debug, Deserialize)]
pub struct UploadForm {
    pub url: String,
    pub parameters: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportFile {
    pub filename: Option<String>,
    pub url: String,
}

impl JobData {
    /// The upload form of the freshly created job's import task.
    pub fn import_form(&self) -> Result<&UploadForm, ConvertError> {
        self.tasks
            .iter()
            .find(|task| task.name == IMPORT_TASK)
            .and_then(|task| task.result.as_ref())
            .and_then(|result| result.form.as_ref())
            .ok_or_else(|| ConvertError::Provider("the job is missing an upload form".to_string()))
    }

    /// The exported output of a terminal job. Checked before any response
    /// byte is streamed: a failed job surfaces the failing task's message,
    /// a finished job without an export file is reported as missing output.
    pub fn export_file(&self) -> Result<&ExportFile, ConvertError> {
        if self.status.as_deref() == Some(STATUS_ERROR) {
            return Err(ConvertError::Provider(self.failure_message()));
        }
        self.tasks
            .iter()
            .find(|task| task.operation == EXPORT_OPERATION && task.status.as_deref() == Some(STATUS_FINISHED))
            .and_then(|task| task.result.as_ref())
            .and_then(|result| result.files.as_ref())
            .and_then(|files| files.first())
            .ok_or(ConvertError::NoOutput)
    }

    fn failure_message(&self) -> String {
        self.tasks
            .iter()
            .find(|task| task.status.as_deref() == Some(STATUS_ERROR))
            .and_then(|task| task.message.clone())
            .unwrap_or_else(|| "the conversion job failed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created_job() -> JobData {
        let envelope: JobEnvelope = serde_json::from_str(
            r#"{
                "data": {
                    "id": "job-1",
                    "status": "waiting",
                    "tasks": [
                        {
                            "id": "task-import", "name": "import-file", "operation": "import/upload", "status": "waiting",
                            "result": {"form": {"url": "https://upload.test/form", "parameters": {"key": "uploads/abc"}}}
                        },
                        {"id": "task-convert", "name": "convert-file", "operation": "convert", "status": "waiting"},
                        {"id": "task-export", "name": "export-file", "operation": "export/url", "status": "waiting"}
                    ]
                }
            }"#,
        )
        .unwrap();
        envelope.data
    }

    fn finished_job(files: &str) -> JobData {
        let envelope: JobEnvelope = serde_json::from_str(&format!(
            r#"{{
                "data": {{
                    "id": "job-1",
                    "status": "finished",
                    "tasks": [
                        {{"id": "task-import", "name": "import-file", "operation": "import/upload", "status": "finished"}},
                        {{"id": "task-convert", "name": "convert-file", "operation": "convert", "status": "finished"}},
                        {{
                            "id": "task-export", "name": "export-file", "operation": "export/url", "status": "finished",
                            "result": {{"files": {}}}
                        }}
                    ]
                }}
            }}"#,
            files
        ))
        .unwrap();
        envelope.data
    }

    #[test]
    fn job_creation_payload_declares_the_task_graph() {
        let request = CreateJobRequest::for_direction(Direction::DocxToPdf);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tasks"]["import-file"]["operation"], "import/upload");
        assert_eq!(value["tasks"]["convert-file"]["input"][0], "import-file");
        assert_eq!(value["tasks"]["convert-file"]["output_format"], "pdf");
        assert_eq!(value["tasks"]["export-file"]["operation"], "export/url");
        assert_eq!(value["tasks"]["export-file"]["input"][0], "convert-file");
    }

    #[test]
    fn finds_the_upload_form_of_a_created_job() {
        let job = created_job();
        let form = job.import_form().unwrap();
        assert_eq!(form.url, "https://upload.test/form");
        assert_eq!(form.parameters["key"], "uploads/abc");
    }

    #[test]
    fn finds_the_exported_file_of_a_finished_job() {
        let job = finished_job(r#"[{"filename": "report.pdf", "url": "https://storage.test/report.pdf"}]"#);
        let file = job.export_file().unwrap();
        assert_eq!(file.url, "https://storage.test/report.pdf");
        assert_eq!(file.filename.as_deref(), Some("report.pdf"));
    }

    #[test]
    fn a_finished_job_without_files_is_missing_output() {
        let job = finished_job("[]");
        assert!(matches!(job.export_file(), Err(ConvertError::NoOutput)));
    }

    #[test]
    fn a_failed_job_surfaces_the_task_message() {
        let envelope: JobEnvelope = serde_json::from_str(
            r#"{
                "data": {
                    "id": "job-1",
                    "status": "error",
                    "tasks": [
                        {"id": "task-convert", "name": "convert-file", "operation": "convert", "status": "error", "message": "unsupported input"}
                    ]
                }
            }"#,
        )
        .unwrap();
        match envelope.data.export_file() {
            Err(ConvertError::Provider(message)) => assert_eq!(message, "unsupported input"),
            other => panic!("expected a provider error, got {:?}", other.map(|file| file.url.clone())),
        }
    }
}
