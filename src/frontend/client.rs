//! Typed HTTP client for the enrollment API.

use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use super::config::ClientConfig;
use crate::api::dto::{
    CourseResponse, CreateCourseRequest, CreateStudentRequest, EndpointInfo, EnrollRequest,
    EnrollResponse, EnrollmentItem, HealthResponse, IndexResponse, StudentResponse,
    StudyTipsRequest, StudyTipsResponse,
};
use crate::error::ErrorInfo;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout, malformed URL or undecodable body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error body.
    #[error("{message} ({status} {code})")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorInfo,
}

/// Client for the enrollment API rooted at [`ClientConfig::base_url`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Builds the client. Sends nothing.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves `path` against the base URL with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn index(&self) -> Result<IndexResponse, ClientError> {
        self.get("/").await
    }

    /// Fetches `/health`. A degraded (503) report is returned, not raised.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        if response.status() == StatusCode::SERVICE_UNAVAILABLE {
            return Ok(response.json().await?);
        }
        decode(response).await
    }

    pub async fn endpoints(&self) -> Result<Vec<EndpointInfo>, ClientError> {
        self.get("/debug/endpoints").await
    }

    pub async fn create_student(
        &self,
        request: &CreateStudentRequest,
    ) -> Result<StudentResponse, ClientError> {
        self.post("/students", request).await
    }

    pub async fn list_students(&self) -> Result<Vec<StudentResponse>, ClientError> {
        self.get("/students").await
    }

    pub async fn get_student(&self, student_id: i64) -> Result<StudentResponse, ClientError> {
        self.get(&format!("/students/{student_id}")).await
    }

    pub async fn student_courses(
        &self,
        student_id: i64,
    ) -> Result<Vec<CourseResponse>, ClientError> {
        self.get(&format!("/students/{student_id}/courses")).await
    }

    pub async fn create_course(
        &self,
        request: &CreateCourseRequest,
    ) -> Result<CourseResponse, ClientError> {
        self.post("/courses", request).await
    }

    pub async fn list_courses(&self) -> Result<Vec<CourseResponse>, ClientError> {
        self.get("/courses").await
    }

    pub async fn get_course(&self, course_id: i64) -> Result<CourseResponse, ClientError> {
        self.get(&format!("/courses/{course_id}")).await
    }

    pub async fn course_students(
        &self,
        course_id: i64,
    ) -> Result<Vec<StudentResponse>, ClientError> {
        self.get(&format!("/courses/{course_id}/students")).await
    }

    pub async fn enroll(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<EnrollResponse, ClientError> {
        self.post(
            "/enroll",
            &EnrollRequest {
                student_id,
                course_id,
            },
        )
        .await
    }

    pub async fn list_enrollments(&self) -> Result<Vec<EnrollmentItem>, ClientError> {
        self.get("/enrollments").await
    }

    pub async fn study_tips(
        &self,
        course_title: &str,
        credit_units: i64,
    ) -> Result<StudyTipsResponse, ClientError> {
        self.post(
            "/genai/study-tips",
            &StudyTipsRequest {
                course_title: course_title.to_string(),
                credit_units,
            },
        )
        .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await?;
    let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => (
            "unknown".to_string(),
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string(),
        ),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}
