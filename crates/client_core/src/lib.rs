use async_trait::async_trait;
use shared::{
    domain::{RollNo, StudentDraft, StudentRecord},
    protocol::StudentPayload,
};
use tracing::{debug, info, warn};

pub mod config;
pub mod error;
pub mod transport;

pub use config::{load_settings, ClientSettings};
pub use error::{BackendError, ClientError};
pub use transport::HttpStudentBackend;

/// The five exchanges the records service offers.
///
/// Roll numbers used as path keys are passed through as the user typed them; only
/// `delete_student` takes a parsed id because it is always fed from a listed record.
#[async_trait]
pub trait StudentBackend: Send + Sync {
    async fn fetch_students(&self) -> Result<Vec<StudentRecord>, BackendError>;
    async fn fetch_student(&self, roll_no: &str) -> Result<StudentRecord, BackendError>;
    async fn create_student(&self, payload: &StudentPayload) -> Result<(), BackendError>;
    async fn update_student(
        &self,
        roll_no: &str,
        payload: &StudentPayload,
    ) -> Result<(), BackendError>;
    async fn delete_student(&self, roll_no: RollNo) -> Result<(), BackendError>;
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub roll_no: String,
    pub result: Option<StudentRecord>,
}

/// Everything a front end renders. Only `StudentClient` operations write to it,
/// apart from the draft and search text the user edits.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ClientState {
    pub students: Vec<StudentRecord>,
    pub form: StudentDraft,
    pub search: SearchState,
    pub error_message: Option<String>,
}

pub struct StudentClient<B: StudentBackend> {
    backend: B,
    state: ClientState,
}

impl StudentClient<HttpStudentBackend> {
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, BackendError> {
        let backend =
            HttpStudentBackend::new(&settings.backend_url, settings.request_timeout())?;
        info!(backend_url = %backend.base_url(), "student client configured");
        Ok(Self::new(backend))
    }
}

impl<B: StudentBackend> StudentClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ClientState::default(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn set_form(&mut self, draft: StudentDraft) {
        self.state.form = draft;
    }

    pub fn set_search_query(&mut self, roll_no: impl Into<String>) {
        self.state.search.roll_no = roll_no.into();
    }

    /// Replaces the cached collection with the service's. The cache is left alone on failure.
    pub async fn list(&mut self) -> Result<(), ClientError> {
        match self.backend.fetch_students().await {
            Ok(students) => {
                debug!(count = students.len(), "student list refreshed");
                self.state.students = students;
                self.state.error_message = None;
                Ok(())
            }
            Err(err) => {
                warn!(operation = "list", error = %err, "fetching students failed");
                self.fail(ClientError::Fetch(err))
            }
        }
    }

    /// Submits the current draft as a new record, then refreshes the list.
    pub async fn create(&mut self) -> Result<(), ClientError> {
        if !self.state.form.is_complete() {
            return self.fail(ClientError::FieldsRequired);
        }

        let payload = self.state.form.to_payload();
        if let Err(err) = self.backend.create_student(&payload).await {
            warn!(operation = "create", error = %err, "adding student failed");
            return self.fail(ClientError::Add(err));
        }

        self.after_write().await
    }

    /// Replaces the record addressed by the draft's roll number, then refreshes the list.
    pub async fn update(&mut self) -> Result<(), ClientError> {
        if !self.state.form.is_complete() {
            return self.fail(ClientError::FieldsRequired);
        }

        let payload = self.state.form.to_payload();
        let result = self
            .backend
            .update_student(&self.state.form.roll_no, &payload)
            .await;
        if let Err(err) = result {
            warn!(operation = "update", roll_no = %self.state.form.roll_no, error = %err, "updating student failed");
            return self.fail(ClientError::Update(err));
        }

        self.after_write().await
    }

    pub async fn delete(&mut self, roll_no: RollNo) -> Result<(), ClientError> {
        if let Err(err) = self.backend.delete_student(roll_no).await {
            warn!(operation = "delete", %roll_no, error = %err, "deleting student failed");
            return self.fail(ClientError::Delete(err));
        }

        self.list().await
    }

    /// Looks up the roll number in the search box. The list cache is not touched.
    pub async fn search(&mut self) -> Result<(), ClientError> {
        if self.state.search.roll_no.is_empty() {
            return self.fail(ClientError::RollNoRequired);
        }

        let result = self.backend.fetch_student(&self.state.search.roll_no).await;
        match result {
            Ok(record) => {
                self.state.search.result = Some(record);
                self.state.error_message = None;
                Ok(())
            }
            Err(err) => {
                warn!(operation = "search", roll_no = %self.state.search.roll_no, error = %err, "student lookup failed");
                self.state.search.result = None;
                self.fail(ClientError::NotFound(err))
            }
        }
    }

    // A write that landed clears the draft even if the refresh then fails; the refresh
    // error is what stays on screen.
    async fn after_write(&mut self) -> Result<(), ClientError> {
        self.state.form.clear();
        self.state.error_message = None;
        self.list().await
    }

    fn fail(&mut self, err: ClientError) -> Result<(), ClientError> {
        self.state.error_message = Some(err.to_string());
        Err(err)
    }
}

#[cfg(test)]
#[path = "tests/mock_service.rs"]
mod mock_service;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
