use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{RollNo, StudentRecord},
    protocol::{decode_collection, decode_record, StudentPayload},
};
use url::Url;

use crate::{error::BackendError, StudentBackend};

/// `StudentBackend` over the service's REST interface.
pub struct HttpStudentBackend {
    http: Client,
    base_url: Url,
}

impl HttpStudentBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn students_url(&self, key: Option<&str>) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            segments.pop_if_empty().push("students");
            if let Some(key) = key {
                segments.push(key);
            }
        }
        Ok(url)
    }
}

fn ensure_success(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status(status))
    }
}

#[async_trait]
impl StudentBackend for HttpStudentBackend {
    async fn fetch_students(&self) -> Result<Vec<StudentRecord>, BackendError> {
        let url = self.students_url(None)?;
        let response = ensure_success(self.http.get(url).send().await?)?;
        let body = response.bytes().await?;
        Ok(decode_collection(&body)?)
    }

    async fn fetch_student(&self, roll_no: &str) -> Result<StudentRecord, BackendError> {
        let url = self.students_url(Some(roll_no))?;
        let response = ensure_success(self.http.get(url).send().await?)?;
        let body = response.bytes().await?;
        Ok(decode_record(&body)?)
    }

    async fn create_student(&self, payload: &StudentPayload) -> Result<(), BackendError> {
        let url = self.students_url(None)?;
        ensure_success(self.http.post(url).json(payload).send().await?)?;
        Ok(())
    }

    async fn update_student(
        &self,
        roll_no: &str,
        payload: &StudentPayload,
    ) -> Result<(), BackendError> {
        let url = self.students_url(Some(roll_no))?;
        ensure_success(self.http.put(url).json(payload).send().await?)?;
        Ok(())
    }

    async fn delete_student(&self, roll_no: RollNo) -> Result<(), BackendError> {
        let url = self.students_url(Some(&roll_no.to_string()))?;
        ensure_success(self.http.delete(url).send().await?)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
