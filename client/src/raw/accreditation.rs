use reqwest::{Method, RequestBuilder, Response};
use uact_shared::accreditation::AccreditationRecord;

use crate::Error;

pub struct List;

#[async_trait::async_trait]
impl super::Request for List {
    type Output = Vec<AccreditationRecord>;
    const METHOD: Method = Method::GET;

    fn url_suffix(&self) -> String {
        "/api/accreditation/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct Approve {
    pub record_id: u64,
}

#[async_trait::async_trait]
impl super::Request for Approve {
    type Output = AccreditationRecord;

    fn url_suffix(&self) -> String {
        format!("/api/accreditation/{}/approve/", self.record_id)
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}
