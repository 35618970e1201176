use reqwest::{Method, RequestBuilder, Response};
use uact_shared::application::handle::{ApplicationDescriptor, DecideDescriptor};
use uact_shared::application::{Application, Decision, HistoryEntry, Submission};

use crate::Error;

pub struct Submit<'a> {
    pub descriptor: &'a ApplicationDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Submit<'_> {
    type Output = Application;

    fn url_suffix(&self) -> String {
        "/api/applications/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req.json(self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct ListSubmissions {
    /// Restrict to one program's submissions when set.
    pub program: Option<u64>,
}

#[async_trait::async_trait]
impl super::Request for ListSubmissions {
    type Output = Vec<Submission>;
    const METHOD: Method = Method::GET;

    fn url_suffix(&self) -> String {
        "/api/submissions/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(match self.program {
            Some(id) => req.query(&[("program", id)]),
            None => req,
        })
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct Decide {
    pub submission_id: u64,
    pub decision: Decision,
}

#[async_trait::async_trait]
impl super::Request for Decide {
    type Output = Submission;

    fn url_suffix(&self) -> String {
        format!("/api/submissions/{}/decide/", self.submission_id)
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req.json(&DecideDescriptor {
            decision: self.decision,
        }))
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct ListHistory;

#[async_trait::async_trait]
impl super::Request for ListHistory {
    type Output = Vec<HistoryEntry>;
    const METHOD: Method = Method::GET;

    fn url_suffix(&self) -> String {
        "/api/service-history/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}
