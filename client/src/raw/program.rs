use reqwest::{Method, RequestBuilder, Response};
use uact_shared::program::handle::ProgramDescriptor;
use uact_shared::program::Program;

use crate::Error;

pub struct List;

#[async_trait::async_trait]
impl super::Request for List {
    type Output = Vec<Program>;
    const METHOD: Method = Method::GET;

    fn url_suffix(&self) -> String {
        "/api/programs/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct Create<'a> {
    pub descriptor: &'a ProgramDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Create<'_> {
    type Output = Program;

    fn url_suffix(&self) -> String {
        "/api/programs/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req.json(self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct Update<'a> {
    pub program_id: u64,
    pub descriptor: &'a ProgramDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Update<'_> {
    type Output = Program;
    const METHOD: Method = Method::PUT;

    fn url_suffix(&self) -> String {
        format!("/api/programs/{}/", self.program_id)
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req.json(self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct Delete {
    pub program_id: u64,
}

#[async_trait::async_trait]
impl super::Request for Delete {
    type Output = ();
    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/api/programs/{}/", self.program_id)
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req)
    }

    async fn parse_res(&mut self, _response: Response) -> Result<Self::Output, Error> {
        Ok(())
    }
}
