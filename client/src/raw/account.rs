use reqwest::{Method, RequestBuilder, Response};
use uact_shared::account::handle::{
    LoginDescriptor, LoginResult, ProgressSummary, SignupDescriptor, SignupResult, StudentPatch,
};
use uact_shared::account::StudentProfile;

use crate::Error;

pub struct Login {
    pub username: String,
    pub password: String,
}

#[async_trait::async_trait]
impl super::Request for Login {
    type Output = LoginResult;
    const AUTH: bool = false;

    fn url_suffix(&self) -> String {
        "/api/login/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req.json(&LoginDescriptor {
            username: self.username.clone(),
            password: self.password.clone(),
        }))
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct Signup<'a> {
    pub descriptor: &'a SignupDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Signup<'_> {
    type Output = SignupResult;
    const AUTH: bool = false;

    fn url_suffix(&self) -> String {
        "/api/signup/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req.json(self.descriptor))
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct Progress;

#[async_trait::async_trait]
impl super::Request for Progress {
    type Output = ProgressSummary;
    const METHOD: Method = Method::GET;

    fn url_suffix(&self) -> String {
        "/api/progress/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct ListStudents;

#[async_trait::async_trait]
impl super::Request for ListStudents {
    type Output = Vec<StudentProfile>;
    const METHOD: Method = Method::GET;

    fn url_suffix(&self) -> String {
        "/api/students/".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct UpdateStudent<'a> {
    pub student_id: u64,
    pub patch: &'a StudentPatch,
}

#[async_trait::async_trait]
impl super::Request for UpdateStudent<'_> {
    type Output = StudentProfile;
    const METHOD: Method = Method::PUT;

    fn url_suffix(&self) -> String {
        format!("/api/students/{}/", self.student_id)
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req.json(self.patch))
    }

    async fn parse_res(&mut self, response: Response) -> Result<Self::Output, Error> {
        Ok(response.json().await?)
    }
}

pub struct DeleteStudent {
    pub student_id: u64,
}

#[async_trait::async_trait]
impl super::Request for DeleteStudent {
    type Output = ();
    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/api/students/{}/", self.student_id)
    }

    fn make_req(&self, req: RequestBuilder) -> Result<RequestBuilder, Error> {
        Ok(req)
    }

    async fn parse_res(&mut self, _response: Response) -> Result<Self::Output, Error> {
        Ok(())
    }
}
