use std::sync::Arc;
use std::time::Duration;

use serial_test::serial;

use super::mock::{self, MockState};
use crate::submit::{ApplicationForm, Submitter};
use crate::Error;

fn form() -> ApplicationForm {
    ApplicationForm {
        emergency_contact_name: "Luis Reyes".to_string(),
        emergency_contact_phone: "09170000001".to_string(),
    }
}

#[serial]
#[tokio::test]
async fn submit_creates_an_application() {
    let backend = mock::spawn(MockState::default()).await;
    let cx = mock::student_context(&backend, "submit-ok").await;

    let program = mock::program(7, "Tree Planting", 20, 3);
    let submitter = Submitter::new();
    let application = submitter
        .submit(&cx, &program, &form())
        .await
        .unwrap()
        .expect("not guarded");

    assert_eq!(application.program_id, 7);
    assert_eq!(backend.state.lock().application_calls, 1);
    assert!(!submitter.is_in_flight());
}

#[serial]
#[tokio::test]
async fn concurrent_submit_is_a_no_op() {
    let mut state = MockState::default();
    state.submit_delay = Some(Duration::from_millis(200));
    let backend = mock::spawn(state).await;
    let cx = Arc::new(mock::student_context(&backend, "submit-guard").await);

    let program = mock::program(7, "Tree Planting", 20, 3);
    let submitter = Arc::new(Submitter::new());

    let first = {
        let (cx, submitter, program) = (cx.clone(), submitter.clone(), program.clone());
        tokio::spawn(async move { submitter.submit(&cx, &program, &form()).await })
    };

    // Let the first request reach the mock and stall there.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(submitter.is_in_flight());

    let second = submitter.submit(&cx, &program, &form()).await.unwrap();
    assert!(second.is_none(), "guarded call must not submit");

    let first = first.await.unwrap().unwrap();
    assert!(first.is_some());
    // Exactly one request ever reached the backend.
    assert_eq!(backend.state.lock().application_calls, 1);

    // Guard released: a later, deliberate resubmission goes through.
    backend.state.lock().submit_delay = None;
    let third = submitter.submit(&cx, &program, &form()).await.unwrap();
    assert!(third.is_some());
    assert_eq!(backend.state.lock().application_calls, 2);
}

#[serial]
#[tokio::test]
async fn empty_contact_fields_fail_before_the_network() {
    let backend = mock::spawn(MockState::default()).await;
    let cx = mock::student_context(&backend, "submit-validation").await;

    let program = mock::program(7, "Tree Planting", 20, 3);
    let submitter = Submitter::new();
    let err = submitter
        .submit(
            &cx,
            &program,
            &ApplicationForm {
                emergency_contact_name: "Luis Reyes".to_string(),
                emergency_contact_phone: "  ".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(backend.state.lock().application_calls, 0);
    assert!(!submitter.is_in_flight(), "guard must be released");
}

#[serial]
#[tokio::test]
async fn full_program_is_refused_client_side() {
    let backend = mock::spawn(MockState::default()).await;
    let cx = mock::student_context(&backend, "submit-full").await;

    let program = mock::program(7, "Tree Planting", 5, 5);
    let err = Submitter::new()
        .submit(&cx, &program, &form())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(backend.state.lock().application_calls, 0);
}

#[serial]
#[tokio::test]
async fn missing_token_short_circuits() {
    let backend = mock::spawn(MockState::default()).await;
    let cx = mock::context_for(&backend, "submit-anon");

    let program = mock::program(7, "Tree Planting", 20, 3);
    let submitter = Submitter::new();
    let err = submitter
        .submit(&cx, &program, &form())
        .await
        .unwrap_err();

    assert!(err.requires_login());
    assert_eq!(backend.state.lock().application_calls, 0);
    assert!(!submitter.is_in_flight(), "guard must be released");
}
