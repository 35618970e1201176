use chrono::{NaiveDate, NaiveTime};
use serial_test::serial;
use uact_shared::program::handle::ProgramDescriptor;

use super::mock::{self, MockState};
use crate::relay::{merge, ListPatch, Relay};
use crate::Error;

fn descriptor(name: &str) -> ProgramDescriptor {
    ProgramDescriptor {
        name: name.to_string(),
        description: "Coastal cleanup along the bay walk".to_string(),
        location: "Baywalk".to_string(),
        facilitator: "City ENRO".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 12, 7).unwrap(),
        time_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        time_end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        hours: 4,
        slots: 25,
    }
}

#[serial]
#[tokio::test]
async fn created_program_flows_back_into_the_list() {
    let mut state = MockState::default();
    state.programs = vec![mock::program(1, "Book Drive", 10, 0)];
    let backend = mock::spawn(state).await;
    let cx = mock::admin_context(&backend, "create-program").await;

    let mut list = cx.programs().await.unwrap();
    assert_eq!(list.len(), 1);

    let created = cx.create_program(&descriptor("Coastal Cleanup")).await.unwrap();
    assert_eq!(created.slots_taken, 0);

    // What the edit screen publishes, the list screen merges on focus.
    let relay = Relay::new();
    relay.publish(ListPatch::Created(created));
    merge(&mut list, relay.take().unwrap());
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "Coastal Cleanup");
}

#[serial]
#[tokio::test]
async fn update_overwrites_the_stored_program() {
    let mut state = MockState::default();
    state.programs = vec![mock::program(4, "Old Name", 10, 2)];
    let backend = mock::spawn(state).await;
    let cx = mock::admin_context(&backend, "update-program").await;

    let updated = cx.update_program(4, &descriptor("New Name")).await.unwrap();
    assert_eq!(updated.name, "New Name");
    // Capacity bookkeeping is untouched by edits.
    assert_eq!(updated.slots_taken, 2);

    let list = cx.programs().await.unwrap();
    assert_eq!(list[0].name, "New Name");
}

#[serial]
#[tokio::test]
async fn delete_removes_the_program() {
    let mut state = MockState::default();
    state.programs = vec![
        mock::program(4, "Book Drive", 10, 0),
        mock::program(5, "Tree Planting", 10, 0),
    ];
    let backend = mock::spawn(state).await;
    let cx = mock::admin_context(&backend, "delete-program").await;

    cx.delete_program(4).await.unwrap();
    let list = cx.programs().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, 5);
}

#[serial]
#[tokio::test]
async fn blank_required_fields_fail_before_the_network() {
    let backend = mock::spawn(MockState::default()).await;
    let cx = mock::admin_context(&backend, "create-blank").await;

    let mut blank = descriptor("  ");
    let err = cx.create_program(&blank).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    blank.name = "Coastal Cleanup".to_string();
    blank.description = String::new();
    let err = cx.update_program(1, &blank).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(backend.state.lock().programs.is_empty());
}
