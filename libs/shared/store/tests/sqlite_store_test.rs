use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};

use shared_models::appointment::NewAppointment;
use shared_models::credential::Credential;
use shared_store::{AppointmentStore, SqliteStore, StoreError};

async fn connect() -> SqliteStore {
    SqliteStore::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should open")
}

fn new_appointment(date: &str, time: &str, name: &str) -> NewAppointment {
    NewAppointment {
        date: date.parse::<NaiveDate>().unwrap(),
        time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        specialist: "Ivan".to_string(),
        service: "Haircut".to_string(),
        strizhka_type: "Scissors".to_string(),
        name: name.to_string(),
        phone: "+7 000 000-00-00".to_string(),
    }
}

#[tokio::test]
async fn fresh_store_is_empty() {
    let store = connect().await;
    assert!(store.list_appointments().await.unwrap().is_empty());
    let slot = store
        .find_by_slot(
            "2025-01-15".parse().unwrap(),
            NaiveTime::parse_from_str("09:00", "%H:%M").unwrap(),
        )
        .await
        .unwrap();
    assert!(slot.is_none());
}

#[tokio::test]
async fn insert_assigns_increasing_ids_and_round_trips() {
    let store = connect().await;
    let first = store
        .insert_appointment(new_appointment("2025-01-15", "09:00", "Peter"))
        .await
        .unwrap();
    let second = store
        .insert_appointment(new_appointment("2025-01-15", "10:00", "Anna"))
        .await
        .unwrap();
    assert!(second.id > first.id);

    let listed = store.list_appointments().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], first);
    assert_eq!(listed[0].strizhka_type, "Scissors");
}

#[tokio::test]
async fn unique_index_rejects_double_booking() {
    let store = connect().await;
    store
        .insert_appointment(new_appointment("2025-01-15", "09:00", "Peter"))
        .await
        .unwrap();

    let result = store
        .insert_appointment(new_appointment("2025-01-15", "09:00", "Anna"))
        .await;
    assert_matches!(result, Err(StoreError::SlotTaken));

    let listed = store.list_appointments().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Peter");
}

#[tokio::test]
async fn booked_times_only_covers_the_requested_date() {
    let store = connect().await;
    store
        .insert_appointment(new_appointment("2025-01-15", "09:00", "Peter"))
        .await
        .unwrap();
    store
        .insert_appointment(new_appointment("2025-01-15", "12:00", "Anna"))
        .await
        .unwrap();
    store
        .insert_appointment(new_appointment("2025-01-16", "09:00", "Oleg"))
        .await
        .unwrap();

    let times = store
        .booked_times("2025-01-15".parse().unwrap())
        .await
        .unwrap();
    assert_eq!(
        times,
        vec![
            NaiveTime::parse_from_str("09:00", "%H:%M").unwrap(),
            NaiveTime::parse_from_str("12:00", "%H:%M").unwrap(),
        ]
    );
}

#[tokio::test]
async fn find_by_slot_distinguishes_occupied_and_free() {
    let store = connect().await;
    store
        .insert_appointment(new_appointment("2025-01-15", "09:00", "Peter"))
        .await
        .unwrap();

    let occupied = store
        .find_by_slot(
            "2025-01-15".parse().unwrap(),
            NaiveTime::parse_from_str("09:00", "%H:%M").unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(occupied.unwrap().name, "Peter");

    let free = store
        .find_by_slot(
            "2025-01-15".parse().unwrap(),
            NaiveTime::parse_from_str("10:00", "%H:%M").unwrap(),
        )
        .await
        .unwrap();
    assert!(free.is_none());
}

#[tokio::test]
async fn credential_seeding_is_insert_if_absent() {
    let store = connect().await;
    assert!(store.find_credential("admin").await.unwrap().is_none());

    store
        .upsert_credential(Credential::new("admin", "first"))
        .await
        .unwrap();
    store
        .upsert_credential(Credential::new("admin", "second"))
        .await
        .unwrap();

    let credential = store.find_credential("admin").await.unwrap().unwrap();
    assert_eq!(credential.password, "first");
}
