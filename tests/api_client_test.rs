//! Integration tests for the LiveDDM API client against a mock HTTP server
//!
//! Each test stands up a mockito server, points the client at it, and
//! exercises one endpoint contract: paths, the bearer header, body
//! shapes, and the typed failures.

use chrono::NaiveDate;
use liveddm_client::api::{Appointment, LiveDdmClient};
use liveddm_client::config::{secret_string, ApiConfig};
use liveddm_client::domain::{ApiError, AuthError, LiveDdmError};

const AUTH_PATH: &str = "/api/authentication/authenticatevendor/test-key";

const AUTH_BODY: &str = r#"{
    "vendorName": "test-vendor",
    "token": "test-token",
    "expiresOn": "2099-01-01T00:00:00"
}"#;

fn client_for(server: &mockito::ServerGuard) -> LiveDdmClient {
    let config = ApiConfig {
        base_url: server.url(),
        api_key: secret_string("test-key".to_string()),
        timeout_seconds: 5,
        tls_verify: true,
    };
    LiveDdmClient::new(&config).expect("client construction")
}

/// Mock the authentication endpoint and authenticate the client
async fn authenticated_client(server: &mut mockito::ServerGuard) -> LiveDdmClient {
    let _auth = server
        .mock("GET", AUTH_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(AUTH_BODY)
        .create_async()
        .await;

    let mut client = client_for(server);
    client
        .authenticate("test-key")
        .await
        .expect("authentication");
    client
}

#[tokio::test]
async fn authenticate_stores_the_response_token_as_bearer_credential() {
    let mut server = mockito::Server::new_async().await;
    let client = authenticated_client(&mut server).await;

    assert!(client.is_authenticated());
    let credential = client.credential().expect("credential present");
    assert_eq!(credential.token, "test-token");
    assert_eq!(credential.vendor_name, "test-vendor");
}

#[tokio::test]
async fn authenticate_with_missing_token_field_fails_with_invalid_token() {
    let mut server = mockito::Server::new_async().await;
    let _auth = server
        .mock("GET", AUTH_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"vendorName": "test-vendor", "expiresOn": "2099-01-01T00:00:00"}"#)
        .create_async()
        .await;

    let mut client = client_for(&server);
    let err = client.authenticate("test-key").await.unwrap_err();

    assert!(matches!(err, LiveDdmError::Auth(AuthError::InvalidToken)));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn authenticate_with_empty_token_fails_with_invalid_token() {
    let mut server = mockito::Server::new_async().await;
    let _auth = server
        .mock("GET", AUTH_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"vendorName": "test-vendor", "token": "", "expiresOn": "2099-01-01T00:00:00"}"#,
        )
        .create_async()
        .await;

    let mut client = client_for(&server);
    let err = client.authenticate("test-key").await.unwrap_err();

    assert!(matches!(err, LiveDdmError::Auth(AuthError::InvalidToken)));
}

#[tokio::test]
async fn authenticate_surfaces_the_rejected_status() {
    let mut server = mockito::Server::new_async().await;
    let _auth = server
        .mock("GET", AUTH_PATH)
        .with_status(401)
        .with_body("bad vendor key")
        .create_async()
        .await;

    let mut client = client_for(&server);
    let err = client.authenticate("test-key").await.unwrap_err();

    match err {
        LiveDdmError::Auth(AuthError::TransportFailure { status, .. }) => {
            assert_eq!(status, Some(401));
        }
        other => panic!("expected TransportFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn get_patients_sends_bearer_header_and_preserves_server_order() {
    let mut server = mockito::Server::new_async().await;
    let patients_body = r#"[
        {"id": 9, "firstName": "Zara", "lastName": "Quill",
         "birthDate": "1970-06-01T00:00:00", "isActive": true},
        {"id": 2, "firstName": "Abe", "lastName": "North",
         "birthDate": "1985-02-14T00:00:00", "isActive": false}
    ]"#;

    let patients_mock = server
        .mock("GET", "/api/liveddm/patients/getpatientinfo/0/20")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(patients_body)
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let patients = client.get_patients(0, 20).await.expect("patient page");

    patients_mock.assert_async().await;
    let ids: Vec<i32> = patients.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![9, 2]);
}

#[tokio::test]
async fn get_patients_decodes_an_empty_array_as_an_empty_page() {
    let mut server = mockito::Server::new_async().await;
    let _patients = server
        .mock("GET", "/api/liveddm/patients/getpatientinfo/40/10")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let patients = client.get_patients(40, 10).await.expect("empty page");

    assert!(patients.is_empty());
}

#[tokio::test]
async fn get_patients_with_non_array_body_fails_with_decode_failure() {
    let mut server = mockito::Server::new_async().await;
    let _patients = server
        .mock("GET", "/api/liveddm/patients/getpatientinfo/0/20")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "unexpected shape"}"#)
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let err = client.get_patients(0, 20).await.unwrap_err();

    assert!(matches!(
        err,
        LiveDdmError::Api(ApiError::DecodeFailure(_))
    ));
}

#[tokio::test]
async fn get_patients_surfaces_a_server_rejection_status() {
    let mut server = mockito::Server::new_async().await;
    let _patients = server
        .mock("GET", "/api/liveddm/patients/getpatientinfo/0/20")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let err = client.get_patients(0, 20).await.unwrap_err();

    match err {
        LiveDdmError::Api(ApiError::TransportFailure { status, message }) => {
            assert_eq!(status, Some(500));
            assert!(message.contains("boom"));
        }
        other => panic!("expected TransportFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn get_appointments_formats_the_date_path_segment_exactly() {
    let mut server = mockito::Server::new_async().await;
    // 2024-03-05 must become 03-05-2024 on the wire
    let appointments_mock = server
        .mock(
            "GET",
            "/api/liveddm/appointments/getappointmentsbydate/03-05-2024",
        )
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let appointments = client.get_appointments(date).await.expect("appointments");

    appointments_mock.assert_async().await;
    assert!(appointments.is_empty());
}

#[tokio::test]
async fn get_appointments_decodes_records_and_computes_the_instant() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"[{
        "appointmentId": 31,
        "patientId": 12,
        "patient": {
            "id": 12, "firstName": "Mina", "lastName": "Okafor",
            "birthDate": "1987-04-23T00:00:00", "isActive": true
        },
        "date": "2024-01-10T00:00:00",
        "time": "1900-01-01T14:30:00",
        "isConfirmed": true,
        "isComplete": false,
        "isHere": false,
        "units": 2,
        "notes": "crown prep",
        "appointmentColor": 3,
        "provider": "Dr. Moreau",
        "providerID": 2,
        "procedureCategory": "Restorative",
        "procedureCategoryId": 5
    }]"#;

    let _appointments = server
        .mock(
            "GET",
            "/api/liveddm/appointments/getappointmentsbydate/01-10-2024",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let appointments = client.get_appointments(date).await.expect("appointments");

    assert_eq!(appointments.len(), 1);
    let appointment = &appointments[0];
    assert_eq!(appointment.provider_id, 2);
    assert_eq!(
        appointment.instant(),
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    );
    assert_eq!(appointment.patient.as_ref().unwrap().to_string(), "Mina Okafor");
}

#[tokio::test]
async fn upsert_appointment_returns_the_bare_integer_id() {
    let mut server = mockito::Server::new_async().await;
    let upsert_mock = server
        .mock("POST", "/api/liveddm/appointments/AddOrUpdateAppointment")
        .match_header("authorization", "Bearer test-token")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("42")
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let appointment = sample_appointment();
    let appointment_id = client
        .upsert_appointment(&appointment)
        .await
        .expect("upsert");

    upsert_mock.assert_async().await;
    assert_eq!(appointment_id, 42);
}

#[tokio::test]
async fn upsert_appointment_sends_the_exact_wire_identifiers() {
    let mut server = mockito::Server::new_async().await;
    let upsert_mock = server
        .mock("POST", "/api/liveddm/appointments/AddOrUpdateAppointment")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"appointmentId": 0, "patientId": 12, "providerID": 2, "units": 2}"#.to_string(),
        ))
        .with_status(200)
        .with_body("77")
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let appointment_id = client
        .upsert_appointment(&sample_appointment())
        .await
        .expect("upsert");

    upsert_mock.assert_async().await;
    assert_eq!(appointment_id, 77);
}

#[tokio::test]
async fn upsert_appointment_with_non_integer_body_fails_with_decode_failure() {
    let mut server = mockito::Server::new_async().await;
    let _upsert = server
        .mock("POST", "/api/liveddm/appointments/AddOrUpdateAppointment")
        .with_status(200)
        .with_body(r#"{"id": 42}"#)
        .create_async()
        .await;

    let client = authenticated_client(&mut server).await;
    let err = client
        .upsert_appointment(&sample_appointment())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LiveDdmError::Api(ApiError::DecodeFailure(_))
    ));
}

fn sample_appointment() -> Appointment {
    serde_json::from_value(serde_json::json!({
        "appointmentId": 0,
        "patientId": 12,
        "date": "2024-01-10T00:00:00",
        "time": "1900-01-01T14:30:00",
        "isConfirmed": true,
        "isComplete": false,
        "isHere": false,
        "units": 2,
        "notes": "crown prep",
        "appointmentColor": 3,
        "provider": "Dr. Moreau",
        "providerID": 2,
        "procedureCategory": "Restorative",
        "procedureCategoryId": 5
    }))
    .expect("sample appointment")
}
