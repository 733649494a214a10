use super::*;
use crate::mock_service::{record, MockService};

fn backend(base_url: &str) -> HttpStudentBackend {
    HttpStudentBackend::new(base_url, Duration::from_secs(5)).expect("backend")
}

#[test]
fn builds_collection_and_record_urls() {
    let backend = backend("http://localhost:8080");
    assert_eq!(
        backend.students_url(None).expect("url").as_str(),
        "http://localhost:8080/students"
    );
    assert_eq!(
        backend.students_url(Some("7")).expect("url").as_str(),
        "http://localhost:8080/students/7"
    );
}

#[test]
fn keeps_base_path_prefix() {
    let backend = backend("http://records.local/api/");
    assert_eq!(
        backend.students_url(Some("7")).expect("url").as_str(),
        "http://records.local/api/students/7"
    );
}

#[test]
fn percent_encodes_typed_keys() {
    let backend = backend("http://localhost:8080");
    assert_eq!(
        backend.students_url(Some("1 2")).expect("url").as_str(),
        "http://localhost:8080/students/1%202"
    );
    assert_eq!(
        backend.students_url(Some("1/2")).expect("url").as_str(),
        "http://localhost:8080/students/1%2F2"
    );
}

#[test]
fn rejects_unusable_base_urls() {
    assert!(matches!(
        HttpStudentBackend::new("localhost 8080", Duration::from_secs(1)),
        Err(BackendError::Url(_))
    ));
    assert!(matches!(
        HttpStudentBackend::new("mailto:registrar@example.com", Duration::from_secs(1)),
        Err(BackendError::Url(_))
    ));
}

#[tokio::test]
async fn fetch_student_maps_missing_record_to_status() {
    let service = MockService::with_records(vec![record("Asha", 1, 90, "A")]).await;
    let backend = backend(&service.clone().spawn().await);

    let found = backend.fetch_student("1").await.expect("found");
    assert_eq!(found, record("Asha", 1, 90, "A"));

    let missing = backend.fetch_student("2").await;
    assert!(matches!(missing, Err(BackendError::Status(status)) if status.as_u16() == 404));
}

#[tokio::test]
async fn create_posts_snake_case_payload() {
    let service = MockService::default();
    let backend = backend(&service.clone().spawn().await);

    backend
        .create_student(&StudentPayload {
            name: "Asha".into(),
            roll_no: Some(1),
            marks: Some(90),
            grade: "A".into(),
        })
        .await
        .expect("create");

    assert_eq!(
        *service.last_body.lock().await,
        Some(serde_json::json!({"name": "Asha", "roll_no": 1, "marks": 90, "grade": "A"}))
    );
    assert_eq!(service.snapshot().await, vec![record("Asha", 1, 90, "A")]);
}

#[tokio::test]
async fn delete_addresses_record_by_roll_number() {
    let service = MockService::with_records(vec![record("Asha", 1, 90, "A")]).await;
    let backend = backend(&service.clone().spawn().await);

    backend.delete_student(RollNo(1)).await.expect("delete");

    assert_eq!(service.requests().await, vec!["DELETE /students/1".to_string()]);
    assert!(backend.fetch_students().await.expect("list").is_empty());
}
