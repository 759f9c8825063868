//! Integration tests for quiz generation

use super::*;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use wiremock::matchers::body_partial_json;

fn upload(bytes: Vec<u8>, filename: &str, mime: &str) -> Form {
    let part = Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_str(mime)
        .expect("Invalid mime type");
    Form::new().part("file", part)
}

/// A one-page PDF with a single line of text
fn single_page_pdf(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("Failed to encode content"),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to save PDF");
    bytes
}

#[tokio::test]
async fn test_quiz_from_text_file() {
    let anthropic = MockServer::start().await;
    messages_mock()
        .and(body_partial_json(json!({
            "model": "claude-3-5-sonnet-20240620",
            "max_tokens": 2000,
            "temperature": 0.2
        })))
        .respond_with(claude_ok(&quiz_json().to_string()))
        .expect(1)
        .mount(&anthropic)
        .await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz"))
        .multipart(upload(
            b"Photosynthesis turns light, water and carbon dioxide into glucose.".to_vec(),
            "biology.txt",
            "text/plain",
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, quiz_json());

    let requests = anthropic.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = sent["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("Photosynthesis turns light, water and carbon dioxide into glucose."));
}

#[tokio::test]
async fn test_quiz_accepts_trailing_slash_and_prose() {
    let anthropic = MockServer::start().await;
    let reply = format!(
        "Here is a quiz based on your notes:\n\n{}\n\nGood luck!",
        quiz_json()
    );
    messages_mock()
        .respond_with(claude_ok(&reply))
        .mount(&anthropic)
        .await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz/"))
        .multipart(upload(b"Some notes".to_vec(), "notes.md", "text/markdown"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["questions"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_quiz_from_pdf() {
    let anthropic = MockServer::start().await;
    messages_mock()
        .respond_with(claude_ok(&quiz_json().to_string()))
        .expect(1)
        .mount(&anthropic)
        .await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz"))
        .multipart(upload(
            single_page_pdf("Chloroplasts capture sunlight"),
            "Chapter1.PDF",
            "application/pdf",
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let requests = anthropic.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = sent["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("Chloroplasts capture sunlight"));
}

#[tokio::test]
async fn test_quiz_empty_file_skips_model() {
    let anthropic = MockServer::start().await;
    messages_mock()
        .respond_with(claude_ok("{}"))
        .expect(0)
        .mount(&anthropic)
        .await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz"))
        .multipart(upload(Vec::new(), "empty.pdf", "application/pdf"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "The uploaded file is empty"}));
}

#[tokio::test]
async fn test_quiz_unreadable_pdf() {
    let anthropic = MockServer::start().await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz"))
        .multipart(upload(b"not really a pdf".to_vec(), "notes.pdf", "application/pdf"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Failed to process PDF"));
}

#[tokio::test]
async fn test_quiz_missing_file_field() {
    let anthropic = MockServer::start().await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz"))
        .multipart(Form::new().text("note", "no file here"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "No file provided"}));
}

#[tokio::test]
async fn test_quiz_model_error_is_generic() {
    let anthropic = MockServer::start().await;
    messages_mock()
        .respond_with(claude_error(529, "overloaded_error", "Overloaded"))
        .mount(&anthropic)
        .await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz"))
        .multipart(upload(b"Notes".to_vec(), "notes.txt", "text/plain"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "Failed to generate quiz"}));
}

#[tokio::test]
async fn test_quiz_model_timeout() {
    let anthropic = MockServer::start().await;
    messages_mock()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(claude_reply(&quiz_json().to_string()))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&anthropic)
        .await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_millis(500)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz"))
        .multipart(upload(b"Notes".to_vec(), "notes.txt", "text/plain"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "Failed to generate quiz"}));
}

#[tokio::test]
async fn test_quiz_wrong_question_count() {
    let anthropic = MockServer::start().await;
    let mut quiz = quiz_json();
    quiz["questions"].as_array_mut().unwrap().truncate(4);
    messages_mock()
        .respond_with(claude_ok(&quiz.to_string()))
        .mount(&anthropic)
        .await;
    let gateway = spawn_gateway(&anthropic, None, Duration::from_secs(5)).await;

    let response = gateway
        .client
        .post(gateway.url("/api/quiz"))
        .multipart(upload(b"Notes".to_vec(), "notes.txt", "text/plain"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["detail"],
        "Invalid quiz format: wrong number of questions: expected 5, got 4"
    );
}
