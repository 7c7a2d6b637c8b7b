mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use contract_assistant::api::{ApiClient, UploadFile};
use contract_assistant::conversation::{
    Conversation, ConversationKind, Role, UploadOutcome, ERROR_APOLOGY, UPLOAD_FAILED_ALERT,
};
use contract_assistant::render::{render_answer, render_comparison, ComparisonSection, Section};
use contract_assistant::response::AssistantContent;
use contract_assistant::viewer::{DocumentSource, ViewerState};

use common::{serve_once, unreachable_config};

fn conversation(kind: ConversationKind, config: contract_assistant::ClientConfig) -> Conversation {
    Conversation::new(kind, Arc::new(ApiClient::new(config).unwrap()))
}

#[tokio::test]
async fn test_string_wrapped_reply_is_structured() {
    let body = r#"{"result": "{\"answer\": \"Net 30\", \"excerpt\": \"Payment Terms\", \"excerpt_page_no\": 2}"}"#;
    let (config, server) = serve_once("/generate/single", 200, "application/json", body).await;
    let mut chat = conversation(ConversationKind::Analysis, config);

    assert!(chat.send_message("What are the payment terms?").await);
    server.verify().await;

    let reply = &chat.messages()[1];
    assert_eq!(reply.role, Role::Assistant);
    let AssistantContent::Answer(answer) = &reply.content else {
        panic!("expected structured answer, got {:?}", reply.content);
    };
    assert_eq!(answer.answer.as_deref(), Some("Net 30"));
    assert_eq!(answer.excerpt_page_no, Some(2));

    let targets = chat.excerpt_targets();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].text, "Payment Terms");
}

#[tokio::test]
async fn test_server_error_appends_apology() {
    let (config, server) = serve_once("/generate/single", 500, "text/plain", "").await;
    let mut chat = conversation(ConversationKind::Comparison, config);

    chat.send_message("Compare the payment terms across all contracts").await;
    server.verify().await;

    let messages = chat.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[1].is_error);
    assert_eq!(messages[1].content.as_text(), Some(ERROR_APOLOGY));
    assert!(!chat.is_busy());
}

#[tokio::test]
async fn test_comparison_reply_renders_as_comparison() {
    let body = r#"{"overall_comparison_summary": "Mostly aligned.", "confidence": "High", "comparison_table": []}"#;
    let (config, server) = serve_once("/generate/single", 200, "application/json", body).await;
    let mut chat = conversation(ConversationKind::Comparison, config);

    chat.send_message("Show differences in liability clauses").await;
    server.verify().await;

    assert!(matches!(chat.messages()[1].content, AssistantContent::Comparison(_)));
}

#[tokio::test]
async fn test_upload_then_highlight_in_viewer() {
    let (config, server) = serve_once("/upload/contract", 200, "application/json", r#"{"status": "ok"}"#).await;
    let mut chat = conversation(ConversationKind::Analysis, config);

    let pages = "Section 1\nDefinitions\u{0c}Section 4\nPayment Terms apply within 30 days.";
    let files = vec![UploadFile::new("terms.pdf", pages.as_bytes().to_vec())];
    let outcome = chat.upload_files(files).await;
    server.verify().await;

    let (names, document) = match outcome {
        UploadOutcome::Uploaded { names, document: Some(document) } => (names, document),
        other => panic!("expected upload with a document, got {:?}", other),
    };
    assert_eq!(names, vec!["terms.pdf"]);
    assert_eq!(
        chat.messages()[0].content.as_text(),
        Some("Uploaded terms.pdf. Ask me anything about this document!"),
    );

    // Loaded as text so the test does not need a real PDF.
    let DocumentSource::Memory { bytes, .. } = document else {
        panic!("uploaded document should be in memory");
    };
    let viewer = chat.viewer_mut().unwrap();
    viewer.load_blocking(DocumentSource::Memory { name: "terms.txt".into(), bytes });
    assert_eq!(viewer.state(), &ViewerState::Ready { page_count: 2, current_page: 1 });
    viewer.next_page();

    let now = Instant::now();
    assert!(chat.request_highlight("payment terms", now));
    assert!(chat.is_viewer_visible());

    let highlight = chat.active_highlight().map(str::to_string);
    let runs = chat.viewer().unwrap().text_runs(highlight.as_deref());
    assert_eq!(runs.iter().filter(|r| r.highlighted).count(), 1);
    assert!(runs[1].highlighted);

    chat.expire_highlight(now + Duration::from_secs(5));
    assert_eq!(chat.active_highlight(), None);
}

#[tokio::test]
async fn test_upload_failure_reports_alert() {
    let mut chat = conversation(ConversationKind::Analysis, unreachable_config().await);

    let outcome = chat.upload_files(vec![UploadFile::new("a.pdf", vec![1, 2, 3])]).await;
    assert_eq!(outcome, UploadOutcome::Failed { alert: UPLOAD_FAILED_ALERT });
    assert!(chat.messages().is_empty());
}

#[tokio::test]
async fn test_payment_terms_answer_end_to_end() {
    let body = r#"{"result": {"answer": "Net 30", "excerpt": "Payment is due within 30 days", "excerpt_page_no": 4}}"#;
    let (config, server) = serve_once("/generate/single", 200, "application/json", body).await;
    let mut chat = conversation(ConversationKind::Analysis, config);

    chat.send_message("What are the payment terms?").await;
    server.verify().await;

    let AssistantContent::Answer(answer) = &chat.messages()[1].content else {
        panic!("expected structured answer");
    };
    let sections = render_answer(answer, true);
    assert_eq!(sections[0], Section::Answer("Net 30".to_string()));
    match &sections[1] {
        Section::Excerpt(block) => assert_eq!(block.page, Some(4)),
        other => panic!("expected excerpt, got {:?}", other),
    }

    chat.cycle_excerpts(1);
    assert!(chat.activate_focused_excerpt(Instant::now()));
    assert_eq!(chat.active_highlight(), Some("Payment is due within 30 days"));
}

#[tokio::test]
async fn test_termination_comparison_end_to_end() {
    let body = r#"{"comparison_table": [{"clause_id": "C1", "clause_name": "Termination", "document_1": "30-day notice", "document_2": "60-day notice", "comparison_type": "difference"}]}"#;
    let (config, server) = serve_once("/generate/single", 200, "application/json", body).await;
    let mut chat = conversation(ConversationKind::Comparison, config);

    chat.send_message("Show differences in liability clauses").await;
    server.verify().await;

    let AssistantContent::Comparison(comparison) = &chat.messages()[1].content else {
        panic!("expected comparison");
    };
    let sections = render_comparison(comparison);
    assert_eq!(sections.len(), 1);
    match &sections[0] {
        ComparisonSection::Table(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].clause_id.as_deref(), Some("C1"));
            assert_eq!(rows[0].badge, Some("≠ Different"));
        }
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn test_sample_document_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("sample-contract.txt");
    std::fs::write(&path, "Page one\u{0c}Page two\u{0c}Page three").unwrap();

    let mut chat = Conversation::new(ConversationKind::Analysis, Arc::new(ApiClient::new(Default::default()).unwrap()));
    let viewer = chat.viewer_mut().unwrap();
    viewer.load_blocking(DocumentSource::Path(path.clone()));
    assert_eq!(viewer.page_count(), Some(3));

    viewer.load_blocking(DocumentSource::Path(dir.path().join("missing.txt")));
    assert!(matches!(viewer.state(), ViewerState::Error(_)));
    assert_eq!(viewer.source().map(|s| s.to_string()), Some(dir.path().join("missing.txt").display().to_string()));
}
