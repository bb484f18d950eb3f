//! Integration tests for `CompanyClient` using wiremock HTTP mocks.

use proform_api::{ApiError, CompanyClient};
use proform_core::profile::{
    AchievementEntry, CompanyProfile, ServiceEntry, SocialLinks, StatementEntry,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CompanyClient {
    CompanyClient::new(base_url, 30).expect("client construction should not fail")
}

fn filled_profile() -> CompanyProfile {
    CompanyProfile {
        company_name: "Acme Beverages".to_string(),
        website: "https://acme.example.com".to_string(),
        founding_year: "2019".to_string(),
        founder_name: "Jo Founder".to_string(),
        industry: "Beverages".to_string(),
        employee_count: "25".to_string(),
        mission: "Refresh everyone".to_string(),
        vision: "A can in every hand".to_string(),
        services: vec![ServiceEntry {
            title: "Canning".to_string(),
            description: "Contract canning lines".to_string(),
        }],
        why_choose_us: vec![StatementEntry {
            statement: "Fast turnaround".to_string(),
        }],
        achievements: vec![AchievementEntry {
            title: "Best of 2024".to_string(),
            description: "Industry award".to_string(),
        }],
        social_media: SocialLinks {
            linkedin: "https://linkedin.com/company/acme".to_string(),
            instagram: String::new(),
            twitter: String::new(),
        },
    }
}

#[tokio::test]
async fn create_company_posts_payload_with_bearer_token() {
    let server = MockServer::start().await;
    let profile = filled_profile();
    let expected_body = serde_json::to_value(&profile).expect("profile serializes");

    Mock::given(method("POST"))
        .and(path("/api/company"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .create_company(&profile, "test-token")
        .await
        .expect("2xx response should be Ok");
}

#[tokio::test]
async fn create_company_accepts_any_2xx_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/company"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.create_company(&filled_profile(), "test-token").await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn rejection_with_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/company"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "message": "Duplicate company" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .create_company(&filled_profile(), "test-token")
        .await
        .expect_err("400 should be an error");

    match err {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message.as_deref(), Some("Duplicate company"));
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn rejection_without_message_has_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/company"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .create_company(&filled_profile(), "test-token")
        .await
        .expect_err("500 should be an error");

    match err {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, 500);
            assert!(message.is_none());
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}
