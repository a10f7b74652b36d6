//! Behavioural tests for the reqwest transport against a live HTTP double.

use std::io;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use dashboard_client::domain::{
    CallerUser, ContactInfo, OrganizationStatus, OrganizationType, Resource, Teacher,
};
use dashboard_client::{
    ClientError, ClientSettings, ConfigurationError, ReqwestResourceTransport, ResolvedFrom,
    ResourceClient,
};
use rstest::{fixture, rstest};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[fixture]
fn teacher_caller() -> CallerUser {
    CallerUser::with_email("t@x.com").role("teacher")
}

fn client_for(base: &str) -> ResourceClient<ReqwestResourceTransport> {
    let transport =
        ReqwestResourceTransport::new("dashboard-client-tests").expect("reqwest client builds");
    ResourceClient::new(Url::parse(base).expect("base URL parses"), transport)
}

/// Base URL of a port nothing is listening on.
fn unbound_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("ephemeral port binds");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);
    format!("http://{addr}/")
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
#[tokio::test]
async fn decodes_records_and_sends_identity_headers(teacher_caller: CallerUser) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teachers/user/u1"))
        .and(header("x-user-id", "t@x.com"))
        .and(header("x-user-type", "teacher"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "t-1",
            "userId": "u1",
            "name": "Grace",
            "email": "grace@x.com",
            "subjects": ["maths"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&format!("{}/api/", server.uri()));

    let teacher = client
        .teacher_by_user_id("u1", &teacher_caller)
        .await
        .expect("request succeeds");

    assert_eq!(teacher.id, "t-1");
    assert_eq!(teacher.subjects, vec!["maths".to_owned()]);
}

#[rstest]
#[case::not_found(404)]
#[case::server_error(500)]
#[tokio::test]
async fn non_success_statuses_serve_the_default_teacher(
    teacher_caller: CallerUser,
    #[case] status: u16,
) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teachers/user/user-7"))
        .respond_with(ResponseTemplate::new(status).set_body_string("{\"message\":\"nope\"}"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    let resolution = client
        .fetch_with_fallback(Teacher::by_user_id("user-7"), &teacher_caller)
        .await
        .expect("status failures are absorbed");

    let ResolvedFrom::Fallback(failure) = resolution.source() else {
        panic!("expected a fallback resolution");
    };
    assert_eq!(failure.http_status(), Some(status));
    assert_eq!(resolution.value().id, "user-7");
    assert!(resolution.value().courses.is_empty());
}

#[rstest]
#[tokio::test]
async fn unreachable_backend_serves_the_default_organization(teacher_caller: CallerUser) {
    let client = client_for(&unbound_base_url());

    let organization = client
        .organization_by_user_id("org-42", &teacher_caller)
        .await
        .expect("network failures are absorbed");

    assert_eq!(organization.id, "org-42");
    assert_eq!(organization.name, "Default Organization");
    assert_eq!(organization.organization_type, OrganizationType::School);
    assert_eq!(organization.status, OrganizationStatus::Active);
    assert!(organization.teachers.is_empty());
    assert!(organization.students.is_empty());
    assert!(organization.courses.is_empty());
    assert!(organization.classes.is_empty());
    assert_eq!(
        organization.contact_info,
        ContactInfo {
            email: "t@x.com".to_owned(),
            contact_person: None,
            phone: String::new(),
        }
    );
    assert_eq!(
        serde_json::to_value(&organization).expect("organization serializes")["type"],
        json!("school")
    );
}

#[tokio::test]
async fn teacher_creation_posts_the_caller_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/teachers/from-user"))
        .and(header("x-user-id", "u5"))
        .and(body_json(json!({
            "userId": "u5",
            "email": "new@x.com",
            "name": "Noor"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "t-55",
            "userId": "u5",
            "name": "Noor"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());
    let caller = CallerUser::with_email("new@x.com").id("u5").name("Noor");

    let teacher = client
        .create_teacher_from_user(&caller)
        .await
        .expect("request succeeds");

    assert_eq!(teacher.id, "t-55");
}

#[tokio::test]
async fn users_are_addressed_without_the_user_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/u9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u9",
            "email": "p@x.com",
            "name": "Pat",
            "role": "parent"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());
    let caller = CallerUser::with_email("p@x.com");

    let user = client.user_by_id("u9", &caller).await.expect("request succeeds");

    assert_eq!(user.role(), "parent");
    assert_eq!(user.account().name, "Pat");
}

#[rstest]
#[tokio::test]
async fn session_cookies_are_sent_back(teacher_caller: CallerUser) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teachers/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/")
                .set_body_json(json!({ "_id": "t-me" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/students/me"))
        .and(header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "s-me" })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    let teacher = client
        .current_teacher(&teacher_caller)
        .await
        .expect("first request succeeds");
    let student = client
        .current_student(&teacher_caller)
        .await
        .expect("second request succeeds");

    assert_eq!(teacher.id, "t-me");
    assert_eq!(student.id, "s-me");
}

#[rstest]
#[tokio::test]
async fn fallbacks_log_the_failure_class(teacher_caller: CallerUser) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let parent = client
        .parent_by_user_id("p-1", &teacher_caller)
        .await
        .expect("status failures are absorbed");

    assert_eq!(parent.id, "p-1");
    let contents = logs.contents();
    assert!(contents.contains("WARN"), "fallback should warn: {contents}");
    assert!(
        contents.contains("failure=\"status\""),
        "log should name the failure class: {contents}"
    );
    assert!(contents.contains("status=404"), "log should carry the status: {contents}");
    assert!(contents.contains("not_found=true"), "log should flag the 404: {contents}");
    assert!(contents.contains("resource=parents"), "log should name the resource: {contents}");
}

#[rstest]
#[tokio::test]
async fn settings_without_base_url_fail_fast(teacher_caller: CallerUser) {
    let settings = ClientSettings {
        base_url: None,
        user_agent: None,
        disable_cookies: false,
    };
    let client = ResourceClient::from_settings(&settings).expect("http client builds");

    let error = client
        .current_admin(&teacher_caller)
        .await
        .expect_err("no base URL configured");

    assert_eq!(
        error,
        ClientError::Configuration(ConfigurationError::MissingBaseUrl)
    );
}

#[rstest]
#[tokio::test]
async fn settings_send_the_configured_user_agent(teacher_caller: CallerUser) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admins/me"))
        .and(header("user-agent", "dashboard-web/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "_id": "a-1" })))
        .expect(1)
        .mount(&server)
        .await;
    let settings = ClientSettings {
        base_url: Some(server.uri()),
        user_agent: Some("dashboard-web/2.0".to_owned()),
        disable_cookies: false,
    };
    let client = ResourceClient::from_settings(&settings).expect("http client builds");

    let admin = client
        .current_admin(&teacher_caller)
        .await
        .expect("request succeeds");

    assert_eq!(admin.id, "a-1");
}

#[rstest]
#[tokio::test]
async fn disabled_cookie_store_drops_session_cookies(teacher_caller: CallerUser) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teachers/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/")
                .set_body_json(json!({ "_id": "t-me" })),
        )
        .mount(&server)
        .await;
    let settings = ClientSettings {
        base_url: Some(server.uri()),
        user_agent: None,
        disable_cookies: true,
    };
    let client = ResourceClient::from_settings(&settings).expect("http client builds");

    for _ in 0..2 {
        client
            .current_teacher(&teacher_caller)
            .await
            .expect("request succeeds");
    }

    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 2);
    assert!(
        requests
            .iter()
            .all(|request| !request.headers.contains_key("cookie")),
        "no request should replay the session cookie",
    );
}
