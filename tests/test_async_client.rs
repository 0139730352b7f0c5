//! End-to-end tests: forms submitting through the async client to a mock server.

use contact_intake::form::{ContactForm, FormState, Rejection, RegistrationForm};
use contact_intake::{
    ApiClient, ApiSubmissionClient, AsyncApiClient, AsyncApiClientImpl, Field,
};
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;

fn submission_client(base_url: String) -> ApiSubmissionClient {
    let client = AsyncApiClientImpl::new(ApiClient::with_base_url(base_url));
    ApiSubmissionClient::new(Arc::new(client))
}

fn fill(form: &mut ContactForm) {
    form.on_field_change(Field::Name, "Ana María");
    form.on_field_change(Field::Email, "ana@x.com");
    form.on_field_change(Field::Phone, "5512345678");
    form.on_field_change(Field::Message, "Hola, este es un mensaje de prueba.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_contact_form_round_trip() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/contacto")
        .match_body(Matcher::Json(json!({
            "nombre": "Ana María",
            "email": "ana@x.com",
            "telefono": "5512345678",
            "fecha_nacimiento": null,
            "mensaje": "Hola, este es un mensaje de prueba."
        })))
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Datos guardados exitosamente"}"#)
        .create_async()
        .await;

    let client = submission_client(server.url());
    let mut form = ContactForm::default();
    fill(&mut form);

    let state = form.submit(&client).await.unwrap();

    mock.assert_async().await;
    assert_eq!(state, &FormState::Success);
    assert!(form.values().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_contact_form_server_rejection() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/contacto")
        .with_status(500)
        .with_body(r#"{"success": false, "message": "Error al guardar en la base de datos"}"#)
        .create_async()
        .await;

    let client = submission_client(server.url());
    let mut form = ContactForm::default();
    fill(&mut form);

    form.submit(&client).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        form.alert().as_deref(),
        Some("Error al guardar en la base de datos")
    );
    assert_eq!(form.values().email, "ana@x.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_contact_form_unreadable_answer_is_network_failure() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/contacto")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = submission_client(server.url());
    let mut form = ContactForm::default();
    fill(&mut form);

    let state = form.submit(&client).await.unwrap();

    mock.assert_async().await;
    assert_eq!(state, &FormState::Rejected(Rejection::Network));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_contact_form_unreachable_server() {
    let client = submission_client("http://127.0.0.1:1".to_string());
    let mut form = ContactForm::default();
    fill(&mut form);

    let state = form.submit(&client).await.unwrap();

    assert_eq!(state, &FormState::Rejected(Rejection::Network));
    assert_eq!(form.values().name, "Ana María");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_registration_round_trip() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/usuarios")
        .match_body(Matcher::Json(json!({"nombre": "Ana", "token": "captcha-token"})))
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Usuario guardado exitosamente"}"#)
        .create_async()
        .await;

    let client = submission_client(server.url());
    let mut form = RegistrationForm::default();
    form.set_name(" Ana ");
    form.set_captcha_token(Some("captcha-token".to_string()));

    assert_eq!(form.submit(&client).await.unwrap(), &FormState::Success);
    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_async_gallery_operations() {
    let mut server = Server::new_async().await;

    let list = server
        .mock("GET", "/imagenes")
        .with_status(200)
        .with_body(r#"[{"id": "gallery/one", "url": "https://cdn.example.com/one.png"}]"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/borrar-imagen/gallery%2Fone")
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;

    let client = AsyncApiClientImpl::new(ApiClient::with_base_url(server.url()));

    let images = client.list_images().await.unwrap();
    assert_eq!(images.len(), 1);
    client.delete_image(&images[0].id).await.unwrap();

    list.assert_async().await;
    delete.assert_async().await;
    assert_eq!(client.inner().metrics().http_requests_total(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_status_is_never_success() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/contacto")
        .with_status(500)
        .with_body(r#"{"success": true, "message": "Datos guardados exitosamente"}"#)
        .create_async()
        .await;

    let client = submission_client(server.url());
    let mut form = ContactForm::default();
    fill(&mut form);
    let before = form.values().clone();

    let state = form.submit(&client).await.unwrap().clone();

    mock.assert_async().await;
    assert_eq!(
        state,
        FormState::Rejected(Rejection::Server("Server error".to_string()))
    );
    assert_eq!(form.values(), &before);
    assert_eq!(form.notice(), None);
}
