use super::*;
use crate::config::EmailConfig;

fn test_config() -> EmailConfig {
    EmailConfig {
        smtp_host: "localhost".to_string(),
        smtp_port: 1025,
        smtp_username: "user".to_string(),
        smtp_password: "password".to_string(),
        from_email: "web@example.com".to_string(),
        from_name: "Web".to_string(),
        contact_recipient: "info@example.com".to_string(),
        error_recipient: "dev@example.com".to_string(),
    }
}

fn contact(reason: &str) -> ContactEmail<'_> {
    ContactEmail {
        name: "Ana Garcia",
        email: "ana@example.org",
        reason,
        message: "Hola, quiero hacer un pedido.",
    }
}

fn formatted(message: &Message) -> String {
    String::from_utf8_lossy(&message.formatted()).into_owned()
}

#[test]
fn test_recipient_routing() {
    let service = EmailService::new(test_config());
    assert_eq!(service.recipient_for("informacion"), "info@example.com");
    assert_eq!(service.recipient_for("factura"), "info@example.com");
    assert_eq!(service.recipient_for("error"), "dev@example.com");
}

#[test]
fn test_create_transport() {
    let service = EmailService::new(test_config());
    assert!(service.create_transport().is_ok());
}

#[test]
fn test_build_message_headers() {
    let service = EmailService::new(test_config());
    let message = service
        .build_contact_message(&contact("comercial"), None)
        .unwrap();
    let raw = formatted(&message);

    assert!(raw.contains("Subject: Nuevo mensaje de Ana Garcia"));
    assert!(raw.contains("To: info@example.com"));
    assert!(raw.contains("ana@example.org"));
    assert!(raw.contains("multipart/alternative"));
    assert!(!raw.contains("multipart/mixed"));
}

#[test]
fn test_error_reason_goes_to_error_recipient() {
    let service = EmailService::new(test_config());
    let message = service.build_contact_message(&contact("error"), None).unwrap();
    let raw = formatted(&message);

    assert!(raw.contains("To: dev@example.com"));
    assert!(!raw.contains("To: info@example.com"));
}

#[test]
fn test_build_message_with_attachment() {
    let service = EmailService::new(test_config());
    let file = EmailAttachment {
        filename: "pedido.pdf",
        mime_type: "application/pdf",
        content: b"%PDF-1.4 test",
    };
    let message = service
        .build_contact_message(&contact("factura"), Some(&file))
        .unwrap();
    let raw = formatted(&message);

    assert!(raw.contains("multipart/mixed"));
    assert!(raw.contains("multipart/alternative"));
    assert!(raw.contains("application/pdf"));
    assert!(raw.contains("pedido.pdf"));
}

#[test]
fn test_invalid_visitor_address() {
    let service = EmailService::new(test_config());
    let bad = ContactEmail {
        email: "not-an-address",
        ..contact("otro")
    };
    let err = service.build_contact_message(&bad, None).unwrap_err();
    assert!(matches!(err, EmailError::InvalidAddress(_)));
}

#[test]
fn test_invalid_attachment_mime() {
    let service = EmailService::new(test_config());
    let file = EmailAttachment {
        filename: "x.bin",
        mime_type: "not a mime",
        content: b"x",
    };
    let err = service
        .build_contact_message(&contact("otro"), Some(&file))
        .unwrap_err();
    assert!(matches!(err, EmailError::BuildError(_)));
}

#[test]
fn test_html_body_escapes_input() {
    let hostile = ContactEmail {
        name: "Ana",
        email: "ana@example.org",
        reason: "otro",
        message: "<script>alert('x')</script>\nadios",
    };
    let html = render_contact_html(&hostile);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;<br>adios"));
}

#[test]
fn test_text_body_contains_fields() {
    let text = render_contact_text(&contact("comercial"));
    assert!(text.contains("Nombre: Ana Garcia"));
    assert!(text.contains("Motivo: comercial"));
    assert!(text.ends_with("Hola, quiero hacer un pedido."));
}

#[test]
fn test_email_error_display() {
    assert_eq!(
        format!("{}", EmailError::BuildError("msg".into())),
        "Failed to build email: msg"
    );
    assert_eq!(
        format!("{}", EmailError::SendError("msg".into())),
        "Failed to send email: msg"
    );
    assert_eq!(
        format!("{}", EmailError::InvalidAddress("msg".into())),
        "Invalid email address: msg"
    );
}
